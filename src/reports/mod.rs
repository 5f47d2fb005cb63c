/// Report steps: shape, head, info and describe, run in that fixed order.
pub mod describe;
pub mod head;
pub mod info;
pub mod shape;

use std::io::{self, Write};

use polars::prelude::{DataFrame, PolarsError};
use thiserror::Error;

use crate::cli::{OutputCtx, write_json};
use crate::config::Config;
use crate::types::ReportOutput;

/// Errors that stop the report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to stdout failed.
    #[error("Could not write report: {0}")]
    Io(#[from] io::Error),

    /// A polars operation on the loaded table failed.
    #[error("Table operation failed: {0}")]
    Polars(#[from] PolarsError),
}

impl ReportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Polars(_) => 1,
        }
    }
}

/// Run every enabled report against `df`, writing to `out`.
///
/// A missing describe column only ends the describe step; it is not an error.
///
/// # Errors
///
/// Returns `ReportError` on write failures or failed column casts.
pub fn run(
    cfg: &Config,
    df: &DataFrame,
    ctx: &OutputCtx,
    out: &mut impl Write,
) -> Result<(), ReportError> {
    if ctx.is_json() {
        return run_json(cfg, df, ctx, out);
    }

    {
        let _t = ctx.timer("shape");
        shape::write(out, &cfg.file_path, df)?;
    }
    if cfg.show_head {
        let _t = ctx.timer("head");
        head::write(out, df, cfg.head_rows)?;
    }
    if cfg.show_info {
        let _t = ctx.timer("info");
        info::write(out, df)?;
    }
    let _t = ctx.timer("describe");
    describe::write(out, &cfg.describe, df)
}

fn run_json(
    cfg: &Config,
    df: &DataFrame,
    ctx: &OutputCtx,
    out: &mut impl Write,
) -> Result<(), ReportError> {
    let report = ReportOutput {
        file: cfg.file_path.clone(),
        shape: shape::build(df),
        head: cfg.show_head.then(|| head::build(df, cfg.head_rows)),
        info: cfg.show_info.then(|| info::build(df)),
        describe: describe::build(&cfg.describe, df)?,
    };
    write_json(out, &report, ctx.format)?;
    Ok(())
}
