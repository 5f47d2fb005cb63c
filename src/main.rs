#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! csvinspect: inspect CSV files with dataframe summaries.

mod cli;
mod config;
mod reports;
mod table;
mod types;

use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

use cli::{Cli, OutputCtx, write_load_error};
use config::Config;
use table::load_table;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("csvinspect=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Load the table and run every enabled report, writing to `out`.
///
/// A load failure writes only the load diagnostic; no report runs.
///
/// # Errors
///
/// Returns the process exit code for a load or report failure.
fn run_cli(cfg: &Config, ctx: &OutputCtx, out: &mut impl Write) -> Result<(), i32> {
    let t_load = ctx.timer("load");
    let df = match load_table(&cfg.file_path) {
        Ok(df) => df,
        Err(err) => {
            debug!(error = %err, "load failed");
            let _ = write_load_error(out, &cfg.file_path, &err, ctx.format);
            return Err(err.exit_code());
        }
    };
    drop(t_load);

    reports::run(cfg, &df, ctx, out).map_err(|err| {
        error!("{err}");
        err.exit_code()
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let cfg = cli.config();
    let ctx = OutputCtx::new(cli.format(), cli.debug);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_cli(&cfg, &ctx, &mut out);
    let _ = out.flush();
    if let Err(code) = result {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::DescribeSelector;

    fn config(path: &str) -> Config {
        Config {
            file_path: path.to_owned(),
            show_head: true,
            show_info: true,
            describe: DescribeSelector::All,
            head_rows: 5,
        }
    }

    fn run_to_string(cfg: &Config) -> (Result<(), i32>, String) {
        let mut buf = Vec::new();
        let result = run_cli(cfg, &OutputCtx::new(OutputFormat::Text, false), &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_missing_file_prints_only_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv").to_string_lossy().into_owned();
        let (result, out) = run_to_string(&config(&path));

        assert_eq!(result, Err(4));
        assert_eq!(
            out,
            format!(
                "There was an error reading {path}\n\
                 Make sure file is present, readable, and formatted as csv.\n"
            )
        );
    }

    #[test]
    fn test_unparseable_file_exits_non_zero() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let (result, out) = run_to_string(&config(&path));

        assert_eq!(result, Err(1));
        assert!(out.starts_with("There was an error reading"));
        assert!(!out.contains("df.shape"));
    }

    #[test]
    fn test_loaded_file_runs_reports() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"col_a,col_b\n10,20\n30,40\n").unwrap();
        file.flush().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let (result, out) = run_to_string(&config(&path));

        assert_eq!(result, Ok(()));
        assert!(out.contains(&format!("{path} loaded with shape (2, 2)")));
        assert!(out.contains("*** df.describe() ***"));
        assert!(out.contains("40"));
    }
}
