/// Output formatting: headings, JSON documents, load errors and debug timing.
use std::io::{self, Write};

use serde::Serialize;

use super::OutputFormat;
use crate::table::LoadError;
use crate::types::ErrorOutput;

/// Output context passed to the report runner.
#[derive(Debug)]
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, emit step timings as debug events.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, debug: bool) -> Self {
        Self { format, debug }
    }

    /// Start a named debug timer. Reports elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether reports are emitted as a JSON document instead of text sections.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::Compact)
    }
}

/// Write a decorated section heading, e.g. `*** df.shape ***`, framed by blank lines.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_heading(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "\n*** {text} ***\n")
}

/// Serialize `value` as a single JSON document (pretty or compact).
///
/// # Errors
///
/// Returns an I/O error if serialization or writing fails.
pub fn write_json<T: Serialize + ?Sized>(
    out: &mut impl Write,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    let s = match format {
        OutputFormat::Compact => serde_json::to_string(value),
        _ => serde_json::to_string_pretty(value),
    }
    .map_err(io::Error::other)?;
    writeln!(out, "{s}")
}

/// Report a load failure on stdout.
///
/// Text mode collapses every cause into the same two-line message; JSON
/// modes emit the structured error envelope.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_load_error(
    out: &mut impl Write,
    path: &str,
    err: &LoadError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json | OutputFormat::Compact => {
            write_json(out, &ErrorOutput::from_load_error(err), format)
        }
        OutputFormat::Text => {
            writeln!(out, "There was an error reading {path}")?;
            writeln!(out, "Make sure file is present, readable, and formatted as csv.")
        }
    }
}

// --- Debug timer ---

/// A RAII timer that emits elapsed milliseconds as a debug event on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(step = self.label, "{ms:.2}ms");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_heading_format() {
        let out = render(|o| write_heading(o, "df.shape"));
        assert_eq!(out, "\n*** df.shape ***\n\n");
    }

    #[test]
    fn test_load_error_text_is_generic() {
        let err = LoadError::NotFound {
            path: "nope.csv".to_owned(),
        };
        let out = render(|o| write_load_error(o, "nope.csv", &err, OutputFormat::Text));
        assert_eq!(
            out,
            "There was an error reading nope.csv\nMake sure file is present, readable, and formatted as csv.\n"
        );
    }

    #[test]
    fn test_load_error_json_envelope() {
        let err = LoadError::Parse {
            path: "bad.csv".to_owned(),
            message: "empty CSV".to_owned(),
        };
        let out = render(|o| write_load_error(o, "bad.csv", &err, OutputFormat::Compact));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "parse_error");
    }
}
