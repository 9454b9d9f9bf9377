//! Workflow command logger and step outputs.
//!
//! GitHub Actions reads annotations from specially formatted stdout lines
//! (`::error::message`). [`WorkflowLogger`] renders `log` records in that
//! form so the rest of the crate can use the ordinary `log` macros.

use std::io::Write;

use camino::Utf8PathBuf;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};

use crate::output::{OutputError, append_step_output};

/// Environment variable naming the step-output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// A `log` backend writing workflow commands to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowLogger;

static LOGGER: WorkflowLogger = WorkflowLogger;

impl Log for WorkflowLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = render_record(record.level(), &record.args().to_string());
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{line}").is_err() {
            // Nowhere left to report a broken stdout.
        }
    }

    fn flush(&self) {
        if std::io::stdout().flush().is_err() {
            // Same as above.
        }
    }
}

/// Install [`WorkflowLogger`] as the global logger.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render one log message as a workflow command line.
///
/// # Examples
///
/// ```
/// use log::Level;
/// use update_manifest_action::workflow::render_record;
///
/// assert_eq!(render_record(Level::Warn, "50%"), "::warning::50%25");
/// assert_eq!(render_record(Level::Info, "Fetching releases..."), "Fetching releases...");
/// ```
#[must_use]
pub fn render_record(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("::error::{}", escape_data(message)),
        Level::Warn => format!("::warning::{}", escape_data(message)),
        Level::Info => message.to_owned(),
        Level::Debug | Level::Trace => format!("::debug::{}", escape_data(message)),
    }
}

/// Escape workflow command data.
///
/// `%` is escaped first so the other escapes survive.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Set the step output `name` to `value`.
///
/// Outside a workflow run, where `GITHUB_OUTPUT` is unset, the output is
/// skipped with a debug record.
///
/// # Errors
///
/// Returns an error if the step-output file cannot be appended to.
pub fn set_output(name: &str, value: &str) -> Result<(), OutputError> {
    let Some(path) = std::env::var(GITHUB_OUTPUT_ENV)
        .ok()
        .filter(|path| !path.is_empty())
    else {
        debug!("{GITHUB_OUTPUT_ENV} is not set; skipping output {name}={value}");
        return Ok(());
    };
    append_step_output(&Utf8PathBuf::from(path), name, value)
}
