//! Manifest and step-output file writing.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors arising from writing files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A missing parent directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    /// Return the I/O error behind this failure.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        match self {
            Self::CreateDir { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// An existing file is replaced.
///
/// # Errors
///
/// Returns [`OutputError::CreateDir`] when a parent directory cannot be
/// created and [`OutputError::Write`] when the file cannot be written.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use update_manifest_action::output::write_manifest;
///
/// let dir = tempfile::tempdir().expect("temp dir");
/// let path = Utf8PathBuf::try_from(dir.path().join("nested/updates.json"))
///     .expect("UTF-8 path");
/// write_manifest(&path, "{}").expect("writable");
/// assert_eq!(std::fs::read_to_string(&path).expect("readable"), "{}");
/// ```
pub fn write_manifest(path: &Utf8Path, contents: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_owned(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Append a `name=value` step output to the file at `path`.
///
/// Values spanning several lines use the heredoc form with a delimiter that
/// does not occur in the value.
///
/// # Errors
///
/// Returns [`OutputError::Write`] when the file cannot be opened or written.
pub fn append_step_output(path: &Utf8Path, name: &str, value: &str) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.to_owned(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(format_step_output(name, value).as_bytes())
        .map_err(to_error)
}

fn format_step_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = String::from("ghadelimiter");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}
