//! Operation-level failures of a mirror run.
//!
//! Per-file copy failures never appear here: they are absorbed into the
//! error counter as the walk continues and surface only in aggregate via
//! `BackupReport::files_errored`. This type covers the cases where no
//! partial result is possible at all.

use std::fmt;
use std::path::PathBuf;

/// Why a mirror run could not produce a `BackupReport`.
#[derive(Debug)]
pub enum MirrorError {
    /// The pre-copy scan found no files beneath the source root, so there
    /// is nothing to back up and the copy pass is skipped entirely.
    EmptySource { source: PathBuf },
    /// The source root could not be read or traversed.
    SourceUnreadable { source: PathBuf, message: String },
    /// The destination root could not be created.
    DestinationUnwritable {
        destination: PathBuf,
        message: String,
    },
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::EmptySource { source } => {
                write!(f, "no files to back up under {}", source.display())
            }
            MirrorError::SourceUnreadable { source, message } => {
                write!(f, "source root {} is unreadable: {}", source.display(), message)
            }
            MirrorError::DestinationUnwritable {
                destination,
                message,
            } => {
                write!(
                    f,
                    "destination root {} could not be created: {}",
                    destination.display(),
                    message
                )
            }
        }
    }
}

impl std::error::Error for MirrorError {}
