use crate::progress::CopyProgress;
use serde::Serialize;

/// Immutable summary of one completed mirror pass.
///
/// `files_copied + files_errored` equals the number of regular files the
/// copy pass visited, which may differ from the pre-copy scan count if the
/// tree changed between the two walks. `bytes_copied` is the sum of the
/// sizes of files that copied successfully; files that errored contribute
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupReport {
    pub files_copied: u64,
    pub files_errored: u64,
    pub bytes_copied: u64,
}

impl BackupReport {
    pub(crate) fn from_progress(progress: &CopyProgress) -> Self {
        Self {
            files_copied: progress.copied,
            files_errored: progress.errors,
            bytes_copied: progress.bytes_copied,
        }
    }
}
