//! The tree-mirroring engine: one scan pass to size the progress display,
//! one copy pass that recreates the directory structure and copies every
//! regular file, tolerating individual failures.

mod file_copy;

use crate::errors::MirrorError;
use crate::progress::{CopyProgress, PROGRESS_BATCH};
use crate::report::BackupReport;
use crate::scan;
use crate::MirrorConfig;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Mirror the tree under `source` into `destination`, creating the
/// destination root (and any missing parents) first.
///
/// The walk is pre-order, so every directory is created under the
/// destination before the files inside it are copied. A failure on a single
/// file increments the error counter and the walk moves on; only conditions
/// that invalidate the whole run return a `MirrorError`. There are no
/// retries at any level.
///
/// `on_progress` receives a snapshot of the running counters together with
/// the scan pass's file total after every `PROGRESS_BATCH` file attempts,
/// and once more after the last file so the final call always reflects the
/// finished pass.
pub fn mirror_tree(
    source: &Path,
    destination: &Path,
    config: &MirrorConfig,
    mut on_progress: impl FnMut(&CopyProgress, u64),
) -> Result<BackupReport, MirrorError> {
    let scanned = scan::scan_tree(source).map_err(|err| MirrorError::SourceUnreadable {
        source: source.to_path_buf(),
        message: format!("{err:#}"),
    })?;
    if scanned.file_count == 0 {
        return Err(MirrorError::EmptySource {
            source: source.to_path_buf(),
        });
    }

    fs::create_dir_all(destination).map_err(|err| MirrorError::DestinationUnwritable {
        destination: destination.to_path_buf(),
        message: err.to_string(),
    })?;

    let total = scanned.file_count;
    let mut progress = CopyProgress::default();

    for next in WalkDir::new(source) {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(MirrorError::SourceUnreadable {
                        source: source.to_path_buf(),
                        message: err.to_string(),
                    });
                }
                // Visited but unreadable: counts against the pass like any
                // other per-file failure.
                log::debug!("walk error during copy pass: {err}");
                progress.add_error();
                if progress.attempts() % PROGRESS_BATCH == 0 {
                    on_progress(&progress, total);
                }
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        // strip_prefix cannot fail: every entry sits below `source`.
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            if let Err(err) = fs::create_dir_all(&target) {
                // The files inside will each fail their copy attempt and be
                // counted individually.
                log::warn!("could not create {}: {err}", target.display());
            }
        } else if entry.file_type().is_file() {
            match file_copy::copy_file(entry.path(), &target, config.preserve_times) {
                Ok(bytes) => progress.add_file(bytes),
                Err(err) => {
                    log::debug!("copy failed for {}: {err:#}", entry.path().display());
                    progress.add_error();
                }
            }
            if progress.attempts() % PROGRESS_BATCH == 0 {
                on_progress(&progress, total);
            }
        }
    }

    on_progress(&progress, total);
    Ok(BackupReport::from_progress(&progress))
}
