use eyre::{Context, Result};
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Copy a single file, carrying over its modification time. Returns the
/// number of bytes written. Mtime preservation is best-effort: a file whose
/// content copied but whose timestamp could not be set still counts as
/// copied.
pub(crate) fn copy_file(src: &Path, dst: &Path, preserve_times: bool) -> Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let bytes = fs::copy(src, dst)
        .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;

    if preserve_times {
        match fs::metadata(src) {
            Ok(metadata) => {
                let mtime = FileTime::from_last_modification_time(&metadata);
                if let Err(err) = filetime::set_file_mtime(dst, mtime) {
                    log::debug!("could not preserve mtime for {}: {err}", dst.display());
                }
            }
            Err(err) => {
                log::debug!("could not stat {} for its mtime: {err}", src.display());
            }
        }
    }

    Ok(bytes)
}
