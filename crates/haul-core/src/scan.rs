use eyre::Result;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Baseline count of regular files beneath a root, taken before the copy
/// pass to size the progress display. May be stale by the time the copy
/// pass runs; the engine tolerates the tree changing between the two walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    pub file_count: u64,
}

/// Read-only summary of a tree: regular file count plus total bytes.
/// Files that cannot be stat-ed contribute to neither number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub file_count: u64,
    pub byte_total: u64,
}

/// Count the regular files reachable under `root`.
pub fn scan_tree(root: &Path) -> Result<ScanResult> {
    let summary = walk_tree(root)?;
    Ok(ScanResult {
        file_count: summary.file_count,
    })
}

/// Count and size the regular files reachable under `root`.
pub fn summarize_tree(root: &Path) -> Result<TreeSummary> {
    walk_tree(root)
}

fn walk_tree(root: &Path) -> Result<TreeSummary> {
    if !root.is_dir() {
        eyre::bail!("scan root is not a readable directory: {}", root.display());
    }

    let mut summary = TreeSummary::default();
    for next in WalkDir::new(root) {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(err.into());
                }
                log::debug!("skipping unreadable entry during scan: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                summary.file_count += 1;
                summary.byte_total += metadata.len();
            }
            Err(err) => {
                log::debug!("skipping unstatable file {}: {err}", entry.path().display());
            }
        }
    }

    Ok(summary)
}
