/// Number of file attempts between progress callbacks during a copy pass.
pub const PROGRESS_BATCH: u64 = 100;

/// Width of the rendered progress bar in cells.
const BAR_WIDTH: usize = 40;

/// Running counters for one copy pass. Counters only ever increase; each
/// snapshot handed to the progress callback is a copy of this state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyProgress {
    pub copied: u64,
    pub errors: u64,
    pub bytes_copied: u64,
}

impl CopyProgress {
    pub fn add_file(&mut self, bytes: u64) {
        self.copied += 1;
        self.bytes_copied += bytes;
    }

    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Total files attempted so far, successful or not.
    pub fn attempts(&self) -> u64 {
        self.copied + self.errors
    }
}

/// Render a progress line: a 40-cell bar filled proportionally to
/// `copied / total`, followed by the file counts and the copied size in MB.
/// Pure function of its inputs; `total == 0` renders as 0%.
pub fn render(copied: u64, total: u64, bytes_copied: u64) -> String {
    let fraction = if total == 0 {
        0.0
    } else {
        copied as f64 / total as f64
    };
    let filled = ((fraction * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    let bar: String = "█".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
    let mb = bytes_copied as f64 / (1024.0 * 1024.0);
    format!(
        "[{bar}] {:.1}% | Files: {copied}/{total} | Size: {mb:.2} MB",
        fraction * 100.0
    )
}
