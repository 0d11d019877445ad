pub mod errors;
pub mod mirror;
pub mod progress;
pub mod report;
pub mod scan;

/// Engine-level options for a mirror pass.
#[derive(Clone, Debug)]
pub struct MirrorConfig {
    pub preserve_times: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            preserve_times: true,
        }
    }
}
