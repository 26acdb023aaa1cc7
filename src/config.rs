/// Default cap on distinct drugs per selection check.
///
/// All-pairs checking is O(n²); 64 distinct drugs (2016 pairs) is far above
/// any realistic medication list while still bounding the work a buggy or
/// malicious caller can request.
pub const DEFAULT_MAX_SELECTION: usize = 64;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum distinct drugs accepted by a selection check; `None`
    /// disables the bound (oversized input then costs time, not
    /// correctness).
    pub max_selection_size: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_selection_size: Some(DEFAULT_MAX_SELECTION),
        }
    }
}
