use serde::{Deserialize, Serialize};

/// Configuration for warm start generation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct WarmStartConfig {
    /// Two superitems may share a height band if their heights differ by at most this much
    pub height_tolerance: f32,
    /// Whether grouped generation appends a single-superitem fallback layer per group member
    pub include_singleton_layers: bool,
}

impl Default for WarmStartConfig {
    fn default() -> Self {
        Self {
            height_tolerance: 0.0,
            include_singleton_layers: true,
        }
    }
}
