use serde::Deserialize;

use crate::photo::PhotoSettings;

/// App-level photo pipeline configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct PhotoConfig {
    /// Bounding box width in pixels. Default: 2000.
    #[serde(default = "default_max_dimension")]
    pub max_width: u32,
    /// Bounding box height in pixels. Default: 2000.
    #[serde(default = "default_max_dimension")]
    pub max_height: u32,
    /// JPEG quality, 1-100. Default: 85.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_max_dimension() -> u32 {
    2000
}
fn default_quality() -> u8 {
    85
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_dimension(),
            max_height: default_max_dimension(),
            quality: default_quality(),
        }
    }
}

impl PhotoConfig {
    /// Pipeline settings with out-of-range values clamped.
    pub fn settings(&self) -> PhotoSettings {
        PhotoSettings {
            max_width: self.max_width.max(1),
            max_height: self.max_height.max(1),
            quality: self.quality.clamp(1, 100),
        }
    }
}
