use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataBounds;

/// Y range of an optional second value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryScale {
    pub min_y: f64,
    pub max_y: f64,
}

impl SecondaryScale {
    #[must_use]
    pub const fn new(min_y: f64, max_y: f64) -> Self {
        Self { min_y, max_y }
    }
}

/// Visible data window supplied by the host chart for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    #[serde(default)]
    pub secondary: Option<SecondaryScale>,
}

impl Viewport {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            secondary: None,
        }
    }

    #[must_use]
    pub fn with_secondary_scale(mut self, min_y: f64, max_y: f64) -> Self {
        self.secondary = Some(SecondaryScale::new(min_y, max_y));
        self
    }

    /// Bounds used by a series drawn on the primary or the secondary Y scale.
    ///
    /// The X window is always the primary one. Without a secondary scale the
    /// primary Y range is used.
    #[must_use]
    pub fn bounds(self, second_scale: bool) -> DataBounds {
        let (min_y, max_y) = match (second_scale, self.secondary) {
            (true, Some(scale)) => (scale.min_y, scale.max_y),
            (true, None) => {
                warn!("secondary scale requested but viewport has none; using primary");
                (self.min_y, self.max_y)
            }
            (false, _) => (self.min_y, self.max_y),
        };
        DataBounds::new(self.min_x, self.max_x, min_y, max_y)
    }
}
