use serde::{Deserialize, Serialize};

use crate::core::PlotRect;
use crate::error::{ChartError, ChartResult};
use crate::render::{FillPath, StrokePath, TextPrimitive};

/// Backend-agnostic scene for one series draw pass.
///
/// Backends draw `strokes`, then `fills`, then `texts`, in vector order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub plot_rect: PlotRect,
    pub strokes: Vec<StrokePath>,
    pub fills: Vec<FillPath>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(plot_rect: PlotRect) -> Self {
        Self {
            plot_rect,
            strokes: Vec::new(),
            fills: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Rejects only malformed styling (colors, stroke widths).
    ///
    /// Geometry is never an error: primitives that cannot be drawn are skipped
    /// by backends, and a plot rect of any size is accepted.
    pub fn validate(&self) -> ChartResult<()> {
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        for fill in &self.fills {
            fill.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Number of primitives a backend skips as not drawable.
    #[must_use]
    pub fn undrawable_count(&self) -> usize {
        self.strokes.iter().filter(|s| !s.is_drawable()).count()
            + self.fills.iter().filter(|f| !f.is_drawable()).count()
            + self.texts.iter().filter(|t| !t.is_drawable()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.fills.is_empty() && self.texts.is_empty()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render frame: {e}")))
    }
}
