use serde::{Deserialize, Serialize};

use crate::core::{PlotRect, Viewport};

/// Accessors a series reads from its host chart while drawing.
pub trait GraphView {
    fn viewport(&self) -> Viewport;

    /// Pixel rect of the plotting area, excluding axes and labels.
    fn content_rect(&self) -> PlotRect;

    /// Font size the host's legend uses; series titles share it.
    fn legend_text_size(&self) -> f64;
}

/// Plain host state for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub viewport: Viewport,
    pub content_rect: PlotRect,
    #[serde(default = "default_legend_text_size")]
    pub legend_text_size: f64,
}

impl GraphLayout {
    #[must_use]
    pub fn new(viewport: Viewport, content_rect: PlotRect) -> Self {
        Self {
            viewport,
            content_rect,
            legend_text_size: default_legend_text_size(),
        }
    }

    #[must_use]
    pub fn with_legend_text_size(mut self, size: f64) -> Self {
        self.legend_text_size = size;
        self
    }
}

impl GraphView for GraphLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn content_rect(&self) -> PlotRect {
        self.content_rect
    }

    fn legend_text_size(&self) -> f64 {
        self.legend_text_size
    }
}

fn default_legend_text_size() -> f64 {
    14.0
}
