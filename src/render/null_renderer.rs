use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and hosts that only need geometry.
///
/// It validates each frame, keeps a copy of the last one and counts what a
/// drawing backend would actually draw (visible, drawable primitives).
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_stroke_count: usize,
    pub last_fill_count: usize,
    pub last_text_count: usize,
    pub last_skipped_count: usize,
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let skipped = frame.undrawable_count();
        if skipped > 0 {
            debug!(skipped, "skipping undrawable primitives");
        }

        self.last_stroke_count = frame
            .strokes
            .iter()
            .filter(|s| s.is_drawable() && s.is_visible())
            .count();
        self.last_fill_count = frame.fills.iter().filter(|f| f.is_drawable()).count();
        self.last_text_count = frame.texts.iter().filter(|t| t.is_drawable()).count();
        self.last_skipped_count = skipped;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
