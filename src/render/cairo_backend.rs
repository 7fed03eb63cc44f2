use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PathPoint, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub strokes_drawn: usize,
    pub fills_drawn: usize,
    pub texts_drawn: usize,
    pub skipped: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering through `Renderer::render` clears the surface first;
/// drawing on an external context through `CairoContextRenderer` does not, so
/// a series composes over whatever the host already painted.
///
/// A renderer built with [`CairoRenderer::for_context`] owns no surface and
/// can only draw on external contexts.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface: Some(surface),
            ..Self::for_context()
        })
    }

    /// Renderer without an offscreen surface, for `CairoContextRenderer` use.
    #[must_use]
    pub fn for_context() -> Self {
        Self {
            surface: None,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut stats = CairoRenderStats::default();

        for stroke in &frame.strokes {
            if !stroke.is_drawable() {
                stats.skipped += 1;
                continue;
            }
            if !stroke.is_visible() {
                continue;
            }
            apply_color(context, stroke.color);
            context.set_line_width(stroke.stroke_width);
            context.set_line_cap(cairo::LineCap::Round);
            append_polyline(context, &stroke.points);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            stats.strokes_drawn += 1;
        }

        for fill in &frame.fills {
            if !fill.is_drawable() {
                stats.skipped += 1;
                continue;
            }
            apply_color(context, fill.color);
            append_polyline(context, &fill.points);
            context.close_path();
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
            stats.fills_drawn += 1;
        }

        for text in &frame.texts {
            if !text.is_drawable() {
                stats.skipped += 1;
                continue;
            }
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        if stats.skipped > 0 {
            debug!(skipped = stats.skipped, "skipped undrawable primitives");
        }
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let Some(surface) = self.surface.as_ref() else {
            return Err(ChartError::Backend(
                "renderer has no offscreen surface; use render_on_cairo_context".to_owned(),
            ));
        };
        let context = Context::new(surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.draw_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.draw_frame(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_polyline(context: &Context, points: &[PathPoint]) {
    context.new_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        context.move_to(first.x, first.y);
    }
    for point in iter {
        context.line_to(point.x, point.y);
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
