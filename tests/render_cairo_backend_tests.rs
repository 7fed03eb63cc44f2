#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use title_line_chart::ChartError;
use title_line_chart::api::{GraphLayout, Series, TitleLineSeries};
use title_line_chart::core::{DataPoint, PlotRect, Viewport};
use title_line_chart::render::{CairoContextRenderer, CairoRenderer, Renderer};

fn titled_series() -> TitleLineSeries {
    let mut series = TitleLineSeries::new(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(5.0, 10.0),
        DataPoint::new(10.0, 0.0),
    ])
    .expect("series");
    series.set_title("Cairo");
    series
}

fn layout(legend_text_size: f64) -> GraphLayout {
    GraphLayout::new(
        Viewport::new(0.0, 10.0, 0.0, 10.0),
        PlotRect::new(0.0, 0.0, 200.0, 120.0),
    )
    .with_legend_text_size(legend_text_size)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_series_offscreen() {
    let mut renderer = CairoRenderer::new(200, 120).expect("renderer");
    let mut series = titled_series();

    series
        .draw(&layout(14.0), &mut renderer, false)
        .expect("draw");
    let stats = renderer.last_stats();
    assert_eq!(stats.strokes_drawn, 2);
    assert_eq!(stats.fills_drawn, 1);
    assert_eq!(stats.texts_drawn, 1);
    assert_eq!(stats.skipped, 0);
}

#[test]
fn context_only_renderer_draws_on_external_context() {
    let mut renderer = CairoRenderer::for_context();
    assert!(renderer.surface().is_none());

    let surface = ImageSurface::create(Format::ARgb32, 200, 120).expect("surface");
    let context = Context::new(&surface).expect("context");
    let frame = titled_series().build_frame(&layout(14.0), false);

    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("external draw");
    assert_eq!(renderer.last_stats().strokes_drawn, 2);
    assert_eq!(renderer.last_stats().texts_drawn, 1);
}

#[test]
fn context_only_renderer_refuses_offscreen_render() {
    let mut renderer = CairoRenderer::for_context();
    let frame = titled_series().build_frame(&layout(14.0), false);

    let err = renderer.render(&frame).expect_err("no surface to draw on");
    assert!(matches!(err, ChartError::Backend(_)));
}

#[test]
fn cairo_renderer_skips_title_with_zero_font_size() {
    let mut renderer = CairoRenderer::new(200, 120).expect("renderer");
    let mut series = titled_series();

    series
        .draw(&layout(0.0), &mut renderer, false)
        .expect("draw must not fail");
    let stats = renderer.last_stats();
    assert_eq!(stats.strokes_drawn, 2);
    assert_eq!(stats.fills_drawn, 1);
    assert_eq!(stats.texts_drawn, 0);
    assert_eq!(stats.skipped, 1);
}
