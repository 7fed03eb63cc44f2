use tracing::trace;

use crate::core::{
    DataPoint, RenderedPointRegistry, TitleLineGeometry, WindowMode, XyValue, project_title_line,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FillPath, PathPoint, RenderFrame, Renderer, StrokePath, TextHAlign, TextPrimitive,
};

use super::{GraphView, Series, SeriesData, TitleLineConfig};

/// Line series with a translucent fill down to the baseline and its title
/// centered above the highest visible point.
///
/// Segments are clipped to the host's plot rect. Style changes apply on the
/// next draw.
#[derive(Debug, Clone)]
pub struct TitleLineSeries<E = DataPoint> {
    data: SeriesData<E>,
    config: TitleLineConfig,
    rendered: RenderedPointRegistry<E>,
}

impl<E: XyValue + Clone + Sync> TitleLineSeries<E> {
    pub fn new(points: Vec<E>) -> ChartResult<Self> {
        Ok(Self::from_data(SeriesData::new(points)?))
    }

    #[must_use]
    pub fn from_data(data: SeriesData<E>) -> Self {
        let config = TitleLineConfig::default();
        let rendered = RenderedPointRegistry::new(config.tap_radius_px);
        Self {
            data,
            config,
            rendered,
        }
    }

    #[must_use]
    pub fn data(&self) -> &SeriesData<E> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SeriesData<E> {
        &mut self.data
    }

    #[must_use]
    pub fn config(&self) -> &TitleLineConfig {
        &self.config
    }

    pub fn apply_config(&mut self, config: TitleLineConfig) -> ChartResult<()> {
        config.validate()?;
        self.rendered.set_tap_radius_px(config.tap_radius_px);
        self.config = config;
        Ok(())
    }

    /// Sets the fill color from a packed `0xAARRGGBB` value.
    pub fn set_background_color(&mut self, argb: u32) {
        self.config.background_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.config.background_color
    }

    /// Hides the line itself; fill and title are still drawn.
    ///
    /// Unlike Android's `Paint`, where a stroke width of 0 means a 1px
    /// hairline, a width of 0 here draws no line at all.
    pub fn zero_thickness(&mut self) {
        self.config.thickness = 0.0;
    }

    pub fn set_thickness(&mut self, thickness: f64) -> ChartResult<()> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(ChartError::InvalidData(
                "thickness must be finite and >= 0".to_owned(),
            ));
        }
        self.config.thickness = thickness;
        Ok(())
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.config.thickness
    }

    pub fn set_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.config.color = color;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = Some(title.into());
    }

    pub fn clear_title(&mut self) {
        self.config.title = None;
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) {
        self.config.window_mode = mode;
    }

    pub fn set_tap_radius(&mut self, tap_radius_px: f64) -> ChartResult<()> {
        if !tap_radius_px.is_finite() || tap_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tap radius must be finite and > 0".to_owned(),
            ));
        }
        self.config.tap_radius_px = tap_radius_px;
        self.rendered.set_tap_radius_px(tap_radius_px);
        Ok(())
    }

    #[must_use]
    pub fn rendered_points(&self) -> &RenderedPointRegistry<E> {
        &self.rendered
    }

    /// Geometry for the host's current window, without touching any state.
    #[must_use]
    pub fn project(&self, graph: &dyn GraphView, second_scale: bool) -> TitleLineGeometry {
        let viewport = graph.viewport();
        let bounds = viewport.bounds(second_scale);
        let visible = self
            .data
            .values(bounds.min_x, bounds.max_x, self.config.window_mode);
        project_title_line(visible, bounds, graph.content_rect())
    }

    /// Builds the frame for one draw and records where samples were drawn.
    pub fn build_frame(&mut self, graph: &dyn GraphView, second_scale: bool) -> RenderFrame {
        self.rendered.reset();

        let rect = graph.content_rect();
        let bounds = graph.viewport().bounds(second_scale);
        let visible = self
            .data
            .values(bounds.min_x, bounds.max_x, self.config.window_mode);
        let geometry = project_title_line(visible, bounds, rect);

        for vertex in &geometry.rendered {
            self.rendered
                .register(vertex.x, vertex.y, visible[vertex.index].clone());
        }

        let mut frame = RenderFrame::new(rect);
        let color = self.config.color;
        frame.strokes.extend(geometry.segments.iter().map(|segment| {
            StrokePath::segment(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                self.config.thickness,
                color,
            )
        }));

        if !geometry.fill_polygon.is_empty() {
            frame.fills.push(FillPath::new(
                geometry
                    .fill_polygon
                    .iter()
                    .map(|vertex| PathPoint::new(vertex.x, vertex.y)),
                self.config.background_color,
            ));
        }

        let title = self
            .config
            .title
            .as_deref()
            .filter(|title| !title.trim().is_empty());
        if let (Some(title), Some(anchor)) = (title, geometry.title_anchor(rect)) {
            frame.texts.push(TextPrimitive::new(
                title,
                anchor.x,
                anchor.y,
                graph.legend_text_size(),
                color,
                TextHAlign::Center,
            ));
        }

        trace!(
            visible = visible.len(),
            segments = geometry.segments.len(),
            titled = !frame.texts.is_empty(),
            "title line frame"
        );
        frame
    }
}

impl<E: XyValue + Clone + Sync> Series for TitleLineSeries<E> {
    type Value = E;

    fn color(&self) -> Color {
        self.config.color
    }

    fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    fn draw(
        &mut self,
        graph: &dyn GraphView,
        renderer: &mut dyn Renderer,
        second_scale: bool,
    ) -> ChartResult<()> {
        let frame = self.build_frame(graph, second_scale);
        renderer.render(&frame)
    }

    fn find_data_point(&self, x: f64, y: f64) -> Option<&E> {
        self.rendered.find_data_point(x, y)
    }
}
