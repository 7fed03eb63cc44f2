use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{GraphLayout, TitleLineSeries};
use crate::core::{PlotRect, Viewport, XyValue};
use crate::render::{CairoContextRenderer, CairoRenderer};

/// Shared state drawn by a `DrawingArea`.
pub struct GtkTitleLineState<E> {
    pub series: TitleLineSeries<E>,
    pub viewport: Viewport,
    pub legend_text_size: f64,
    pub second_scale: bool,
}

/// Draws a `TitleLineSeries` into a GTK4 `DrawingArea` on every frame.
///
/// The plot rect follows the widget allocation. Mutate the shared state and
/// call `queue_draw` to redraw.
pub struct GtkChartAdapter<E> {
    area: gtk::DrawingArea,
    state: Rc<RefCell<GtkTitleLineState<E>>>,
}

impl<E: XyValue + Clone + Sync + 'static> GtkChartAdapter<E> {
    #[must_use]
    pub fn new(state: GtkTitleLineState<E>) -> Self {
        let area = gtk::DrawingArea::new();
        let state = Rc::new(RefCell::new(state));
        let renderer = RefCell::new(CairoRenderer::for_context());

        let draw_state = Rc::clone(&state);
        area.set_draw_func(move |_area, context, width, height| {
            let mut state = draw_state.borrow_mut();
            let layout = GraphLayout::new(
                state.viewport,
                PlotRect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            )
            .with_legend_text_size(state.legend_text_size);
            let second_scale = state.second_scale;
            let frame = state.series.build_frame(&layout, second_scale);

            if let Err(err) = renderer.borrow_mut().render_on_cairo_context(context, &frame) {
                warn!(error = %err, "title line draw failed");
            }
        });

        Self { area, state }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn state(&self) -> Rc<RefCell<GtkTitleLineState<E>>> {
        Rc::clone(&self.state)
    }

    pub fn queue_draw(&self) {
        self.area.queue_draw();
    }
}
