use tracing::{debug, trace, warn};

use crate::core::{WindowMode, XyValue, visible_index_range};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::GraphView;

/// Capability shared by every series a host chart can draw.
pub trait Series {
    type Value: XyValue;

    fn color(&self) -> Color;

    fn title(&self) -> Option<&str>;

    /// Draws the series for the host's current viewport and plot rect.
    fn draw(
        &mut self,
        graph: &dyn GraphView,
        renderer: &mut dyn Renderer,
        second_scale: bool,
    ) -> ChartResult<()>;

    /// Sample drawn nearest to a device position during the last draw.
    fn find_data_point(&self, x: f64, y: f64) -> Option<&Self::Value>;
}

/// Ordered sample storage of one series (ascending, duplicates allowed on X).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData<E> {
    points: Vec<E>,
}

impl<E> Default for SeriesData<E> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<E: XyValue> SeriesData<E> {
    pub fn new(points: Vec<E>) -> ChartResult<Self> {
        check_value_order(&points)?;
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[E] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces all samples. On error the previous samples are kept.
    pub fn reset_data(&mut self, points: Vec<E>) -> ChartResult<()> {
        check_value_order(&points)?;
        debug!(
            previous_count = self.points.len(),
            count = points.len(),
            "reset series data"
        );
        self.points = points;
        Ok(())
    }

    /// Appends one sample; its X must not be lower than the last sample's X.
    pub fn append_data(&mut self, point: E) -> ChartResult<()> {
        if let Some(last) = self.points.last() {
            if point.x() < last.x() {
                warn!(
                    x = point.x(),
                    last_x = last.x(),
                    "rejecting out-of-order append"
                );
                return Err(ChartError::InvalidData(
                    "new x value must be greater than or equal to the last x value".to_owned(),
                ));
            }
        }
        self.points.push(point);
        trace!(count = self.points.len(), "append series data");
        Ok(())
    }

    /// Appends one sample and drops the oldest ones beyond `max_points`.
    pub fn append_data_capped(&mut self, point: E, max_points: usize) -> ChartResult<()> {
        self.append_data(point)?;
        if self.points.len() > max_points {
            let excess = self.points.len() - max_points;
            self.points.drain(..excess);
            trace!(dropped = excess, "trimmed series to capacity");
        }
        Ok(())
    }

    /// Samples selected by an X window.
    #[must_use]
    pub fn values(&self, min_x: f64, max_x: f64, mode: WindowMode) -> &[E] {
        &self.points[visible_index_range(&self.points, min_x, max_x, mode)]
    }

    #[must_use]
    pub fn lowest_x(&self) -> Option<f64> {
        self.points.first().map(XyValue::x)
    }

    #[must_use]
    pub fn highest_x(&self) -> Option<f64> {
        self.points.last().map(XyValue::x)
    }

    #[must_use]
    pub fn lowest_y(&self) -> Option<f64> {
        self.points.iter().map(XyValue::y).reduce(f64::min)
    }

    #[must_use]
    pub fn highest_y(&self) -> Option<f64> {
        self.points.iter().map(XyValue::y).reduce(f64::max)
    }
}

fn check_value_order<E: XyValue>(points: &[E]) -> ChartResult<()> {
    if let Some(pair) = points.windows(2).find(|pair| pair[1].x() < pair[0].x()) {
        return Err(ChartError::InvalidData(format!(
            "series x values must be ascending: {} follows {}",
            pair[1].x(),
            pair[0].x()
        )));
    }
    Ok(())
}
