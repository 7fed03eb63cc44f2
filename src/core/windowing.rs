use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::XyValue;

/// How a visible X window selects points from an ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Only points with `min_x <= x <= max_x`.
    #[default]
    Strict,
    /// Strict window plus the nearest point just outside each edge, so the
    /// segments crossing an edge are clipped there instead of dropped.
    Bracketed,
}

/// Returns the index range of `points` (ascending by X) inside an inclusive window.
///
/// A NaN bound selects nothing.
#[must_use]
pub fn visible_index_range<E: XyValue>(
    points: &[E],
    start: f64,
    end: f64,
    mode: WindowMode,
) -> Range<usize> {
    if start.is_nan() || end.is_nan() {
        return 0..0;
    }

    let (min_x, max_x) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let mut first = points.partition_point(|point| point.x() < min_x);
    let mut last = points.partition_point(|point| point.x() <= max_x);

    if mode == WindowMode::Bracketed {
        first = first.saturating_sub(1);
        last = (last + 1).min(points.len());
    }

    first..last.max(first)
}
