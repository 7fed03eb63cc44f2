use serde::{Deserialize, Serialize};

/// Position in graph space: pixels from the plot rect's bottom-left corner, Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Trims the segment `start -> end` against `[0, width] x [0, height]`.
///
/// Six edge checks run once, in a fixed order, each one seeing the values the
/// previous checks already moved:
///
/// 1. end past the right edge
/// 2. end below the bottom edge
/// 3. end above the top edge
/// 4. start below the bottom edge
/// 5. start past the left edge
/// 6. start above the top edge
///
/// There is no second pass, so a segment leaving the rect through two edges can
/// keep one endpoint outside. Rendered output depends on exactly this order.
#[must_use]
pub fn clip_segment(
    start: GraphPoint,
    end: GraphPoint,
    width: f64,
    height: f64,
) -> (GraphPoint, GraphPoint) {
    let (mut x0, mut y0) = (start.x, start.y);
    let (mut x, mut y) = (end.x, end.y);

    if x > width {
        let b = (width - x0) * (y - y0) / (x - x0);
        y = y0 + b;
        x = width;
    }
    if y < 0.0 {
        let b = (0.0 - y0) * (x - x0) / (y - y0);
        x = x0 + b;
        y = 0.0;
    }
    if y > height {
        let b = (height - y0) * (x - x0) / (y - y0);
        x = x0 + b;
        y = height;
    }
    if y0 < 0.0 {
        let b = (0.0 - y) * (x - x0) / (y0 - y);
        x0 = x - b;
        y0 = 0.0;
    }
    if x0 < 0.0 {
        let b = (0.0 - x) * (y - y0) / (x0 - x);
        y0 = y - b;
        x0 = 0.0;
    }
    if y0 > height {
        let b = (height - y) * (x - x0) / (y0 - y);
        x0 = x - b;
        y0 = height;
    }

    (GraphPoint::new(x0, y0), GraphPoint::new(x, y))
}
