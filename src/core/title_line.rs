#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{DataBounds, GraphPoint, LinearScale, PlotRect, XyValue, clip_segment};

/// Distance in pixels between the topmost line point and the title baseline.
pub const TITLE_OFFSET_PX: f64 = 10.0;

/// Clipped line segment in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceVertex {
    pub x: f64,
    pub y: f64,
}

/// Device position where a source sample ended up after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedVertex {
    /// Index of the sample in the projected slice.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Deterministic output of one title-line projection.
///
/// `fill_polygon` starts at the first clipped segment start, follows every
/// clipped segment end, then drops to the baseline at the last and first X.
/// It is implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLineGeometry {
    pub segments: Vec<DeviceSegment>,
    pub fill_polygon: Vec<DeviceVertex>,
    pub rendered: Vec<RenderedVertex>,
    pub first_x: f64,
    pub last_used_end_x: f64,
    /// Highest unclipped graph-space Y over all projected samples.
    pub title_y: f64,
}

impl TitleLineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            fill_polygon: Vec::new(),
            rendered: Vec::new(),
            first_x: 0.0,
            last_used_end_x: 0.0,
            title_y: 0.0,
        }
    }

    /// Center-aligned title position, or `None` when no segment reached a
    /// positive device X.
    #[must_use]
    pub fn title_anchor(&self, rect: PlotRect) -> Option<DeviceVertex> {
        if self.last_used_end_x.is_nan() || self.last_used_end_x <= 0.0 {
            return None;
        }
        Some(DeviceVertex {
            x: (self.last_used_end_x + self.first_x) / 2.0,
            y: (rect.top - self.title_y) + rect.height - TITLE_OFFSET_PX,
        })
    }
}

/// Maps data-space samples into graph space.
pub fn map_to_graph<E: XyValue + Sync>(
    points: &[E],
    bounds: DataBounds,
    rect: PlotRect,
) -> Vec<GraphPoint> {
    let x_scale = LinearScale::new(bounds.min_x, bounds.max_x);
    let y_scale = LinearScale::new(bounds.min_y, bounds.max_y);
    let map = |point: &E| {
        GraphPoint::new(
            x_scale.domain_to_pixel(point.x(), rect.width),
            y_scale.domain_to_pixel(point.y(), rect.height),
        )
    };

    #[cfg(feature = "parallel-projection")]
    {
        points.par_iter().map(map).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points.iter().map(map).collect()
    }
}

/// Projects ordered samples into clipped line, fill and title geometry.
///
/// Degenerate bounds are not rejected; the resulting non-finite coordinates
/// are left for the renderer to skip.
#[must_use]
pub fn project_title_line<E: XyValue + Sync>(
    points: &[E],
    bounds: DataBounds,
    rect: PlotRect,
) -> TitleLineGeometry {
    let mapped = map_to_graph(points, bounds, rect);
    let mut geometry = TitleLineGeometry::empty();
    if mapped.len() >= 2 {
        geometry.segments.reserve(mapped.len() - 1);
        geometry.rendered.reserve(mapped.len() - 1);
        geometry.fill_polygon.reserve(mapped.len() + 2);
    }

    let mut last_end = GraphPoint::new(0.0, 0.0);
    for (index, &current) in mapped.iter().enumerate() {
        if index > 0 {
            let (start, end) = clip_segment(last_end, current, rect.width, rect.height);
            let (start_x, start_y) = rect.graph_to_device(start.x, start.y);
            let (end_x, end_y) = rect.graph_to_device(end.x, end.y);

            geometry.segments.push(DeviceSegment {
                x1: start_x,
                y1: start_y,
                x2: end_x,
                y2: end_y,
            });
            geometry.rendered.push(RenderedVertex {
                index,
                x: end_x,
                y: end_y,
            });

            if index == 1 {
                geometry.first_x = start_x;
                geometry.fill_polygon.push(DeviceVertex {
                    x: start_x,
                    y: start_y,
                });
            }
            geometry.fill_polygon.push(DeviceVertex { x: end_x, y: end_y });
            geometry.last_used_end_x = end_x;
        }
        // The next start checks look at this unclipped position.
        last_end = current;
        geometry.title_y = geometry.title_y.max(current.y);
    }

    if !geometry.segments.is_empty() {
        let baseline = rect.bottom();
        geometry.fill_polygon.push(DeviceVertex {
            x: geometry.last_used_end_x,
            y: baseline,
        });
        geometry.fill_polygon.push(DeviceVertex {
            x: geometry.first_x,
            y: baseline,
        });
    }

    geometry
}
