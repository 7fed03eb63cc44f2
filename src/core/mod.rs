pub mod clip;
pub mod hit_test;
pub mod scale;
pub mod title_line;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use clip::{GraphPoint, clip_segment};
pub use hit_test::{DEFAULT_TAP_RADIUS_PX, RenderedPoint, RenderedPointRegistry};
pub use scale::LinearScale;
pub use title_line::{
    DeviceSegment, DeviceVertex, RenderedVertex, TITLE_OFFSET_PX, TitleLineGeometry,
    map_to_graph, project_title_line,
};
pub use types::{DataBounds, DataPoint, PlotRect, XyValue};
pub use viewport::{SecondaryScale, Viewport};
pub use windowing::{WindowMode, visible_index_range};
