//! title-line-chart: a titled, clipped line series renderer.
//!
//! Samples are mapped onto a host-supplied plot rect, each segment is trimmed
//! against the rect edges, the area under the line is filled down to the
//! baseline, and an optional title is centered above the highest point. The
//! output is a backend-agnostic `RenderFrame` handed to any `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GraphLayout, GraphView, Series, TitleLineConfig, TitleLineSeries};
pub use error::{ChartError, ChartResult};
