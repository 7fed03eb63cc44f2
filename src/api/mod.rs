mod config;
mod graph;
mod series;
mod title_line_series;

pub use config::{
    DEFAULT_THICKNESS_PX, TITLE_LINE_CONFIG_JSON_SCHEMA_V1, TitleLineConfig,
    TitleLineConfigJsonContractV1, default_background_color, default_line_color,
};
pub use graph::{GraphLayout, GraphView};
pub use series::{Series, SeriesData};
pub use title_line_series::TitleLineSeries;
