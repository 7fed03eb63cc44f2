use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TAP_RADIUS_PX, WindowMode};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const TITLE_LINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

pub const DEFAULT_THICKNESS_PX: f64 = 5.0;

#[must_use]
pub fn default_line_color() -> Color {
    Color::from_argb(0xFF00_77CC)
}

#[must_use]
pub fn default_background_color() -> Color {
    Color::argb(100, 172, 218, 255)
}

/// Persistable style and behavior of a `TitleLineSeries`.
///
/// Every field has a default, so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLineConfig {
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    #[serde(default = "default_line_color")]
    pub color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub window_mode: WindowMode,
    #[serde(default = "default_tap_radius_px")]
    pub tap_radius_px: f64,
    /// Free-form host annotations, kept in insertion order.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl Default for TitleLineConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS_PX,
            color: default_line_color(),
            background_color: default_background_color(),
            title: None,
            window_mode: WindowMode::default(),
            tap_radius_px: DEFAULT_TAP_RADIUS_PX,
            metadata: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: TitleLineConfig,
}

impl TitleLineConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(ChartError::InvalidData(
                "thickness must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tap_radius_px.is_finite() || self.tap_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tap radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        self.background_color.validate()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TitleLineConfigJsonContractV1 {
            schema_version: TITLE_LINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: TitleLineConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse config contract: {e}"))
                })?;
            if payload.schema_version != TITLE_LINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json: {e}"))
            })?
        };

        config.validate()?;
        Ok(config)
    }
}

fn default_thickness() -> f64 {
    DEFAULT_THICKNESS_PX
}

fn default_tap_radius_px() -> f64 {
    DEFAULT_TAP_RADIUS_PX
}
