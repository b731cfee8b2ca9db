use crate::stroke::StrokeStyle;
use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors raised while loading a [`SurfaceConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Startup settings for a drawing surface.
///
/// Every field has a default so a config file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Logical surface size in points.
    pub size: [f32; 2],
    /// Style applied to strokes until the user changes it.
    pub default_style: StrokeStyle,
    pub line_width_range: [f32; 2],
    pub halo_width_range: [f32; 2],
    /// Name offered for the exported vector file.
    pub export_filename: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            size: [800.0, 600.0],
            default_style: StrokeStyle::default(),
            line_width_range: [1.0, 30.0],
            halo_width_range: [0.0, 10.0],
            export_filename: "drawing.svg".to_owned(),
        }
    }
}

impl SurfaceConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size[0], self.size[1])
    }

    /// Ordered line width range. Falls back to the default on non-finite bounds.
    pub fn line_width_range(&self) -> RangeInclusive<f32> {
        ordered_range(self.line_width_range, Self::default().line_width_range)
    }

    /// Ordered halo width range. Falls back to the default on non-finite bounds.
    pub fn halo_width_range(&self) -> RangeInclusive<f32> {
        ordered_range(self.halo_width_range, Self::default().halo_width_range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [w, h] = self.size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::Invalid(format!("surface size {w}x{h}")));
        }
        let [line_min, line_max] = self.line_width_range;
        if !(line_min > 0.0 && line_min <= line_max) {
            return Err(ConfigError::Invalid(format!(
                "line width range {line_min}..={line_max}"
            )));
        }
        let [halo_min, halo_max] = self.halo_width_range;
        if !(halo_min >= 0.0 && halo_min <= halo_max) {
            return Err(ConfigError::Invalid(format!(
                "halo width range {halo_min}..={halo_max}"
            )));
        }
        if self.export_filename.trim().is_empty() {
            return Err(ConfigError::Invalid("empty export filename".to_owned()));
        }
        Ok(())
    }
}

fn ordered_range([a, b]: [f32; 2], fallback: [f32; 2]) -> RangeInclusive<f32> {
    if !(a.is_finite() && b.is_finite()) {
        return fallback[0]..=fallback[1];
    }
    a.min(b)..=a.max(b)
}
