use crate::config::SurfaceConfig;
use crate::stroke::StrokeStyle;
use egui::Color32;
use std::ops::RangeInclusive;

/// Global style controls. Changes only affect strokes committed afterwards.
#[derive(Debug, Clone)]
pub struct StyleState {
    current: StrokeStyle,
    line_width_range: RangeInclusive<f32>,
    halo_width_range: RangeInclusive<f32>,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::from_config(&SurfaceConfig::default())
    }
}

impl StyleState {
    pub fn from_config(config: &SurfaceConfig) -> Self {
        let mut state = Self {
            current: StrokeStyle {
                line_color: config.default_style.line_color,
                halo_color: config.default_style.halo_color,
                ..StrokeStyle::default()
            },
            line_width_range: config.line_width_range(),
            halo_width_range: config.halo_width_range(),
        };
        // Defaults from a config file still have to sit inside the ranges
        state.set_line_width(config.default_style.line_width);
        state.set_halo_width(config.default_style.halo_width);
        state
    }

    /// The style a stroke committed right now would be frozen with.
    pub fn snapshot(&self) -> StrokeStyle {
        self.current
    }

    pub fn line_color(&self) -> Color32 {
        self.current.line_color
    }

    pub fn line_width(&self) -> f32 {
        self.current.line_width
    }

    pub fn halo_color(&self) -> Color32 {
        self.current.halo_color
    }

    pub fn halo_width(&self) -> f32 {
        self.current.halo_width
    }

    pub fn line_width_range(&self) -> RangeInclusive<f32> {
        self.line_width_range.clone()
    }

    pub fn halo_width_range(&self) -> RangeInclusive<f32> {
        self.halo_width_range.clone()
    }

    pub fn set_line_color(&mut self, color: Color32) {
        self.current.line_color = color;
    }

    /// Clamped into the line width range. Non-finite values are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if let Some(width) = clamp_width(width, &self.line_width_range) {
            self.current.line_width = width;
        }
    }

    pub fn set_halo_color(&mut self, color: Color32) {
        self.current.halo_color = color;
    }

    /// Clamped into the halo width range. Non-finite values are ignored.
    pub fn set_halo_width(&mut self, width: f32) {
        if let Some(width) = clamp_width(width, &self.halo_width_range) {
            self.current.halo_width = width;
        }
    }
}

fn clamp_width(width: f32, range: &RangeInclusive<f32>) -> Option<f32> {
    if !width.is_finite() {
        log::debug!("Ignoring non-finite width {}", width);
        return None;
    }
    Some(width.clamp(*range.start(), *range.end()))
}
