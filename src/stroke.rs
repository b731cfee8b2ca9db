use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Style frozen into a stroke when it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub line_color: Color32,
    pub line_width: f32,
    pub halo_color: Color32,
    pub halo_width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_color: Color32::BLACK,
            line_width: 5.0,
            halo_color: Color32::YELLOW,
            halo_width: 3.0,
        }
    }
}

impl StrokeStyle {
    /// A zero-width halo is not painted at all.
    pub fn has_halo(&self) -> bool {
        self.halo_width > 0.0
    }

    /// Painted width of the halo layer: the halo extends past the line on both sides.
    pub fn halo_extent(&self) -> f32 {
        self.line_width + self.halo_width * 2.0
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    style: StrokeStyle,
}

// Shared between the committed list and the redo stack
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(points: Vec<Pos2>, style: StrokeStyle) -> Self {
        Self { points, style }
    }

    pub fn new_ref(points: Vec<Pos2>, style: StrokeStyle) -> StrokeRef {
        Arc::new(Self::new(points, style))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Bounds of the painted stroke, including the halo when there is one.
    pub fn bounding_rect(&self) -> Rect {
        let rect = Rect::from_points(&self.points);
        let extent = if self.style.has_halo() {
            self.style.halo_extent()
        } else {
            self.style.line_width
        };
        rect.expand(extent / 2.0)
    }
}
