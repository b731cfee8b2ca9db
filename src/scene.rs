use crate::stroke::StrokeStyle;
use crate::surface::DrawingSurface;
use egui::{Color32, Painter, Pos2, Shape, Vec2};

/// Which of the two layers of a stroke a [`PathLayer`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Wide outline painted beneath the line
    Halo,
    Line,
}

/// One painted polyline
#[derive(Debug, Clone, PartialEq)]
pub struct PathLayer {
    pub kind: LayerKind,
    pub points: Vec<Pos2>,
    pub color: Color32,
    pub width: f32,
}

/// Everything the surface shows, in paint order.
///
/// Rebuilt from scratch after every state change; it borrows nothing from the
/// surface so it can be painted or serialized independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    pub layers: Vec<PathLayer>,
}

impl Scene {
    pub fn from_surface(surface: &DrawingSurface) -> Self {
        let mut layers = Vec::new();

        for stroke in surface.history().committed() {
            push_stroke_layers(&mut layers, stroke.points(), stroke.style());
        }

        let current = surface.current_path();
        if !current.is_empty() {
            push_stroke_layers(&mut layers, current, &surface.current_style());
        }

        Self {
            size: surface.size(),
            layers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Paint into `painter`, with surface coordinates offset by `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for layer in &self.layers {
            let points: Vec<Pos2> = layer.points.iter().map(|p| *p + offset).collect();
            for shape in layer_shapes(points, layer.color, layer.width) {
                painter.add(shape);
            }
        }
    }
}

fn push_stroke_layers(layers: &mut Vec<PathLayer>, points: &[Pos2], style: &StrokeStyle) {
    if style.has_halo() {
        layers.push(PathLayer {
            kind: LayerKind::Halo,
            points: points.to_vec(),
            color: style.halo_color,
            width: style.halo_extent(),
        });
    }
    layers.push(PathLayer {
        kind: LayerKind::Line,
        points: points.to_vec(),
        color: style.line_color,
        width: style.line_width,
    });
}

/// egui has no round caps, so ends get a dot of the stroke's width.
fn layer_shapes(points: Vec<Pos2>, color: Color32, width: f32) -> Vec<Shape> {
    let radius = width / 2.0;
    match points.len() {
        0 => Vec::new(),
        1 => vec![Shape::circle_filled(points[0], radius, color)],
        n => {
            let (first, last) = (points[0], points[n - 1]);
            vec![
                Shape::line(points, egui::Stroke::new(width, color)),
                Shape::circle_filled(first, radius, color),
                Shape::circle_filled(last, radius, color),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_shapes_single_point_is_dot() {
        let shapes = layer_shapes(vec![Pos2::new(1.0, 1.0)], Color32::RED, 4.0);
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], Shape::Circle(_)));
    }

    #[test]
    fn test_layer_shapes_polyline_has_caps() {
        let points = vec![Pos2::ZERO, Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)];
        let shapes = layer_shapes(points, Color32::RED, 4.0);
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Path(_)));
    }

    #[test]
    fn test_in_progress_stroke_uses_current_style() {
        let mut surface = DrawingSurface::default();
        surface.set_line_color(Color32::RED);
        surface.set_stroke_width(0.0);
        surface.start(Pos2::ZERO);
        surface.extend(Pos2::new(1.0, 1.0));

        let scene = surface.scene();
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].kind, LayerKind::Line);
        assert_eq!(scene.layers[0].color, Color32::RED);
    }
}
