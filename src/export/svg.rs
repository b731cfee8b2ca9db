//! Static SVG serialization of a [`Scene`].

use crate::scene::{LayerKind, PathLayer, Scene};
use egui::{Color32, Pos2};

pub const MIME_TYPE: &str = "image/svg+xml";

/// Render the scene as a standalone SVG document, one `<path>` per layer in
/// paint order.
pub fn to_svg(scene: &Scene) -> String {
    let (width, height) = (scene.size.x, scene.size.y);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    for layer in &scene.layers {
        out.push_str("  ");
        out.push_str(&path_element(layer));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn path_element(layer: &PathLayer) -> String {
    let mut element = format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\"",
        path_data(&layer.points),
        hex_color(layer.color),
        layer.width,
    );
    let a = layer.color.a();
    if a < u8::MAX {
        element.push_str(&format!(" stroke-opacity=\"{:.3}\"", f32::from(a) / 255.0));
    }
    if layer.kind == LayerKind::Halo {
        element.push_str(" style=\"mix-blend-mode:multiply\"");
    }
    element.push_str("/>");
    element
}

/// `M x y L x y ...`
pub fn path_data(points: &[Pos2]) -> String {
    let mut commands = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        commands.push(format!("{op} {} {}", p.x, p.y));
    }
    commands.join(" ")
}

/// `#rrggbb`, dropping alpha.
pub fn hex_color(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data() {
        let points = [Pos2::new(0.0, 0.0), Pos2::new(10.5, 10.0), Pos2::new(-3.0, 7.25)];
        assert_eq!(path_data(&points), "M 0 0 L 10.5 10 L -3 7.25");
        assert_eq!(path_data(&points[..1]), "M 0 0");
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(Color32::BLACK), "#000000");
        assert_eq!(hex_color(Color32::YELLOW), "#ffff00");
        assert_eq!(hex_color(Color32::from_rgb(0x12, 0xab, 0x0f)), "#12ab0f");
    }

    #[test]
    fn test_translucent_layer_has_opacity() {
        let layer = PathLayer {
            kind: LayerKind::Line,
            points: vec![Pos2::ZERO, Pos2::new(1.0, 1.0)],
            color: Color32::from_rgba_unmultiplied(255, 0, 0, 128),
            width: 2.0,
        };
        let element = path_element(&layer);
        assert!(element.contains("stroke-opacity=\"0.502\""));
        assert!(!element.contains("mix-blend-mode"));
    }
}
