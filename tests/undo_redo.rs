use halo_sketch::{DrawingSurface, Stroke, StrokeStyle};
use egui::{Color32, Pos2};
use std::sync::Arc;

// Helper to draw and commit a stroke through the controller
fn draw(surface: &mut DrawingSurface, points: &[(f32, f32)]) -> bool {
    let mut iter = points.iter().map(|&(x, y)| Pos2::new(x, y));
    if let Some(origin) = iter.next() {
        surface.start(origin);
    }
    for point in iter {
        surface.extend(point);
    }
    surface.commit()
}

fn committed(surface: &DrawingSurface) -> Vec<Stroke> {
    surface
        .history()
        .committed()
        .iter()
        .map(|s| Stroke::clone(s))
        .collect()
}

#[test]
fn test_commit_appends_and_clears_redo() {
    let mut surface = DrawingSurface::default();
    draw(&mut surface, &[(0.0, 0.0), (5.0, 5.0)]);
    surface.undo();
    assert_eq!(surface.history().redo_len(), 1);

    assert!(draw(&mut surface, &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]));
    assert_eq!(surface.history().undo_len(), 1);
    assert_eq!(surface.history().redo_len(), 0);
    assert!(!surface.is_drawing());
    assert!(surface.current_path().is_empty());
}

#[test]
fn test_two_stroke_scenario() {
    let mut surface = DrawingSurface::default();
    surface.set_line_color(Color32::BLACK);
    surface.set_line_width(5.0);
    surface.set_stroke_color(Color32::YELLOW);
    surface.set_stroke_width(3.0);

    draw(&mut surface, &[(0.0, 0.0), (10.0, 10.0)]);
    let a = surface.history().committed()[0].clone();
    draw(&mut surface, &[(20.0, 20.0), (30.0, 40.0)]);
    let b = surface.history().committed()[1].clone();

    assert_eq!(a.points(), &[Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)]);
    assert_eq!(
        *a.style(),
        StrokeStyle {
            line_color: Color32::BLACK,
            line_width: 5.0,
            halo_color: Color32::YELLOW,
            halo_width: 3.0,
        }
    );

    assert!(surface.undo());
    let history = surface.history();
    assert_eq!(history.committed().len(), 1);
    assert!(Arc::ptr_eq(&history.committed()[0], &a));
    let undone: Vec<_> = history.undone().collect();
    assert_eq!(undone.len(), 1);
    assert!(Arc::ptr_eq(undone[0], &b));

    assert!(surface.redo());
    let history = surface.history();
    assert_eq!(history.committed().len(), 2);
    assert!(Arc::ptr_eq(&history.committed()[0], &a));
    assert!(Arc::ptr_eq(&history.committed()[1], &b));
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn test_undo_then_redo_restores_committed() {
    let mut surface = DrawingSurface::default();
    draw(&mut surface, &[(0.0, 0.0), (1.0, 0.0)]);
    surface.set_line_color(Color32::RED);
    draw(&mut surface, &[(0.0, 5.0), (1.0, 5.0), (2.0, 6.0)]);
    draw(&mut surface, &[(9.0, 9.0), (8.0, 8.0)]);

    let before = committed(&surface);
    surface.undo();
    surface.redo();
    assert_eq!(committed(&surface), before);
}

#[test]
fn test_multiple_undo_redo_is_lifo() {
    let mut surface = DrawingSurface::default();
    for i in 0..3 {
        let x = i as f32 * 10.0;
        draw(&mut surface, &[(x, 0.0), (x, 10.0)]);
    }
    let before = committed(&surface);

    surface.undo();
    surface.undo();
    assert_eq!(committed(&surface), before[..1].to_vec());

    surface.redo();
    assert_eq!(committed(&surface), before[..2].to_vec());
    surface.redo();
    assert_eq!(committed(&surface), before);
}

#[test]
fn test_empty_history_is_noop() {
    let mut surface = DrawingSurface::default();
    assert!(!surface.undo());
    assert!(!surface.redo());
    assert!(committed(&surface).is_empty());

    draw(&mut surface, &[(0.0, 0.0), (1.0, 1.0)]);
    let before = committed(&surface);
    assert!(!surface.redo());
    assert_eq!(committed(&surface), before);
    assert_eq!(surface.history().redo_len(), 0);
}

#[test]
fn test_reset_clears_everything() {
    let mut surface = DrawingSurface::default();
    draw(&mut surface, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut surface, &[(2.0, 2.0), (3.0, 3.0)]);
    surface.undo();
    surface.start(Pos2::new(4.0, 4.0));
    surface.extend(Pos2::new(5.0, 5.0));

    surface.reset();
    assert!(surface.history().committed().is_empty());
    assert_eq!(surface.history().redo_len(), 0);
    assert!(surface.current_path().is_empty());
    assert!(!surface.is_drawing());
}
