use crate::input::InputHandler;
use crate::shortcuts::{self, ShortcutAction};
use crate::surface::DrawingSurface;
use egui::{Color32, CursorIcon, Sense, Stroke};

const SURFACE_ROUNDING: f32 = 8.0;

/// Lay out the drawing surface, feed it this frame's input and paint it.
pub fn central_panel(
    surface: &mut DrawingSurface,
    input: &mut InputHandler,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(surface.size(), Sense::drag());
            let rect = response.rect;
            surface.mount(rect);

            if response.hovered() {
                ctx.set_cursor_icon(CursorIcon::Crosshair);
            }

            let events = input.process_input(ctx, rect, painter.layer_id());
            surface.handle_input(&events);

            for action in shortcuts::consume_shortcuts(ctx) {
                match action {
                    ShortcutAction::Undo => {
                        surface.undo();
                    }
                    ShortcutAction::Redo => {
                        surface.redo();
                    }
                }
            }

            painter.rect_filled(rect, SURFACE_ROUNDING, Color32::WHITE);
            surface
                .scene()
                .paint(&painter.with_clip_rect(rect), rect.min);
            painter.rect_stroke(rect, SURFACE_ROUNDING, Stroke::new(1.0, Color32::GRAY));
        });
    });
}
