use super::PanelAction;
use crate::shortcuts::ShortcutAction;
use crate::surface::DrawingSurface;
use egui::color_picker::{Alpha, color_edit_button_srgba};

/// Style controls and history buttons. Style edits apply immediately; the
/// rest comes back as [`PanelAction`]s.
pub fn tools_panel(surface: &mut DrawingSurface, ctx: &egui::Context) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Line");
            style_controls(ui, surface);

            ui.separator();

            ui.horizontal(|ui| {
                let undo = ui
                    .add_enabled(surface.history().can_undo(), egui::Button::new("Undo"))
                    .on_hover_text(ShortcutAction::Undo.label(ctx));
                if undo.clicked() {
                    actions.push(PanelAction::Undo);
                }

                let redo = ui
                    .add_enabled(surface.history().can_redo(), egui::Button::new("Redo"))
                    .on_hover_text(ShortcutAction::Redo.label(ctx));
                if redo.clicked() {
                    actions.push(PanelAction::Redo);
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    actions.push(PanelAction::Reset);
                }
                if ui.button("Export SVG").clicked() {
                    actions.push(PanelAction::Export);
                }
            });

            ui.separator();

            let history = surface.history();
            ui.label(format!("Strokes: {}", history.undo_len()));
            ui.label(format!("Undone: {}", history.redo_len()));
        });

    actions
}

fn style_controls(ui: &mut egui::Ui, surface: &mut DrawingSurface) {
    let style = surface.style().clone();

    egui::Grid::new("style_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Line color");
            let mut line_color = style.line_color();
            if color_edit_button_srgba(ui, &mut line_color, Alpha::Opaque).changed() {
                surface.set_line_color(line_color);
            }
            ui.end_row();

            ui.label("Line width");
            let mut line_width = style.line_width();
            if ui
                .add(egui::Slider::new(&mut line_width, style.line_width_range()).step_by(1.0))
                .changed()
            {
                surface.set_line_width(line_width);
            }
            ui.end_row();

            ui.label("Halo color");
            let mut halo_color = style.halo_color();
            if color_edit_button_srgba(ui, &mut halo_color, Alpha::Opaque).changed() {
                surface.set_stroke_color(halo_color);
            }
            ui.end_row();

            ui.label("Halo width");
            let mut halo_width = style.halo_width();
            if ui
                .add(egui::Slider::new(&mut halo_width, style.halo_width_range()).step_by(1.0))
                .changed()
            {
                surface.set_stroke_width(halo_width);
            }
            ui.end_row();
        });
}
