use crate::MandalaApp;
use egui::color_picker::{self, Alpha};

pub fn tools_panel(app: &mut MandalaApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Mandala");
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.canvas().history().can_undo();
                let can_redo = app.canvas().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Download").clicked() {
                    app.download();
                }
            });

            ui.separator();

            egui::Grid::new("drawing_settings_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Sections:");
                    ui.add(
                        egui::DragValue::new(&mut app.settings_mut().sections)
                            .speed(0.1)
                            .max_decimals(0),
                    );
                    ui.end_row();

                    ui.label("Size:");
                    let mut side = app.settings().canvas_side;
                    if ui
                        .add(egui::DragValue::new(&mut side).range(1..=2000))
                        .changed()
                    {
                        app.settings_mut().responsive = false;
                        app.set_canvas_side(side);
                    }
                    ui.end_row();

                    ui.label("Mirror:");
                    ui.checkbox(&mut app.settings_mut().mirror, "");
                    ui.end_row();

                    ui.label("Fit window:");
                    ui.checkbox(&mut app.settings_mut().responsive, "");
                    ui.end_row();

                    ui.label("Color:");
                    color_picker::color_edit_button_srgba(
                        ui,
                        &mut app.settings_mut().color,
                        Alpha::Opaque,
                    );
                    ui.end_row();

                    ui.label("Thickness:");
                    ui.add(egui::Slider::new(
                        &mut app.settings_mut().thickness,
                        1.0..=20.0,
                    ));
                    ui.end_row();
                });

            ui.separator();

            let history = app.canvas().history();
            ui.label(format!(
                "Strokes: {} shown, {} stored",
                history.cursor(),
                history.len()
            ));

            if let Some(status) = app.status() {
                ui.colored_label(ui.visuals().warn_fg_color, status);
            }
        });
}
