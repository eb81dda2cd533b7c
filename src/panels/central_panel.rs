use crate::MandalaApp;
use egui::{Color32, Rect, Sense};

pub fn central_panel(app: &mut MandalaApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let canvas_rect = Rect::from_center_size(available.center(), app.canvas().size().to_vec2());
        let response = ui.allocate_rect(canvas_rect, Sense::drag());

        app.handle_canvas_input(&response, canvas_rect);

        // Segments are canvas-local; shift them onto the screen
        let painter = ui.painter_at(canvas_rect);
        let origin = canvas_rect.min.to_vec2();
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
        for segment in app.canvas().surface().segments() {
            painter.line_segment(
                [segment.from + origin, segment.to + origin],
                egui::Stroke::new(segment.thickness, segment.color),
            );
        }
        painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, Color32::BLACK));
    });
}
