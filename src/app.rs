use crate::canvas::Canvas;
use crate::export::{self, DEFAULT_EXPORT_FILE};
use crate::input::{self, InputEvent, InputHandler, PointerFrame};
use crate::panels::{central_panel, tools_panel};
use crate::settings::DrawingSettings;
use crate::surface::DisplayList;

/// The eframe application: a settings panel next to a symmetric drawing canvas
pub struct MandalaApp {
    canvas: Canvas<DisplayList>,
    settings: DrawingSettings,
    input: InputHandler,
    /// Last error or notice shown under the settings
    status: Option<String>,
}

impl Default for MandalaApp {
    fn default() -> Self {
        let settings = DrawingSettings::default();
        Self {
            canvas: Canvas::new(DisplayList::new(settings.canvas_size())),
            settings,
            input: InputHandler::new(egui::Rect::NOTHING),
            status: None,
        }
    }
}

impl MandalaApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> &Canvas<DisplayList> {
        &self.canvas
    }

    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DrawingSettings {
        &mut self.settings
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn undo(&mut self) {
        self.canvas.undo();
    }

    pub fn redo(&mut self) {
        self.canvas.redo();
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.status = None;
    }

    /// Save the visible strokes next to the working directory
    pub fn download(&mut self) {
        match export::export_image(
            self.canvas.visible_strokes(),
            self.canvas.size(),
            DEFAULT_EXPORT_FILE,
        ) {
            Ok(()) => self.status = Some(format!("Saved {}", DEFAULT_EXPORT_FILE)),
            Err(err) => {
                log::error!("Download failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Resize the canvas, telling the user when that wiped their drawing
    pub fn set_canvas_side(&mut self, side: u32) {
        self.settings.canvas_side = side;
        let size = self.settings.canvas_size();
        match self.canvas.resize(size) {
            Ok(true) => {
                self.status = Some(format!(
                    "Canvas resized to {}x{}; the drawing was cleared",
                    size.width, size.height
                ));
            }
            Ok(false) => {}
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Feed one frame of canvas pointer input through the router
    pub fn handle_canvas_input(&mut self, response: &egui::Response, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let events = self.input.process_pointer(PointerFrame::from_response(response));
        for event in &events {
            self.route(event);
        }
    }

    fn route(&mut self, event: &InputEvent) {
        match input::route_event(event, &mut self.canvas, &self.settings) {
            Ok(()) => {
                if matches!(event, InputEvent::PointerDown { .. }) {
                    self.status = None;
                }
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn follow_window_width(&mut self, ctx: &egui::Context) {
        if !self.settings.responsive {
            return;
        }
        let side = DrawingSettings::side_for_window(ctx.screen_rect().width());
        if side != self.settings.canvas_side {
            self.set_canvas_side(side);
        }
    }
}

impl eframe::App for MandalaApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.follow_window_width(ctx);

        for event in InputHandler::process_shortcuts(ctx) {
            self.route(&event);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
