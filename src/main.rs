#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mandala Paint")
            .with_inner_size([860.0, 620.0])
            .with_min_inner_size([320.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mandala Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(mandala_paint::MandalaApp::new(cc)))),
    )
}
