mod app;
mod ui;

use app::LightCurveApp;
use eframe::egui;
use light_curve_viewer::ViewerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Light Curve Viewer",
        options,
        Box::new(move |cc| {
            let visuals = if config.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            cc.egui_ctx.set_visuals(visuals);
            Ok(Box::new(LightCurveApp::new(config)))
        }),
    )
}
