use eframe::egui;
use light_curve_viewer::{ViewerConfig, ViewerState};

use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LightCurveApp {
    pub state: ViewerState,
    pub config: ViewerConfig,
}

impl LightCurveApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: ViewerState::default(),
            config,
        }
    }
}

impl eframe::App for LightCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::handle_dropped_files(ctx, &mut self.state);

        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column pickers + statistics ----
        egui::SidePanel::left("column_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.config);
            });

        // ---- Bottom panel: data preview ----
        if let Some(dataset) = &self.state.dataset {
            egui::TopBottomPanel::bottom("preview_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    ui.strong("Data preview");
                    table::preview_table(ui, dataset, self.config.preview_rows);
                });
        }

        // ---- Central panel: light curve ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::light_curve_plot(ui, &self.state, &self.config);
        });
    }
}
