use eframe::egui::{self, Color32, RichText, Ui};
use light_curve_viewer::{load_file, SummaryStatistics, ViewerConfig, ViewerState};

// ---------------------------------------------------------------------------
// Left side panel – column pickers and statistics
// ---------------------------------------------------------------------------

/// Render the left panel: time / brightness pickers, then the statistics.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState, config: &ViewerConfig) {
    ui.heading("Columns");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No file loaded.");
        return;
    };

    // Clone what we need so we can mutate state after the widgets.
    let columns = dataset.columns().to_vec();
    let mut time = state.selection.time.clone();
    let mut brightness = state.selection.brightness.clone();

    ui.strong("Time column");
    column_picker(ui, "time_column", &mut time, &columns);
    ui.add_space(4.0);
    ui.strong("Brightness column");
    column_picker(ui, "brightness_column", &mut brightness, &columns);

    if time != state.selection.time {
        state.set_time_column(&time);
    }
    if brightness != state.selection.brightness {
        state.set_brightness_column(&brightness);
    }

    ui.add_space(8.0);
    ui.heading("Statistics");
    ui.separator();

    match &state.statistics {
        Some(stats) => {
            statistics_grid(ui, stats, config.decimals);
            ui.add_space(4.0);
            if ui.button("Copy as JSON").clicked() {
                match serde_json::to_string_pretty(stats) {
                    Ok(json) => ui.ctx().copy_text(json),
                    Err(e) => log::error!("Failed to serialize statistics: {e}"),
                }
            }
        }
        None => {
            ui.label("Select numeric columns to see statistics.");
        }
    }
}

fn column_picker(ui: &mut Ui, id: &str, selected: &mut String, columns: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for col in columns {
                ui.selectable_value(selected, col.clone(), col.as_str());
            }
        });
}

fn statistics_grid(ui: &mut Ui, stats: &SummaryStatistics, decimals: usize) {
    egui::Grid::new("statistics_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("Max brightness");
            ui.strong(format!("{:.*}", decimals, stats.max));
            ui.end_row();

            ui.label("Min brightness");
            ui.strong(format!("{:.*}", decimals, stats.min));
            ui.end_row();

            ui.label("Mean brightness");
            ui.strong(format!("{:.*}", decimals, stats.mean));
            ui.end_row();

            ui.label("Data points");
            ui.strong(stats.count.to_string());
            ui.end_row();

            ui.label("Time of peak");
            ui.strong(stats.peak_time.to_string());
            ui.end_row();
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, the loaded-file summary and any error.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, &state.source_name) {
            ui.label(format!("{name}: {} rows, {} columns", ds.len(), ds.columns().len()));
        } else {
            ui.label("Open or drop a CSV file with time and brightness columns");
        }
    });

    if let Some(status) = &state.status {
        ui.label(RichText::new(format!("Error: {}", status.message)).color(Color32::RED));
        ui.label(RichText::new(status.guidance).italics());
    }
}

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Open light curve")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset, &name),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_load_error(&e);
            }
        }
    }
}

/// Load the first file dropped onto the window, if any.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut ViewerState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
    let Some(file) = dropped else {
        return;
    };

    if let Some(bytes) = &file.bytes {
        state.load_bytes(bytes, &file.name);
    } else if let Some(path) = &file.path {
        match load_file(path) {
            Ok(dataset) => {
                let name = path.display().to_string();
                state.set_dataset(dataset, &name);
            }
            Err(e) => {
                log::error!("Failed to load dropped file: {e:#}");
                state.set_load_error(&e);
            }
        }
    }
}
