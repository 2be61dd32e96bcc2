use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use light_curve_viewer::{TimeAxis, ViewerConfig, ViewerState};

// ---------------------------------------------------------------------------
// Light curve plot (central panel)
// ---------------------------------------------------------------------------

/// Render the light curve in the central panel.
pub fn light_curve_plot(ui: &mut Ui, state: &ViewerState, config: &ViewerConfig) {
    let series = match &state.series {
        Some(s) => s,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                let hint = if state.dataset.is_some() {
                    "Pick a numeric brightness column to draw the light curve"
                } else {
                    "Open a CSV file to view its light curve  (File → Open…)"
                };
                ui.heading(hint);
            });
            return;
        }
    };

    ui.heading(series.title.as_str());

    let [r, g, b] = config.line_color;
    let points: PlotPoints = series.points().into_iter().collect();
    let line = Line::new(points)
        .name(series.y_label.as_str())
        .color(Color32::from_rgb(r, g, b))
        .width(config.line_width);

    let mut plot = Plot::new("light_curve_plot")
        .x_axis_label(series.x_label.as_str())
        .y_axis_label(series.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Text time values: x is the row position, ticks show the original label.
    if let TimeAxis::Categorical(_) = &series.axis {
        let ticks = series.clone();
        plot = plot.x_axis_formatter(move |mark, _range| {
            ticks.tick_label(mark.value).unwrap_or_default().to_string()
        });
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(line);
    });
}
