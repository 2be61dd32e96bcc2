use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};
use light_curve_viewer::Dataset;

const ROW_HEIGHT: f32 = 18.0;

/// Render the first `rows` rows of the dataset, with a leading row index.
pub fn preview_table(ui: &mut Ui, dataset: &Dataset, rows: usize) {
    let head = dataset.head(rows);

    ui.push_id("preview_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto())
            .columns(Column::auto().at_least(60.0), dataset.columns().len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in dataset.columns() {
                    header.col(|ui| {
                        ui.strong(name.as_str());
                    });
                }
            })
            .body(|mut body| {
                for (idx, row) in head.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(idx.to_string());
                        });
                        for cell in row {
                            table_row.col(|ui| {
                                ui.label(cell.as_str());
                            });
                        }
                    });
                }
            });
    });

    if dataset.len() > head.len() {
        ui.weak(format!("… {} more rows", dataset.len() - head.len()));
    }
}
