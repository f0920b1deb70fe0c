// src/gui/components/data_table.rs
//
// Read-only preview of the current records. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

// Date, First, MI, Last, Email, Txn, Total
const WIDTHS: [f32; 7] = [80.0, 110.0, 40.0, 130.0, 200.0, 140.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.strong("Preview");

    if app.rows.is_empty() {
        ui.weak("No rows to show.");
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("preview");
    for (i, _) in app.headers.iter().enumerate() {
        let w = WIDTHS.get(i).copied().unwrap_or(100.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &app.headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let Some(data) = app.rows.get(row.index()) else { return };
                for cell in data {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(RichText::new(cell));
                    });
                }
            });
        });
}
