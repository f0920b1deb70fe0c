// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_csv_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ex) = app.slot.exportable() else {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    };

    match to_csv_string(&ex.records) {
        Ok(txt) => {
            logf!("Copy: rows={}", ex.len());
            ui_ctx.copy_text(txt);
            app.status("Copied CSV to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
