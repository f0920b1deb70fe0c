// src/gui/components/input_panel.rs
//
// The paste box. Any edit re-runs the extraction.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Paste HTML here:");

    let changed = egui::ScrollArea::vertical()
        .id_salt("html_input")
        .max_height(220.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.state.gui.html_input)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("<table>...</table>")
                    .desired_rows(12)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        })
        .inner;

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() && !app.state.gui.html_input.is_empty() {
            app.state.gui.html_input.clear();
            logf!("UI: Input cleared");
            actions::run_extract(app);
        }
        ui.weak(format!("{} characters", app.state.gui.html_input.chars().count()));
    });

    if changed {
        logd!("UI: Input changed (len={})", app.state.gui.html_input.len());
        actions::run_extract(app);
    }
}
