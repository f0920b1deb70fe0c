// src/gui/components/action_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = app.can_export();

    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        let green = egui::Color32::from_rgb(40, 160, 80);
        let download = egui::Button::new(
            egui::RichText::new("Download CSV").color(egui::Color32::WHITE).strong(),
        )
        .fill(green);
        if ui.add_enabled(enabled, download).clicked() {
            actions::export(app);
        }

        if let Some(ex) = app.slot.get() {
            ui.label(format!("{} record(s)", ex.len()));
        }
    });
}
