// src/gui/components/notices.rs
use eframe::egui;

use crate::extract::Level;
use crate::gui::app::App;

const RED: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x61, 0x49);
const YELLOW: egui::Color32 = egui::Color32::from_rgb(0xF0, 0xD2, 0x3C);
const BLUE: egui::Color32 = egui::Color32::from_rgb(0x64, 0xB4, 0xFF);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if let Some(err) = &app.error {
        ui.colored_label(RED, "Unable to parse HTML. Make sure it contains a valid <table>.");
        ui.code(err);
        if app.slot.is_stale() {
            ui.weak("The table below is from the previous paste and can't be downloaded.");
        }
        return;
    }

    for n in &app.notices {
        match n.level {
            Level::Warn => ui.colored_label(YELLOW, n.to_string()),
            Level::Info => ui.colored_label(BLUE, n.to_string()),
        };
    }
}
