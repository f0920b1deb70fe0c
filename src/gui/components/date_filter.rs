// src/gui/components/date_filter.rs
//
// Optional inclusive From / To bounds. A bound only applies while its box is ticked.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        ui.label("Filter by submission date:");

        ui.checkbox(&mut gui.use_start, "From");
        ui.add_enabled(
            gui.use_start,
            DatePickerButton::new(&mut gui.start_pick).id_salt("start_date"),
        );

        ui.add_space(12.0);

        ui.checkbox(&mut gui.use_end, "To");
        ui.add_enabled(
            gui.use_end,
            DatePickerButton::new(&mut gui.end_pick).id_salt("end_date"),
        );
    });

    if app.state.sync_range_from_gui() {
        logf!("UI: Date range → {:?}", app.state.options.extract.range);
        if !app.state.gui.html_input.trim().is_empty() {
            actions::run_extract(app);
        }
    }
}
