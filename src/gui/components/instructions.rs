// src/gui/components/instructions.rs
use eframe::egui;

const STEPS: &[&str] = &[
    "Open the Jotform table. Right click → Inspect.",
    "Locate the data table by expanding the <body> (click the … between body tags).",
    "Click the … on the left side of the table with id \"data-table\" → Copy → Copy Element.",
    "Paste the HTML table below.",
    "The table is extracted, cleaned and offered as a downloadable CSV.",
];

pub fn draw(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("How to copy the table")
        .default_open(true)
        .show(ui, |ui| {
            for (i, step) in STEPS.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, step));
            }
        });
}
