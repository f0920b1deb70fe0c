// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    data::ResultSlot,
    extract::Notice,
    record,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful extraction, kept for Copy / Download
    pub slot: ResultSlot,

    // preview of the slot, in record::HEADERS order
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    // what the last attempt had to say
    pub status: String,
    pub notices: Vec<Notice>,
    pub error: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);
        Self {
            state,
            slot: ResultSlot::new(),
            headers: record::headers_owned(),
            rows: Vec::new(),
            status: s!("Paste a table to begin"),
            notices: Vec::new(),
            error: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Rebuild the preview from whatever the slot holds.
    pub fn rebuild_view(&mut self) {
        self.rows = self
            .slot
            .get()
            .map(|ex| ex.records.iter().map(|r| r.to_row()).collect())
            .unwrap_or_default();
    }

    /// Copy / Download are only offered for a fresh, successful result.
    pub fn can_export(&self) -> bool {
        self.slot.exportable().is_some()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            components::instructions::draw(ui);

            ui.separator();

            components::input_panel::draw(ui, self);
            components::date_filter::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);
            components::notices::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
