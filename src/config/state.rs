// src/config/state.rs
use chrono::{Local, NaiveDate};

use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Pasted HTML, verbatim
    pub html_input: String,

    /// Date picker values. Only applied when the matching toggle is on.
    pub use_start: bool,
    pub start_pick: NaiveDate,
    pub use_end: bool,
    pub end_pick: NaiveDate,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            html_input: s!(),
            use_start: false,
            start_pick: today,
            use_end: false,
            end_pick: today,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

impl GuiState {
    pub fn start_bound(&self) -> Option<NaiveDate> {
        self.use_start.then_some(self.start_pick)
    }

    pub fn end_bound(&self) -> Option<NaiveDate> {
        self.use_end.then_some(self.end_pick)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Mirror the date pickers into `options.extract`.
    /// Returns true when the effective range changed.
    pub fn sync_range_from_gui(&mut self) -> bool {
        let range = crate::dates::DateRange::new(self.gui.start_bound(), self.gui.end_bound());
        if range == self.options.extract.range {
            return false;
        }
        self.options.extract.range = range;
        true
    }
}
