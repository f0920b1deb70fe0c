// src/dates.rs
use chrono::{NaiveDate, NaiveDateTime};

use crate::config::consts::{INPUT_DATE_FMT, OUTPUT_DATE_FMT, SUBMISSION_DATE_FMT};

/// `"YYYY-MM-DD HH:MM:SS"` → calendar date. Anything else is absent, never an error.
pub fn parse_submission_date(s: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(s.trim(), SUBMISSION_DATE_FMT)
        .ok()
        .map(|dt| dt.date())
}

/// `MM/DD/YYYY`
pub fn format_output_date(d: NaiveDate) -> String {
    d.format(OUTPUT_DATE_FMT).to_string()
}

/// `YYYY-MM-DD`, as typed on the command line.
pub fn parse_input_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FMT)
}

/// Optional inclusive bounds on the derived date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `start > end`. Such a range admits nothing.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }

    /// Undated rows pass only when no bound is set.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(d) = date else { return false };
        self.start.is_none_or(|s| d >= s) && self.end.is_none_or(|e| d <= e)
    }
}
