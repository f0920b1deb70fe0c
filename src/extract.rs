// src/extract.rs
//
// The record extractor: pasted HTML → cleaned donation records.
//
//   1. first <table> only (others are counted, not read)
//   2. derive a date from "Submission Date" (fixed format, absent on failure)
//   3. drop rows outside the inclusive date range; undated rows go whenever a bound is set
//   4. drop rows whose payer-info cell is the "-" placeholder
//   5. split payer info into name / email / transaction id
//   6-7. one ParsedRecord per survivor, input order kept
//
// Only step 1 can fail. Everything else degrades to absent fields.

use std::fmt;

use crate::{
    config::consts::{COL_PAYER_INFO, COL_SUBMISSION_DATE, COL_TOTAL_AMOUNT, PLACEHOLDER},
    core::{html, sanitize::is_placeholder},
    dates::{parse_submission_date, DateRange},
    error::ParseError,
    payer::PayerInfo,
    record::ParsedRecord,
};

/// What happened to the input, for the status area and logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub tables_found: usize,
    pub rows_in: usize,
    /// Rows dropped by the date range, undated ones included.
    pub removed_by_date: usize,
    /// Of `removed_by_date`, rows whose submission date was missing or unparseable.
    pub undated_excluded: usize,
    pub removed_placeholder: usize,
    pub missing_columns: Vec<&'static str>,
    pub range: DateRange,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ParsedRecord>,
    pub report: ExtractionReport,
}

impl Extraction {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level { Info, Warn }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    fn info(text: String) -> Self { Self { level: Level::Info, text } }
    fn warn(text: String) -> Self { Self { level: Level::Warn, text } }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Info => write!(f, "{}", self.text),
            Level::Warn => write!(f, "Warning: {}", self.text),
        }
    }
}

impl ExtractionReport {
    /// Human-facing messages, most important first.
    pub fn notices(&self) -> Vec<Notice> {
        let mut out = Vec::new();

        for col in &self.missing_columns {
            let effect = match *col {
                COL_PAYER_INFO => "No rows removed.",
                COL_SUBMISSION_DATE if !self.range.is_unbounded() => "Every row is excluded by the date filter.",
                _ => "Its output column is left blank.",
            };
            out.push(Notice::warn(format!("Column '{col}' not found. {effect}")));
        }
        if self.range.is_inverted() {
            out.push(Notice::warn(s!("Start date is after end date; no rows can match.")));
        }
        if self.undated_excluded > 0 {
            out.push(Notice::warn(format!(
                "Excluded {} row(s) with a missing or unreadable '{}' because a date filter is set.",
                self.undated_excluded, COL_SUBMISSION_DATE
            )));
        }
        let dated_out = self.removed_by_date - self.undated_excluded;
        if dated_out > 0 {
            out.push(Notice::info(format!("Removed {dated_out} row(s) outside the selected dates.")));
        }
        if self.removed_placeholder > 0 {
            out.push(Notice::info(format!(
                "Removed {} row(s) where '{}' was '{}'.",
                self.removed_placeholder, COL_PAYER_INFO, PLACEHOLDER
            )));
        }
        if self.tables_found > 1 {
            out.push(Notice::info(format!(
                "{} tables found. Only the first table was used.",
                self.tables_found
            )));
        }
        out
    }
}

/// Run the whole pipeline over one paste. Pure apart from logging.
pub fn extract(html_text: &str, range: &DateRange) -> Result<Extraction, ParseError> {
    let (table, tables_found) = html::read_first_table(html_text)?;

    let date_col = table.column(COL_SUBMISSION_DATE);
    let payer_col = table.column(COL_PAYER_INFO);
    let total_col = table.column(COL_TOTAL_AMOUNT);

    let mut report = ExtractionReport {
        tables_found,
        rows_in: table.row_count(),
        range: *range,
        ..Default::default()
    };
    for (label, col) in [
        (COL_SUBMISSION_DATE, date_col),
        (COL_PAYER_INFO, payer_col),
        (COL_TOTAL_AMOUNT, total_col),
    ] {
        if col.is_none() {
            logw!("Extract: Column '{}' not found", label);
            report.missing_columns.push(label);
        }
    }

    let mut records = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let date = table.cell(row, date_col).and_then(parse_submission_date);

        if !range.admits(date) {
            report.removed_by_date += 1;
            if date.is_none() { report.undated_excluded += 1; }
            continue;
        }

        let payer_text = table.cell(row, payer_col);
        if payer_text.is_some_and(is_placeholder) {
            report.removed_placeholder += 1;
            continue;
        }

        let payer = payer_text.map(PayerInfo::parse).unwrap_or_default();
        let total = table.cell(row, total_col).map(String::from);
        records.push(ParsedRecord::new(date, payer, total));
    }

    logf!(
        "Extract: tables={} rows_in={} kept={} by_date={} undated={} placeholder={}",
        report.tables_found,
        report.rows_in,
        records.len(),
        report.removed_by_date,
        report.undated_excluded,
        report.removed_placeholder
    );

    Ok(Extraction { records, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table(rows: &[(&str, &str, &str)]) -> String {
        let mut html = s!(
            "<table><thead><tr><th>Submission Date</th><th>Donation Amount: Payer Info</th>\
             <th>Total Donation Amount</th></tr></thead><tbody>"
        );
        for (d, p, t) in rows {
            html.push_str(&format!("<tr><td>{d}</td><td>{p}</td><td>{t}</td></tr>"));
        }
        html.push_str("</tbody></table>");
        html
    }

    #[test]
    fn placeholder_rows_are_dropped_and_counted() {
        let html = table(&[
            ("2024-01-02 10:00:00", "Full Name: Jane Doe Email: j@x.com", "$5"),
            ("2024-01-03 10:00:00", " - ", "$0"),
            ("2024-01-04 10:00:00", "-", "$0"),
        ]);
        let out = extract(&html, &DateRange::default()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.report.removed_placeholder, 2);
        assert_eq!(out.records[0].total_donation_amount.as_deref(), Some("$5"));
    }

    #[test]
    fn start_date_boundary() {
        let html = table(&[
            ("2023-12-31 23:59:59", "Full Name: A Email: a@x", "1"),
            ("2024-01-01 00:00:00", "Full Name: B Email: b@x", "2"),
        ]);
        let range = DateRange::new(Some(ymd(2024, 1, 1)), None);
        let out = extract(&html, &range).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].first_name.as_deref(), Some("B"));
        assert_eq!(out.report.removed_by_date, 1);
        assert_eq!(out.report.undated_excluded, 0);
    }

    #[test]
    fn undated_rows_kept_unless_bounded() {
        let html = table(&[
            ("yesterday", "Full Name: A Email: a@x", "1"),
            ("2024-06-01 12:00:00", "Full Name: B Email: b@x", "2"),
        ]);

        let all = extract(&html, &DateRange::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.records[0].date, None);

        let bounded = extract(&html, &DateRange::new(None, Some(ymd(2030, 1, 1)))).unwrap();
        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded.report.undated_excluded, 1);
        assert!(bounded.report.notices().iter().any(|n| n.level == Level::Warn));
    }

    #[test]
    fn date_filter_runs_before_placeholder_filter() {
        let html = table(&[("2020-01-01 00:00:00", "-", "0")]);
        let out = extract(&html, &DateRange::new(Some(ymd(2024, 1, 1)), None)).unwrap();
        assert_eq!(out.report.removed_by_date, 1);
        assert_eq!(out.report.removed_placeholder, 0);
    }

    #[test]
    fn missing_payer_column_keeps_rows() {
        let html = "<table><tr><th>Submission Date</th><th>Total Donation Amount</th></tr>\
                    <tr><td>2024-01-01 00:00:00</td><td>-</td></tr></table>";
        let out = extract(html, &DateRange::default()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.report.missing_columns, vec![COL_PAYER_INFO]);
        assert_eq!(out.records[0].first_name, None);
        // amount is passed through even when it looks like the placeholder
        assert_eq!(out.records[0].total_donation_amount.as_deref(), Some("-"));
        let notices = out.report.notices();
        assert!(notices[0].text.contains("No rows removed"));
    }

    #[test]
    fn missing_date_column_with_bound_excludes_everything() {
        let html = "<table><tr><th>Donation Amount: Payer Info</th></tr>\
                    <tr><td>Full Name: A Email: a@x</td></tr></table>";
        let out = extract(html, &DateRange::new(Some(ymd(2024, 1, 1)), None)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.report.undated_excluded, 1);
    }

    #[test]
    fn multiple_tables_reported() {
        let mut html = table(&[("2024-01-01 00:00:00", "Full Name: A Email: a@x", "1")]);
        html.push_str("<table><tr><td>other</td></tr></table>");
        let out = extract(&html, &DateRange::default()).unwrap();
        assert_eq!(out.report.tables_found, 2);
        assert!(out.report.notices().iter().any(|n| n.text.starts_with("2 tables found")));
    }

    #[test]
    fn no_table_is_parse_error() {
        let err = extract("<div>nothing</div>", &DateRange::default()).unwrap_err();
        assert_eq!(err, ParseError::NoTable);
    }

    #[test]
    fn idempotent() {
        let html = table(&[
            ("2024-01-02 10:00:00", "Full Name: Jane A Doe Email: j@x.com Transaction ID: T9", "$5"),
            ("bad", "Full Name: Bo Email: b@x", "$6"),
        ]);
        let range = DateRange::default();
        assert_eq!(extract(&html, &range).unwrap(), extract(&html, &range).unwrap());
    }
}
