// tests/export_e2e.rs
use std::fs;
use std::path::{Path, PathBuf};

use kroenke_csv::config::options::ExportOptions;
use kroenke_csv::csv::to_csv_string;
use kroenke_csv::{extract, file, DateRange};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("kroenke_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const PASTE: &str = "<table>\
    <tr><th>Total Donation Amount</th><th>Submission Date</th><th>Donation Amount: Payer Info</th></tr>\
    <tr><td>$5</td><td>2024-03-01 09:00:00</td><td>Full Name: Bo Z Lee Email: bo@x.com Transaction ID: T1</td></tr>\
    <tr><td>$0</td><td>2024-03-02 09:00:00</td><td>-</td></tr>\
    <tr><td>$7</td><td>2024-03-03 09:00:00</td><td>Full Name: Al Email: al@x.com</td></tr>\
    </table>";

#[test]
fn csv_header_and_rows_in_input_order() {
    let ex = extract(PASTE, &DateRange::default()).unwrap();
    let s = to_csv_string(&ex.records).unwrap();
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,First Name,Middle Initial,Last Name,Email,Transaction ID,Total Donation Amount",
            "03/01/2024,Bo,Z,Lee,bo@x.com,T1,$5",
            "03/03/2024,Al,,,al@x.com,,$7",
        ]
    );
}

#[test]
fn write_export_creates_parent_dirs() {
    let dir = tmp_dir("nested");
    let path = dir.join("a").join("b").join("output.csv");

    let ex = extract(PASTE, &DateRange::default()).unwrap();
    let written = file::write_export(&path, &ex.records).unwrap();
    assert_eq!(written, path);

    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("Date,First Name,"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn resolve_out_path_defaults_and_dir_hints() {
    assert_eq!(file::resolve_out_path("").unwrap(), PathBuf::from("output.csv"));

    let dir = tmp_dir("resolve");
    let hinted = format!("{}/", dir.display());
    assert_eq!(file::resolve_out_path(&hinted).unwrap(), dir.join("output.csv"));

    let explicit = dir.join("mine.csv");
    assert_eq!(file::resolve_out_path(explicit.to_str().unwrap()).unwrap(), explicit);
}

#[test]
fn export_into_a_file_posing_as_dir_fails() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let err = file::write_export(&blocker.join("output.csv"), &[]).unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn export_options_remember_last_path() {
    let mut opts = ExportOptions::default();
    assert_eq!(opts.dir(), Path::new(""));
    assert_eq!(opts.file_name(), "output.csv");

    let dir = tmp_dir("remember");
    opts.set_path(&dir.join("donations.csv"));
    assert_eq!(opts.dir(), dir.as_path());
    assert_eq!(opts.file_name(), "donations.csv");
}
