// src/cli.rs
//
// Headless front end: same extraction as the window, file/stdin in, file/stdout out.
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{dates::{parse_input_date, DateRange}, extract, file};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Convert a pasted HTML donation table to a cleaned CSV")]
pub struct Args {
    /// HTML file to read (stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Keep rows submitted on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Keep rows submitted on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,

    /// Output CSV path (stdout when omitted). A directory gets output.csv inside it.
    #[arg(short, long)]
    pub out: Option<String>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_input_date(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_to(args, stdout.lock())
}

/// `run` with the CSV going to `stdout` when no `--out` is given.
pub fn run_to<W: Write>(args: Args, mut stdout: W) -> Result<()> {
    let html = read_input(args.input.as_ref())?;
    let range = DateRange::new(args.start, args.end);
    logd!("CLI: input_len={} range={:?}", html.len(), range);

    let ex = extract::extract(&html, &range)
        .wrap_err("Unable to parse HTML. Make sure it contains a valid <table>.")?;

    for notice in ex.report.notices() {
        eprintln!("{notice}");
    }

    match args.out.as_deref() {
        Some(o) => {
            let path = file::resolve_out_path(o)?;
            let written = file::write_export(&path, &ex.records)?;
            logf!("Export: OK rows={} path={}", ex.len(), written.display());
            eprintln!("Wrote {} row(s) to {}", ex.len(), written.display());
        }
        None => {
            crate::csv::write_records(&mut stdout, &ex.records)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p)
            .wrap_err_with(|| format!("reading {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).wrap_err("reading stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_bounds() {
        let a = Args::try_parse_from(["cli", "in.html", "--start", "2024-01-01", "--end", "2024-12-31"]).unwrap();
        assert_eq!(a.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(a.end, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(a.input, Some(PathBuf::from("in.html")));
        assert!(a.out.is_none());
    }

    #[test]
    fn rejects_other_date_formats() {
        assert!(Args::try_parse_from(["cli", "--start", "01/01/2024"]).is_err());
    }

    const PASTE: &str = "<table>\
        <tr><th>Submission Date</th><th>Donation Amount: Payer Info</th><th>Total Donation Amount</th></tr>\
        <tr><td>2024-03-01 09:00:00</td><td>Full Name: Bo Z Lee Email: bo@x.com Transaction ID: T1</td><td>$5</td></tr>\
        <tr><td>2024-04-01 09:00:00</td><td>Full Name: Cy Ray Email: cy@x.com Transaction ID: T2</td><td>$7</td></tr>\
        <tr><td>2024-04-02 09:00:00</td><td>-</td><td>$0</td></tr>\
        </table>";

    fn tmp_dir(name: &str) -> PathBuf {
        let p = std::env::temp_dir().join(format!("kroenke_cli_{name}"));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    fn args_for(input: PathBuf, out: Option<String>) -> Args {
        Args { input: Some(input), start: None, end: None, out }
    }

    #[test]
    fn file_in_dir_out_writes_default_name() {
        let dir = tmp_dir("dir_out");
        let input = dir.join("paste.html");
        fs::write(&input, PASTE).unwrap();
        let out_dir = dir.join("exports");

        let mut args = args_for(input, Some(format!("{}/", out_dir.display())));
        args.start = NaiveDate::from_ymd_opt(2024, 4, 1);
        run_to(args, io::sink()).unwrap();

        let csv = fs::read_to_string(out_dir.join("output.csv")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Date,First Name,Middle Initial,Last Name,Email,Transaction ID,Total Donation Amount"
        );
        assert_eq!(lines[1], "04/01/2024,Cy,,Ray,cy@x.com,T2,$7");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn no_out_writes_csv_to_stdout() {
        let dir = tmp_dir("stdout");
        let input = dir.join("paste.html");
        fs::write(&input, PASTE).unwrap();

        let mut buf = Vec::new();
        run_to(args_for(input, None), &mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "03/01/2024,Bo,Z,Lee,bo@x.com,T1,$5");
        assert!(!dir.join("output.csv").exists());
    }

    #[test]
    fn paste_without_table_fails_with_message() {
        let dir = tmp_dir("no_table");
        let input = dir.join("paste.html");
        fs::write(&input, "<p>Nothing tabular here</p>").unwrap();

        let mut buf = Vec::new();
        let err = run_to(args_for(input, None), &mut buf).unwrap_err();
        assert!(err.to_string().contains("Unable to parse HTML"));
        assert!(buf.is_empty());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tmp_dir("missing");
        let err = run_to(args_for(dir.join("absent.html"), None), io::sink()).unwrap_err();
        assert!(err.to_string().contains("absent.html"));
    }
}
