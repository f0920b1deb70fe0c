// src/csv.rs
use std::io::Write;

use ::csv::WriterBuilder;

use crate::error::ExportError;
use crate::record::ParsedRecord;

/* ---------------- Writing ---------------- */

/// Header row + one row per record, in the order given. No index column.
pub fn write_records<W: Write>(w: W, records: &[ParsedRecord]) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(w);

    if records.is_empty() {
        // serde only emits the header alongside the first record
        wtr.write_record(crate::record::HEADERS)?;
    }
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full CSV text (Copy / Download payload).
pub fn to_csv_string(records: &[ParsedRecord]) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
