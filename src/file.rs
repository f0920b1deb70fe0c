// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;
use crate::csv::write_records;
use crate::error::ExportError;
use crate::record::ParsedRecord;

/// Write the CSV artifact. Creates missing parent directories.
/// Returns the final path written to.
pub fn write_export(path: &Path, records: &[ParsedRecord]) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    write_records(BufWriter::new(file), records)?;
    Ok(path.to_path_buf())
}

/// Empty → default file name; trailing separator or existing dir → default file inside it.
pub fn resolve_out_path(user_o: &str) -> Result<PathBuf, ExportError> {
    if user_o.trim().is_empty() { return Ok(PathBuf::from(DEFAULT_FILE)); }
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(DEFAULT_FILE))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
