// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::dates::DateRange;
use super::consts::DEFAULT_FILE;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub range: DateRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            file_name: OsString::from(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &OsString {
        &self.file_name
    }

    /// Remember where the user last saved so the next dialog opens there.
    /// A path without a file name keeps the current one.
    pub fn set_path(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(name) = path.file_name() {
            self.file_name = name.to_os_string();
        }
    }
}
