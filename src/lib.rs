// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod data;
pub mod dates;
pub mod extract;
pub mod file;
pub mod payer;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use data::ResultSlot;
pub use dates::DateRange;
pub use error::{ExportError, ParseError};
pub use extract::{extract, Extraction, ExtractionReport};
pub use record::ParsedRecord;
