// src/config/consts.rs

// Source columns
pub const COL_SUBMISSION_DATE: &str = "Submission Date";
pub const COL_PAYER_INFO: &str = "Donation Amount: Payer Info";
pub const COL_TOTAL_AMOUNT: &str = "Total Donation Amount";

// Payer-info cell with no donation behind it
pub const PLACEHOLDER: &str = "-";

// Dates
pub const SUBMISSION_DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const OUTPUT_DATE_FMT: &str = "%m/%d/%Y";
pub const INPUT_DATE_FMT: &str = "%Y-%m-%d"; // CLI --start/--end

// Export
pub const DEFAULT_FILE: &str = "output.csv";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Window
pub const APP_TITLE: &str = "Kroenke HTML Table to CSV Converter";
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 760.0;
