// src/record.rs
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::dates::format_output_date;
use crate::payer::PayerInfo;

/// Output column order; also the CSV header.
pub const HEADERS: [&str; 7] = [
    "Date",
    "First Name",
    "Middle Initial",
    "Last Name",
    "Email",
    "Transaction ID",
    "Total Donation Amount",
];

/// One surviving input row, cleaned. Absent values export as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    #[serde(rename = "Date", serialize_with = "ser_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "First Name")]
    pub first_name: Option<String>,
    #[serde(rename = "Middle Initial")]
    pub middle_initial: Option<char>,
    #[serde(rename = "Last Name")]
    pub last_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Transaction ID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "Total Donation Amount")]
    pub total_donation_amount: Option<String>,
}

fn ser_date<S: Serializer>(date: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => ser.serialize_str(&format_output_date(*d)),
        None => ser.serialize_none(),
    }
}

impl ParsedRecord {
    pub fn new(date: Option<NaiveDate>, payer: PayerInfo, total: Option<String>) -> Self {
        Self {
            date,
            first_name: payer.first_name,
            middle_initial: payer.middle_initial,
            last_name: payer.last_name,
            email: payer.email,
            transaction_id: payer.transaction_id,
            total_donation_amount: total,
        }
    }

    /// Display cells in `HEADERS` order; absent → "".
    pub fn to_row(&self) -> Vec<String> {
        fn opt(v: &Option<String>) -> String { v.clone().unwrap_or_default() }
        vec![
            self.date.map(format_output_date).unwrap_or_default(),
            opt(&self.first_name),
            self.middle_initial.map(String::from).unwrap_or_default(),
            opt(&self.last_name),
            opt(&self.email),
            opt(&self.transaction_id),
            opt(&self.total_donation_amount),
        ]
    }
}

pub fn headers_owned() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}
