// src/payer.rs
//
// Payer-info cell grammar:
//
//   ... Full Name: <first> [<middle-initial>] <last> Email: <email> ... Transaction ID: <id> ...
//
// Each field is matched on its own, so any of them may be missing.
// Absence policy:
// - name   : needs both `Full Name:` and a later `Email:`; blank name → no name fields
// - email  : first non-whitespace run after `Email:`
// - txn id : first non-whitespace run after `Transaction ID:`
// A run that is itself the next marker (or ends in `:`) means the value was blank.

use once_cell::sync::Lazy;
use regex::Regex;

static FULL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Full Name:\s*(?P<name>.*?)\s*Email:").expect("static regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Email:\s*(?P<email>\S+)").expect("static regex"));
static TRANSACTION_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Transaction ID:\s*(?P<txn>\S+)").expect("static regex"));

const MARKERS: &[&str] = &["Full Name:", "Email:", "Transaction ID:"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayerInfo {
    pub first_name: Option<String>,
    pub middle_initial: Option<char>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub transaction_id: Option<String>,
}

impl PayerInfo {
    pub fn parse(text: &str) -> Self {
        let name = FULL_NAME
            .captures(text)
            .and_then(|c| c.name("name"))
            .map(|m| m.as_str())
            .unwrap_or("");
        let (first_name, middle_initial, last_name) = split_name(name);

        Self {
            first_name,
            middle_initial,
            last_name,
            email: capture(&EMAIL, text, "email"),
            transaction_id: capture(&TRANSACTION_ID, text, "txn"),
        }
    }
}

fn capture(re: &Regex, text: &str, group: &str) -> Option<String> {
    let m = re.captures(text)?.name(group)?;
    let rest = &text[m.start()..];
    if m.as_str().ends_with(':') || MARKERS.iter().any(|k| rest.starts_with(k)) {
        return None;
    }
    Some(s!(m.as_str()))
}

/// Tie-break for the name parts:
/// - 0 parts → nothing
/// - 1 part  → first name only
/// - 2+      → first; then a lone letter is the middle initial and the rest is the
///             last name, otherwise everything after the first part is the last name
pub fn split_name(name: &str) -> (Option<String>, Option<char>, Option<String>) {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let Some((first, rest)) = parts.split_first() else {
        return (None, None, None);
    };

    let (middle, rest) = match rest.split_first() {
        Some((second, after)) => match single_letter(second) {
            Some(c) => (Some(c), after),
            None => (None, rest),
        },
        None => (None, rest),
    };

    let last = (!rest.is_empty()).then(|| rest.join(" "));
    (Some(s!(*first)), middle, last)
}

fn single_letter(part: &str) -> Option<char> {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}
