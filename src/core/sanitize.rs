// src/core/sanitize.rs
use crate::config::consts::PLACEHOLDER;

/// Collapse runs of whitespace (incl. NBSP) to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Payer-info cell that stands for "no donation on this row".
pub fn is_placeholder(cell: &str) -> bool {
    cell.trim() == PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws("a\u{a0}\u{a0}b"), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn placeholder_ignores_surrounding_ws() {
        assert!(is_placeholder("-"));
        assert!(is_placeholder(" - "));
        assert!(is_placeholder("- "));
        assert!(is_placeholder("\n-\t"));
        assert!(!is_placeholder("--"));
        assert!(!is_placeholder("- x"));
        assert!(!is_placeholder(""));
    }
}
