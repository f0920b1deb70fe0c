// src/data.rs
//
// The one piece of state that outlives an interaction: the most recent
// successful extraction, kept for Copy / Download.
//
// - `replace` is the only way in, and only takes a success.
// - A failed attempt leaves the slot alone but marks it stale, so front ends
//   can refuse to export data that no longer matches what's on screen.

use crate::extract::Extraction;

#[derive(Clone, Debug, Default)]
pub struct ResultSlot {
    last: Option<Extraction>,
    stale: bool,
}

impl ResultSlot {
    pub fn new() -> Self { Self::default() }

    /// Overwrite with a fresh success.
    pub fn replace(&mut self, ex: Extraction) {
        self.last = Some(ex);
        self.stale = false;
    }

    /// Latest attempt failed; keep the old value, but stop offering it.
    pub fn mark_failed(&mut self) {
        self.stale = true;
    }

    pub fn clear(&mut self) {
        self.last = None;
        self.stale = false;
    }

    /// Current value, stale or not (preview keeps showing it).
    pub fn get(&self) -> Option<&Extraction> { self.last.as_ref() }

    /// Value eligible for export: present and from the latest attempt.
    pub fn exportable(&self) -> Option<&Extraction> {
        if self.stale { None } else { self.last.as_ref() }
    }

    pub fn is_stale(&self) -> bool { self.stale }
}
