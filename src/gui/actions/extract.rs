// src/gui/actions/extract.rs
use crate::{extract::extract, gui::app::App};

/// Re-run the pipeline over the current paste + date range.
/// Success replaces the result slot; failure keeps it but blocks export.
pub fn run_extract(app: &mut App) {
    let html = &app.state.gui.html_input;

    if html.trim().is_empty() {
        app.slot.clear();
        app.notices.clear();
        app.error = None;
        app.rebuild_view();
        app.status("Paste a table to begin");
        return;
    }

    let range = app.state.options.extract.range;
    match extract(html, &range) {
        Ok(ex) => {
            logf!("Extract: OK records={} range={:?}", ex.len(), range);
            app.notices = ex.report.notices();
            app.error = None;
            let msg = format!("Table successfully extracted! {} record(s)", ex.len());
            app.slot.replace(ex);
            app.rebuild_view();
            app.status(msg);
        }
        Err(e) => {
            loge!("Extract: Error: {}", e);
            app.slot.mark_failed();
            app.notices.clear();
            app.error = Some(e.to_string());
            app.status("Unable to parse HTML");
        }
    }
}
