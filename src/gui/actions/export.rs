// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// "Download CSV": ask where, then write the last good result there.
pub fn export(app: &mut App) {
    let status_msg = {
        let Some(ex) = app.slot.exportable() else {
            logd!("Export: Clicked, but there's nothing to export");
            return app.status("Nothing to export");
        };

        let export = &app.state.options.export;
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save CSV")
            .add_filter("CSV", &["csv"])
            .set_file_name(export.file_name().to_string_lossy());
        if !export.dir().as_os_str().is_empty() {
            dialog = dialog.set_directory(export.dir());
        }

        let Some(path) = dialog.save_file() else {
            logd!("Export: Save dialog cancelled");
            return app.status("Download cancelled");
        };

        logf!("Export: Begin rows={} path={}", ex.len(), path.display());
        match file::write_export(&path, &ex.records) {
            Ok(p) => {
                logf!("Export: OK path={}", p.display());
                Ok((p, format!("Saved {} row(s) to {}", ex.len(), path.display())))
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                Err(format!("Export error: {e}"))
            }
        }
    };

    // mutate app only after the slot borrow is gone
    match status_msg {
        Ok((path, msg)) => {
            app.state.options.export.set_path(&path);
            app.status(msg);
        }
        Err(msg) => app.status(msg),
    }
}
