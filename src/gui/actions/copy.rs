// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(txt) = app.view.report.clone() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no result yet");
        return;
    };

    logf!("Copy: report ({} bytes)", txt.len());
    ui_ctx.copy_text(txt);
    app.status("Copied report to clipboard");
}
