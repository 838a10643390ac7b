// src/gui/components/status_bar.rs
use std::time::Duration;

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(app.status.as_str());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("inspector: {}", app.runner.inspector_name()));
            if let Some((url, elapsed)) = app.runner.in_flight() {
                ui.weak(format!("{} · {:.1} s", url.host(), elapsed.as_secs_f32()))
                    .on_hover_text(url.as_str());
                ui.ctx().request_repaint_after(Duration::from_millis(100));
            }
        });
    });
}
