// src/gui/components/header.rs
use eframe::egui::{self, Color32, RichText};

pub fn draw(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🔍").size(26.0));
        ui.add_space(6.0);
        ui.vertical(|ui| {
            ui.label(RichText::new("URL Inspection Tool").size(20.0).strong());
            ui.label(
                RichText::new("Check Google indexing status and troubleshoot issues")
                    .color(Color32::from_rgb(0x1a, 0x73, 0xe8)),
            );
        });
    });
}
