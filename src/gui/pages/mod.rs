// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

pub mod coverage;
pub mod enhancements;
pub mod mobile_usability;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the tab body. Button handlers go through `gui::actions`.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Centered "not yet" blurb for tabs that have no checks behind them.
pub(super) fn draw_roadmap(ui: &mut egui::Ui, lead: &str, items: &[&str]) {
    ui.vertical_centered(|ui| {
        ui.add_space(50.0);
        ui.label("This tool currently focuses on indexing status.");
        ui.add_space(12.0);
        ui.label(lead);
        for item in items {
            ui.label(join!("- ", item));
        }
    });
}
