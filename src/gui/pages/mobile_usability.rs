// src/gui/pages/mobile_usability.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

use super::{Page, draw_roadmap};

pub struct MobileUsabilityPage;
pub static PAGE: MobileUsabilityPage = MobileUsabilityPage;

impl Page for MobileUsabilityPage {
    fn title(&self) -> &'static str { "Mobile Usability" }
    fn kind(&self) -> PageKind { PageKind::MobileUsability }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        draw_roadmap(
            ui,
            "Future versions may include mobile usability checks like:",
            &["Viewport configuration", "Tap target sizing", "Font sizing"],
        );
    }
}
