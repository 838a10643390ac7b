// src/gui/pages/enhancements.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

use super::{Page, draw_roadmap};

pub struct EnhancementsPage;
pub static PAGE: EnhancementsPage = EnhancementsPage;

impl Page for EnhancementsPage {
    fn title(&self) -> &'static str { "Enhancements" }
    fn kind(&self) -> PageKind { PageKind::Enhancements }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        draw_roadmap(
            ui,
            "Future versions may include enhancements analysis like:",
            &["Schema markup detection", "Breadcrumbs check", "AMP validation"],
        );
    }
}
