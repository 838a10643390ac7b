// src/gui/pages/coverage.rs
//
// The main tab: indexing status, crawl/availability details, troubleshooting.

use eframe::egui::{
    self, Color32, FontId, RichText,
    text::{LayoutJob, TextFormat},
};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::options::PageKind,
    gui::{
        actions,
        app::App,
        view_model::{CoverageView, Segment, TextRole, severity_color},
    },
};

use super::Page;

pub struct CoveragePage;
pub static PAGE: CoveragePage = CoveragePage;

impl Page for CoveragePage {
    fn title(&self) -> &'static str { "Coverage" }
    fn kind(&self) -> PageKind { PageKind::Coverage }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::ScrollArea::vertical()
            .id_salt("coverage_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                section(ui, "Indexing status", |ui| {
                    let mut txt = RichText::new(&app.view.indexing_status).size(16.0);
                    if let Some(sev) = app.view.severity {
                        txt = txt.color(severity_color(sev));
                    }
                    ui.label(txt);
                });

                section(ui, "Details", |ui| details_table(ui, &app.view));

                section(ui, "Troubleshooting", |ui| {
                    troubleshooting(ui, &app.view.troubleshooting);
                });

                ui.horizontal(|ui| {
                    if ui.button("Open in Google Search Console").clicked() {
                        actions::open_in_gsc(app);
                    }
                    let can_copy = app.view.report.is_some();
                    if ui
                        .add_enabled(can_copy, egui::Button::new("Copy report"))
                        .on_hover_text("Copy the results as plain text")
                        .clicked()
                    {
                        actions::copy(app, ui.ctx());
                    }
                });
            });
    }
}

fn section(ui: &mut egui::Ui, title: &str, add: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.strong(title);
        ui.add_space(4.0);
        add(ui);
    });
    ui.add_space(10.0);
}

fn details_table(ui: &mut egui::Ui, view: &CoverageView) {
    let rows = view.details();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::exact(150.0))
        .column(Column::exact(150.0))
        .column(Column::remainder())
        .body(|mut body| {
            for row in &rows {
                body.row(20.0, |mut r| {
                    r.col(|ui| { ui.label(RichText::new(row.section).weak()); });
                    r.col(|ui| { ui.label(row.field); });
                    r.col(|ui| { ui.label(row.value.as_str()); });
                });
            }
        });
}

fn troubleshooting(ui: &mut egui::Ui, segments: &[Segment]) {
    let text = ui.visuals().text_color();
    let strong = ui.visuals().strong_text_color();

    let mut job = LayoutJob::default();
    for seg in segments {
        let (size, color) = match seg.role {
            TextRole::Plain => (14.0, text),
            TextRole::Header | TextRole::Label => (14.0, strong),
            TextRole::Status(sev) => (14.0, severity_color(sev)),
            TextRole::Footer => (12.0, Color32::GRAY),
        };
        job.append(
            &seg.text,
            0.0,
            TextFormat { font_id: FontId::proportional(size), color, ..Default::default() },
        );
    }
    job.wrap.max_width = ui.available_width();
    ui.label(job);
}
