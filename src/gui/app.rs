// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::PageKind,
        state::AppState,
    },
    inspect::{Inspector, SimulatedInspector},
    runner::Runner,
};

use super::{
    actions,
    components,
    pages::Page,
    router,
    view_model::{CoverageView, STATUS_READY},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // owns the in-flight inspection, if any
    pub runner: Runner,

    // what the Coverage tab shows
    pub view: CoverageView,

    // status bar text
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let inspector = SimulatedInspector::from_options(&state.options.inspect);
        Self::with_inspector(state, Arc::new(inspector))
    }

    pub fn with_inspector(state: AppState, inspector: Arc<dyn Inspector>) -> Self {
        logf!(
            "Init: inspector={}, delay={} ms, pages={}",
            inspector.name(),
            state.options.inspect.delay_ms,
            router::all_pages().len()
        );
        Self {
            state,
            runner: Runner::new(inspector),
            view: CoverageView::initial(),
            status: s!(STATUS_READY),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn warn<T: Into<String>>(&mut self, msg: T) {
        self.state.gui.warning = Some(msg.into());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            components::header::draw(ui);
            ui.add_space(10.0);
            components::url_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        components::warning::draw(ctx, self);
    }
}
