// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use gsc_inspect::{
    config::consts::{APP_TITLE, WINDOW_H, WINDOW_MIN_H, WINDOW_MIN_W, WINDOW_W},
    gui,
    log::{self, LogTarget},
};

fn main() {
    log::init(LogTarget::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_min_inner_size([WINDOW_MIN_W, WINDOW_MIN_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        gsc_inspect::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
