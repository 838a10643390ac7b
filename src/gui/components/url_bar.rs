// src/gui/components/url_bar.rs
//
// URL box + Inspect/Clear. Enter in the box behaves like the button.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.runner.is_running();

    ui.horizontal(|ui| {
        let input_w = (ui.available_width() - 220.0).max(200.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("Inspect any URL, e.g. https://example.com/page")
                .font(egui::TextStyle::Monospace)
                .desired_width(input_w),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(!running, egui::Button::new("Inspect URL"))
            .clicked();

        if clicked || submitted {
            let ctx = ui.ctx().clone();
            actions::inspect(app, move || ctx.request_repaint());
        }

        if ui.button("Clear").clicked() {
            actions::clear(app);
        }

        if running {
            ui.add(Spinner::new().size(16.0));
        }
    });
}
