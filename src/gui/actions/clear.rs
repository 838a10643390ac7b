// src/gui/actions/clear.rs
use crate::gui::{
    app::App,
    view_model::{CoverageView, STATUS_READY},
};

/// Reset the box and every field. An inspection already in flight still
/// lands when it finishes.
pub fn clear(app: &mut App) {
    app.state.gui.url_text.clear();
    app.view = CoverageView::initial();
    app.status(STATUS_READY);
    logd!("UI: Cleared");
}
