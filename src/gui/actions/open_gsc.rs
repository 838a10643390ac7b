// src/gui/actions/open_gsc.rs
use crate::{
    core::{ValidationError, deeplink::gsc_inspect_link, normalize, open::open_in_browser},
    gui::app::App,
};

/// Deep link for whatever is in the URL box right now.
pub fn gsc_link_for(app: &App) -> Result<String, ValidationError> {
    normalize(&app.state.gui.url_text).map(|u| gsc_inspect_link(&u))
}

pub fn open_in_gsc(app: &mut App) {
    let link = match gsc_link_for(app) {
        Ok(link) => link,
        Err(ValidationError::Empty) => {
            app.warn("No URL to open in GSC");
            return;
        }
        Err(e) => {
            app.warn(e.to_string());
            return;
        }
    };

    match open_in_browser(&link) {
        Ok(()) => app.status("Opened in Google Search Console"),
        Err(e) => {
            loge!("Open: {}", e);
            app.status(format!("Failed to open browser: {e}"));
        }
    }
}
