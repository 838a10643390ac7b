// src/gui/actions/inspect.rs
use crate::{
    config::options::PageKind,
    gui::{
        app::App,
        router,
        view_model::{CoverageView, STATUS_COMPLETE, STATUS_FAILED, status_checking},
    },
    runner::{Finished, Start},
};

/// "Inspect URL" / Enter. `notify` is called from the worker once the
/// result is queued (the GUI passes a repaint request).
pub fn inspect<F>(app: &mut App, notify: F)
where
    F: FnOnce() + Send + 'static,
{
    let raw = app.state.gui.url_text.clone();

    match app.runner.start(&raw, notify) {
        Ok(Start::Started(url)) => {
            logf!("Inspect: Begin {}", url);
            app.view = CoverageView::checking(url.as_str());
            app.status(status_checking(&url));
        }
        Ok(Start::Busy) => {
            // One at a time; the click is dropped.
        }
        Err(e) if e.is_empty_input() => {
            logd!("Inspect: Clicked with an empty URL box");
            app.warn(e.to_string());
        }
        Err(e) => {
            logw!("Inspect: Rejected {:?}: {}", raw.trim(), e);
            app.view = CoverageView::failed(&e.to_string());
            app.status(STATUS_FAILED);
        }
    }
}

/// Pick up a finished inspection, if any. Returns true when the view changed.
pub fn poll(app: &mut App) -> bool {
    let Some(finished) = app.runner.poll() else { return false };

    match finished {
        Finished::Done(c) => {
            app.view = CoverageView::from_result(&c.url, &c.result);
            app.status(STATUS_COMPLETE);
            app.set_current_index(router::index_of(PageKind::Coverage));
        }
        Finished::Failed(e) => {
            loge!("Inspect: Failed: {}", e);
            app.view = CoverageView::failed(&e);
            app.status(STATUS_FAILED);
        }
    }
    true
}
