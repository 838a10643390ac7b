// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the URL box
    pub url_text: String,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Pending modal warning, if any
    pub warning: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            current_page_index: 0,
            warning: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
