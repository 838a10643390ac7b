// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub inspect: InspectOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            inspect: InspectOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectOptions {
    /// Artificial wait before an outcome is picked.
    pub delay_ms: u64,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self { delay_ms: SIM_DELAY_MS }
    }
}

impl InspectOptions {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Coverage,
    Enhancements,
    MobileUsability,
}
