// src/config/consts.rs

// Window
pub const APP_TITLE: &str = "GSC-like URL Inspector";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 800.0;
pub const WINDOW_MIN_W: f32 = 1000.0;
pub const WINDOW_MIN_H: f32 = 700.0;

// Local store (logs only; nothing else is persisted)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Simulation
pub const SIM_DELAY_MS: u64 = 1000;
pub const CRAWL_DAYS_MIN: i64 = 1;
pub const CRAWL_DAYS_MAX: i64 = 30;
pub const CRAWL_DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Hand-off to the real thing
pub const GSC_INSPECT_BASE: &str = "https://search.google.com/search-console/inspect";
pub const GSC_RESOURCE_PARAM: &str = "resource_id";
