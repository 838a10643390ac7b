// src/log.rs
use std::fs::{self, File};
use std::path::Path;

use ::log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// `.store/debug.log` (GUI; there is no console on Windows).
    File,
    /// stderr (CLI).
    Terminal,
}

/// Install the global logger. Safe to call more than once; later calls no-op.
pub fn init(target: LogTarget) {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match target {
        LogTarget::File => match create_file_logger(level, config) {
            Some(l) => vec![l as Box<dyn SharedLogger>],
            None => return,
        },
        LogTarget::Terminal => vec![TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ) as Box<dyn SharedLogger>],
    };

    let _ = CombinedLogger::init(loggers);
}

/// Terminal logger for tests; ignores "already initialized".
pub fn init_for_tests() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Never,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let _ = fs::create_dir_all(STORE_DIR);
    let path = Path::new(LOG_FILE);
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(e) => {
            eprintln!("Warning: could not create log file {}: {}", path.display(), e);
            None
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
