// src/core/mod.rs

pub mod deeplink;
pub mod normalize;
pub mod open;

pub use normalize::{NormalizedUrl, ValidationError, normalize};
