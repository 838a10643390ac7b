// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{inspect, poll, clear, ...}.

mod clear;    // src/gui/actions/clear.rs
mod copy;     // src/gui/actions/copy.rs
mod inspect;  // src/gui/actions/inspect.rs
mod open_gsc; // src/gui/actions/open_gsc.rs

pub use clear::clear;
pub use copy::copy;
pub use inspect::{inspect, poll};
pub use open_gsc::{gsc_link_for, open_in_gsc};
