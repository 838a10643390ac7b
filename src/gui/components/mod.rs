// src/gui/components/mod.rs
pub mod header;
pub mod status_bar;
pub mod tabs;
pub mod url_bar;
pub mod warning;
