// src/gui/components/mod.rs
pub mod action_buttons;
pub mod alert;
pub mod job_row;
pub mod progress_banner;
pub mod tabs;
