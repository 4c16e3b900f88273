// src/gui/pages/mod.rs
use eframe::egui;

use crate::{core::source::InputMode, gui::app::App};

pub mod file;
pub mod manual;

/// One input tab. Pages are stateless statics; everything lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn mode(&self) -> InputMode;

    fn title(&self) -> &'static str {
        self.mode().title()
    }

    /// One-line help shown under the tabs.
    fn blurb(&self) -> &'static str;

    /// Draw the page body. Runs every frame; must not block.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
