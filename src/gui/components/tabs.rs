// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Switching drops the rows of the tab being left (controller rule), so tabs
// are locked while a search runs.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.controller.is_running();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.controller.mode();

        for page in router::all_pages() {
            let selected = page.mode() == cur;
            let resp = ui
                .add_enabled_ui(!running || selected, |ui| ui.selectable_label(selected, page.title()))
                .inner;

            if resp.clicked() && !selected {
                match app.controller.switch_mode(page.mode()) {
                    Ok(()) => {
                        logf!("UI: Tab switch {:?} → {:?}", cur, page.mode());
                        app.status(format!("{} (rows cleared)", page.title()));
                    }
                    Err(e) => app.status(e.to_string()),
                }
            }
        }
    });
}
