// src/gui/components/action_buttons.rs

use eframe::egui::{self, Color32, RichText};
use crate::{core::source::InputMode, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.controller.is_running();

    ui.horizontal(|ui| {
        // Search / Stop share one slot.
        if running {
            let stop = egui::Button::new(RichText::new("STOP").color(Color32::WHITE).strong())
                .fill(Color32::from_rgb(220, 38, 38));
            if ui.add(stop).clicked() {
                actions::stop(app);
            }
        } else {
            let search = egui::Button::new(RichText::new("Search").color(Color32::WHITE).strong())
                .fill(Color32::from_rgb(79, 70, 229));
            if ui.add(search).clicked() {
                actions::submit(app);
            }
        }

        if app.controller.mode() == InputMode::Manual
            && ui.add_enabled(!running, egui::Button::new("+ Add row")).clicked()
        {
            app.controller.add_row();
            logd!("UI: Row added");
        }

        // Save link only exists while the last session succeeded.
        let save_label = app
            .controller
            .artifact()
            .map(|a| format!("⬇ Save {}", a.filename()));
        if let Some(label) = save_label {
            let save = egui::Button::new(RichText::new(label).color(Color32::from_rgb(4, 120, 87)));
            if ui.add(save).clicked() {
                actions::save_result(app);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(&app.status);
        });
    });
}
