// src/gui/components/alert.rs
//
// Blocking message box. While open, the rest of the window ignores input.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading("Notice");
        ui.add_space(6.0);
        ui.label(&msg);
        ui.add_space(10.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        app.alert = None;
    }
}
