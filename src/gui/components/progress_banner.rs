// src/gui/components/progress_banner.rs
use eframe::egui::{self, Color32};
use crate::progress::{ProgressView, format_elapsed};

pub fn draw(ui: &mut egui::Ui, view: ProgressView) {
    let (fill, text_color) = match view {
        ProgressView::Hidden => return,
        ProgressView::Cancelled => (Color32::from_rgb(254, 242, 242), Color32::from_rgb(127, 29, 29)),
        ProgressView::Finished(_) => (Color32::from_rgb(236, 253, 245), Color32::from_rgb(6, 78, 59)),
        ProgressView::Running(_) => (Color32::from_rgb(238, 242, 255), Color32::from_rgb(49, 46, 129)),
    };

    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| match view {
            ProgressView::Running(d) => {
                ui.spinner();
                ui.colored_label(text_color, "Please wait...");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(text_color, egui::RichText::new(format_elapsed(d)).monospace().strong());
                });
            }
            _ => {
                if let Some(text) = view.text() {
                    ui.colored_label(text_color, egui::RichText::new(text).strong());
                }
            }
        });
    });
}
