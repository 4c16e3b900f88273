// src/gui/components/job_row.rs
//
// One editable manual row. Returns what the user did instead of mutating,
// so the caller can route it through the controller.

use eframe::egui;
use crate::core::job::{JobField, JobInput};

pub enum RowAction {
    Edit { idx: usize, field: JobField, value: String },
    Remove(usize),
}

pub fn draw(ui: &mut egui::Ui, idx: usize, row: &JobInput, can_remove: bool) -> Option<RowAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.weak(format!("{:>2}.", idx + 1));

            for field in JobField::ALL {
                ui.vertical(|ui| {
                    ui.small(field.label());
                    let mut buf = s!(row.get(field));
                    let edit = egui::TextEdit::singleline(&mut buf)
                        .hint_text(field.hint())
                        .desired_width(180.0);
                    if ui.add(edit).changed() {
                        action = Some(RowAction::Edit { idx, field, value: buf });
                    }
                });
            }

            let delete = ui
                .add_enabled(can_remove, egui::Button::new("Delete"))
                .on_disabled_hover_text("At least one row is required");
            if delete.clicked() {
                action = Some(RowAction::Remove(idx));
            }
        });
    });

    action
}
