// src/gui/pages/manual.rs
use eframe::egui;

use crate::{
    core::{job::JobInput, source::InputMode},
    gui::{app::App, components::job_row::{self, RowAction}},
};

use super::Page;

pub struct ManualPage;
pub static PAGE: ManualPage = ManualPage;

impl Page for ManualPage {
    fn mode(&self) -> InputMode { InputMode::Manual }

    fn blurb(&self) -> &'static str {
        "Add as many rows as you need (region, cadastral region (optional), parcel). \
         Results come back as a single Excel file."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(list) = app.controller.source().manual() else {
            return;
        };
        // Snapshot so edits can go through the controller while drawing.
        let rows: Vec<JobInput> = list.rows().to_vec();
        let can_remove = list.can_remove();

        let mut actions = Vec::new();
        egui::ScrollArea::vertical()
            .id_salt("manual_rows_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (idx, row) in rows.iter().enumerate() {
                    if let Some(a) = job_row::draw(ui, idx, row, can_remove) {
                        actions.push(a);
                    }
                    ui.add_space(4.0);
                }
            });

        for action in actions {
            match action {
                RowAction::Edit { idx, field, value } => {
                    app.controller.update_row(idx, field, value);
                }
                RowAction::Remove(idx) => {
                    if app.controller.remove_row(idx) {
                        logd!("UI: Row {} removed", idx);
                    }
                }
            }
        }
    }
}
