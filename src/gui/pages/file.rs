// src/gui/pages/file.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    core::source::InputMode,
    gui::{actions, app::App},
};

use super::Page;

pub struct FilePage;
pub static PAGE: FilePage = FilePage;

impl Page for FilePage {
    fn mode(&self) -> InputMode { InputMode::File }

    fn blurb(&self) -> &'static str {
        "Load a text file with one parcel per line: region, parcel  or  \
         region, cadastral region, parcel. Separators: comma, tab or semicolon. \
         Lines starting with # are ignored."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let running = app.controller.is_running();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!running, egui::Button::new("📂 Load file…"))
                .on_hover_text("Or drop a file onto the window")
                .clicked()
            {
                actions::load_file_dialog(app);
            }

            match app.controller.source().file().and_then(|f| f.name.as_deref()) {
                Some(name) => ui.monospace(name),
                None => ui.weak("No file loaded"),
            };
        });

        let Some(file) = app.controller.source().file() else {
            return;
        };
        if file.name.is_none() {
            return;
        }

        ui.add_space(4.0);
        ui.label(format!("{} job(s) ready", file.jobs.len()));
        ui.add_space(4.0);

        let jobs = &file.jobs;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(260.0)
            .column(Column::exact(40.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for h in ["#", "Region", "Cadastral region", "Parcel"] {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, jobs.len(), |mut row| {
                    let job = &jobs[row.index()];
                    let n = row.index() + 1;
                    row.col(|ui| {
                        ui.weak(n.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&job.region);
                    });
                    row.col(|ui| {
                        ui.label(job.katastar_region.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(&job.parcel);
                    });
                });
            });
    }
}
