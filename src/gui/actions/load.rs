// src/gui/actions/load.rs
use std::path::Path;

use eframe::egui::DroppedFile;

use crate::{file, gui::app::App};

pub fn load_file_dialog(app: &mut App) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Load parcel list")
        .add_filter("Text", &["txt", "csv", "tsv"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = &app.state.gui.last_browse_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        load_path(app, &path);
    }
}

pub fn load_path(app: &mut App, path: &Path) {
    match file::read_job_file(path) {
        Ok((name, text)) => {
            app.state.gui.last_browse_dir = path.parent().map(Path::to_path_buf);
            load_text(app, &name, &text);
        }
        Err(e) => {
            loge!("Load: {}", e);
            app.alert(format!("Could not read the file: {e}"));
        }
    }
}

/// First dropped file only. Some platforms hand over bytes instead of a path.
pub fn load_dropped(app: &mut App, dropped: &DroppedFile) {
    if let Some(path) = &dropped.path {
        return load_path(app, path);
    }
    let Some(bytes) = &dropped.bytes else {
        logd!("Load: dropped {:?} has neither path nor bytes", dropped.name);
        return;
    };
    match file::decode_job_text(bytes.to_vec()) {
        Some(text) => load_text(app, &dropped.name, &text),
        None => app.alert(format!("Could not read the file: {} is not UTF-8 text", dropped.name)),
    }
}

fn load_text(app: &mut App, name: &str, text: &str) {
    match app.controller.load_file(name, text) {
        Ok(n) => app.status(format!("Loaded {n} job(s) from {name}")),
        Err(e) => app.alert(e.to_string()),
    }
}
