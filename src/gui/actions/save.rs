// src/gui/actions/save.rs
use crate::gui::app::App;

/// Save dialog pre-filled with the server's filename.
pub fn save_result(app: &mut App) {
    let Some(artifact) = app.controller.artifact() else {
        logd!("Save: Clicked, but there's no result");
        return;
    };

    let picked = rfd::FileDialog::new()
        .set_title("Save results")
        .set_file_name(artifact.filename())
        .set_directory(&app.state.options.download_dir)
        .add_filter("Excel workbook", &["xlsx"])
        .save_file();

    let Some(path) = picked else {
        return;
    };

    let msg = match artifact.save_to(&path) {
        Ok(p) => format!("Saved {}", p.display()),
        Err(e) => {
            loge!("Save: {}", e);
            app.alert(e.to_string());
            return;
        }
    };
    app.status(msg);
}
