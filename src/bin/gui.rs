// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use katastar_scrape::{
    config::{options::AppOptions, state::AppState},
    gui, log,
};

/// Window icon; a broken asset just means the platform default.
fn app_icon() -> Option<IconData> {
    let decoded = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/katastar.png"
    )));
    let rgba = match decoded {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            katastar_scrape::loge!("Init: icon decode failed: {}", e);
            return None;
        }
    };
    let (width, height) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width, height })
}

fn main() {
    log::init();

    // A broken config shouldn't keep the window from opening.
    let (opts, startup_alert) = match AppOptions::load() {
        Ok(o) => (o, None),
        Err(e) => {
            katastar_scrape::loge!("Init: config rejected: {}", e);
            (AppOptions::default(), Some(format!("Using default settings: {e}")))
        }
    };
    let state = AppState::new(opts);

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w, state.gui.window_h])
        .with_drag_and_drop(true);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state, startup_alert) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
