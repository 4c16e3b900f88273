// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::TICK, state::AppState},
    core::{controller::Controller, source::InputMode},
    progress::ProgressView,
    worker::SubmitWorker,
};

use super::{actions, components, router};

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    startup_alert: Option<String>,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Katastar parcel search",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, state, startup_alert)))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // single source of truth for jobs + session (UI thread only)
    pub controller: Controller,

    // network side; None if it failed to start
    pub worker: Option<SubmitWorker>,

    // status line + blocking alert
    pub status: String,
    pub alert: Option<String>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState, startup_alert: Option<String>) -> Self {
        let repaint = ctx.clone();
        let (worker, alert) = match SubmitWorker::spawn(&state.options, move || repaint.request_repaint()) {
            Ok(w) => (Some(w), startup_alert),
            Err(e) => {
                loge!("Init: worker failed: {}", e);
                (None, Some(format!("Searching is unavailable: {e}")))
            }
        };

        logf!("Init: api={} timeout={}s", state.options.scrape_url(), state.options.timeout_secs);

        Self {
            state,
            controller: Controller::new(),
            worker,
            status: s!("Idle"),
            alert,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn alert<T: Into<String>>(&mut self, msg: T) {
        self.alert = Some(msg.into());
    }

    /// Files dropped on the window count as a load, but only on the file tab.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(first) = dropped.first() else {
            return;
        };
        if self.controller.mode() != InputMode::File || self.controller.is_running() {
            logd!("UI: Ignored drop of {:?}", first.name);
            return;
        }
        if dropped.len() > 1 {
            self.status(format!("Only the first of {} dropped files was loaded", dropped.len()));
        }
        actions::load_dropped(self, first);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);
        self.handle_dropped_files(ctx);

        self.controller.tick(std::time::Instant::now());
        if self.controller.is_running() {
            ctx.request_repaint_after(TICK);
        }

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(6.0);
            components::action_buttons::draw(ui, self);
            ui.add_space(6.0);

            let view = ProgressView::from_phase(self.controller.phase(), self.controller.elapsed());
            components::progress_banner::draw(ui, view);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Parcel list search");
            ui.add_space(4.0);

            components::tabs::draw(ui, self);
            ui.separator();

            let page = router::page_for(self.controller.mode());
            ui.label(page.blurb());
            ui.add_space(6.0);
            page.draw(ui, self);
        });

        components::alert::draw(ctx, self);
    }
}
