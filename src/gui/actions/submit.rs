// src/gui/actions/submit.rs
use std::time::Instant;

use crate::{core::controller::Completion, gui::app::App};

pub fn submit(app: &mut App) {
    let ticket = match app.controller.submit(Instant::now()) {
        Ok(t) => t,
        Err(e) => {
            logd!("Submit: Refused: {}", e);
            app.alert(e.to_string());
            return;
        }
    };

    let id = ticket.id;
    let jobs = ticket.jobs.len();

    let sent = match app.worker.as_ref() {
        Some(worker) => worker.submit(ticket).map_err(|e| e.to_string()),
        None => Err(s!("Submission worker is not available.")),
    };

    match sent {
        Ok(()) => {
            logf!("Submit: Begin session={} jobs={} mode={:?}", id, jobs, app.controller.mode());
            app.status(format!("Searching {} parcel(s)…", jobs));
        }
        Err(msg) => {
            if let Completion::Failed(msg) = app.controller.fail(id, msg, Instant::now()) {
                app.alert(msg);
            }
        }
    }
}

/// Settles as cancelled right away; the worker's eventual result is dropped as stale.
pub fn stop(app: &mut App) {
    if app.controller.stop(Instant::now()) {
        app.status("Stopped");
    }
}

/// Drain worker completions into the controller. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(worker) = app.worker.as_ref() else {
        return;
    };
    let events: Vec<_> = std::iter::from_fn(|| worker.try_recv()).collect();

    for ev in events {
        match app.controller.complete(ev.id, ev.result, Instant::now()) {
            Completion::Succeeded => {
                let name = app.controller.artifact().map(|a| s!(a.filename())).unwrap_or_default();
                logf!("Submit: OK session={} file={}", ev.id, name);
                app.status(format!("Ready: {name}"));
            }
            Completion::Failed(msg) => {
                app.status("Search failed");
                app.alert(msg);
            }
            Completion::Cancelled => app.status("Stopped"),
            Completion::Stale => logd!("Submit: Dropped stale result session={}", ev.id),
        }
    }
}
