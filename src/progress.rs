// src/progress.rs
//! What the progress banner shows. Pure function of the controller phase and
//! the stopwatch; frontends (GUI/CLI) only decide how it looks.

use std::time::Duration;

use crate::core::controller::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressView {
    /// Idle, or failed (the failure is reported by the alert instead).
    Hidden,
    Running(Duration),
    Finished(Duration),
    Cancelled,
}

impl ProgressView {
    /// Priority: cancelled > finished > running > nothing.
    pub fn from_phase(phase: &Phase, elapsed: Duration) -> Self {
        match phase {
            Phase::Cancelled => ProgressView::Cancelled,
            Phase::Succeeded(_) => ProgressView::Finished(elapsed),
            Phase::Running(_) => ProgressView::Running(elapsed),
            Phase::Idle | Phase::Failed(_) => ProgressView::Hidden,
        }
    }

    /// Banner text, `None` when nothing is shown.
    pub fn text(&self) -> Option<String> {
        match self {
            ProgressView::Hidden => None,
            ProgressView::Running(d) => Some(format!("Please wait... {}", format_elapsed(*d))),
            ProgressView::Finished(d) => Some(format!("✅ Done! Time taken: {}", format_elapsed(*d))),
            ProgressView::Cancelled => Some(s!("🛑 The process was stopped.")),
        }
    }
}

/// `MM:SS.d`. Minutes are not wrapped into hours.
pub fn format_elapsed(d: Duration) -> String {
    let ms = d.as_millis();
    let minutes = ms / 60_000;
    let seconds = (ms / 1_000) % 60;
    let tenths = (ms % 1_000) / 100;
    format!("{minutes:02}:{seconds:02}.{tenths}")
}
