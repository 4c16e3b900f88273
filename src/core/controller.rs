// src/core/controller.rs
//
// Submission state machine. Owns the active job source, the current phase and
// the stopwatch. Pure state: no IO, no threads. The transport runs a
// `SubmitTicket` elsewhere and reports back through `complete()`.
//
//   Idle ──submit──▶ Running ──ok────▶ Succeeded
//     ▲                 │ ├───err───▶ Failed
//     │                 │ └───stop──▶ Cancelled
//     └──(any terminal phase) ──submit──▶ Running
//
// Completions carry the session id they were issued for. Only the id held by
// the current `Running` phase is honored; anything else is stale.

use std::fmt;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::job::{JobField, JobInput};
use super::source::{FileJobs, InputMode, JobSource};
use super::stopwatch::Stopwatch;
use crate::error::ClientError;
use crate::file::Artifact;
use crate::net::wire::ScrapeResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The in-flight request. Dropping out of `Running` drops our token handle.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: SessionId,
    pub mode: InputMode,
    pub job_count: usize,
    cancel: CancellationToken,
}

#[derive(Clone, Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running(Session),
    Succeeded(Artifact),
    Cancelled,
    Failed(String),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Running(_) => "Running",
            Phase::Succeeded(_) => "Succeeded",
            Phase::Cancelled => "Cancelled",
            Phase::Failed(_) => "Failed",
        }
    }
}

/// Everything the transport needs for one request.
#[derive(Clone, Debug)]
pub struct SubmitTicket {
    pub id: SessionId,
    pub jobs: Vec<JobInput>,
    pub cancel: CancellationToken,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// No row has both a region and a parcel.
    NothingToSubmit(InputMode),
    AlreadyRunning,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NothingToSubmit(mode) => f.write_str(mode.empty_message()),
            SubmitError::AlreadyRunning => f.write_str("A search is already running."),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchError {
    Busy,
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wait for the running search to finish or stop it first.")
    }
}

impl std::error::Error for SwitchError {}

/// What `complete()` did with a transport result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    /// Token fired without `stop()`; settled as cancelled.
    Cancelled,
    /// Message for the user alert.
    Failed(String),
    /// Not the active session (stopped, superseded, or unknown). Ignored.
    Stale,
}

#[derive(Debug, Default)]
pub struct Controller {
    source: JobSource,
    phase: Phase,
    stopwatch: Stopwatch,
    last_session: u64,
}

impl Controller {
    pub fn new() -> Self { Self::default() }

    /* ---------- read side ---------- */

    #[inline] pub fn phase(&self) -> &Phase { &self.phase }
    #[inline] pub fn source(&self) -> &JobSource { &self.source }
    #[inline] pub fn mode(&self) -> InputMode { self.source.mode() }
    #[inline] pub fn is_running(&self) -> bool { matches!(self.phase, Phase::Running(_)) }
    #[inline] pub fn elapsed(&self) -> Duration { self.stopwatch.elapsed() }

    pub fn active_session(&self) -> Option<SessionId> {
        match &self.phase {
            Phase::Running(s) => Some(s.id),
            _ => None,
        }
    }

    /// The downloadable result, only while `Succeeded`.
    pub fn artifact(&self) -> Option<&Artifact> {
        match &self.phase {
            Phase::Succeeded(a) => Some(a),
            _ => None,
        }
    }

    /* ---------- job source ---------- */

    /// Switch tabs. Leaving a mode drops its rows. Same mode is a no-op.
    pub fn switch_mode(&mut self, mode: InputMode) -> Result<(), SwitchError> {
        if self.is_running() {
            logd!("Controller: switch to {:?} refused while running", mode);
            return Err(SwitchError::Busy);
        }
        if self.source.mode() != mode {
            logf!("Controller: mode {:?} → {:?}", self.source.mode(), mode);
            self.source = JobSource::fresh(mode);
        }
        Ok(())
    }

    /// Replace file-mode rows with the parsed contents of `text`.
    /// Returns the number of jobs found.
    pub fn load_file(&mut self, name: &str, text: &str) -> Result<usize, SwitchError> {
        self.switch_mode(InputMode::File)?;
        let file = FileJobs::from_text(name, text);
        let n = file.jobs.len();
        logf!("Controller: loaded {:?} jobs={} rejected={}", name, n, file.rejected_lines.len());
        if !file.rejected_lines.is_empty() {
            logd!("Controller: rejected lines in {:?}: {:?}", name, file.rejected_lines);
        }
        self.source = JobSource::File(file);
        Ok(n)
    }

    pub fn add_row(&mut self) -> bool {
        match self.source.manual_mut() {
            Some(list) => {
                list.add();
                true
            }
            None => false,
        }
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        self.source.manual_mut().is_some_and(|list| list.remove(index))
    }

    pub fn update_row(&mut self, index: usize, field: JobField, value: impl Into<String>) -> bool {
        self.source.manual_mut().is_some_and(|list| list.update(index, field, value))
    }

    /* ---------- session lifecycle ---------- */

    /// Start a session from the active source.
    pub fn submit(&mut self, now: Instant) -> Result<SubmitTicket, SubmitError> {
        if self.is_running() {
            return Err(SubmitError::AlreadyRunning);
        }

        let jobs = self.source.submittable();
        if jobs.is_empty() {
            logd!("Controller: submit refused, no submittable jobs ({:?})", self.mode());
            return Err(SubmitError::NothingToSubmit(self.mode()));
        }

        // Previous artifact / terminal flags go away before the new session exists.
        self.phase = Phase::Idle;

        self.last_session += 1;
        let id = SessionId(self.last_session);
        let cancel = CancellationToken::new();

        self.stopwatch.start(now);
        self.phase = Phase::Running(Session {
            id,
            mode: self.mode(),
            job_count: jobs.len(),
            cancel: cancel.clone(),
        });

        logf!("Controller: session {} started jobs={} mode={:?}", id, jobs.len(), self.mode());
        Ok(SubmitTicket { id, jobs, cancel })
    }

    /// User pressed stop. Settles immediately; returns false if nothing was running.
    pub fn stop(&mut self, now: Instant) -> bool {
        let Phase::Running(session) = &self.phase else {
            return false;
        };
        session.cancel.cancel();
        let id = session.id;

        self.phase = Phase::Cancelled;
        let elapsed = self.stopwatch.stop(now);
        logf!("Controller: session {} stopped by user after {:?}", id, elapsed);
        true
    }

    /// Apply a transport result for session `id`.
    pub fn complete(
        &mut self,
        id: SessionId,
        result: Result<ScrapeResult, ClientError>,
        now: Instant,
    ) -> Completion {
        let mode = match &self.phase {
            Phase::Running(s) if s.id == id => s.mode,
            other => {
                logd!("Controller: stale completion {} ignored (phase={})", id, other.name());
                return Completion::Stale;
            }
        };

        let elapsed = self.stopwatch.stop(now);

        let (phase, completion) = match result {
            Ok(res) => match Artifact::from_b64(&res.filename, &res.file_b64, mode.default_filename()) {
                Ok(artifact) => {
                    logf!(
                        "Controller: session {} OK file={} size={}B in {:?}",
                        id, artifact.filename(), artifact.len(), elapsed
                    );
                    (Phase::Succeeded(artifact), Completion::Succeeded)
                }
                Err(e) => {
                    loge!("Controller: session {} bad payload: {}", id, e);
                    let msg = s!("The server returned an unreadable file.");
                    (Phase::Failed(msg.clone()), Completion::Failed(msg))
                }
            },
            Err(ClientError::Cancelled) => {
                logf!("Controller: session {} cancelled by transport", id);
                (Phase::Cancelled, Completion::Cancelled)
            }
            Err(e) => {
                loge!("Controller: session {} failed: {}", id, e);
                let msg = e.user_message();
                (Phase::Failed(msg.clone()), Completion::Failed(msg))
            }
        };

        self.phase = phase;
        completion
    }

    /// End session `id` as failed for a local reason (e.g. the worker is gone).
    pub fn fail(&mut self, id: SessionId, message: impl Into<String>, now: Instant) -> Completion {
        if self.active_session() != Some(id) {
            return Completion::Stale;
        }
        let msg = message.into();
        self.stopwatch.stop(now);
        loge!("Controller: session {} aborted: {}", id, msg);
        self.phase = Phase::Failed(msg.clone());
        Completion::Failed(msg)
    }

    /// UI tick. Only moves the clock while running.
    pub fn tick(&mut self, now: Instant) {
        if self.is_running() {
            self.stopwatch.sample(now);
        }
    }
}
