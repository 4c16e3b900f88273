// src/worker.rs
//
// Background executor for the GUI. A dedicated thread owns a tokio runtime;
// the UI thread sends tickets in and polls results out without ever blocking.

use std::sync::{Arc, mpsc};
use std::thread;

use crate::{
    config::options::AppOptions,
    core::controller::{SessionId, SubmitTicket},
    error::{ClientError, WorkerError},
    net::{ScrapeClient, ScrapeResult},
};

/// Completion of one ticket, tagged with the session it belongs to.
#[derive(Debug)]
pub struct WorkerEvent {
    pub id: SessionId,
    pub result: Result<ScrapeResult, ClientError>,
}

pub struct SubmitWorker {
    cmd_tx: mpsc::Sender<SubmitTicket>,
    event_rx: mpsc::Receiver<WorkerEvent>,
}

impl SubmitWorker {
    /// `notify` runs on the worker side after each event is queued
    /// (the GUI passes a repaint request).
    pub fn spawn<F>(opts: &AppOptions, notify: F) -> Result<Self, WorkerError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let client = ScrapeClient::new(opts).map_err(WorkerError::Client)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("katastar-net")
            .build()?;

        let (cmd_tx, cmd_rx) = mpsc::channel::<SubmitTicket>();
        let (event_tx, event_rx) = mpsc::channel();
        let notify = Arc::new(notify);

        thread::Builder::new()
            .name(s!("katastar-worker"))
            .spawn(move || {
                while let Ok(ticket) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    let notify = notify.clone();
                    runtime.spawn(async move {
                        let SubmitTicket { id, jobs, cancel } = ticket;
                        let result = client.scrape(&jobs, &cancel).await;
                        logd!("Worker: session {} finished ok={}", id, result.is_ok());
                        if event_tx.send(WorkerEvent { id, result }).is_ok() {
                            notify();
                        }
                    });
                }
                logd!("Worker: command channel closed, shutting down");
            })?;

        logf!("Worker: started");
        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, ticket: SubmitTicket) -> Result<(), WorkerError> {
        self.cmd_tx.send(ticket).map_err(|_| WorkerError::Disconnected)
    }

    pub fn try_recv(&self) -> Option<WorkerEvent> {
        self.event_rx.try_recv().ok()
    }
}
