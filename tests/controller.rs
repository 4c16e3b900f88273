// tests/controller.rs
//
// Session state machine: submit / stop / complete, driven without any network.
//
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use katastar_scrape::{
    core::{
        controller::{Completion, Controller, Phase, SubmitError, SwitchError},
        job::JobField,
        source::InputMode,
    },
    error::ClientError,
    net::ScrapeResult,
    progress::ProgressView,
};
use pretty_assertions::assert_eq;

fn ok_result(name: &str, bytes: &[u8]) -> Result<ScrapeResult, ClientError> {
    Ok(ScrapeResult { filename: name.to_string(), file_b64: STANDARD.encode(bytes) })
}

fn with_one_row() -> Controller {
    let mut c = Controller::new();
    assert!(c.update_row(0, JobField::Region, "Skopje"));
    assert!(c.update_row(0, JobField::Parcel, "1200"));
    c
}

fn view(c: &Controller) -> ProgressView {
    ProgressView::from_phase(c.phase(), c.elapsed())
}

#[test]
fn empty_manual_row_is_refused() {
    let mut c = Controller::new();
    let err = c.submit(Instant::now()).unwrap_err();
    assert_eq!(err, SubmitError::NothingToSubmit(InputMode::Manual));
    assert_eq!(err.to_string(), "Please fill at least one row with Region and Parcel.");
    assert!(matches!(c.phase(), Phase::Idle));
    assert_eq!(c.active_session(), None);
}

#[test]
fn success_produces_artifact_and_freezes_clock() {
    let mut c = with_one_row();
    let t0 = Instant::now();
    let ticket = c.submit(t0).unwrap();
    assert_eq!(ticket.jobs.len(), 1);
    assert!(c.is_running());

    c.tick(t0 + Duration::from_millis(700));
    assert_eq!(view(&c), ProgressView::Running(Duration::from_millis(700)));

    let done = c.complete(ticket.id, ok_result("x.xlsx", b"PK\x03\x04"), t0 + Duration::from_millis(1500));
    assert_eq!(done, Completion::Succeeded);
    assert!(!c.is_running());

    let artifact = c.artifact().unwrap();
    assert_eq!(artifact.filename(), "x.xlsx");
    assert_eq!(artifact.bytes(), b"PK\x03\x04");

    c.tick(t0 + Duration::from_secs(60));
    assert_eq!(view(&c), ProgressView::Finished(Duration::from_millis(1500)));
    assert_eq!(view(&c).text().unwrap(), "✅ Done! Time taken: 00:01.5");
}

#[test]
fn stop_settles_immediately_and_late_success_is_stale() {
    let mut c = with_one_row();
    let t0 = Instant::now();
    let ticket = c.submit(t0).unwrap();

    assert!(c.stop(t0 + Duration::from_secs(2)));
    assert!(ticket.cancel.is_cancelled());
    assert!(matches!(c.phase(), Phase::Cancelled));
    assert_eq!(view(&c), ProgressView::Cancelled);
    assert!(c.artifact().is_none());

    let late = c.complete(ticket.id, ok_result("x.xlsx", b"data"), t0 + Duration::from_secs(3));
    assert_eq!(late, Completion::Stale);
    assert!(c.artifact().is_none());
    assert!(matches!(c.phase(), Phase::Cancelled));

    // The transport's own cancellation arriving later is ignored too.
    assert_eq!(c.complete(ticket.id, Err(ClientError::Cancelled), t0), Completion::Stale);
    assert_eq!(c.elapsed(), Duration::from_secs(2));
}

#[test]
fn stop_when_idle_does_nothing() {
    let mut c = with_one_row();
    assert!(!c.stop(Instant::now()));
    assert!(matches!(c.phase(), Phase::Idle));
}

#[test]
fn server_detail_becomes_alert_text() {
    let mut c = with_one_row();
    let t0 = Instant::now();
    let ticket = c.submit(t0).unwrap();

    let err = ClientError::Server { status: 400, detail: Some("bad region".into()) };
    let done = c.complete(ticket.id, Err(err), t0);
    assert_eq!(done, Completion::Failed("bad region".into()));
    assert_eq!(view(&c), ProgressView::Hidden);
    assert!(!c.is_running());
}

#[test]
fn errors_without_detail_use_generic_message() {
    let mut c = with_one_row();
    let ticket = c.submit(Instant::now()).unwrap();
    let err = ClientError::Server { status: 500, detail: None };
    assert_eq!(c.complete(ticket.id, Err(err), Instant::now()), Completion::Failed("Scrape failed.".into()));

    let ticket = c.submit(Instant::now()).unwrap();
    let err = ClientError::Timeout(Duration::from_secs(600));
    assert_eq!(c.complete(ticket.id, Err(err), Instant::now()), Completion::Failed("Scrape failed.".into()));
}

#[test]
fn undecodable_payload_fails_session() {
    let mut c = with_one_row();
    let ticket = c.submit(Instant::now()).unwrap();
    let bad = Ok(ScrapeResult { filename: "x.xlsx".into(), file_b64: "***".into() });
    assert!(matches!(c.complete(ticket.id, bad, Instant::now()), Completion::Failed(_)));
    assert!(c.artifact().is_none());
}

#[test]
fn new_submit_clears_previous_result() {
    let mut c = with_one_row();
    let t0 = Instant::now();
    let first = c.submit(t0).unwrap();
    c.complete(first.id, ok_result("", b"one"), t0 + Duration::from_secs(5));
    // Blank server filename falls back to the manual default.
    assert_eq!(c.artifact().unwrap().filename(), "results.xlsx");

    let second = c.submit(t0 + Duration::from_secs(10)).unwrap();
    assert_ne!(first.id, second.id);
    assert!(c.artifact().is_none());
    assert_eq!(c.elapsed(), Duration::ZERO);
    assert_eq!(view(&c), ProgressView::Running(Duration::ZERO));

    // A completion for the finished session can't touch the new one.
    assert_eq!(c.complete(first.id, ok_result("x", b"old"), t0), Completion::Stale);
    assert!(c.is_running());
}

#[test]
fn resubmit_while_running_is_refused() {
    let mut c = with_one_row();
    let ticket = c.submit(Instant::now()).unwrap();
    assert_eq!(c.submit(Instant::now()).unwrap_err(), SubmitError::AlreadyRunning);
    assert_eq!(c.active_session(), Some(ticket.id));
}

#[test]
fn refused_submit_keeps_previous_result() {
    let mut c = with_one_row();
    let t = c.submit(Instant::now()).unwrap();
    c.complete(t.id, ok_result("x.xlsx", b"1"), Instant::now());

    c.update_row(0, JobField::Parcel, "  ");
    assert!(c.submit(Instant::now()).is_err());
    assert!(c.artifact().is_some());
}

#[test]
fn file_mode_submits_only_file_jobs() {
    let mut c = with_one_row();
    let n = c.load_file("parcels.txt", "Bitola, 10, 55\nnope\nOhrid;7\n").unwrap();
    assert_eq!(n, 2);
    assert_eq!(c.mode(), InputMode::File);

    // Manual rows were dropped with the mode switch and are not editable now.
    assert!(!c.update_row(0, JobField::Region, "x"));
    assert!(!c.add_row());

    let ticket = c.submit(Instant::now()).unwrap();
    assert_eq!(ticket.jobs.len(), 2);
    assert_eq!(ticket.jobs[0].katastar_region.as_deref(), Some("10"));

    let done = c.complete(ticket.id, ok_result("", b"z"), Instant::now());
    assert_eq!(done, Completion::Succeeded);
    assert_eq!(c.artifact().unwrap().filename(), "uploaded_results.xlsx");
}

#[test]
fn empty_file_is_refused_with_file_message() {
    let mut c = Controller::new();
    c.switch_mode(InputMode::File).unwrap();
    assert_eq!(c.submit(Instant::now()).unwrap_err(), SubmitError::NothingToSubmit(InputMode::File));

    c.load_file("blank.txt", "\n\n").unwrap();
    assert!(c.submit(Instant::now()).is_err());
}

#[test]
fn mode_switch_is_blocked_while_running() {
    let mut c = with_one_row();
    c.submit(Instant::now()).unwrap();
    assert_eq!(c.switch_mode(InputMode::File), Err(SwitchError::Busy));
    assert_eq!(c.load_file("f.txt", "a,b"), Err(SwitchError::Busy));
    assert_eq!(c.mode(), InputMode::Manual);
}

#[test]
fn switching_back_starts_fresh() {
    let mut c = with_one_row();
    c.switch_mode(InputMode::Manual).unwrap();
    assert_eq!(c.source().jobs()[0].region, "Skopje");

    c.switch_mode(InputMode::File).unwrap();
    c.switch_mode(InputMode::Manual).unwrap();
    assert_eq!(c.source().jobs().len(), 1);
    assert!(!c.source().jobs()[0].is_submittable());
}

#[test]
fn editor_keeps_at_least_one_row() {
    let mut c = Controller::new();
    assert!(!c.remove_row(0));
    assert!(c.add_row());
    assert!(c.add_row());
    assert_eq!(c.source().jobs().len(), 3);
    assert!(!c.remove_row(7));
    assert!(c.remove_row(1));
    assert!(c.remove_row(0));
    assert!(!c.remove_row(0));
    assert_eq!(c.source().jobs().len(), 1);
}

#[test]
fn only_complete_rows_are_sent_trimmed() {
    let mut c = Controller::new();
    c.update_row(0, JobField::Region, "  Skopje ");
    c.update_row(0, JobField::Parcel, " 1200 ");
    c.update_row(0, JobField::KatastarRegion, "   ");
    c.add_row();
    c.update_row(1, JobField::Region, "Bitola");
    c.add_row();
    c.update_row(2, JobField::Region, "Ohrid");
    c.update_row(2, JobField::KatastarRegion, "3");
    c.update_row(2, JobField::Parcel, "9");

    let ticket = c.submit(Instant::now()).unwrap();
    assert_eq!(ticket.jobs.len(), 2);
    assert_eq!(ticket.jobs[0].region, "Skopje");
    assert_eq!(ticket.jobs[0].parcel, "1200");
    assert_eq!(ticket.jobs[0].katastar_region, None);
    assert_eq!(ticket.jobs[1].katastar_region.as_deref(), Some("3"));
}
