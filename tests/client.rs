// tests/client.rs
//
// `/scrape` client against a mock server, plus the GUI worker around it.
//
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use katastar_scrape::{
    config::options::AppOptions,
    core::{controller::{Completion, Controller}, job::{JobField, JobInput}},
    error::ClientError,
    net::ScrapeClient,
    worker::SubmitWorker,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn opts_for(server: &MockServer) -> AppOptions {
    AppOptions { api_base: server.uri(), ..AppOptions::default() }
}

fn jobs() -> Vec<JobInput> {
    vec![JobInput::new("Skopje", "1200"), JobInput::new("Bitola", "55").with_katastar("10")]
}

#[tokio::test]
async fn posts_jobs_and_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_json(json!({
            "jobs": [
                { "region": "Skopje", "parcel": "1200" },
                { "region": "Bitola", "parcel": "55", "katastar_region": "10" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "x.xlsx",
            "file_b64": "UEsDBA=="
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let res = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap();
    assert_eq!(res.filename, "x.xlsx");
    assert_eq!(res.file_b64, "UEsDBA==");
}

#[tokio::test]
async fn error_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "bad region" })))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let err = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 400, .. }));
    assert_eq!(err.user_message(), "bad region");
}

#[tokio::test]
async fn validation_detail_list_is_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [ { "msg": "field required" }, { "msg": "too long" } ]
        })))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let err = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap_err();
    assert_eq!(err.user_message(), "field required; too long");
}

#[tokio::test]
async fn missing_detail_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let err = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap_err();
    assert_eq!(err.user_message(), "Scrape failed.");
}

#[tokio::test]
async fn malformed_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let err = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Body(_)));
}

#[tokio::test]
async fn cancel_resolves_before_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({ "filename": "x.xlsx", "file_b64": "" })),
        )
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client.scrape(&jobs(), &token).await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn already_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ScrapeClient::new(&opts_for(&server)).unwrap();
    let token = CancellationToken::new();
    token.cancel();
    assert!(client.scrape(&jobs(), &token).await.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let opts = AppOptions { timeout_secs: 1, ..opts_for(&server) };
    let client = ScrapeClient::new(&opts).unwrap();
    let err = client.scrape(&jobs(), &CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_secs(1)));
    assert_eq!(err.user_message(), "Scrape failed.");
}

#[tokio::test]
async fn worker_round_trip_into_controller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "parcels.xlsx",
            "file_b64": "aGVsbG8="
        })))
        .mount(&server)
        .await;

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = notified.clone();
    let worker = SubmitWorker::spawn(&opts_for(&server), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    let mut c = Controller::new();
    c.update_row(0, JobField::Region, "Skopje");
    c.update_row(0, JobField::Parcel, "1200");
    let ticket = c.submit(Instant::now()).unwrap();
    worker.submit(ticket).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(ev) = worker.try_recv() {
            break ev;
        }
        assert!(Instant::now() < deadline, "worker never answered");
        tokio::time::sleep(Duration::from_millis(20)).await;
    };

    assert_eq!(c.complete(event.id, event.result, Instant::now()), Completion::Succeeded);
    assert_eq!(c.artifact().unwrap().bytes(), b"hello");
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}
