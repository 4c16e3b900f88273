// src/net/client.rs
//
// The single outbound call: POST {api_base}/scrape.
// Two independent ways out besides a response: the long request timeout
// (reqwest) and the session's cancellation token (ours). The token wins a
// tie and always maps to `ClientError::Cancelled`.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::wire::{ErrorBody, ScrapeRequest, ScrapeResult};
use crate::{
    config::{consts::USER_AGENT, options::AppOptions},
    core::job::JobInput,
    error::ClientError,
};

#[derive(Clone, Debug)]
pub struct ScrapeClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl ScrapeClient {
    pub fn new(opts: &AppOptions) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(opts.connect_timeout())
            .timeout(opts.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, url: opts.scrape_url(), timeout: opts.timeout() })
    }

    #[inline]
    pub fn url(&self) -> &str { &self.url }

    /// Submit the whole batch. Resolves early with `Cancelled` once `cancel` fires;
    /// the server keeps working, we just stop waiting.
    pub async fn scrape(
        &self,
        jobs: &[JobInput],
        cancel: &CancellationToken,
    ) -> Result<ScrapeResult, ClientError> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        logf!("Net: POST {} jobs={}", self.url, jobs.len());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                logd!("Net: cancelled while waiting on {}", self.url);
                Err(ClientError::Cancelled)
            }
            res = self.send(jobs) => res,
        }
    }

    async fn send(&self, jobs: &[JobInput]) -> Result<ScrapeResult, ClientError> {
        let resp = self
            .http
            .post(&self.url)
            .json(&ScrapeRequest { jobs })
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            // Body is best-effort; a missing/garbled detail falls back to the generic text.
            let detail = match resp.bytes().await {
                Ok(b) => serde_json::from_slice::<ErrorBody>(&b).ok().and_then(|eb| eb.message()),
                Err(_) => None,
            };
            logd!("Net: HTTP {} detail={:?}", status.as_u16(), detail);
            return Err(ClientError::Server { status: status.as_u16(), detail });
        }

        let bytes = resp.bytes().await.map_err(|e| self.map_reqwest_error(e))?;
        let result: ScrapeResult =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Body(e.to_string()))?;

        logf!("Net: OK filename={:?} payload={}B", result.filename, result.file_b64.len());
        Ok(result)
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Transport(err)
        }
    }
}
