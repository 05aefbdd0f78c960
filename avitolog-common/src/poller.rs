//! Timer-driven loops for import polling and the cooldown countdown
//!
//! Both loops are plain futures. The caller owns cancellation by dropping
//! the future (a Dioxus `Task::cancel`, a tokio abort, or scope teardown).

use crate::api_failure::ApiFailure;
use crate::import_job::ImportJob;
use crate::import_workflow::{ImportEffect, PollEvent};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Delay between status fetches
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Cooldown granularity
pub const COOLDOWN_TICK: Duration = Duration::from_secs(1);

/// The two import endpoints the workflow needs.
///
/// Futures are not `Send` because browser HTTP futures are not.
#[async_trait(?Send)]
pub trait ImportsApi {
    /// `POST /imports/` with `{url}`
    async fn create_import(&self, url: &str) -> Result<ImportJob, ApiFailure>;

    /// `GET /imports/{id}/`
    async fn import_status(&self, job_id: &str) -> Result<ImportJob, ApiFailure>;
}

/// Poll `job_id` every [`POLL_INTERVAL`] until `apply` returns anything other
/// than [`ImportEffect::ContinuePolling`], and return that effect.
///
/// A failed fetch is handed to `apply` like any other event; the loop itself
/// never retries.
pub async fn run_poll<A, F>(api: &A, job_id: &str, mut apply: F) -> ImportEffect
where
    A: ImportsApi + ?Sized,
    F: FnMut(PollEvent) -> ImportEffect,
{
    info!("Polling import job {}", job_id);
    loop {
        sleep(POLL_INTERVAL).await;

        let event = match api.import_status(job_id).await {
            Ok(job) => {
                debug!("Import job {} is {:?}", job_id, job.status);
                PollEvent::Snapshot(job)
            }
            Err(failure) => PollEvent::Failed(failure),
        };

        match apply(event) {
            ImportEffect::ContinuePolling => continue,
            effect => {
                info!("Stopped polling import job {}: {:?}", job_id, effect);
                return effect;
            }
        }
    }
}

/// Call `tick` once per [`COOLDOWN_TICK`] until it reports the countdown is over.
pub async fn run_cooldown<F>(mut tick: F)
where
    F: FnMut() -> bool,
{
    loop {
        sleep(COOLDOWN_TICK).await;
        if !tick() {
            debug!("Cooldown finished");
            return;
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
