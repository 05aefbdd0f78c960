//! End-to-end import flows against a scripted API, with tokio's clock paused.
//!
//! Tests:
//! - Blank input never reaches the API
//! - `done` on creation navigates without polling
//! - `queued` polls every 2s until a terminal status
//! - `blocked` during polling starts a countdown that re-enables submission
//! - 429 with `Retry-After` starts a cooldown
//! - Poll fetch failures are terminal

use async_trait::async_trait;
use avitolog_common::{
    run_cooldown, run_poll, ApiFailure, ImportEffect, ImportError, ImportJob, ImportStatus,
    ImportWorkflow, ImportsApi, POLL_INTERVAL,
};
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Paused-clock timers fire on millisecond ticks
const TIMER_SLACK: Duration = Duration::from_millis(50);

fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Replays canned responses and records every call.
#[derive(Default)]
struct ScriptedApi {
    create_responses: RefCell<VecDeque<Result<ImportJob, ApiFailure>>>,
    status_responses: RefCell<VecDeque<Result<ImportJob, ApiFailure>>>,
    created_urls: RefCell<Vec<String>>,
    polled: RefCell<Vec<(String, Instant)>>,
}

impl ScriptedApi {
    fn on_create(self, response: Result<ImportJob, ApiFailure>) -> Self {
        self.create_responses.borrow_mut().push_back(response);
        self
    }

    fn on_status(self, response: Result<ImportJob, ApiFailure>) -> Self {
        self.status_responses.borrow_mut().push_back(response);
        self
    }
}

#[async_trait(?Send)]
impl ImportsApi for ScriptedApi {
    async fn create_import(&self, url: &str) -> Result<ImportJob, ApiFailure> {
        self.created_urls.borrow_mut().push(url.to_string());
        self.create_responses
            .borrow_mut()
            .pop_front()
            .expect("unexpected create_import call")
    }

    async fn import_status(&self, job_id: &str) -> Result<ImportJob, ApiFailure> {
        self.polled
            .borrow_mut()
            .push((job_id.to_string(), Instant::now()));
        self.status_responses
            .borrow_mut()
            .pop_front()
            .expect("unexpected import_status call")
    }
}

fn job(id: &str, status: ImportStatus) -> ImportJob {
    ImportJob {
        id: Some(id.to_string()),
        status,
        ad_id: None,
        message: None,
        retry_after: None,
    }
}

/// Submit, and follow the job through polling the way the web controller does.
async fn submit(api: &ScriptedApi, wf: &mut ImportWorkflow, raw: &str) -> ImportEffect {
    let url = match wf.begin_submit(raw) {
        Ok(url) => url,
        Err(_) => return ImportEffect::Settled,
    };
    let effect = match api.create_import(&url).await {
        Ok(job) => wf.on_created(job),
        Err(failure) => wf.on_create_failed(&failure),
    };
    match effect {
        ImportEffect::StartPolling { job_id } => run_poll(api, &job_id, |e| wf.on_poll(e)).await,
        other => other,
    }
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_makes_no_request() {
    tracing_init();
    let api = ScriptedApi::default();
    let mut wf = ImportWorkflow::new();

    let effect = submit(&api, &mut wf, "   ").await;

    assert_eq!(effect, ImportEffect::Settled);
    assert!(api.created_urls.borrow().is_empty());
    assert!(matches!(wf.error(), Some(ImportError::Validation(_))));
}

#[tokio::test(start_paused = true)]
async fn test_non_blank_input_makes_exactly_one_request() {
    tracing_init();
    let api = ScriptedApi::default().on_create(Ok(ImportJob {
        ad_id: Some(5),
        ..job("1", ImportStatus::Done)
    }));
    let mut wf = ImportWorkflow::new();

    submit(&api, &mut wf, "  https://www.avito.ru/item_5 \n").await;

    assert_eq!(
        *api.created_urls.borrow(),
        vec!["https://www.avito.ru/item_5".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_done_on_creation_navigates_without_polling() {
    tracing_init();
    let api = ScriptedApi::default().on_create(Ok(ImportJob {
        ad_id: Some(42),
        ..job("1", ImportStatus::Done)
    }));
    let mut wf = ImportWorkflow::new();
    let started = Instant::now();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_42").await;

    assert_eq!(effect, ImportEffect::Navigate { ad_id: 42 });
    assert!(api.polled.borrow().is_empty());
    assert!(started.elapsed() < POLL_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_queued_job_is_polled_every_two_seconds() {
    tracing_init();
    let api = ScriptedApi::default()
        .on_create(Ok(job("7", ImportStatus::Queued)))
        .on_status(Ok(job("7", ImportStatus::Queued)))
        .on_status(Ok(job("7", ImportStatus::Processing)))
        .on_status(Ok(ImportJob {
            ad_id: Some(77),
            ..job("7", ImportStatus::Done)
        }));
    let mut wf = ImportWorkflow::new();
    let started = Instant::now();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_77").await;

    assert_eq!(effect, ImportEffect::Navigate { ad_id: 77 });
    let polled = api.polled.borrow();
    assert_eq!(polled.len(), 3);
    for (i, (job_id, at)) in polled.iter().enumerate() {
        assert_eq!(job_id, "7");
        let expected = POLL_INTERVAL * (i as u32 + 1);
        let offset = at.duration_since(started);
        assert!(offset >= expected && offset < expected + TIMER_SLACK);
    }
}

#[tokio::test(start_paused = true)]
async fn test_blocked_while_polling_counts_down_thirty_seconds() {
    tracing_init();
    let api = ScriptedApi::default()
        .on_create(Ok(job("3", ImportStatus::Queued)))
        .on_status(Ok(ImportJob {
            retry_after: Some(30.0),
            ..job("3", ImportStatus::Blocked)
        }));
    let mut wf = ImportWorkflow::new();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_3").await;
    assert_eq!(effect, ImportEffect::StartCooldown { seconds: 30 });
    assert_eq!(api.polled.borrow().len(), 1);

    let started = Instant::now();
    let mut ticks = 0;
    run_cooldown(|| {
        ticks += 1;
        wf.tick_cooldown()
    })
    .await;

    assert_eq!(ticks, 30);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(30) && elapsed < Duration::from_secs(30) + TIMER_SLACK);
    assert_eq!(wf.cooldown_remaining(), 0);
    assert!(wf.can_submit());
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_creation_starts_cooldown_from_header() {
    tracing_init();
    let api = ScriptedApi::default().on_create(Err(ApiFailure::http(
        429,
        Some(json!({"detail": "Request was throttled."})),
    )
    .with_retry_after(Some("15".to_string()))));
    let mut wf = ImportWorkflow::new();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_9").await;

    assert_eq!(effect, ImportEffect::StartCooldown { seconds: 15 });
    assert!(wf.error().is_none());
    assert_eq!(wf.cooldown_remaining(), 15);

    // A second submission during the cooldown is rejected before any request
    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_10").await;
    assert_eq!(effect, ImportEffect::Settled);
    assert_eq!(api.created_urls.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_error_status_while_polling_is_shown() {
    tracing_init();
    let api = ScriptedApi::default()
        .on_create(Ok(job("8", ImportStatus::Processing)))
        .on_status(Ok(ImportJob {
            message: Some("bad link".to_string()),
            ..job("8", ImportStatus::Error)
        }));
    let mut wf = ImportWorkflow::new();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_8").await;

    assert_eq!(effect, ImportEffect::Settled);
    assert_eq!(wf.error().map(|e| e.to_string()).as_deref(), Some("bad link"));
    assert_eq!(api.polled.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_poll_fetch_failure_stops_polling() {
    tracing_init();
    let api = ScriptedApi::default()
        .on_create(Ok(job("4", ImportStatus::Queued)))
        .on_status(Ok(job("4", ImportStatus::Queued)))
        .on_status(Err(ApiFailure::transport("Network error: offline")));
    let mut wf = ImportWorkflow::new();

    let effect = submit(&api, &mut wf, "https://www.avito.ru/item_4").await;

    assert_eq!(effect, ImportEffect::Settled);
    assert_eq!(
        wf.error(),
        Some(&ImportError::Server("Network error: offline".to_string()))
    );
    assert_eq!(api.polled.borrow().len(), 2);
    assert!(wf.can_submit());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_poll_future_stops_fetches() {
    tracing_init();
    let api = ScriptedApi::default()
        .on_create(Ok(job("5", ImportStatus::Queued)))
        .on_status(Ok(job("5", ImportStatus::Queued)));
    let mut wf = ImportWorkflow::new();

    let poll = submit(&api, &mut wf, "https://www.avito.ru/item_5");
    // Cancel between the first and the second tick
    let outcome = tokio::time::timeout(Duration::from_secs(3), poll).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(api.polled.borrow().len(), 1);
}
