//! Import workflow state machine
//!
//! Pure decision logic for one import, from URL submission to resolution. Each
//! event returns an [`ImportEffect`] that the caller executes (navigate, start
//! or keep polling, start a cooldown). No timers or I/O live here.

use crate::api_failure::{error_message, ApiFailure};
use crate::cooldown::{cooldown_seconds, retry_after_seconds, Cooldown};
use crate::import_job::{ImportJob, ImportStatus};
use thiserror::Error;

pub const EMPTY_URL_MESSAGE: &str = "Enter a link to an Avito listing";
pub const MISSING_AD_MESSAGE: &str = "Import finished but the listing was not found";
pub const MISSING_JOB_ID_MESSAGE: &str = "Import started but the server returned no job id";
pub const IMPORT_FAILED_MESSAGE: &str = "Import failed";
pub const UNEXPECTED_STATUS_MESSAGE: &str = "Unexpected server status";

/// Why an import did not produce a listing
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Rejected client-side; no request was made
    #[error("{0}")]
    Validation(String),
    /// Server asked to slow down without saying for how long
    #[error("Too many requests. Try again later.")]
    RateLimited,
    /// Server reported success without the data needed to follow it
    #[error("{0}")]
    Integrity(String),
    /// Any other transport or application failure
    #[error("{0}")]
    Server(String),
    /// A submission or cooldown is already running
    #[error("An import is already in progress")]
    Busy,
}

/// Where the workflow currently is
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ImportPhase {
    #[default]
    Idle,
    /// Creation request outstanding
    Submitting,
    /// Waiting for the job to leave `queued`/`processing`
    Polling { job_id: String },
    /// Submission disabled until the countdown reaches zero
    CoolingDown,
}

/// What the caller must do after feeding an event to the workflow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportEffect {
    /// Open the imported listing
    Navigate { ad_id: u64 },
    /// Cancel any poll loop and start polling this job
    StartPolling { job_id: String },
    /// Cancel any countdown and start a new one
    StartCooldown { seconds: u32 },
    /// Keep the current poll loop running
    ContinuePolling,
    /// Nothing left to run; any error is already recorded
    Settled,
}

/// Result of one status fetch
#[derive(Clone, Debug, PartialEq)]
pub enum PollEvent {
    Snapshot(ImportJob),
    Failed(ApiFailure),
}

/// State of a single in-flight import.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportWorkflow {
    phase: ImportPhase,
    error: Option<ImportError>,
    cooldown: Cooldown,
}

impl ImportWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ImportPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&ImportError> {
        self.error.as_ref()
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown.remaining()
    }

    /// Job currently being polled, if any.
    pub fn polling_job(&self) -> Option<&str> {
        match &self.phase {
            ImportPhase::Polling { job_id } => Some(job_id),
            _ => None,
        }
    }

    /// Submission is allowed only with nothing outstanding and no cooldown.
    pub fn can_submit(&self) -> bool {
        self.phase == ImportPhase::Idle && !self.cooldown.is_active()
    }

    /// A request or poll is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            ImportPhase::Submitting | ImportPhase::Polling { .. }
        )
    }

    /// Validate the raw input and move to `Submitting`.
    ///
    /// Returns the trimmed URL to send. `Busy` leaves the state untouched.
    pub fn begin_submit(&mut self, raw: &str) -> Result<String, ImportError> {
        if !self.can_submit() {
            return Err(ImportError::Busy);
        }

        let url = raw.trim();
        if url.is_empty() {
            let err = ImportError::Validation(EMPTY_URL_MESSAGE.to_string());
            self.error = Some(err.clone());
            return Err(err);
        }

        self.error = None;
        self.phase = ImportPhase::Submitting;
        Ok(url.to_string())
    }

    /// The creation request returned a job.
    pub fn on_created(&mut self, job: ImportJob) -> ImportEffect {
        match job.status {
            ImportStatus::Queued | ImportStatus::Processing => match job.id {
                Some(job_id) => {
                    self.phase = ImportPhase::Polling {
                        job_id: job_id.clone(),
                    };
                    ImportEffect::StartPolling { job_id }
                }
                None => self.fail(ImportError::Integrity(MISSING_JOB_ID_MESSAGE.to_string())),
            },
            ImportStatus::Unrecognized => {
                self.fail(ImportError::Server(UNEXPECTED_STATUS_MESSAGE.to_string()))
            }
            _ => self.settle(job),
        }
    }

    /// The creation request failed.
    pub fn on_create_failed(&mut self, failure: &ApiFailure) -> ImportEffect {
        if failure.is_rate_limited() {
            return match retry_after_seconds(failure) {
                Some(seconds) => self.start_cooldown(seconds),
                None => self.fail(ImportError::RateLimited),
            };
        }
        self.fail(ImportError::Server(failure_message(failure)))
    }

    /// A poll tick finished.
    ///
    /// Events arriving after the workflow stopped polling are ignored.
    pub fn on_poll(&mut self, event: PollEvent) -> ImportEffect {
        if self.polling_job().is_none() {
            return ImportEffect::Settled;
        }

        match event {
            PollEvent::Snapshot(job) if job.status.is_terminal() => self.settle(job),
            // Unknown statuses are treated as still in progress
            PollEvent::Snapshot(_) => ImportEffect::ContinuePolling,
            PollEvent::Failed(failure) => {
                self.fail(ImportError::Server(failure_message(&failure)))
            }
        }
    }

    /// Start (or restart) the countdown. Clears any shown error.
    pub fn start_cooldown(&mut self, seconds: u32) -> ImportEffect {
        self.cooldown.start(seconds);
        self.error = None;
        self.phase = ImportPhase::CoolingDown;
        ImportEffect::StartCooldown { seconds }
    }

    /// One second of cooldown elapsed. Returns whether the countdown is still running.
    pub fn tick_cooldown(&mut self) -> bool {
        if self.cooldown.tick() > 0 {
            return true;
        }
        if self.phase == ImportPhase::CoolingDown {
            self.phase = ImportPhase::Idle;
        }
        false
    }

    /// Drop any outstanding request or countdown and return to idle.
    ///
    /// The recorded error stays visible.
    pub fn stop(&mut self) {
        self.phase = ImportPhase::Idle;
        self.cooldown.clear();
    }

    fn settle(&mut self, job: ImportJob) -> ImportEffect {
        match job.status {
            ImportStatus::Done => match job.ad_id {
                Some(ad_id) => {
                    self.phase = ImportPhase::Idle;
                    ImportEffect::Navigate { ad_id }
                }
                None => self.fail(ImportError::Integrity(MISSING_AD_MESSAGE.to_string())),
            },
            ImportStatus::Blocked => match job.retry_after.and_then(cooldown_seconds) {
                Some(seconds) => self.start_cooldown(seconds),
                None => self.fail(ImportError::RateLimited),
            },
            ImportStatus::Error => {
                let message = job
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| IMPORT_FAILED_MESSAGE.to_string());
                self.fail(ImportError::Server(message))
            }
            ImportStatus::Queued | ImportStatus::Processing | ImportStatus::Unrecognized => {
                ImportEffect::ContinuePolling
            }
        }
    }

    fn fail(&mut self, err: ImportError) -> ImportEffect {
        self.phase = ImportPhase::Idle;
        self.error = Some(err);
        ImportEffect::Settled
    }
}

/// Most specific message for a failed import request: body `message`, body
/// `detail`, transport error, then the general normalization.
fn failure_message(failure: &ApiFailure) -> String {
    failure
        .body_str("message")
        .or_else(|| failure.body_str("detail"))
        .map(str::to_string)
        .or_else(|| failure.transport.clone())
        .unwrap_or_else(|| error_message(failure))
}
