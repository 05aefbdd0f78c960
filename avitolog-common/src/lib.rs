//! avitolog-common - framework-free logic for the avitolog front-end
//!
//! Holds the import job model, the import workflow state machine, cooldown
//! arithmetic, API error normalization and the timer loops that drive polling.
//! Nothing here touches the DOM, so it is tested natively.

pub mod api_failure;
pub mod cooldown;
pub mod import_job;
pub mod import_workflow;
pub mod poller;

pub use api_failure::{error_message, ApiFailure};
pub use cooldown::{cooldown_seconds, retry_after_seconds, Cooldown};
pub use import_job::{ImportJob, ImportStatus};
pub use import_workflow::{ImportEffect, ImportError, ImportPhase, ImportWorkflow, PollEvent};
pub use poller::{run_cooldown, run_poll, ImportsApi, COOLDOWN_TICK, POLL_INTERVAL};
