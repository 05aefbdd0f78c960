//! Drives the import workflow from the landing page
//!
//! Wraps [`ImportWorkflow`] in signals and owns the two timers it needs: the
//! creation + poll cycle and the cooldown countdown. Both run as Dioxus tasks
//! and are cancelled by [`ImportController::stop`] or when the owning
//! component unmounts.

use crate::api::ApiClient;
use crate::Route;
use avitolog_common::{run_cooldown, run_poll, ImportEffect, ImportError, ImportWorkflow, ImportsApi};
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

pub struct ImportController<A: 'static = ApiClient> {
    workflow: Signal<ImportWorkflow>,
    api: Signal<A>,
    on_navigate: Callback<u64>,
    cycle_task: Signal<Option<Task>>,
    cooldown_task: Signal<Option<Task>>,
}

impl<A: 'static> Clone for ImportController<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for ImportController<A> {}

impl<A: ImportsApi + Clone + 'static> ImportController<A> {
    /// Submission is disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.workflow.read().is_busy()
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.workflow.read().cooldown_remaining()
    }

    /// Message for the current error. Rejected submissions are not shown.
    pub fn error_message(&self) -> Option<String> {
        match self.workflow.read().error() {
            Some(ImportError::Busy) | None => None,
            Some(err) => Some(err.to_string()),
        }
    }

    /// Validate `raw` and start an import cycle.
    ///
    /// Does nothing while a cycle or cooldown is active.
    pub fn submit(&self, raw: &str) {
        let mut workflow = self.workflow;
        let url = match workflow.write().begin_submit(raw) {
            Ok(url) => url,
            Err(err) => {
                debug!("Import not submitted: {}", err);
                return;
            }
        };

        let controller = *self;
        let api = self.api.read().clone();
        let task = spawn(async move {
            info!("Importing {}", url);
            let effect = match api.create_import(&url).await {
                Ok(job) => workflow.write().on_created(job),
                Err(failure) => {
                    warn!("Import request failed: {}", failure);
                    workflow.write().on_create_failed(&failure)
                }
            };

            let effect = match effect {
                ImportEffect::StartPolling { job_id } => {
                    run_poll(&api, &job_id, |event| workflow.write().on_poll(event)).await
                }
                other => other,
            };

            let mut cycle_task = controller.cycle_task;
            cycle_task.set(None);
            controller.apply(effect);
        });

        self.replace_cycle(Some(task));
    }

    /// Cancel both timers. The last error stays visible.
    pub fn stop(&self) {
        self.replace_cycle(None);
        self.replace_cooldown(None);
        let mut workflow = self.workflow;
        workflow.write().stop();
    }

    /// Cancel both timers on teardown without touching state.
    pub fn dispose(&self) {
        self.replace_cycle(None);
        self.replace_cooldown(None);
    }

    fn apply(&self, effect: ImportEffect) {
        match effect {
            ImportEffect::Navigate { ad_id } => {
                info!("Import finished, opening ad {}", ad_id);
                self.on_navigate.call(ad_id);
            }
            ImportEffect::StartCooldown { seconds } => self.start_cooldown(seconds),
            ImportEffect::StartPolling { job_id } => {
                // The cycle task polls by itself; nothing else starts a poll
                warn!("Unexpected request to poll job {}", job_id);
            }
            ImportEffect::ContinuePolling | ImportEffect::Settled => {}
        }
    }

    fn start_cooldown(&self, seconds: u32) {
        info!("Import cooldown for {}s", seconds);
        let mut workflow = self.workflow;
        let controller = *self;
        let task = spawn(async move {
            run_cooldown(|| workflow.write().tick_cooldown()).await;
            let mut cooldown_task = controller.cooldown_task;
            cooldown_task.set(None);
        });
        self.replace_cooldown(Some(task));
    }

    fn replace_cycle(&self, task: Option<Task>) {
        let mut cycle_task = self.cycle_task;
        if let Some(old) = cycle_task.take() {
            old.cancel();
        }
        cycle_task.set(task);
    }

    fn replace_cooldown(&self, task: Option<Task>) {
        let mut cooldown_task = self.cooldown_task;
        if let Some(old) = cooldown_task.take() {
            old.cancel();
        }
        cooldown_task.set(task);
    }
}

/// Create a controller bound to the current component.
///
/// Timers are cancelled when the component unmounts. A finished import opens
/// the created ad.
pub fn use_import_controller() -> ImportController {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let on_navigate = use_callback(move |id: u64| {
        navigator.push(Route::Ad { id });
    });
    use_import_controller_with(move || api, on_navigate)
}

/// Same as [`use_import_controller`] over any [`ImportsApi`], with
/// `on_navigate` receiving the created ad id.
pub fn use_import_controller_with<A: ImportsApi + Clone + 'static>(
    api: impl FnOnce() -> A,
    on_navigate: Callback<u64>,
) -> ImportController<A> {
    let workflow = use_signal(ImportWorkflow::new);
    let api = use_signal(api);
    let cycle_task = use_signal(|| None::<Task>);
    let cooldown_task = use_signal(|| None::<Task>);

    let controller = ImportController {
        workflow,
        api,
        on_navigate,
        cycle_task,
        cooldown_task,
    };

    use_drop(move || controller.dispose());

    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use avitolog_common::{ApiFailure, ImportJob, ImportStatus};
    use dioxus_core::{NoOpMutations, VirtualDom};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Creation always queues job "1"; polls replay `statuses`, then stay queued.
    #[derive(Clone, Default)]
    struct ScriptedApi {
        statuses: Rc<RefCell<VecDeque<ImportJob>>>,
        polls: Rc<Cell<usize>>,
    }

    impl PartialEq for ScriptedApi {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.polls, &other.polls)
        }
    }

    #[async_trait(?Send)]
    impl ImportsApi for ScriptedApi {
        async fn create_import(&self, _url: &str) -> Result<ImportJob, ApiFailure> {
            Ok(job(ImportStatus::Queued))
        }

        async fn import_status(&self, _job_id: &str) -> Result<ImportJob, ApiFailure> {
            self.polls.set(self.polls.get() + 1);
            let next = self.statuses.borrow_mut().pop_front();
            Ok(next.unwrap_or_else(|| job(ImportStatus::Queued)))
        }
    }

    fn job(status: ImportStatus) -> ImportJob {
        ImportJob {
            id: Some("1".to_string()),
            status,
            ad_id: None,
            message: None,
            retry_after: None,
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Scenario {
        /// Start a 10s cooldown twice in a row
        DoubleCooldown,
        /// Submit a listing URL
        Submit,
    }

    thread_local! {
        static CONTROLLER: Cell<Option<ImportController<ScriptedApi>>> = const { Cell::new(None) };
        static MOUNTED: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
        static NAVIGATED: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
    }

    #[component]
    fn Harness(api: ScriptedApi, scenario: Scenario) -> Element {
        let mounted = use_signal(|| true);
        MOUNTED.with(|cell| cell.set(Some(mounted)));

        rsx! {
            if mounted() {
                Host { api, scenario }
            }
        }
    }

    #[component]
    fn Host(api: ScriptedApi, scenario: Scenario) -> Element {
        let on_navigate = use_callback(|id: u64| NAVIGATED.with(|ids| ids.borrow_mut().push(id)));
        let controller = use_import_controller_with(move || api, on_navigate);

        use_hook(move || {
            CONTROLLER.with(|cell| cell.set(Some(controller)));
            match scenario {
                Scenario::DoubleCooldown => {
                    let mut workflow = controller.workflow;
                    workflow.write().start_cooldown(10);
                    controller.start_cooldown(10);
                    controller.start_cooldown(10);
                }
                Scenario::Submit => controller.submit("https://www.avito.ru/item_1"),
            }
        });

        rsx! {}
    }

    fn mount(api: &ScriptedApi, scenario: Scenario) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                api: api.clone(),
                scenario,
            },
        );
        dom.rebuild_in_place();
        dom
    }

    fn controller() -> ImportController<ScriptedApi> {
        CONTROLLER
            .with(|cell| cell.get())
            .expect("controller was not created")
    }

    /// Run spawned tasks until `duration` of paused time has elapsed.
    async fn advance(dom: &mut VirtualDom, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let woke = tokio::select! {
                _ = dom.wait_for_work() => true,
                _ = tokio::time::sleep_until(deadline) => false,
            };
            if !woke {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_cooldown_replaces_running_one() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::DoubleCooldown);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(3500)).await;
        assert_eq!(dom.in_runtime(|| controller.cooldown_remaining()), 7);

        advance(&mut dom, Duration::from_secs(7)).await;
        dom.in_runtime(|| {
            assert_eq!(controller.cooldown_remaining(), 0);
            assert!(controller.cooldown_task.peek().is_none());
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_import_is_polled_until_disposed() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::Submit);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(5500)).await;
        assert_eq!(api.polls.get(), 2);
        assert!(dom.in_runtime(|| controller.is_busy()));

        dom.in_runtime(|| controller.dispose());
        advance(&mut dom, Duration::from_secs(10)).await;
        assert_eq!(api.polls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_cooldown() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::DoubleCooldown);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(2500)).await;
        dom.in_runtime(|| controller.dispose());
        advance(&mut dom, Duration::from_secs(5)).await;

        dom.in_runtime(|| {
            assert_eq!(controller.cooldown_remaining(), 8);
            assert!(controller.cooldown_task.peek().is_none());
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_polling_and_allows_resubmit() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::Submit);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(2500)).await;
        assert_eq!(api.polls.get(), 1);

        dom.in_runtime(|| controller.stop());
        advance(&mut dom, Duration::from_secs(6)).await;

        assert_eq!(api.polls.get(), 1);
        dom.in_runtime(|| {
            assert!(!controller.is_busy());
            assert!(controller.workflow.peek().can_submit());
        });
    }

    fn unmount(dom: &mut VirtualDom) {
        let mut mounted = MOUNTED
            .with(|cell| cell.get())
            .expect("harness was not rendered");
        dom.in_runtime(|| mounted.set(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_polling() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::Submit);

        advance(&mut dom, Duration::from_millis(2500)).await;
        assert_eq!(api.polls.get(), 1);

        unmount(&mut dom);
        advance(&mut dom, Duration::from_secs(10)).await;
        assert_eq!(api.polls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_cooldown() {
        let api = ScriptedApi::default();
        let mut dom = mount(&api, Scenario::DoubleCooldown);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(1500)).await;
        assert_eq!(dom.in_runtime(|| controller.cooldown_remaining()), 9);

        // A surviving countdown would write to the dropped workflow and panic
        unmount(&mut dom);
        advance(&mut dom, Duration::from_secs(10)).await;
        assert!(dom.in_runtime(|| controller.workflow.try_peek().is_err()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocked_poll_starts_cooldown() {
        let api = ScriptedApi::default();
        api.statuses.borrow_mut().push_back(ImportJob {
            retry_after: Some(5.0),
            ..job(ImportStatus::Blocked)
        });
        let mut dom = mount(&api, Scenario::Submit);
        let controller = controller();

        advance(&mut dom, Duration::from_millis(4500)).await;
        assert_eq!(api.polls.get(), 1);
        dom.in_runtime(|| {
            assert!(!controller.is_busy());
            assert_eq!(controller.cooldown_remaining(), 3);
            assert!(controller.cycle_task.peek().is_none());
        });

        advance(&mut dom, Duration::from_secs(3)).await;
        dom.in_runtime(|| {
            assert_eq!(controller.cooldown_remaining(), 0);
            assert!(controller.workflow.peek().can_submit());
        });
        assert_eq!(api.polls.get(), 1);
        assert!(NAVIGATED.with(|ids| ids.borrow().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_poll_navigates_to_ad() {
        let api = ScriptedApi::default();
        api.statuses.borrow_mut().push_back(ImportJob {
            ad_id: Some(42),
            ..job(ImportStatus::Done)
        });
        let mut dom = mount(&api, Scenario::Submit);

        advance(&mut dom, Duration::from_millis(2500)).await;

        assert_eq!(NAVIGATED.with(|ids| ids.borrow().clone()), vec![42]);
        assert!(!dom.in_runtime(|| controller().is_busy()));
    }
}
