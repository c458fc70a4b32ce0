use super::{charts::ChartSlot, repository::DashboardSource};
use crate::{
    actions::{ActionDispatcher, ActionTarget, BrowserActionDispatcher, WindowAction},
    api::{ApiClient, ApiError, DashboardSnapshot},
    charts::{ChartError, ChartHandle, ChartJsRenderer, ChartRenderer, ChartSpec},
    error::DashboardError,
};
use chrono::{DateTime, Local};
use leptos::*;
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

pub const NEW_LIST_MODEL: &str = "shopping.list";
pub const BUDGET_REPORT_MODEL: &str = "shopping.budget.report.wizard";
pub const UPDATE_PRICES_MODEL: &str = "shopping.update.prices.wizard";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub snapshot: Option<DashboardSnapshot>,
    pub error: Option<ApiError>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Local>>,
}

/// Collaborators the host injects into the dashboard.
#[derive(Clone)]
pub struct DashboardDeps {
    pub source: Rc<dyn DashboardSource>,
    pub charts: Option<Rc<dyn ChartRenderer>>,
    pub dispatcher: Rc<dyn ActionDispatcher>,
}

impl DashboardDeps {
    /// Live API client, Chart.js when the page loaded it, and DOM event
    /// dispatch.
    pub fn browser() -> Self {
        let charts = match ChartJsRenderer::detect() {
            Ok(renderer) => Some(Rc::new(renderer) as Rc<dyn ChartRenderer>),
            Err(err) => {
                log::warn!("{}; dashboard charts are disabled", err);
                None
            }
        };
        Self {
            source: Rc::new(ApiClient::new()),
            charts,
            dispatcher: Rc::new(BrowserActionDispatcher),
        }
    }
}

/// Records the outcome of a load started from the view. Failures are
/// already in `state`, so they only go to the debug log here.
pub fn log_load_outcome(trigger: &str, result: Result<(), DashboardError>) -> bool {
    match result {
        Ok(()) => {
            log::debug!("dashboard {} finished", trigger);
            true
        }
        Err(err) => {
            log::debug!("dashboard {} failed: {}", trigger, err);
            false
        }
    }
}

#[derive(Clone)]
pub struct DashboardController {
    pub state: RwSignal<DashboardState>,
    source: Rc<dyn DashboardSource>,
    charts: Option<Rc<dyn ChartRenderer>>,
    dispatcher: Rc<dyn ActionDispatcher>,
    chart_handles: Rc<RefCell<BTreeMap<ChartSlot, ChartHandle>>>,
    in_flight: Rc<Cell<usize>>,
    disposed: Rc<Cell<bool>>,
}

impl DashboardController {
    pub fn new(deps: DashboardDeps) -> Self {
        Self {
            state: create_rw_signal(DashboardState::default()),
            source: deps.source,
            charts: deps.charts,
            dispatcher: deps.dispatcher,
            chart_handles: Rc::new(RefCell::new(BTreeMap::new())),
            in_flight: Rc::new(Cell::new(0)),
            disposed: Rc::new(Cell::new(false)),
        }
    }

    pub fn charts_available(&self) -> bool {
        self.charts.is_some()
    }

    /// Initial load when the view is shown.
    pub async fn activate(&self) -> Result<(), DashboardError> {
        log::debug!("activating shopping dashboard");
        self.load().await
    }

    /// Reloads and re-renders. Overlapping calls are not coalesced; the
    /// response that resolves last is what stays on screen.
    pub async fn refresh(&self) -> Result<(), DashboardError> {
        self.load().await
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
        self.destroy_charts();
    }

    pub fn open_new_list(&self) {
        self.dispatcher.do_action(
            WindowAction::form(NEW_LIST_MODEL, ActionTarget::Current).with_default_form_view(),
        );
    }

    pub fn open_budget_report(&self) {
        self.dispatcher
            .do_action(WindowAction::form(BUDGET_REPORT_MODEL, ActionTarget::New));
    }

    pub fn open_update_prices(&self) {
        self.dispatcher
            .do_action(WindowAction::form(UPDATE_PRICES_MODEL, ActionTarget::New));
    }

    async fn load(&self) -> Result<(), DashboardError> {
        self.begin_request();
        let result = self.source.fetch_dashboard().await;
        self.finish_request();

        if self.disposed.get() {
            log::debug!("dashboard disposed before the response arrived");
            return Ok(());
        }

        match result {
            Ok(snapshot) => {
                let specs = ChartSlot::ALL.map(|slot| (slot, slot.build(&snapshot)));
                self.state.try_update(|state| {
                    state.snapshot = Some(snapshot);
                    state.error = None;
                    state.last_updated = Some(Local::now());
                });
                self.render_charts(specs);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load dashboard data: {}", err);
                self.state.try_update(|state| state.error = Some(err.clone()));
                Err(DashboardError::FetchFailed(err))
            }
        }
    }

    fn begin_request(&self) {
        self.in_flight.set(self.in_flight.get() + 1);
        self.state.try_update(|state| state.loading = true);
    }

    fn finish_request(&self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        self.state.try_update(|state| state.loading = remaining > 0);
    }

    fn render_charts(&self, specs: [(ChartSlot, Option<ChartSpec>); 3]) {
        let Some(renderer) = self.charts.as_ref() else {
            return;
        };
        for (slot, spec) in specs {
            let previous = self.chart_handles.borrow_mut().remove(&slot);
            if let Some(handle) = previous {
                renderer.destroy(handle);
            }
            let Some(spec) = spec else {
                continue;
            };
            match renderer.render(slot.target_id(), &spec) {
                Ok(handle) => {
                    self.chart_handles.borrow_mut().insert(slot, handle);
                }
                Err(ChartError::TargetMissing(target)) => {
                    log::debug!("skipping chart, no element #{}", target);
                }
                Err(err) => log::warn!("{}", err),
            }
        }
    }

    fn destroy_charts(&self) {
        let handles = std::mem::take(&mut *self.chart_handles.borrow_mut());
        if let Some(renderer) = self.charts.as_ref() {
            for handle in handles.into_values() {
                renderer.destroy(handle);
            }
        }
    }
}
