use crate::{
    actions::{ActionDispatcher, WindowAction},
    api::{
        ApiError, BudgetStats, CategoryStats, DashboardSnapshot, ListState, PriorityStats,
        RecentList,
    },
    charts::{ChartError, ChartHandle, ChartRenderer, ChartSpec},
    pages::dashboard::repository::DashboardSource,
};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet, VecDeque},
};

pub type FetchResult = Result<DashboardSnapshot, ApiError>;

pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        total_lists: 4,
        bought_items: 17,
        used_budget: 1234.5,
        avg_completion: 83.456,
        recent_lists: Some(vec![
            RecentList {
                name: "Weekend barbecue supplies".into(),
                state: ListState::InProgress,
                completion_rate: 50.0,
            },
            RecentList {
                name: "Party".into(),
                state: ListState::Completed,
                completion_rate: 100.0,
            },
            RecentList {
                name: "Pantry".into(),
                state: ListState::Draft,
                completion_rate: 0.0,
            },
        ]),
        category_stats: Some(
            [("Vegetables", 4.0), ("Dairy", 2.0), ("Bakery", 7.0)]
                .into_iter()
                .collect::<CategoryStats>(),
        ),
        priority_stats: Some(PriorityStats {
            high: 1,
            medium: 5,
            low: 2,
        }),
        budget_stats: Some(BudgetStats {
            total_budget: 500.0,
            budget_used: 320.25,
            budget_remaining: 179.75,
        }),
    }
}

/// Answers every fetch with the same result.
pub struct StaticSource(FetchResult);

impl StaticSource {
    pub fn ok(snapshot: DashboardSnapshot) -> Self {
        Self(Ok(snapshot))
    }

    pub fn err(error: ApiError) -> Self {
        Self(Err(error))
    }
}

#[async_trait(?Send)]
impl DashboardSource for StaticSource {
    async fn fetch_dashboard(&self) -> FetchResult {
        self.0.clone()
    }
}

/// Each fetch takes the next receiver and resolves when the test sends on it.
pub struct ScriptedSource {
    pending: RefCell<VecDeque<oneshot::Receiver<FetchResult>>>,
}

impl ScriptedSource {
    pub fn new(receivers: Vec<oneshot::Receiver<FetchResult>>) -> Self {
        Self {
            pending: RefCell::new(receivers.into()),
        }
    }
}

#[async_trait(?Send)]
impl DashboardSource for ScriptedSource {
    async fn fetch_dashboard(&self) -> FetchResult {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::unknown("response dropped"))),
            None => Err(ApiError::unknown("no scripted response left")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Render(String, ChartHandle),
    Destroy(ChartHandle),
}

#[derive(Default)]
pub struct RecordingRenderer {
    missing: HashSet<String>,
    ops: RefCell<Vec<RenderOp>>,
    specs: RefCell<HashMap<String, ChartSpec>>,
    live: RefCell<HashSet<ChartHandle>>,
    next_id: Cell<u32>,
}

impl RecordingRenderer {
    pub fn with_missing_targets(targets: &[&str]) -> Self {
        Self {
            missing: targets.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn ops(&self) -> Vec<RenderOp> {
        self.ops.borrow().clone()
    }

    pub fn rendered_targets(&self) -> Vec<String> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                RenderOp::Render(target, _) => Some(target.clone()),
                RenderOp::Destroy(_) => None,
            })
            .collect()
    }

    pub fn last_spec(&self, target: &str) -> Option<ChartSpec> {
        self.specs.borrow().get(target).cloned()
    }

    pub fn live_handles(&self) -> usize {
        self.live.borrow().len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, target_id: &str, spec: &ChartSpec) -> Result<ChartHandle, ChartError> {
        if self.missing.contains(target_id) {
            return Err(ChartError::TargetMissing(target_id.to_string()));
        }
        let handle = ChartHandle(self.next_id.get() + 1);
        self.next_id.set(handle.0);
        self.ops
            .borrow_mut()
            .push(RenderOp::Render(target_id.to_string(), handle));
        self.specs
            .borrow_mut()
            .insert(target_id.to_string(), spec.clone());
        self.live.borrow_mut().insert(handle);
        Ok(handle)
    }

    fn destroy(&self, handle: ChartHandle) {
        self.ops.borrow_mut().push(RenderOp::Destroy(handle));
        self.live.borrow_mut().remove(&handle);
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    actions: RefCell<Vec<WindowAction>>,
}

impl RecordingDispatcher {
    pub fn actions(&self) -> Vec<WindowAction> {
        self.actions.borrow().clone()
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn do_action(&self, action: WindowAction) {
        self.actions.borrow_mut().push(action);
    }
}
