//! Tick source for the step timer
//!
//! A scheduled tick source is a tokio task sending `AppEvent::TimerTick(id)`
//! once per period. Whoever holds the `TickHandle` owns the task: dropping
//! the handle aborts it. Ids are unique per process so ticks already queued
//! from a cancelled source can be recognised and dropped by the receiver.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::events::AppEvent;

pub type TickerId = u64;

static NEXT_TICKER_ID: AtomicU64 = AtomicU64::new(1);

pub fn next_ticker_id() -> TickerId {
    NEXT_TICKER_ID.fetch_add(1, Ordering::Relaxed)
}

/// Owns one scheduled tick source.
#[derive(Debug)]
pub struct TickHandle {
    id: TickerId,
    task: Option<JoinHandle<()>>,
}

impl TickHandle {
    /// A handle with no task behind it; ticks are delivered by hand.
    pub fn detached(id: TickerId) -> Self {
        Self { id, task: None }
    }

    pub fn id(&self) -> TickerId {
        self.id
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(ticker_id = self.id, "Tick source cancelled");
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub trait TickScheduler: Send + Sync {
    fn schedule(&self, period: Duration) -> TickHandle;
}

/// Production scheduler backed by a tokio interval.
pub struct TokioTickScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
    runtime: Handle,
}

impl TokioTickScheduler {
    /// Must be called from within a tokio runtime.
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            tx,
            runtime: Handle::current(),
        }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule(&self, period: Duration) -> TickHandle {
        let id = next_ticker_id();
        let tx = self.tx.clone();

        let task = self.runtime.spawn(async move {
            // First tick one full period from now, not immediately.
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!(ticker_id = id, "tick");
                if tx.send(AppEvent::TimerTick(id)).is_err() {
                    break;
                }
            }
        });

        debug!(ticker_id = id, period_ms = period.as_millis() as u64, "Tick source scheduled");
        TickHandle {
            id,
            task: Some(task),
        }
    }
}

/// Scheduler that spawns nothing. Headless callers drive ticks themselves by
/// feeding `AppEvent::TimerTick(id)` for the id of the last handed-out handle.
#[derive(Default)]
pub struct ManualTickScheduler {
    scheduled: Mutex<Vec<TickerId>>,
}

impl ManualTickScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last_id(&self) -> Option<TickerId> {
        self.scheduled.lock().ok().and_then(|ids| ids.last().copied())
    }

    pub fn scheduled_count(&self) -> usize {
        self.scheduled.lock().map(|ids| ids.len()).unwrap_or(0)
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule(&self, _period: Duration) -> TickHandle {
        let id = next_ticker_id();
        if let Ok(mut ids) = self.scheduled.lock() {
            ids.push(id);
        }
        TickHandle::detached(id)
    }
}
