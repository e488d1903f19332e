//! Wall-clock sources and the periodic refresh tick.

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::{Local, NaiveDateTime, TimeDelta};
use crossbeam_channel::{Receiver, TryRecvError};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Source of the viewer's local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Periodic tick owned by a mounted engine. Dropping it stops the timer.
pub struct ClockTicker {
    interval: Duration,
    rx: Receiver<Instant>,
}

impl ClockTicker {
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_secs(1));
        Self {
            interval,
            rx: crossbeam_channel::tick(interval),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drains pending ticks without blocking; returns whether any fired.
    pub fn poll(&self) -> bool {
        let mut fired = false;
        loop {
            match self.rx.try_recv() {
                Ok(_) => fired = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return fired,
            }
        }
    }

    /// Blocks until the next tick.
    pub fn wait(&self) -> bool {
        self.rx.recv().is_ok()
    }
}
