//! Agenda engine: clock state, day selection and deep-link synchronization.

use std::{sync::Arc, time::Duration};

use chrono::NaiveDateTime;
use crossbeam_channel::{Receiver, Sender};
use shared::{
    domain::{Day, Program},
    error::AgendaError,
    protocol::{day_fragment, is_day_fragment, parse_day_fragment},
};
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, ClockTicker},
    events::{EventHandler, EventKind, EventSource, HostEvent, Key, Subscription},
    format::AgendaFormatter,
    navigation::NavigationHistory,
    view::{agenda_view, AgendaView},
};

const SUBSCRIBED_EVENTS: [EventKind; 3] =
    [EventKind::HashChange, EventKind::PopState, EventKind::KeyDown];

/// Capabilities an engine needs from its host.
pub struct EngineDeps {
    pub clock: Arc<dyn Clock>,
    pub history: Box<dyn NavigationHistory>,
    pub formatter: AgendaFormatter,
    /// `None` disables the periodic refresh; `refresh_clock` still works.
    pub tick_interval: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    Closed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOutcome {
    pub ticked: bool,
    pub events: usize,
}

impl PumpOutcome {
    pub fn changed(&self) -> bool {
        self.ticked || self.events > 0
    }
}

pub struct AgendaEngine {
    program: Arc<Program>,
    clock: Arc<dyn Clock>,
    now: NaiveDateTime,
    selection: DaySelection,
    history: Box<dyn NavigationHistory>,
    formatter: AgendaFormatter,
    inbox: Receiver<HostEvent>,
    subscriptions: Vec<Subscription>,
    ticker: Option<ClockTicker>,
}

impl AgendaEngine {
    /// Mounts the engine: reads the clock, subscribes to host events and applies the
    /// fragment present at load time.
    pub fn mount(program: Arc<Program>, deps: EngineDeps, events: &dyn EventSource) -> Self {
        let (tx, inbox) = crossbeam_channel::unbounded::<HostEvent>();
        let subscriptions = SUBSCRIBED_EVENTS
            .iter()
            .map(|kind| events.subscribe(*kind, forward_to(tx.clone())))
            .collect();

        let mut engine = Self {
            now: deps.clock.now(),
            program,
            clock: deps.clock,
            selection: DaySelection::Closed,
            history: deps.history,
            formatter: deps.formatter,
            inbox,
            subscriptions,
            ticker: deps.tick_interval.map(ClockTicker::start),
        };
        engine.sync_with_location();
        info!(
            program = %engine.program.program_name,
            days = engine.program.days.len(),
            selection = ?engine.selection,
            "agenda engine mounted"
        );
        engine
    }

    /// Releases every subscription and the clock timer.
    pub fn unmount(self) {
        drop(self);
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn selection(&self) -> DaySelection {
        self.selection
    }

    pub fn selected_day(&self) -> Option<&Day> {
        match self.selection {
            DaySelection::Open(index) => self.program.days.get(index),
            DaySelection::Closed => None,
        }
    }

    pub fn formatter(&self) -> &AgendaFormatter {
        &self.formatter
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.ticker.as_ref().map(ClockTicker::interval)
    }

    pub fn current_fragment(&self) -> Option<String> {
        self.history.fragment()
    }

    pub fn refresh_clock(&mut self) {
        self.now = self.clock.now();
        debug!(now = %self.now, "clock refreshed");
    }

    /// Opens the day view for `date` and pushes its deep link.
    ///
    /// Opening while another day is open simply replaces it.
    pub fn open_day(&mut self, date: &str) -> Result<(), AgendaError> {
        let index = self
            .program
            .day_index(date)
            .ok_or_else(|| AgendaError::UnknownDay {
                date: date.to_string(),
            })?;
        self.open_day_at(index);
        Ok(())
    }

    pub fn open_day_at(&mut self, index: usize) {
        let Some(day) = self.program.days.get(index) else {
            debug!(index, "ignoring open for out of range day");
            return;
        };
        let fragment = day_fragment(day.date);
        self.selection = DaySelection::Open(index);
        debug!(%fragment, "day view opened");
        if let Err(err) = self.history.push_fragment(&fragment) {
            warn!(error = %err, %fragment, "could not record deep link; day view stays open");
        }
    }

    /// Closes the day view and strips a `#day=` fragment from the current entry.
    pub fn close(&mut self) {
        if self.selection != DaySelection::Closed {
            debug!("day view closed");
        }
        self.selection = DaySelection::Closed;
        let owns_fragment = self
            .history
            .fragment()
            .is_some_and(|fragment| is_day_fragment(&fragment));
        if owns_fragment {
            if let Err(err) = self.history.replace_with_path() {
                warn!(error = %err, "could not strip deep link; day view closed anyway");
            }
        }
    }

    /// Re-reads the navigation fragment. A matching day opens, anything else closes.
    pub fn sync_with_location(&mut self) {
        let fragment = self.history.fragment();
        let resolved = fragment
            .as_deref()
            .map(|fragment| {
                parse_day_fragment(fragment).and_then(|date| {
                    self.program
                        .day_index(date)
                        .ok_or_else(|| AgendaError::UnknownDay {
                            date: date.to_string(),
                        })
                })
            })
            .transpose();

        self.selection = match resolved {
            Ok(Some(index)) => DaySelection::Open(index),
            Ok(None) => DaySelection::Closed,
            Err(err) => {
                debug!(error = %err, "deep link ignored");
                DaySelection::Closed
            }
        };
    }

    pub fn handle_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::HashChange | HostEvent::PopState => self.sync_with_location(),
            HostEvent::KeyDown(press) => match (&press.key, press.focused_day.as_deref()) {
                (Key::Escape, _) => self.close(),
                (key, Some(date)) if key.activates() => {
                    if let Err(err) = self.open_day(date) {
                        debug!(error = %err, "day header activation ignored");
                    }
                }
                _ => {}
            },
        }
    }

    /// Applies pending ticks and queued host events, in arrival order.
    pub fn pump(&mut self) -> PumpOutcome {
        let ticked = self.ticker.as_ref().is_some_and(ClockTicker::poll);
        if ticked {
            self.refresh_clock();
        }

        let mut events = 0;
        while let Ok(event) = self.inbox.try_recv() {
            self.handle_event(&event);
            events += 1;
        }
        PumpOutcome { ticked, events }
    }

    pub fn view(&self) -> AgendaView {
        let selected = match self.selection {
            DaySelection::Open(index) => Some(index),
            DaySelection::Closed => None,
        };
        agenda_view(&self.program, selected, self.now, &self.formatter)
    }
}

impl Drop for AgendaEngine {
    fn drop(&mut self) {
        let released = self.subscriptions.len();
        self.subscriptions.clear();
        self.ticker = None;
        info!(released, "agenda engine unmounted");
    }
}

fn forward_to(tx: Sender<HostEvent>) -> EventHandler {
    Arc::new(move |event: &HostEvent| {
        // The receiver only disappears once the engine is gone.
        let _ = tx.send(event.clone());
    })
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
