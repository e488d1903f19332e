//! User actions from the UI and how they reach the engine and the address bar.

use agenda_core::{AddressBar, AgendaEngine, EventBus, HostEvent};
use shared::protocol::fragment_of;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenDay(usize),
    CloseDay,
    Back,
    Forward,
    FollowLink(String),
    Host(HostEvent),
}

impl UiAction {
    fn name(&self) -> &'static str {
        match self {
            UiAction::OpenDay(_) => "open_day",
            UiAction::CloseDay => "close_day",
            UiAction::Back => "back",
            UiAction::Forward => "forward",
            UiAction::FollowLink(_) => "follow_link",
            UiAction::Host(_) => "host_event",
        }
    }
}

/// Actions for one frame of a day header.
///
/// egui reports Enter or Space on a focused widget as a click too, so a key
/// activation stands in for the click instead of adding to it. At most one
/// activation is produced per frame.
pub fn day_header_actions(
    index: usize,
    key_events: Vec<HostEvent>,
    clicked: bool,
) -> Vec<UiAction> {
    match key_events.into_iter().next() {
        Some(event) => vec![UiAction::Host(event)],
        None if clicked => vec![UiAction::OpenDay(index)],
        None => Vec::new(),
    }
}

/// Applies `action`. Address bar moves are announced on the bus the way a host would.
pub fn dispatch_action(
    engine: &mut AgendaEngine,
    bus: &EventBus,
    address: &AddressBar,
    action: UiAction,
    status: &mut String,
) {
    tracing::debug!(action = action.name(), "ui action");
    match action {
        UiAction::OpenDay(index) => engine.open_day_at(index),
        UiAction::CloseDay => engine.close(),
        UiAction::Back => {
            if address.back() {
                bus.emit(HostEvent::PopState);
            } else {
                *status = "Already at the start of history".to_string();
            }
        }
        UiAction::Forward => {
            if address.forward() {
                bus.emit(HostEvent::PopState);
            } else {
                *status = "Nothing to go forward to".to_string();
            }
        }
        UiAction::FollowLink(link) => {
            let link = link.trim();
            let fragment = fragment_of(link).or(Some(link).filter(|l| !l.is_empty()));
            if address.navigate(fragment) {
                bus.emit(HostEvent::HashChange);
            }
        }
        UiAction::Host(event) => {
            bus.emit(event);
        }
    }
    engine.pump();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use agenda_core::{
        parse_program, AgendaFormatter, DaySelection, EngineDeps, Key, KeyPress, ManualClock,
    };
    use chrono::NaiveDate;

    use super::*;

    fn setup() -> (AgendaEngine, EventBus, AddressBar) {
        let program = parse_program(include_str!("../../assets/program.json")).expect("program");
        let bus = EventBus::new();
        let address = AddressBar::default();
        let now = NaiveDate::from_ymd_opt(2025, 12, 29)
            .and_then(|d| d.and_hms_opt(9, 15, 0))
            .expect("now");
        let engine = AgendaEngine::mount(
            Arc::new(program),
            EngineDeps {
                clock: Arc::new(ManualClock::new(now)),
                history: Box::new(address.clone()),
                formatter: AgendaFormatter::default(),
                tick_interval: None,
            },
            &bus,
        );
        (engine, bus, address)
    }

    #[test]
    fn open_back_forward_cycle() {
        let (mut engine, bus, address) = setup();
        let mut status = String::new();

        dispatch_action(&mut engine, &bus, &address, UiAction::OpenDay(1), &mut status);
        assert_eq!(address.link(), "agenda:///#day=2025-12-30");

        dispatch_action(&mut engine, &bus, &address, UiAction::Back, &mut status);
        assert_eq!(engine.selection(), DaySelection::Closed);

        dispatch_action(&mut engine, &bus, &address, UiAction::Forward, &mut status);
        assert_eq!(engine.selection(), DaySelection::Open(1));
        assert!(status.is_empty());

        dispatch_action(&mut engine, &bus, &address, UiAction::Forward, &mut status);
        assert_eq!(status, "Nothing to go forward to");
    }

    #[test]
    fn keyboard_activation_of_header_opens_day_once() {
        let (mut engine, bus, address) = setup();
        let mut status = String::new();
        let before = address.history_len();

        let keys = vec![
            HostEvent::KeyDown(KeyPress::on_day(Key::Enter, "2025-12-30")),
            HostEvent::KeyDown(KeyPress::on_day(Key::Space, "2025-12-30")),
        ];
        let actions = day_header_actions(1, keys, true);
        assert_eq!(actions.len(), 1);
        for action in actions {
            dispatch_action(&mut engine, &bus, &address, action, &mut status);
        }
        assert_eq!(engine.selection(), DaySelection::Open(1));
        assert_eq!(address.history_len(), before + 1);

        dispatch_action(&mut engine, &bus, &address, UiAction::Back, &mut status);
        assert_eq!(engine.selection(), DaySelection::Closed);
        assert_eq!(address.link(), "agenda:///");
    }

    #[test]
    fn pointer_click_on_header_opens_day() {
        assert_eq!(
            day_header_actions(2, Vec::new(), true),
            vec![UiAction::OpenDay(2)]
        );
        assert!(day_header_actions(2, Vec::new(), false).is_empty());
    }

    #[test]
    fn pasted_link_opens_day() {
        let (mut engine, bus, address) = setup();
        let mut status = String::new();
        dispatch_action(
            &mut engine,
            &bus,
            &address,
            UiAction::FollowLink("agenda:///#day=2025-12-31".into()),
            &mut status,
        );
        assert_eq!(engine.selection(), DaySelection::Open(2));
    }

    #[test]
    fn escape_from_host_closes_day() {
        let (mut engine, bus, address) = setup();
        let mut status = String::new();
        dispatch_action(&mut engine, &bus, &address, UiAction::OpenDay(0), &mut status);
        dispatch_action(
            &mut engine,
            &bus,
            &address,
            UiAction::Host(HostEvent::KeyDown(KeyPress::new(Key::Escape))),
            &mut status,
        );
        assert_eq!(engine.selection(), DaySelection::Closed);
        assert_eq!(address.link(), "agenda:///");
    }
}
