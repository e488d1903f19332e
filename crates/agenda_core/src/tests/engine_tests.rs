use super::*;
use crate::{
    clock::ManualClock,
    events::{EventBus, KeyPress},
    navigation::AddressBar,
};
use chrono::{Locale, NaiveDate, TimeDelta};
use shared::domain::{DayDate, Session, SessionStatus, TimeOfDay};

struct RestrictedHistory {
    fragment: Option<String>,
}

impl NavigationHistory for RestrictedHistory {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn push_fragment(&mut self, _fragment: &str) -> Result<(), AgendaError> {
        Err(AgendaError::history_unavailable("sandboxed host"))
    }

    fn replace_with_path(&mut self) -> Result<(), AgendaError> {
        Err(AgendaError::history_unavailable("sandboxed host"))
    }
}

fn session(title: &str, start: &str, end: &str) -> Session {
    Session {
        title: title.into(),
        start_time: TimeOfDay::parse(start).expect("start"),
        end_time: TimeOfDay::parse(end).expect("end"),
        speakers: vec!["Prof. Silva".into(), "Dr. Raj".into()],
    }
}

fn program() -> Arc<Program> {
    let day = |date: &str| Day {
        date: DayDate::parse(date).expect("date"),
        sessions: vec![
            session("Opening", "09:00", "10:00"),
            session("Panel", "10:00", "11:30"),
        ],
    };
    Arc::new(Program {
        organization: Some("Faculty of Commerce".into()),
        program_name: "Research Week".into(),
        program_label: None,
        venue: "Main Auditorium".into(),
        days: vec![day("2025-12-29"), day("2025-12-30"), day("2025-12-31")],
    })
}

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, day)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("timestamp")
}

struct Harness {
    engine: AgendaEngine,
    bus: EventBus,
    bar: AddressBar,
    clock: ManualClock,
}

fn mount_with(fragment: Option<&str>) -> Harness {
    let bus = EventBus::new();
    let bar = AddressBar::with_fragment("/", fragment);
    let clock = ManualClock::new(at(29, 9, 30));
    let engine = AgendaEngine::mount(
        program(),
        EngineDeps {
            clock: Arc::new(clock.clone()),
            history: Box::new(bar.clone()),
            formatter: AgendaFormatter::new(Locale::en_US),
            tick_interval: None,
        },
        &bus,
    );
    Harness {
        engine,
        bus,
        bar,
        clock,
    }
}

#[test]
fn starts_closed_without_fragment() {
    let h = mount_with(None);
    assert_eq!(h.engine.selection(), DaySelection::Closed);
    assert!(h.engine.selected_day().is_none());
}

#[test]
fn fragment_on_load_opens_matching_day() {
    let h = mount_with(Some("#day=2025-12-30"));
    assert_eq!(h.engine.selection(), DaySelection::Open(1));
    assert_eq!(
        h.engine.selected_day().map(|d| d.date.to_string()),
        Some("2025-12-30".to_string())
    );
}

#[test]
fn unknown_or_malformed_fragment_stays_closed() {
    for fragment in ["#day=2099-01-01", "#day=2025-12-3", "#agenda", "#day=2025-13-40"] {
        let h = mount_with(Some(fragment));
        assert_eq!(h.engine.selection(), DaySelection::Closed, "{fragment}");
        assert_eq!(h.bar.fragment().as_deref(), Some(fragment));
    }
}

#[test]
fn open_day_pushes_fragment() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-31").expect("open");
    assert_eq!(h.engine.selection(), DaySelection::Open(2));
    assert_eq!(h.bar.fragment().as_deref(), Some("#day=2025-12-31"));
    assert_eq!(h.bar.link(), "agenda:///#day=2025-12-31");
}

#[test]
fn opening_same_day_twice_is_idempotent() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-29").expect("open");
    let first = (h.engine.selection(), h.bar.fragment());
    h.engine.open_day("2025-12-29").expect("open again");
    assert_eq!((h.engine.selection(), h.bar.fragment()), first);
}

#[test]
fn opening_another_day_replaces_selection() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-29").expect("open");
    h.engine.open_day("2025-12-30").expect("open other");
    assert_eq!(h.engine.selection(), DaySelection::Open(1));
    assert_eq!(h.bar.fragment().as_deref(), Some("#day=2025-12-30"));
}

#[test]
fn opening_unknown_day_reports_and_keeps_state() {
    let mut h = mount_with(None);
    let err = h.engine.open_day("2026-01-01").expect_err("unknown");
    assert!(matches!(err, AgendaError::UnknownDay { .. }));
    assert_eq!(h.engine.selection(), DaySelection::Closed);
    assert_eq!(h.bar.fragment(), None);
}

#[test]
fn deep_link_round_trips_through_fresh_mount() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-30").expect("open");
    let shared_fragment = h.bar.fragment();
    h.engine.unmount();

    let reloaded = mount_with(shared_fragment.as_deref());
    assert_eq!(reloaded.engine.selection(), DaySelection::Open(1));
}

#[test]
fn close_strips_day_fragment() {
    let mut h = mount_with(Some("#day=2025-12-29"));
    h.engine.close();
    assert_eq!(h.engine.selection(), DaySelection::Closed);
    assert_eq!(h.bar.fragment(), None);
    assert_eq!(h.bar.link(), "agenda:///");
}

#[test]
fn close_leaves_foreign_fragment_untouched() {
    let mut h = mount_with(Some("#speakers"));
    h.engine.close();
    assert_eq!(h.bar.fragment().as_deref(), Some("#speakers"));
}

#[test]
fn escape_closes_and_strips_fragment() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-29").expect("open");
    h.bus.emit(HostEvent::KeyDown(KeyPress::new(Key::Escape)));
    assert_eq!(h.engine.selection(), DaySelection::Open(0));

    let outcome = h.engine.pump();
    assert_eq!(outcome.events, 1);
    assert_eq!(h.engine.selection(), DaySelection::Closed);
    assert_eq!(h.bar.fragment(), None);
}

#[test]
fn enter_or_space_on_day_header_opens_it() {
    let mut h = mount_with(None);
    h.bus
        .emit(HostEvent::KeyDown(KeyPress::on_day(Key::Enter, "2025-12-30")));
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Open(1));

    h.bus
        .emit(HostEvent::KeyDown(KeyPress::on_day(Key::Space, "2025-12-31")));
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Open(2));

    h.bus.emit(HostEvent::KeyDown(KeyPress::on_day(
        Key::Other("a".into()),
        "2025-12-29",
    )));
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Open(2));
}

#[test]
fn pump_applies_events_in_arrival_order() {
    let mut h = mount_with(None);
    h.bus
        .emit(HostEvent::KeyDown(KeyPress::on_day(Key::Enter, "2025-12-29")));
    h.bus.emit(HostEvent::KeyDown(KeyPress::new(Key::Escape)));
    assert_eq!(h.engine.pump().events, 2);
    assert_eq!(h.engine.selection(), DaySelection::Closed);

    h.bus.emit(HostEvent::KeyDown(KeyPress::new(Key::Escape)));
    h.bus
        .emit(HostEvent::KeyDown(KeyPress::on_day(Key::Enter, "2025-12-29")));
    assert_eq!(h.engine.pump().events, 2);
    assert_eq!(h.engine.selection(), DaySelection::Open(0));
}

#[test]
fn hash_change_follows_address_bar() {
    let mut h = mount_with(None);
    h.bar.navigate(Some("#day=2025-12-31"));
    h.bus.emit(HostEvent::HashChange);
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Open(2));

    h.bar.navigate(Some("#day=2099-01-01"));
    h.bus.emit(HostEvent::HashChange);
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Closed);
}

#[test]
fn back_navigation_pops_to_previous_day() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-29").expect("open");
    h.engine.open_day("2025-12-30").expect("open");

    assert!(h.bar.back());
    h.bus.emit(HostEvent::PopState);
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Open(0));

    assert!(h.bar.back());
    h.bus.emit(HostEvent::PopState);
    h.engine.pump();
    assert_eq!(h.engine.selection(), DaySelection::Closed);
}

#[test]
fn restricted_history_still_transitions() {
    let bus = EventBus::new();
    let mut engine = AgendaEngine::mount(
        program(),
        EngineDeps {
            clock: Arc::new(ManualClock::new(at(29, 8, 0))),
            history: Box::new(RestrictedHistory {
                fragment: Some("#day=2025-12-29".into()),
            }),
            formatter: AgendaFormatter::default(),
            tick_interval: None,
        },
        &bus,
    );
    assert_eq!(engine.selection(), DaySelection::Open(0));

    engine.close();
    assert_eq!(engine.selection(), DaySelection::Closed);

    engine.open_day("2025-12-31").expect("open");
    assert_eq!(engine.selection(), DaySelection::Open(2));
}

#[test]
fn clock_refresh_moves_current_session() {
    let mut h = mount_with(None);
    let statuses = |engine: &AgendaEngine| -> Vec<SessionStatus> {
        engine.view().days[0]
            .sessions
            .iter()
            .map(|s| s.status)
            .collect()
    };
    assert_eq!(
        statuses(&h.engine),
        vec![SessionStatus::Current, SessionStatus::Upcoming]
    );

    h.clock.advance(TimeDelta::minutes(30));
    assert_eq!(
        statuses(&h.engine),
        vec![SessionStatus::Current, SessionStatus::Upcoming],
        "status only changes on refresh"
    );

    h.engine.refresh_clock();
    assert_eq!(h.engine.now(), at(29, 10, 0));
    assert_eq!(
        statuses(&h.engine),
        vec![SessionStatus::Finished, SessionStatus::Current]
    );
}

#[test]
fn view_carries_formatted_header_and_sessions() {
    let mut h = mount_with(None);
    h.engine.open_day("2025-12-29").expect("open");
    let view = h.engine.view();

    assert_eq!(view.header.date_range, "December 29 — 31, 2025");
    assert_eq!(view.header.organization.as_deref(), Some("Faculty of Commerce"));
    assert_eq!(view.days.len(), 3);

    let day = view.selected_day().expect("selected");
    assert_eq!(day.heading, "Monday, December 29, 2025");
    assert_eq!(day.sessions[0].time_range, "09:00 AM — 10:00 AM");
    assert_eq!(day.sessions[0].speakers, "Prof. Silva, Dr. Raj");
    assert_eq!(day.current_session().map(|s| s.title.as_str()), Some("Opening"));
}

#[test]
fn unmount_releases_subscriptions() {
    let h = mount_with(None);
    assert_eq!(h.bus.subscriber_count(), 3);
    h.engine.unmount();
    assert_eq!(h.bus.subscriber_count(), 0);
    assert_eq!(h.bus.emit(HostEvent::PopState), 0);
}

#[test]
fn ticker_is_configured_from_deps() {
    let bus = EventBus::new();
    let engine = AgendaEngine::mount(
        program(),
        EngineDeps {
            clock: Arc::new(ManualClock::new(at(29, 8, 0))),
            history: Box::new(AddressBar::default()),
            formatter: AgendaFormatter::default(),
            tick_interval: Some(Duration::from_secs(60)),
        },
        &bus,
    );
    assert_eq!(engine.tick_interval(), Some(Duration::from_secs(60)));
}

#[test]
fn tick_during_pump_refreshes_status() {
    let bus = EventBus::new();
    let clock = ManualClock::new(at(29, 9, 30));
    let mut engine = AgendaEngine::mount(
        program(),
        EngineDeps {
            clock: Arc::new(clock.clone()),
            history: Box::new(AddressBar::default()),
            formatter: AgendaFormatter::new(Locale::en_US),
            tick_interval: Some(Duration::from_secs(1)),
        },
        &bus,
    );
    let first_status = |engine: &AgendaEngine| engine.view().days[0].sessions[0].status;
    assert_eq!(first_status(&engine), SessionStatus::Current);

    clock.advance(TimeDelta::hours(1));
    std::thread::sleep(Duration::from_millis(1100));

    let outcome = engine.pump();
    assert!(outcome.ticked);
    assert!(outcome.changed());
    assert_eq!(engine.now(), at(29, 10, 30));
    assert_eq!(first_status(&engine), SessionStatus::Finished);
}
