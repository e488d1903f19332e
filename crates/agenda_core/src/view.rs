//! Render model handed to presentation: every string is already formatted.

use chrono::NaiveDateTime;
use serde::Serialize;
use shared::domain::{Day, Program, SessionStatus};

use crate::{format::AgendaFormatter, status::session_status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub organization: Option<String>,
    pub program_name: String,
    pub program_label: Option<String>,
    pub date_range: String,
    pub venue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub title: String,
    pub time_range: String,
    pub speakers: String,
    pub status: SessionStatus,
}

impl SessionView {
    pub fn is_current(&self) -> bool {
        self.status == SessionStatus::Current
    }

    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    /// `YYYY-MM-DD`, also the deep-link key.
    pub date: String,
    pub heading: String,
    pub short_date: String,
    pub sessions: Vec<SessionView>,
}

impl DayView {
    pub fn current_session(&self) -> Option<&SessionView> {
        self.sessions.iter().find(|s| s.is_current())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaView {
    pub header: HeaderView,
    pub days: Vec<DayView>,
    /// Index into `days` of the open day view.
    pub selected: Option<usize>,
    pub now: NaiveDateTime,
}

impl AgendaView {
    pub fn selected_day(&self) -> Option<&DayView> {
        self.days.get(self.selected?)
    }
}

pub fn header_view(program: &Program, formatter: &AgendaFormatter) -> HeaderView {
    HeaderView {
        organization: program.organization.clone(),
        program_name: program.program_name.clone(),
        program_label: program.program_label.clone(),
        date_range: formatter.date_range(&program.days),
        venue: program.venue.clone(),
    }
}

pub fn day_view(day: &Day, now: NaiveDateTime, formatter: &AgendaFormatter) -> DayView {
    DayView {
        date: day.date.to_string(),
        heading: formatter.day_heading(day.date),
        short_date: formatter.short_date(day.date),
        sessions: day
            .sessions
            .iter()
            .map(|session| SessionView {
                title: session.title.clone(),
                time_range: formatter.session_time_range(session, day.date),
                speakers: session.speakers.join(", "),
                status: session_status(session, day.date, now),
            })
            .collect(),
    }
}

pub fn agenda_view(
    program: &Program,
    selected: Option<usize>,
    now: NaiveDateTime,
    formatter: &AgendaFormatter,
) -> AgendaView {
    AgendaView {
        header: header_view(program, formatter),
        days: program
            .days
            .iter()
            .map(|day| day_view(day, now, formatter))
            .collect(),
        selected: selected.filter(|index| *index < program.days.len()),
        now,
    }
}
