//! Plain-text rendering of the agenda view model.

use std::io::{self, Write};

use agenda_core::{AgendaView, DayView, HeaderView, SessionView};
use shared::domain::SessionStatus;

fn status_marker(session: &SessionView) -> &'static str {
    match session.status {
        SessionStatus::Current => "▶ Now",
        SessionStatus::Finished => "✓    ",
        SessionStatus::Upcoming => "     ",
    }
}

pub fn render_header(out: &mut impl Write, header: &HeaderView) -> io::Result<()> {
    if let Some(organization) = &header.organization {
        writeln!(out, "{organization}")?;
    }
    writeln!(out, "{}", header.program_name)?;
    if let Some(label) = &header.program_label {
        writeln!(out, "{label}")?;
    }
    writeln!(out, "Date: {}", header.date_range)?;
    writeln!(out, "Location: {}", header.venue)
}

fn render_sessions(out: &mut impl Write, day: &DayView) -> io::Result<()> {
    if day.sessions.is_empty() {
        return writeln!(out, "  (no sessions scheduled)");
    }
    for session in &day.sessions {
        writeln!(
            out,
            "  {} {}  {}",
            status_marker(session),
            session.time_range,
            session.title
        )?;
        if !session.speakers.is_empty() {
            writeln!(out, "        {}", session.speakers)?;
        }
    }
    Ok(())
}

pub fn render_day(out: &mut impl Write, day: &DayView) -> io::Result<()> {
    writeln!(out, "{}", day.heading)?;
    writeln!(out, "{}", "=".repeat(day.heading.chars().count()))?;
    render_sessions(out, day)
}

pub fn render_agenda(
    out: &mut impl Write,
    view: &AgendaView,
    footer: Option<&str>,
) -> io::Result<()> {
    if let Some(day) = view.selected_day() {
        return render_day(out, day);
    }

    render_header(out, &view.header)?;
    for day in &view.days {
        writeln!(out)?;
        writeln!(out, "{}  ({})", day.heading, day.short_date)?;
        render_sessions(out, day)?;
    }
    if let Some(footer) = footer {
        writeln!(out)?;
        writeln!(out, "{footer}")?;
    }
    Ok(())
}
