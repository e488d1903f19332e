use chrono::NaiveDateTime;
use shared::domain::{DayDate, Session, SessionStatus};

/// Classifies a session against `now` using the half-open window `[start, end)`.
///
/// Inverted windows (`end <= start`) are never current.
pub fn session_status(session: &Session, date: DayDate, now: NaiveDateTime) -> SessionStatus {
    let (start, end) = session.window(date);
    if now >= start && now < end {
        SessionStatus::Current
    } else if now >= end {
        SessionStatus::Finished
    } else {
        SessionStatus::Upcoming
    }
}
