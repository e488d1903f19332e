use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

/// Calendar date of a schedule day, always rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayDate(NaiveDate);

impl DayDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses the strict `YYYY-MM-DD` shape (zero padded, month 01-12).
    pub fn parse(raw: &str) -> Result<Self, AgendaError> {
        let bytes = raw.as_bytes();
        let well_shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_shaped {
            return Err(AgendaError::InvalidDate(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| AgendaError::InvalidDate(raw.to_string()))
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for DayDate {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayDate> for String {
    fn from(value: DayDate) -> Self {
        value.to_string()
    }
}

/// Local wall-clock time of day, `HH:MM` on the 24 hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parses the strict zero-padded `HH:MM` shape.
    pub fn parse(raw: &str) -> Result<Self, AgendaError> {
        let bytes = raw.as_bytes();
        let well_shaped = bytes.len() == 5
            && bytes[2] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || b.is_ascii_digit());
        if !well_shaped {
            return Err(AgendaError::InvalidTime(raw.to_string()));
        }
        NaiveTime::parse_from_str(raw, "%H:%M")
            .map(Self)
            .map_err(|_| AgendaError::InvalidTime(raw.to_string()))
    }

    pub fn naive(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub title: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub speakers: Vec<String>,
}

impl Session {
    /// Start and end of the session as local timestamps on `date`.
    pub fn window(&self, date: DayDate) -> (NaiveDateTime, NaiveDateTime) {
        (
            date.naive().and_time(self.start_time.naive()),
            date.naive().and_time(self.end_time.naive()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: DayDate,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub program_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_label: Option<String>,
    pub venue: String,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Program {
    /// Exact date-string lookup, as used by deep links.
    pub fn day_index(&self, date: &str) -> Option<usize> {
        self.days.iter().position(|day| day.date.to_string() == date)
    }

    pub fn first_and_last_day(&self) -> Option<(&Day, &Day)> {
        Some((self.days.first()?, self.days.last()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Current,
    Finished,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Current => "current",
            SessionStatus::Finished => "finished",
        }
    }
}
