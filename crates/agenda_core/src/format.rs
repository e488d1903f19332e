//! Locale-aware rendering of dates, times and date ranges.
//!
//! Names come from chrono's locale tables; only field ordering is fixed here.

use chrono::{Datelike, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use shared::domain::{Day, DayDate, Session};

const RANGE_SEPARATOR: &str = " — ";
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Picks the explicit locale when it parses, then the host environment, then `en_US`.
pub fn resolve_locale(explicit: Option<&str>) -> Locale {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(
            LOCALE_ENV_VARS
                .iter()
                .filter_map(|name| std::env::var(name).ok()),
        )
        .find_map(|raw| parse_locale(&raw))
        .unwrap_or(Locale::en_US)
}

/// Accepts POSIX style names such as `de_DE.UTF-8` or `fr_FR@euro`, and `en-GB`.
pub fn parse_locale(raw: &str) -> Option<Locale> {
    let name = raw.split(['.', '@']).next()?.trim().replace('-', "_");
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Locale::try_from(name.as_str()).ok()
}

#[derive(Debug, Clone, Copy)]
pub struct AgendaFormatter {
    locale: Locale,
}

impl Default for AgendaFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

impl AgendaFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn localized(&self, at: NaiveDateTime, pattern: &str) -> String {
        at.and_utc().format_localized(pattern, self.locale).to_string()
    }

    fn localized_date(&self, date: NaiveDate, pattern: &str) -> String {
        self.localized(date.and_time(NaiveTime::MIN), pattern)
    }

    pub fn month_name(&self, date: DayDate) -> String {
        self.localized_date(date.naive(), "%B")
    }

    /// `December 29, 2025`
    pub fn long_date(&self, date: DayDate) -> String {
        self.localized_date(date.naive(), "%B %-d, %Y")
    }

    /// `Monday, December 29, 2025`
    pub fn day_heading(&self, date: DayDate) -> String {
        self.localized_date(date.naive(), "%A, %B %-d, %Y")
    }

    /// Numeric date in the locale's own layout, e.g. `12/29/2025`.
    pub fn short_date(&self, date: DayDate) -> String {
        self.localized_date(date.naive(), "%x")
    }

    /// Two-digit hour and minute; 12 hour clock only where the locale has AM/PM markers.
    pub fn time_of_day(&self, at: NaiveDateTime) -> String {
        if self.localized(at, "%p").trim().is_empty() {
            self.localized(at, "%H:%M")
        } else {
            self.localized(at, "%I:%M %p")
        }
    }

    pub fn session_time_range(&self, session: &Session, date: DayDate) -> String {
        let (start, end) = session.window(date);
        format!(
            "{}{RANGE_SEPARATOR}{}",
            self.time_of_day(start),
            self.time_of_day(end)
        )
    }

    /// Human readable span of the first through last day; empty input gives `""`.
    pub fn date_range(&self, days: &[Day]) -> String {
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return String::new();
        };
        let (first, last) = (first.date, last.date);
        if first == last {
            return self.long_date(first);
        }

        let (a, b) = (first.naive(), last.naive());
        let (month1, month2) = (self.month_name(first), self.month_name(last));
        if a.year() == b.year() && a.month() == b.month() {
            format!(
                "{month1} {}{RANGE_SEPARATOR}{}, {}",
                a.day(),
                b.day(),
                a.year()
            )
        } else if a.year() == b.year() {
            format!(
                "{month1} {}{RANGE_SEPARATOR}{month2} {}, {}",
                a.day(),
                b.day(),
                a.year()
            )
        } else {
            format!(
                "{month1} {}, {}{RANGE_SEPARATOR}{month2} {}, {}",
                a.day(),
                a.year(),
                b.day(),
                b.year()
            )
        }
    }
}
