//! Deep-link fragment protocol: `#day=YYYY-MM-DD` is the only shareable state.

use std::sync::LazyLock;

use regex::Regex;

use crate::{domain::DayDate, error::AgendaError};

pub const DAY_FRAGMENT_PREFIX: &str = "#day=";

static DAY_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#day=(\d{4}-\d{2}-\d{2})$").expect("static deep link pattern")
});

/// Fragment pushed when a day view is opened.
pub fn day_fragment(date: DayDate) -> String {
    format!("{DAY_FRAGMENT_PREFIX}{date}")
}

/// Extracts the date string from a `#day=` fragment.
///
/// The date is returned verbatim so lookups stay exact string matches.
pub fn parse_day_fragment(fragment: &str) -> Result<&str, AgendaError> {
    DAY_FRAGMENT
        .captures(fragment.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| AgendaError::MalformedDeepLink {
            fragment: fragment.to_string(),
        })
}

/// True for any fragment owned by the day view, well formed or not.
pub fn is_day_fragment(fragment: &str) -> bool {
    fragment.starts_with(DAY_FRAGMENT_PREFIX)
}

/// Accepts a bare fragment (`#day=...`) or a full link and returns the fragment part.
pub fn fragment_of(link: &str) -> Option<&str> {
    link.find('#').map(|at| &link[at..]).filter(|f| f.len() > 1)
}
