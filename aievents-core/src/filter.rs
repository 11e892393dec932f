//! Search and filter criteria for event lists.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::constants::{ALL_SENTINEL, CURATED_DOMAINS, CURATED_MODES};
use crate::event::Event;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Month(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    /// Accepts "1".."12", full month names and three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("Invalid month '{}'. Expected 1-12 or a month name", s);

        if let Ok(number) = s.parse::<u32>() {
            return Month::new(number).ok_or_else(invalid);
        }

        let lower = s.to_lowercase();
        if lower.len() < 3 {
            return Err(invalid());
        }
        MONTH_NAMES
            .iter()
            .position(|name| name.to_lowercase().starts_with(&lower))
            .map(|idx| Month(idx as u32 + 1))
            .ok_or_else(invalid)
    }
}

/// Parse a month selection, where "all" or a blank value means no filter.
pub fn parse_month_filter(s: &str) -> Result<Option<Month>, String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(ALL_SENTINEL) {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Active filters. Every criterion is independent and they combine with AND.
/// `None` (or the literal "all") means the criterion is off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub domain: Option<String>,
    pub mode: Option<String>,
    pub month: Option<Month>,
}

/// Treat a missing or blank selection, or the "all" sentinel, as no filter.
fn active(selection: &Option<String>) -> Option<&str> {
    selection
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(ALL_SENTINEL))
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && active(&self.domain).is_none()
            && active(&self.mode).is_none()
            && self.month.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event)
            && self.matches_domain(event)
            && self.matches_mode(event)
            && self.matches_month(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        event.name.to_lowercase().contains(&query) || event.domain.to_lowercase().contains(&query)
    }

    fn matches_domain(&self, event: &Event) -> bool {
        match active(&self.domain) {
            Some(domain) => event.domain.to_lowercase() == domain.to_lowercase(),
            None => true,
        }
    }

    fn matches_mode(&self, event: &Event) -> bool {
        match active(&self.mode) {
            Some(mode) => event.mode.to_lowercase() == mode.to_lowercase(),
            None => true,
        }
    }

    /// Events whose date doesn't parse never match an active month filter.
    fn matches_month(&self, event: &Event) -> bool {
        match self.month {
            Some(month) => event
                .date()
                .is_some_and(|date| date.month() == month.number()),
            None => true,
        }
    }
}

/// Filter events, preserving their order.
pub fn apply<'a>(events: &'a [Event], criteria: &FilterCriteria) -> Vec<&'a Event> {
    events.iter().filter(|event| criteria.matches(event)).collect()
}

/// Option lists for the domain and mode selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub domains: Vec<String>,
    pub modes: Vec<String>,
}

impl FilterOptions {
    /// Curated options first, then any distinct values present in the data.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event> + Clone) -> Self {
        let domains = events.clone().into_iter().map(|e| e.domain.as_str());
        let modes = events.into_iter().map(|e| e.mode.as_str());

        FilterOptions {
            domains: merge_options(CURATED_DOMAINS, domains),
            modes: merge_options(CURATED_MODES, modes),
        }
    }
}

fn merge_options<'a>(curated: &[&str], values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options: Vec<String> = curated.iter().map(|s| s.to_string()).collect();
    for value in values {
        if !value.is_empty() && !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}
