//! Event record types.
//!
//! Hackathons and conferences share most of their shape. The shared fields
//! live on `Event`; the kind-specific ones live in `EventDetails`, and
//! anything that differs between the two kinds dispatches on `EventKind`.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates;

/// Which list an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hackathon,
    Conference,
}

impl EventKind {
    /// Label for the kind's date field ("Deadline" / "Start Date").
    pub fn date_label(&self) -> &'static str {
        match self {
            EventKind::Hackathon => "Deadline",
            EventKind::Conference => "Start Date",
        }
    }

    /// Whether the "N days left" countdown applies to this kind.
    pub fn shows_days_left(&self) -> bool {
        matches!(self, EventKind::Hackathon)
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EventKind::Hackathon => "hackathons",
            EventKind::Conference => "conferences",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Hackathon => write!(f, "Hackathon"),
            EventKind::Conference => write!(f, "Conference"),
        }
    }
}

/// A hackathon or conference listing.
///
/// `name` is the identity key: favorites and de-duplication both compare names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub domain: String,
    pub mode: String,
    pub link: String,
    #[serde(flatten)]
    pub details: EventDetails,
}

/// Fields that only one of the two kinds carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventDetails {
    Hackathon {
        deadline: String,
        prize: String,
    },
    Conference {
        #[serde(rename = "startDate")]
        start_date: String,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self.details {
            EventDetails::Hackathon { .. } => EventKind::Hackathon,
            EventDetails::Conference { .. } => EventKind::Conference,
        }
    }

    /// Raw text of the kind's date field (deadline or start date).
    pub fn date_field(&self) -> &str {
        match &self.details {
            EventDetails::Hackathon { deadline, .. } => deadline,
            EventDetails::Conference { start_date } => start_date,
        }
    }

    /// The date field parsed into a calendar date, if it can be.
    pub fn date(&self) -> Option<NaiveDate> {
        dates::parse_event_date(self.date_field())
    }

    pub fn prize(&self) -> Option<&str> {
        match &self.details {
            EventDetails::Hackathon { prize, .. } => Some(prize),
            EventDetails::Conference { .. } => None,
        }
    }

    /// Days until the deadline, for kinds that show a countdown.
    /// None if the kind has no countdown or the date does not parse.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        if !self.kind().shows_days_left() {
            return None;
        }
        self.date().map(|date| dates::days_between(today, date))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
