//! Delimited-text parsing into event records.
//!
//! Each event kind has a `Schema`: the ordered list of fields it reads, and
//! the default each field takes when the cell is absent or empty. The `name`
//! field has no default; rows without a name are dropped.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{EventsError, EventsResult};
use crate::event::{Event, EventDetails, EventKind};

/// One column an event kind reads.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub column: &'static str,
    /// None marks the field as required.
    pub default: Option<&'static str>,
}

impl Field {
    const fn required(column: &'static str) -> Self {
        Field {
            column,
            default: None,
        }
    }

    const fn with_default(column: &'static str, default: &'static str) -> Self {
        Field {
            column,
            default: Some(default),
        }
    }
}

/// Ordered field list for one event kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub kind: EventKind,
    pub fields: &'static [Field],
}

const HACKATHON_FIELDS: &[Field] = &[
    Field::required("name"),
    Field::with_default("deadline", "TBA"),
    Field::with_default("domain", "General"),
    Field::with_default("mode", "Unknown"),
    Field::with_default("prize", "Not specified"),
    Field::with_default("link", "#"),
];

const CONFERENCE_FIELDS: &[Field] = &[
    Field::required("name"),
    Field::with_default("startDate", "TBA"),
    Field::with_default("domain", "General"),
    Field::with_default("mode", "Unknown"),
    Field::with_default("link", "#"),
];

impl Schema {
    pub fn for_kind(kind: EventKind) -> Self {
        let fields = match kind {
            EventKind::Hackathon => HACKATHON_FIELDS,
            EventKind::Conference => CONFERENCE_FIELDS,
        };
        Schema { kind, fields }
    }

    /// Default for a column, or None if the column is required.
    pub fn default_for(&self, column: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.column == column)
            .and_then(|f| f.default)
    }
}

/// Normalize a header so "startDate", "Start Date" and "start_date" compare equal.
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single row, resolved against the schema's columns.
struct Row<'a> {
    schema: &'a Schema,
    columns: &'a HashMap<&'static str, usize>,
    record: &'a StringRecord,
}

impl Row<'_> {
    /// The trimmed cell value, or None if the cell is absent or empty.
    fn raw(&self, column: &str) -> Option<&str> {
        let idx = *self.columns.get(column)?;
        self.record
            .get(idx)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// The cell value with the schema default applied.
    fn value(&self, column: &str) -> String {
        self.raw(column)
            .or_else(|| self.schema.default_for(column))
            .unwrap_or_default()
            .to_string()
    }

    fn into_event(self) -> Option<Event> {
        let name = self.raw("name")?.to_string();

        let details = match self.schema.kind {
            EventKind::Hackathon => EventDetails::Hackathon {
                deadline: self.value("deadline"),
                prize: self.value("prize"),
            },
            EventKind::Conference => EventDetails::Conference {
                start_date: self.value("startDate"),
            },
        };

        Some(Event {
            name,
            domain: self.value("domain"),
            mode: self.value("mode"),
            link: self.value("link"),
            details,
        })
    }
}

/// Parse CSV content (with a header row) into events of the given kind.
///
/// Rows with no `name` are dropped and every other missing field takes its
/// schema default. A row the reader can't decode is skipped with a warning.
/// Fails only if the input as a whole is unusable: an unreadable header, or
/// no `name` column at all.
pub fn parse_events(kind: EventKind, content: &str) -> EventsResult<Vec<Event>> {
    let schema = Schema::for_kind(kind);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| EventsError::Parse(e.to_string()))?
        .clone();

    let header_index: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| (header_key(h), idx))
        .collect();

    let columns: HashMap<&'static str, usize> = schema
        .fields
        .iter()
        .filter_map(|f| {
            header_index
                .get(&header_key(f.column))
                .map(|&idx| (f.column, idx))
        })
        .collect();

    if let Some(missing) = schema
        .fields
        .iter()
        .find(|f| f.default.is_none() && !columns.contains_key(f.column))
    {
        return Err(EventsError::MissingColumn(missing.column.to_string()));
    }

    let mut events = Vec::new();
    let mut dropped = 0usize;

    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping unreadable {} row {}: {}", kind, line + 1, e);
                continue;
            }
        };

        let row = Row {
            schema: &schema,
            columns: &columns,
            record: &record,
        };

        match row.into_event() {
            Some(event) => events.push(event),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} {} rows without a name", dropped, kind);
    }

    Ok(events)
}
