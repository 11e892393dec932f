//! TUI rendering for dashboard views.
//!
//! Extension traits and helpers that turn aievents-core types into colored
//! terminal output using owo_colors.

use aievents_core::dates::format_event_date;
use aievents_core::filter::{FilterOptions, Month};
use aievents_core::{Event, EventKind};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// One event as a card, with its favorite marker.
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub favorite: bool,
    pub today: NaiveDate,
}

impl Render for EventCard<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let kind = event.kind();

        let star = if self.favorite {
            "★".yellow().to_string()
        } else {
            "☆".dimmed().to_string()
        };

        let mut lines = vec![format!("{} {}", star, event.name.bold())];

        let mut date_line = format!(
            "   {}: {}",
            kind.date_label(),
            format_event_date(event.date_field())
        );
        if let Some(days) = event.days_left(self.today).filter(|d| *d > 0) {
            date_line.push_str(&format!(" {}", format!("({} days left)", days).dimmed()));
        }
        lines.push(date_line);

        lines.push(format!("   Mode: {}", event.mode));

        if !event.domain.is_empty() {
            lines.push(format!("   {}", format!("[{}]", event.domain).cyan()));
        }

        if let Some(prize) = event.prize().filter(|p| !p.is_empty()) {
            lines.push(format!("   Prize: {}", prize.green()));
        }

        lines.push(format!("   Visit {}: {}", kind, event.link.underline()));

        lines.join("\n")
    }
}

/// Render a list of events as cards, or the empty-state message.
pub fn render_event_list(
    events: &[&Event],
    is_favorite: impl Fn(&Event) -> bool,
    today: NaiveDate,
    empty_message: &str,
) -> String {
    if events.is_empty() {
        return empty_message.dimmed().to_string();
    }

    events
        .iter()
        .map(|&event| {
            EventCard {
                event,
                favorite: is_favorite(event),
                today,
            }
            .render()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Section heading such as "Hackathons (12)".
pub fn render_heading(kind: EventKind, count: usize) -> String {
    let title = match kind {
        EventKind::Hackathon => "Hackathons",
        EventKind::Conference => "Conferences",
    };
    format!("{} {}", title.bold(), format!("({})", count).dimmed())
}

impl Render for FilterOptions {
    fn render(&self) -> String {
        let months: Vec<String> = Month::all()
            .map(|m| format!("{} {}", format!("{:>2}", m.number()).dimmed(), m))
            .collect();

        [
            ("Domains", &self.domains),
            ("Modes", &self.modes),
            ("Months", &months),
        ]
        .iter()
        .map(|(title, options)| {
            let mut lines = vec![title.bold().to_string()];
            lines.extend(options.iter().map(|o| format!("   {}", o)));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aievents_core::EventDetails;

    fn hackathon(deadline: &str) -> Event {
        Event {
            name: "GenAI Hack".to_string(),
            domain: "Machine Learning/AI".to_string(),
            mode: "Online".to_string(),
            link: "https://a.example".to_string(),
            details: EventDetails::Hackathon {
                deadline: deadline.to_string(),
                prize: "$5000".to_string(),
            },
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 25).unwrap()
    }

    #[test]
    fn card_shows_formatted_deadline_and_countdown() {
        let event = hackathon("2025-06-01");
        let card = EventCard {
            event: &event,
            favorite: false,
            today: today(),
        }
        .render();

        assert!(card.contains("Deadline: Jun 1, 2025"));
        assert!(card.contains("(7 days left)"));
        assert!(card.contains("$5000"));
        assert!(card.contains("Visit Hackathon"));
    }

    #[test]
    fn card_keeps_raw_unparsable_date() {
        let event = hackathon("TBA");
        let card = EventCard {
            event: &event,
            favorite: true,
            today: today(),
        }
        .render();

        assert!(card.contains("Deadline: TBA"));
        assert!(!card.contains("days left"));
        assert!(card.contains("★"));
    }

    #[test]
    fn no_countdown_once_deadline_passed() {
        let event = hackathon("2025-05-01");
        let card = EventCard {
            event: &event,
            favorite: false,
            today: today(),
        }
        .render();

        assert!(!card.contains("days left"));
    }

    #[test]
    fn empty_list_shows_message() {
        let out = render_event_list(
            &[],
            |_| false,
            today(),
            "No events found matching your filters",
        );
        assert!(out.contains("No events found matching your filters"));
    }
}
