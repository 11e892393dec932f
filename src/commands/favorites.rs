use aievents_core::EventKind;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use super::AppDashboard;
use crate::render::{render_event_list, render_heading};

/// Show every favorited event, regardless of any search or filter.
pub fn run(dashboard: &AppDashboard, json: bool) -> Result<()> {
    let hackathons = dashboard.favorites_view(EventKind::Hackathon);
    let conferences = dashboard.favorites_view(EventKind::Conference);

    if json {
        let value = serde_json::json!({
            "hackathons": hackathons,
            "conferences": conferences,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if hackathons.is_empty() && conferences.is_empty() {
        println!("{}", "No favorites added yet".dimmed());
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut sections = Vec::new();

    for (kind, events) in [
        (EventKind::Hackathon, &hackathons),
        (EventKind::Conference, &conferences),
    ] {
        if events.is_empty() {
            continue;
        }
        sections.push(format!(
            "{}\n\n{}",
            render_heading(kind, events.len()),
            render_event_list(events, |_| true, today, "")
        ));
    }

    println!("{}", sections.join("\n\n"));

    Ok(())
}
