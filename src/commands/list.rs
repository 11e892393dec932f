use aievents_core::EventKind;
use aievents_core::filter::FilterCriteria;
use anyhow::Result;
use chrono::Local;

use super::{AppDashboard, NO_MATCHES};
use crate::render::{render_event_list, render_heading};

pub fn run(
    dashboard: &mut AppDashboard,
    kind: EventKind,
    criteria: FilterCriteria,
    json: bool,
) -> Result<()> {
    dashboard.set_criteria(criteria);
    let events = dashboard.filtered(kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let today = Local::now().date_naive();

    println!("{}", render_heading(kind, events.len()));
    println!();
    println!(
        "{}",
        render_event_list(
            &events,
            |event| dashboard.is_favorite(kind, &event.name),
            today,
            NO_MATCHES,
        )
    );

    Ok(())
}
