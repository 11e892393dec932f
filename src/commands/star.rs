use aievents_core::EventKind;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::AppDashboard;

/// Toggle an event in or out of favorites.
pub fn run(dashboard: &mut AppDashboard, kind: EventKind, name: &str) -> Result<()> {
    let loaded = dashboard.events(kind).iter().any(|event| event.name == name);

    let added = dashboard
        .toggle_favorite(kind, name)
        .context("Could not save favorites")?
        .contains(kind, name);

    if added {
        println!("{} Added to favorite {}: {}", "★".yellow(), kind.plural(), name);
    } else {
        println!("{} Removed from favorite {}: {}", "☆".dimmed(), kind.plural(), name);
    }

    if !loaded {
        let note = format!("No {} named \"{}\" is in the current list", kind.plural(), name);
        println!("{}", note.dimmed());
    }

    Ok(())
}
