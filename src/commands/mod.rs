pub mod favorites;
pub mod list;
pub mod options;
pub mod star;

use aievents_core::EventKind;
use aievents_core::config::AppConfig;
use aievents_core::dashboard::Dashboard;
use aievents_core::storage::FileStorage;

use crate::utils::tui::create_spinner;

pub type AppDashboard = Dashboard<FileStorage>;

/// Message shown when a filtered list comes back empty
pub const NO_MATCHES: &str = "No events found matching your filters";

/// Fetch both event lists, with a spinner naming whichever is still loading.
pub async fn load(dashboard: &mut AppDashboard, config: &AppConfig) {
    let spinner = create_spinner("Loading hackathons and conferences");

    dashboard
        .load_with_progress(
            &config.source(EventKind::Hackathon),
            &config.source(EventKind::Conference),
            |done| spinner.set_message(format!("Loading {}", remaining(done).plural())),
        )
        .await;

    spinner.finish_and_clear();
}

/// The list still outstanding once `done` has finished.
fn remaining(done: EventKind) -> EventKind {
    match done {
        EventKind::Hackathon => EventKind::Conference,
        EventKind::Conference => EventKind::Hackathon,
    }
}
