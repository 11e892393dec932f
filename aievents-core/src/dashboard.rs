//! The dashboard orchestrator.
//!
//! Owns the loaded event lists, the active filter criteria and the favorites
//! store, and derives the three views the presentation layer renders:
//! filtered hackathons, filtered conferences, and favorites.
//!
//! The two lists load independently. Each completion fills its own slice,
//! in whichever order they arrive, and the dashboard becomes `Ready` once
//! both have completed. A failed load leaves its slice empty rather than
//! blocking the other one.

use std::collections::HashSet;

use crate::error::EventsResult;
use crate::event::{Event, EventKind};
use crate::favorites::{Favorites, FavoritesStore};
use crate::filter::{self, FilterCriteria, FilterOptions};
use crate::parse::parse_events;
use crate::source::Source;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotStarted,
    Loading,
    /// Both lists have completed, successfully or not.
    Ready,
}

pub struct Dashboard<S: Storage> {
    state: LoadState,
    // None until that list's load completes
    hackathons: Option<Vec<Event>>,
    conferences: Option<Vec<Event>>,
    criteria: FilterCriteria,
    favorites: FavoritesStore<S>,
}

/// Fetch and parse one event list.
pub async fn load_events(kind: EventKind, source: &Source) -> EventsResult<Vec<Event>> {
    let content = source.fetch().await?;
    parse_events(kind, &content)
}

async fn load_reporting(
    kind: EventKind,
    source: &Source,
    on_complete: &impl Fn(EventKind),
) -> EventsResult<Vec<Event>> {
    let result = load_events(kind, source).await;
    on_complete(kind);
    result
}

impl<S: Storage> Dashboard<S> {
    pub fn new(favorites: FavoritesStore<S>) -> Self {
        Dashboard {
            state: LoadState::NotStarted,
            hackathons: None,
            conferences: None,
            criteria: FilterCriteria::default(),
            favorites,
        }
    }

    /// Load both lists concurrently and wait for both to complete.
    pub async fn load(&mut self, hackathons: &Source, conferences: &Source) {
        self.load_with_progress(hackathons, conferences, |_| {}).await;
    }

    /// Like `load`, calling `on_complete` as each list finishes, in
    /// completion order.
    pub async fn load_with_progress(
        &mut self,
        hackathons: &Source,
        conferences: &Source,
        on_complete: impl Fn(EventKind),
    ) {
        self.begin_loading();

        let (hackathon_result, conference_result) = tokio::join!(
            load_reporting(EventKind::Hackathon, hackathons, &on_complete),
            load_reporting(EventKind::Conference, conferences, &on_complete),
        );

        self.finish_load(EventKind::Hackathon, hackathon_result);
        self.finish_load(EventKind::Conference, conference_result);
    }

    pub fn begin_loading(&mut self) {
        if self.state == LoadState::NotStarted {
            self.state = LoadState::Loading;
        }
    }

    /// Record the outcome of one list's load.
    ///
    /// A failure is logged and the list is treated as empty.
    pub fn finish_load(&mut self, kind: EventKind, result: EventsResult<Vec<Event>>) {
        let events = match result {
            Ok(events) => {
                log::info!("Loaded {} {}", events.len(), kind.plural());
                warn_duplicate_names(kind, &events);
                events
            }
            Err(e) => {
                log::warn!("Error loading {}: {}", kind.plural(), e);
                Vec::new()
            }
        };

        match kind {
            EventKind::Hackathon => self.hackathons = Some(events),
            EventKind::Conference => self.conferences = Some(events),
        }

        if self.hackathons.is_some() && self.conferences.is_some() {
            self.state = LoadState::Ready;
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state != LoadState::Ready
    }

    /// Every loaded event of a kind, in file order.
    pub fn events(&self, kind: EventKind) -> &[Event] {
        let slice = match kind {
            EventKind::Hackathon => &self.hackathons,
            EventKind::Conference => &self.conferences,
        };
        slice.as_deref().unwrap_or_default()
    }

    // CRITERIA:

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Events of a kind that pass the active criteria.
    pub fn filtered(&self, kind: EventKind) -> Vec<&Event> {
        filter::apply(self.events(kind), &self.criteria)
    }

    /// Domain and mode options across both lists.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_events(
            self.events(EventKind::Hackathon)
                .iter()
                .chain(self.events(EventKind::Conference)),
        )
    }

    // FAVORITES:

    pub fn is_favorite(&self, kind: EventKind, name: &str) -> bool {
        self.favorites.is_favorite(kind, name)
    }

    pub fn toggle_favorite(&mut self, kind: EventKind, name: &str) -> EventsResult<&Favorites> {
        self.favorites.toggle(kind, name)
    }

    /// Favorited events of a kind, in file order. Ignores the active criteria
    /// so every favorite stays reachable.
    pub fn favorites_view(&self, kind: EventKind) -> Vec<&Event> {
        let ids = self.favorites.state().ids(kind);
        self.events(kind)
            .iter()
            .filter(|event| ids.contains(&event.name))
            .collect()
    }
}

/// Events sharing a name can't be told apart by favorites; say so.
fn warn_duplicate_names(kind: EventKind, events: &[Event]) {
    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = events
        .iter()
        .map(|e| e.name.as_str())
        .filter(|name| !seen.insert(*name))
        .collect();

    if !duplicates.is_empty() {
        log::warn!(
            "{} {} share a name with an earlier entry and will be favorited together: {}",
            duplicates.len(),
            kind.plural(),
            duplicates.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Month;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::path::PathBuf;

    const HACKATHONS_CSV: &str = "\
name,deadline,domain,mode,prize,link
GenAI Hack,2025-06-01,Machine Learning/AI,Online,$5000,https://a.example
,2025-06-10,Healthcare,Offline,$100,https://b.example
MedTech Jam,Jul 4 2025,Healthcare,Offline,$2000,https://c.example
";

    const CONFERENCES_CSV: &str = "\
name,startDate,domain,mode,link
ICML,2025-07-12,Machine Learning/AI,Offline,https://icml.example
CVPR,2025-06-11,Computer Vision,Hybrid,https://cvpr.example
";

    fn dashboard() -> Dashboard<MemoryStorage> {
        Dashboard::new(FavoritesStore::load(MemoryStorage::new()))
    }

    fn loaded() -> Dashboard<MemoryStorage> {
        let mut dashboard = dashboard();
        dashboard.begin_loading();
        dashboard.finish_load(
            EventKind::Hackathon,
            parse_events(EventKind::Hackathon, HACKATHONS_CSV),
        );
        dashboard.finish_load(
            EventKind::Conference,
            parse_events(EventKind::Conference, CONFERENCES_CSV),
        );
        dashboard
    }

    fn names(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_then_filter_by_domain() {
        let dir = tempfile::tempdir().unwrap();
        let hackathons = dir.path().join("h.csv");
        let conferences = dir.path().join("c.csv");
        std::fs::write(&hackathons, HACKATHONS_CSV).unwrap();
        std::fs::write(&conferences, CONFERENCES_CSV).unwrap();

        let mut dashboard = dashboard();
        assert_eq!(dashboard.load_state(), LoadState::NotStarted);

        dashboard
            .load(&Source::File(hackathons), &Source::File(conferences))
            .await;

        assert_eq!(dashboard.load_state(), LoadState::Ready);
        assert_eq!(dashboard.events(EventKind::Hackathon).len(), 2);
        assert_eq!(dashboard.events(EventKind::Conference).len(), 2);

        dashboard.set_criteria(FilterCriteria {
            domain: Some("Healthcare".to_string()),
            ..Default::default()
        });
        assert_eq!(
            names(&dashboard.filtered(EventKind::Hackathon)),
            vec!["MedTech Jam"]
        );
        assert!(dashboard.filtered(EventKind::Conference).is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_still_reaches_ready() {
        let dir = tempfile::tempdir().unwrap();
        let conferences = dir.path().join("c.csv");
        std::fs::write(&conferences, CONFERENCES_CSV).unwrap();

        let mut dashboard = dashboard();
        dashboard
            .load(
                &Source::File(PathBuf::from("/nonexistent/h.csv")),
                &Source::File(conferences),
            )
            .await;

        assert_eq!(dashboard.load_state(), LoadState::Ready);
        assert!(!dashboard.is_loading());
        assert!(dashboard.events(EventKind::Hackathon).is_empty());
        assert_eq!(dashboard.events(EventKind::Conference).len(), 2);
    }

    #[tokio::test]
    async fn test_load_reports_each_completion() {
        let dir = tempfile::tempdir().unwrap();
        let conferences = dir.path().join("c.csv");
        std::fs::write(&conferences, CONFERENCES_CSV).unwrap();

        let completed = RefCell::new(Vec::new());
        let mut dashboard = dashboard();
        dashboard
            .load_with_progress(
                &Source::File(PathBuf::from("/nonexistent/h.csv")),
                &Source::File(conferences),
                |kind| completed.borrow_mut().push(kind),
            )
            .await;

        let mut completed = completed.into_inner();
        completed.sort_by_key(|kind| kind.plural());
        assert_eq!(completed, vec![EventKind::Conference, EventKind::Hackathon]);
        assert_eq!(dashboard.load_state(), LoadState::Ready);
    }

    #[test]
    fn test_loads_complete_in_any_order() {
        let mut dashboard = dashboard();
        dashboard.begin_loading();
        assert!(dashboard.is_loading());

        dashboard.finish_load(
            EventKind::Conference,
            parse_events(EventKind::Conference, CONFERENCES_CSV),
        );
        assert_eq!(dashboard.load_state(), LoadState::Loading);
        assert_eq!(dashboard.events(EventKind::Conference).len(), 2);
        assert!(dashboard.events(EventKind::Hackathon).is_empty());

        dashboard.finish_load(
            EventKind::Hackathon,
            parse_events(EventKind::Hackathon, "garbage without a name column"),
        );
        assert_eq!(dashboard.load_state(), LoadState::Ready);
        assert!(dashboard.events(EventKind::Hackathon).is_empty());
    }

    #[test]
    fn test_empty_criteria_show_everything() {
        let dashboard = loaded();
        assert_eq!(
            names(&dashboard.filtered(EventKind::Hackathon)),
            vec!["GenAI Hack", "MedTech Jam"]
        );
    }

    #[test]
    fn test_views_follow_criteria_edits() {
        let mut dashboard = loaded();

        dashboard.criteria_mut().month = Month::new(6);
        assert_eq!(
            names(&dashboard.filtered(EventKind::Hackathon)),
            vec!["GenAI Hack"]
        );
        assert_eq!(
            names(&dashboard.filtered(EventKind::Conference)),
            vec!["CVPR"]
        );

        dashboard.criteria_mut().search = "med".to_string();
        assert!(dashboard.filtered(EventKind::Hackathon).is_empty());
    }

    #[test]
    fn test_favorites_view_ignores_criteria() {
        let mut dashboard = loaded();
        dashboard
            .toggle_favorite(EventKind::Hackathon, "GenAI Hack")
            .unwrap();
        dashboard
            .toggle_favorite(EventKind::Conference, "CVPR")
            .unwrap();

        dashboard.set_criteria(FilterCriteria {
            search: "no such event".to_string(),
            domain: Some("Robotics".to_string()),
            mode: Some("Offline".to_string()),
            month: Month::new(1),
        });

        assert!(dashboard.filtered(EventKind::Hackathon).is_empty());
        assert_eq!(
            names(&dashboard.favorites_view(EventKind::Hackathon)),
            vec!["GenAI Hack"]
        );
        assert_eq!(
            names(&dashboard.favorites_view(EventKind::Conference)),
            vec!["CVPR"]
        );
    }

    #[test]
    fn test_favorites_are_per_kind() {
        let mut dashboard = loaded();
        let favorites = dashboard
            .toggle_favorite(EventKind::Hackathon, "ICML")
            .unwrap();

        assert!(favorites.contains(EventKind::Hackathon, "ICML"));
        assert!(!dashboard.is_favorite(EventKind::Conference, "ICML"));
        // No hackathon is named ICML, so nothing shows up
        assert!(dashboard.favorites_view(EventKind::Hackathon).is_empty());
        assert!(dashboard.favorites_view(EventKind::Conference).is_empty());
    }

    #[test]
    fn test_filter_options_include_loaded_values() {
        let dashboard = dashboard();
        let before = dashboard.filter_options();
        assert!(!before.domains.is_empty());
        assert!(!before.modes.is_empty());

        let mut dashboard = dashboard;
        dashboard.finish_load(
            EventKind::Conference,
            parse_events(
                EventKind::Conference,
                "name,domain,mode\nQ2B,Quantum Computing,Satellite\n",
            ),
        );

        let after = dashboard.filter_options();
        assert!(after.domains.contains(&"Quantum Computing".to_string()));
        assert!(after.modes.contains(&"Satellite".to_string()));
    }
}
