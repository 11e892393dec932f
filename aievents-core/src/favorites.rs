//! Favorited events, persisted in a `Storage`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::FAVORITES_KEY;
use crate::error::EventsResult;
use crate::event::EventKind;
use crate::storage::Storage;

/// Favorited event names, one set per kind.
///
/// Stored as `{"hackathons": [...], "conferences": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(default)]
    pub hackathons: BTreeSet<String>,
    #[serde(default)]
    pub conferences: BTreeSet<String>,
}

impl Favorites {
    pub fn ids(&self, kind: EventKind) -> &BTreeSet<String> {
        match kind {
            EventKind::Hackathon => &self.hackathons,
            EventKind::Conference => &self.conferences,
        }
    }

    fn ids_mut(&mut self, kind: EventKind) -> &mut BTreeSet<String> {
        match kind {
            EventKind::Hackathon => &mut self.hackathons,
            EventKind::Conference => &mut self.conferences,
        }
    }

    pub fn contains(&self, kind: EventKind, id: &str) -> bool {
        self.ids(kind).contains(id)
    }

    /// A copy of these favorites with `id` flipped in or out.
    fn toggled(&self, kind: EventKind, id: &str) -> Favorites {
        let mut next = self.clone();
        let ids = next.ids_mut(kind);
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.hackathons.is_empty() && self.conferences.is_empty()
    }
}

pub struct FavoritesStore<S: Storage> {
    storage: S,
    state: Favorites,
}

impl<S: Storage> FavoritesStore<S> {
    /// Load favorites from storage.
    ///
    /// Never fails: a missing or unparsable value yields empty favorites.
    pub fn load(storage: S) -> Self {
        let state = match storage.get_item(FAVORITES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::debug!("Discarding malformed favorites: {}", e);
                Favorites::default()
            }),
            None => Favorites::default(),
        };

        FavoritesStore { storage, state }
    }

    pub fn state(&self) -> &Favorites {
        &self.state
    }

    pub fn is_favorite(&self, kind: EventKind, id: &str) -> bool {
        self.state.contains(kind, id)
    }

    /// Add `id` if absent, remove it if present, and persist the result.
    ///
    /// The new state only replaces the current one once it has been saved,
    /// so a failed write leaves the store unchanged.
    pub fn toggle(&mut self, kind: EventKind, id: &str) -> EventsResult<&Favorites> {
        let next = self.state.toggled(kind, id);
        Self::save(&mut self.storage, &next)?;
        self.state = next;
        Ok(&self.state)
    }

    fn save(storage: &mut S, favorites: &Favorites) -> EventsResult<()> {
        let json = serde_json::to_string(favorites)?;
        storage.set_item(FAVORITES_KEY, &json)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
