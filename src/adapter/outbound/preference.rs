//! In-memory league preferences.
//!
//! Preferences live for the lifetime of the process only.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::League;
use crate::port::outbound::preference::PreferenceStore;

/// Preference store backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    by_user: RwLock<HashMap<u64, Vec<League>>>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn add(&self, user: u64, league: League) -> bool {
        let mut by_user = self.by_user.write();
        let leagues = by_user.entry(user).or_default();
        if leagues.contains(&league) {
            return false;
        }
        leagues.push(league);
        true
    }

    fn leagues(&self, user: u64) -> Vec<League> {
        self.by_user.read().get(&user).cloned().unwrap_or_default()
    }

    fn clear(&self, user: u64) -> usize {
        self.by_user
            .write()
            .remove(&user)
            .map_or(0, |leagues| leagues.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let store = InMemoryPreferences::new();
        assert!(store.add(7, League::LaLiga));
        assert!(!store.add(7, League::LaLiga));
        assert_eq!(store.leagues(7), vec![League::LaLiga]);
    }

    #[test]
    fn keeps_insertion_order() {
        let store = InMemoryPreferences::new();
        store.add(7, League::SerieA);
        store.add(7, League::PremierLeague);
        store.add(7, League::Bundesliga);
        assert_eq!(
            store.leagues(7),
            vec![League::SerieA, League::PremierLeague, League::Bundesliga]
        );
    }

    #[test]
    fn users_are_isolated() {
        let store = InMemoryPreferences::new();
        store.add(1, League::Ligue1);
        assert!(store.leagues(2).is_empty());
        assert!(store.add(2, League::Ligue1));
    }

    #[test]
    fn clear_reports_removed_count() {
        let store = InMemoryPreferences::new();
        store.add(1, League::Ligue1);
        store.add(1, League::LaLiga);
        assert_eq!(store.clear(1), 2);
        assert_eq!(store.clear(1), 0);
        assert!(store.leagues(1).is_empty());
    }
}
