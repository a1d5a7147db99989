// crates/tourdb-core/src/search.rs

use crate::common::DbStats;
use crate::model::{Place, PlaceField, TourDb, NOT_AVAILABLE};
use crate::text::fold_key;
use crate::traits::{NameMatch, PlaceQuery, TourBackend};
use std::collections::BTreeSet;

impl<B: TourBackend> PlaceQuery<B> for TourDb<B> {
    fn stats(&self) -> DbStats {
        let states: BTreeSet<&str> = self.places.iter().map(|p| p.state.as_ref()).collect();
        DbStats {
            states: states.len(),
            places: self.places.len(),
        }
    }

    fn places(&self) -> &[Place<B>] {
        &self.places
    }

    fn states(&self) -> Vec<&str> {
        // BTreeSet gives dedup + lexicographic order in one pass.
        let set: BTreeSet<&str> = self
            .places
            .iter()
            .map(|p| p.state.as_ref())
            .filter(|s| !s.is_empty())
            .collect();
        set.into_iter().collect()
    }

    fn places_in_state(&self, state: &str) -> Vec<&str> {
        // Exact, case-sensitive state match; an empty selector matches no row
        // because states are never stored blank.
        let set: BTreeSet<&str> = self
            .places
            .iter()
            .filter(|p| p.state.as_ref() == state)
            .map(|p| p.name.as_ref())
            .collect();
        set.into_iter().collect()
    }

    fn find_place(&self, name: &str) -> Option<&Place<B>> {
        // Linear scan is fine: the dataset is a few hundred rows at most.
        // First match wins when the per-state uniqueness invariant is broken.
        self.places.iter().find(|p| p.name.as_ref() == name)
    }

    fn place_attribute(&self, name: &str, field: PlaceField) -> &str {
        self.find_place(name)
            .map(|p| p.attribute(field))
            .unwrap_or(NOT_AVAILABLE)
    }

    fn months(&self) -> Vec<&str> {
        let mut set = BTreeSet::new();
        for p in &self.places {
            if let Some(time) = &p.best_time {
                for month in time.as_ref().split(',') {
                    let month = month.trim();
                    if !month.is_empty() {
                        set.insert(month);
                    }
                }
            }
        }
        set.into_iter().collect()
    }

    fn states_for_month(&self, month: &str) -> Vec<&str> {
        let q = fold_key(month);
        if q.is_empty() {
            return Vec::new();
        }
        let set: BTreeSet<&str> = self
            .places
            .iter()
            .filter(|p| {
                p.best_time
                    .as_ref()
                    .is_some_and(|t| fold_key(t.as_ref()).contains(&q))
            })
            .map(|p| p.state.as_ref())
            .collect();
        set.into_iter().collect()
    }

    fn find_places_by_substring(&self, substr: &str) -> Vec<&Place<B>> {
        if fold_key(substr).is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| p.name_contains(substr))
            .collect()
    }
}
