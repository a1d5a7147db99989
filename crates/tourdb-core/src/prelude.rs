//! tourdb-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use super::common::DbStats;
pub use super::error::{Result, TourDbError};
pub use super::model::{
    build_db, AccessibilityRating, CategoryFlags, DefaultBackend, DefaultTourDb, Place,
    PlaceField, Severity, StandardBackend, TourDb, TravelRating, NOT_AVAILABLE,
};
pub use super::text::{equals_folded, fold_key};
pub use super::tips::{Category, Guideline};
pub use super::traits::{NameMatch, PlaceQuery, TourBackend};

#[cfg(feature = "json")]
pub use super::api::{map_view, MapView, Marker, PlaceView};
