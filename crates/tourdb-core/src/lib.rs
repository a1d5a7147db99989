// crates/tourdb-core/src/lib.rs

#[cfg(feature = "json")]
pub mod api; // JSON views for presentation layers
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod tips;
pub mod traits;
// Shared Raw Input (mirrors the external CSV schema)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{Result, TourDbError};
pub use crate::model::{
    build_db, AccessibilityRating, CategoryFlags, DefaultBackend, DefaultTourDb, Place,
    PlaceField, Severity, StandardBackend, TourDb, TravelRating, NOT_AVAILABLE,
};
pub use crate::text::{equals_folded, fold_key};
pub use crate::tips::{Category, Guideline};
pub use crate::traits::{NameMatch, PlaceQuery, TourBackend};
