// crates/tourdb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{Place, PlaceField};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the database.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so databases can be cached
/// via bincode.
pub trait TourBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode-aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get
/// convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use tourdb_core::traits::NameMatch;
///
/// struct Destination(&'static str);
/// impl NameMatch for Destination {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Destination("Māmallapuram").is_named("mamallapuram"));
/// assert!(Destination("Ziro Valley").name_contains("ziro"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The Logic Trait.
/// Defines the lookup and filter operations available on the database.
///
/// All queries are pure reads over the in-memory table: no side effects, no
/// mutation, and no failure mode beyond "nothing matched". A missing place or
/// attribute is reported via the [`crate::NOT_AVAILABLE`] sentinel, never as
/// an error.
pub trait PlaceQuery<B: TourBackend> {
    fn stats(&self) -> DbStats;

    /// Returns a slice of all places in the database, in load order.
    fn places(&self) -> &[Place<B>];

    /// Distinct state names, lexicographically sorted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tourdb_core::{PlaceQuery, StandardBackend, TourDb};
    ///
    /// let db = TourDb::<StandardBackend>::load().unwrap();
    /// for state in db.states() {
    ///     println!("- {state}");
    /// }
    /// ```
    fn states(&self) -> Vec<&str>;

    /// Distinct place names within `state`, lexicographically sorted.
    ///
    /// The state comparison is exact and case-sensitive; an empty or unknown
    /// state yields an empty list.
    fn places_in_state(&self, state: &str) -> Vec<&str>;

    /// First place whose name equals `name` exactly.
    ///
    /// Place names are unique within a state; when the dataset violates that
    /// invariant the first row wins.
    fn find_place(&self, name: &str) -> Option<&Place<B>>;

    /// One attribute of the named place, or [`crate::NOT_AVAILABLE`] when the
    /// place is unknown or the field is absent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tourdb_core::{PlaceField, PlaceQuery, StandardBackend, TourDb};
    ///
    /// let db = TourDb::<StandardBackend>::load().unwrap();
    /// println!("{}", db.place_attribute("Palolem", PlaceField::Type));
    /// ```
    fn place_attribute(&self, name: &str, field: PlaceField) -> &str;

    /// Distinct month names appearing in any `best_time` value, sorted.
    fn months(&self) -> Vec<&str>;

    /// States with at least one place recommended for `month`
    /// (case-insensitive), lexicographically sorted.
    fn states_for_month(&self, month: &str) -> Vec<&str>;

    /// Accent/case-insensitive substring search over place names.
    fn find_places_by_substring(&self, substr: &str) -> Vec<&Place<B>>;
}
