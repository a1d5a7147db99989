// crates/tourdb-core/src/model.rs

use crate::raw::PlacesRaw;
use crate::traits::{NameMatch, TourBackend};
use serde::{Deserialize, Serialize};

/// Sentinel returned by attribute lookups when no value exists.
///
/// The query layer never fails on a missing place or field; callers render
/// this sentinel directly.
pub const NOT_AVAILABLE: &str = "Not available";

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl TourBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// How a rating should be rendered by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Travel difficulty as recorded in the `TRAVEL` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelRating {
    Easy,
    Moderate,
    Difficult,
}

impl TravelRating {
    /// Parses the dataset's string form. Unknown values yield `None`
    /// (sentinel behavior; ratings never error).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Easy" => Some(Self::Easy),
            "Moderate" => Some(Self::Moderate),
            "Difficult" => Some(Self::Difficult),
            _ => None,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Easy => Severity::Success,
            Self::Moderate => Severity::Warning,
            Self::Difficult => Severity::Error,
        }
    }
}

/// Accessibility as recorded in the `ACCESSIBILITY_RATING` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityRating {
    Accessible,
    Moderate,
    NotAccessible,
}

impl AccessibilityRating {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Accessible" => Some(Self::Accessible),
            "Moderate" => Some(Self::Moderate),
            "Not Accessible" => Some(Self::NotAccessible),
            _ => None,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Accessible => Severity::Success,
            Self::Moderate => Severity::Warning,
            Self::NotAccessible => Severity::Error,
        }
    }
}

/// The descriptive attributes a place exposes, addressable by name.
///
/// Used by [`crate::PlaceQuery::place_attribute`] so a presentation layer can
/// drive a whole detail page off one lookup primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Type,
    Description,
    UniqueInfo,
    Activities,
    Cuisine,
    Events,
    Accommodation,
    AccessibilityRating,
    AccessibilityInfo,
    TravelRating,
    TravelInfo,
    Initiatives,
    Image,
    BestTime,
}

/// Category flags derived from a place's terrain/climate columns.
///
/// These only select which static tip text applies; see [`crate::tips`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub urban: bool,
    pub mountain: bool,
    pub winter: bool,
    pub humid: bool,
    pub dry_hot: bool,
    pub rural: bool,
    pub monsoon: bool,
}

/// One tourist destination and its descriptive attributes.
///
/// `state` and `name` are always present; everything else is optional and
/// absence is explicit. Records are read-only after load.
#[derive(Clone, Debug, Serialize, Deserialize)]
// The field types already carry serde impls through `TourBackend`'s
// associated-type bounds; without this, derive would demand `B: Serialize`.
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Place<B: TourBackend> {
    pub state: B::Str,
    pub name: B::Str,
    pub place_type: Option<B::Str>,
    pub description: Option<B::Str>,
    pub unique_info: Option<B::Str>,
    pub activities: Option<B::Str>,
    pub cuisine: Option<B::Str>,
    pub events: Option<B::Str>,
    pub accommodation: Option<B::Str>,
    pub accessibility_rating: Option<B::Str>,
    pub accessibility_info: Option<B::Str>,
    pub travel_rating: Option<B::Str>,
    pub travel_info: Option<B::Str>,
    pub initiatives: Option<B::Str>,
    pub image: Option<B::Str>,
    /// Comma-separated month list, e.g. "October, November".
    pub best_time: Option<B::Str>,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    pub flags: CategoryFlags,
}

/// Top-level database structure: a flat, denormalized table of places.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct TourDb<B: TourBackend> {
    pub places: Vec<Place<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultTourDb = TourDb<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

fn flag(v: Option<u8>) -> bool {
    v == Some(1)
}

/// Empty and whitespace-only CSV cells carry no information.
fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Convert raw CSV rows into a `TourDb` using the given backend.
///
/// Rows without a state cannot be listed or filtered and are dropped here,
/// so `states()`/`places_in_state()` never see a blank state.
pub fn build_db<B: TourBackend>(raw: PlacesRaw) -> TourDb<B> {
    let places = raw
        .into_iter()
        .filter(|p| !p.state.trim().is_empty())
        .map(|p| Place::<B> {
            state: B::str_from(p.state.trim()),
            name: B::str_from(p.name.trim()),
            place_type: non_blank(&p.place_type).map(B::str_from),
            description: non_blank(&p.descriptions).map(B::str_from),
            unique_info: non_blank(&p.unique_info).map(B::str_from),
            activities: non_blank(&p.activities).map(B::str_from),
            cuisine: non_blank(&p.food_info).map(B::str_from),
            events: non_blank(&p.events).map(B::str_from),
            accommodation: non_blank(&p.accommodation).map(B::str_from),
            accessibility_rating: non_blank(&p.accessibility_rating).map(B::str_from),
            accessibility_info: non_blank(&p.accessibility_info).map(B::str_from),
            travel_rating: non_blank(&p.travel).map(B::str_from),
            travel_info: non_blank(&p.travel_info).map(B::str_from),
            initiatives: non_blank(&p.initiatives).map(B::str_from),
            image: non_blank(&p.image).map(B::str_from),
            best_time: non_blank(&p.time).map(B::str_from),
            latitude: parse_opt_f64(&p.latitude).map(B::float_from),
            longitude: parse_opt_f64(&p.longitude).map(B::float_from),
            flags: CategoryFlags {
                urban: flag(p.urban),
                mountain: flag(p.mountain),
                winter: flag(p.winter),
                humid: flag(p.humid),
                dry_hot: flag(p.dry_hot),
                rural: flag(p.rural),
                monsoon: flag(p.monsoon),
            },
        })
        .collect();

    TourDb { places }
}

impl<B: TourBackend> TourDb<B> {
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Keep only places whose state is in `states` (exact match).
    pub(crate) fn retain_states(&mut self, states: &[&str]) {
        self.places.retain(|p| states.contains(&p.state.as_ref()));
    }
}

impl<B: TourBackend> Place<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    pub fn place_type(&self) -> &str {
        self.place_type.as_ref().map(|s| s.as_ref()).unwrap_or(NOT_AVAILABLE)
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_ref().map(|s| s.as_ref())
    }

    pub fn initiatives(&self) -> Option<&str> {
        self.initiatives.as_ref().map(|s| s.as_ref())
    }

    pub fn best_time(&self) -> Option<&str> {
        self.best_time.as_ref().map(|s| s.as_ref())
    }

    /// Coordinates as `(latitude, longitude)`, when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((B::float_to_f64(lat), B::float_to_f64(lng))),
            _ => None,
        }
    }

    /// Typed view of the `TRAVEL` column; `None` when absent or unrecognized.
    pub fn travel_rating(&self) -> Option<TravelRating> {
        self.travel_rating
            .as_ref()
            .and_then(|s| TravelRating::parse(s.as_ref()))
    }

    /// Typed view of the `ACCESSIBILITY_RATING` column.
    pub fn accessibility_rating(&self) -> Option<AccessibilityRating> {
        self.accessibility_rating
            .as_ref()
            .and_then(|s| AccessibilityRating::parse(s.as_ref()))
    }

    /// One attribute by field name, or [`NOT_AVAILABLE`] when absent.
    pub fn attribute(&self, field: PlaceField) -> &str {
        let value = match field {
            PlaceField::Type => &self.place_type,
            PlaceField::Description => &self.description,
            PlaceField::UniqueInfo => &self.unique_info,
            PlaceField::Activities => &self.activities,
            PlaceField::Cuisine => &self.cuisine,
            PlaceField::Events => &self.events,
            PlaceField::Accommodation => &self.accommodation,
            PlaceField::AccessibilityRating => &self.accessibility_rating,
            PlaceField::AccessibilityInfo => &self.accessibility_info,
            PlaceField::TravelRating => &self.travel_rating,
            PlaceField::TravelInfo => &self.travel_info,
            PlaceField::Initiatives => &self.initiatives,
            PlaceField::Image => &self.image,
            PlaceField::BestTime => &self.best_time,
        };
        value.as_ref().map(|s| s.as_ref()).unwrap_or(NOT_AVAILABLE)
    }
}

impl<B: TourBackend> NameMatch for Place<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::PlaceRaw;

    fn sample_raw() -> PlaceRaw {
        PlaceRaw {
            state: "Goa".into(),
            name: " Palolem ".into(),
            place_type: Some("Beach".into()),
            travel: Some("Easy".into()),
            accessibility_rating: Some("Not Accessible".into()),
            latitude: Some(" 15.0100 ".into()),
            longitude: Some("74.0232".into()),
            time: Some("October, November".into()),
            monsoon: Some(1),
            ..PlaceRaw::default()
        }
    }

    #[test]
    fn build_db_trims_and_parses() {
        let db = build_db::<DefaultBackend>(vec![sample_raw()]);
        let p = &db.places[0];
        assert_eq!(p.name(), "Palolem");
        assert_eq!(p.state(), "Goa");
        assert_eq!(p.coordinates(), Some((15.01, 74.0232)));
        assert!(p.flags.monsoon);
        assert!(!p.flags.urban);
    }

    #[test]
    fn attribute_falls_back_to_sentinel() {
        let db = build_db::<DefaultBackend>(vec![sample_raw()]);
        let p = &db.places[0];
        assert_eq!(p.attribute(PlaceField::Type), "Beach");
        assert_eq!(p.attribute(PlaceField::Cuisine), NOT_AVAILABLE);
    }

    #[test]
    fn blank_state_rows_are_dropped() {
        let ghost = PlaceRaw {
            state: "   ".into(),
            name: "Ghost".into(),
            ..PlaceRaw::default()
        };
        let db = build_db::<DefaultBackend>(vec![ghost, sample_raw()]);
        assert_eq!(db.place_count(), 1);
        assert_eq!(db.places[0].name(), "Palolem");
    }

    #[test]
    fn blank_cells_are_absent() {
        let mut raw = sample_raw();
        raw.events = Some("   ".into());
        let db = build_db::<DefaultBackend>(vec![raw]);
        assert!(db.places[0].events.is_none());
    }

    #[test]
    fn ratings_parse_to_severity() {
        assert_eq!(TravelRating::parse("Easy"), Some(TravelRating::Easy));
        assert_eq!(TravelRating::parse("impossible"), None);
        assert_eq!(TravelRating::Difficult.severity(), Severity::Error);
        assert_eq!(
            AccessibilityRating::parse("Not Accessible"),
            Some(AccessibilityRating::NotAccessible)
        );
        assert_eq!(AccessibilityRating::Moderate.severity(), Severity::Warning);
    }
}
