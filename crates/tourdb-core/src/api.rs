// crates/tourdb-core/src/api.rs

//! # JSON Views
//!
//! Owned, serializable snapshots of query results for presentation layers
//! (web frontends, map widgets). The core model stays backend-generic; these
//! views flatten everything to plain `String`/`f64`.

use crate::model::{Place, Severity, TourDb};
use crate::traits::{PlaceQuery, TourBackend};
use serde::Serialize;

/// Full detail record for one place, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceView {
    pub state: String,
    pub name: String,
    pub place_type: Option<String>,
    pub description: Option<String>,
    pub unique_info: Option<String>,
    pub activities: Option<String>,
    pub cuisine: Option<String>,
    pub events: Option<String>,
    pub accommodation: Option<String>,
    pub accessibility_rating: Option<String>,
    pub accessibility_info: Option<String>,
    pub accessibility_severity: Option<Severity>,
    pub travel_rating: Option<String>,
    pub travel_info: Option<String>,
    pub travel_severity: Option<Severity>,
    pub initiatives: Option<String>,
    pub image: Option<String>,
    pub best_time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl<B: TourBackend> From<&Place<B>> for PlaceView {
    fn from(p: &Place<B>) -> Self {
        let opt = |v: &Option<B::Str>| v.as_ref().map(B::str_to_string);
        PlaceView {
            state: B::str_to_string(&p.state),
            name: B::str_to_string(&p.name),
            place_type: opt(&p.place_type),
            description: opt(&p.description),
            unique_info: opt(&p.unique_info),
            activities: opt(&p.activities),
            cuisine: opt(&p.cuisine),
            events: opt(&p.events),
            accommodation: opt(&p.accommodation),
            accessibility_rating: opt(&p.accessibility_rating),
            accessibility_info: opt(&p.accessibility_info),
            accessibility_severity: p.accessibility_rating().map(|r| r.severity()),
            travel_rating: opt(&p.travel_rating),
            travel_info: opt(&p.travel_info),
            travel_severity: p.travel_rating().map(|r| r.severity()),
            initiatives: opt(&p.initiatives),
            image: opt(&p.image),
            best_time: opt(&p.best_time),
            latitude: p.latitude.map(B::float_to_f64),
            longitude: p.longitude.map(B::float_to_f64),
        }
    }
}

/// One map pin.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Map rendering data for one state: markers plus a mean-coordinate center.
///
/// Places without coordinates are skipped; when no place in the state has
/// coordinates there is nothing to render and [`map_view`] returns `None`.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub state: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub markers: Vec<Marker>,
}

/// Builds the map view for `state`, or `None` when no place there carries
/// coordinates.
pub fn map_view<B: TourBackend>(db: &TourDb<B>, state: &str) -> Option<MapView> {
    let markers: Vec<Marker> = db
        .places()
        .iter()
        .filter(|p| p.state.as_ref() == state)
        .filter_map(|p| {
            p.coordinates().map(|(lat, lng)| Marker {
                name: B::str_to_string(&p.name),
                latitude: lat,
                longitude: lng,
            })
        })
        .collect();

    if markers.is_empty() {
        return None;
    }

    let n = markers.len() as f64;
    Some(MapView {
        state: state.to_string(),
        center_latitude: markers.iter().map(|m| m.latitude).sum::<f64>() / n,
        center_longitude: markers.iter().map(|m| m.longitude).sum::<f64>() / n,
        markers,
    })
}

impl<B: TourBackend> TourDb<B> {
    /// Detail view for one place, ready for JSON serialization.
    pub fn place_view(&self, name: &str) -> Option<PlaceView> {
        self.find_place(name).map(PlaceView::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_db, DefaultBackend};
    use crate::raw::PlaceRaw;

    fn fixture() -> TourDb<DefaultBackend> {
        let mut palolem = PlaceRaw {
            state: "Goa".into(),
            name: "Palolem".into(),
            travel: Some("Difficult".into()),
            ..PlaceRaw::default()
        };
        palolem.latitude = Some("15.0".into());
        palolem.longitude = Some("74.0".into());

        let mut agonda = PlaceRaw {
            state: "Goa".into(),
            name: "Agonda".into(),
            ..PlaceRaw::default()
        };
        agonda.latitude = Some("16.0".into());
        agonda.longitude = Some("75.0".into());

        // No coordinates; must not appear on the map.
        let majuli = PlaceRaw {
            state: "Assam".into(),
            name: "Majuli".into(),
            ..PlaceRaw::default()
        };

        build_db(vec![palolem, agonda, majuli])
    }

    #[test]
    fn map_view_centers_on_mean_coordinates() {
        let db = fixture();
        let view = map_view(&db, "Goa").unwrap();
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.center_latitude, 15.5);
        assert_eq!(view.center_longitude, 74.5);
    }

    #[test]
    fn map_view_empty_without_coordinates() {
        let db = fixture();
        assert!(map_view(&db, "Assam").is_none());
        assert!(map_view(&db, "Sikkim").is_none());
    }

    #[test]
    fn place_view_carries_severity() {
        let db = fixture();
        let view = db.place_view("Palolem").unwrap();
        assert_eq!(view.travel_severity, Some(Severity::Error));
        assert!(view.accessibility_severity.is_none());
        assert!(db.place_view("Nonexistent Place").is_none());
    }

    #[test]
    fn views_serialize_to_json() {
        let db = fixture();
        let json = serde_json::to_string(&map_view(&db, "Goa").unwrap()).unwrap();
        assert!(json.contains("\"markers\""));
        let json = serde_json::to_string(&db.place_view("Palolem").unwrap()).unwrap();
        assert!(json.contains("\"Palolem\""));
    }
}
