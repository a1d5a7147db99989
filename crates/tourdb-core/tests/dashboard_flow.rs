//! End-to-end flow over an in-memory dataset: the selector cascade a
//! dashboard drives (states → places → detail → tips → map).

#![cfg(feature = "csv")]

use tourdb_core::prelude::*;

const CSV: &str = "\
STATE,NAME,TYPE,DESCRIPTIONS,UNIQUE_INFO,ACTIVITIES,FOOD_INFO,EVENTS,ACCOMODATION,ACCESSIBILITY_RATING,ACCESSIBILITY_INFO,TRAVEL,TRAVEL_INFO,INITIATIVES,IMAGE,TIME,LATITUDE,LONGITUDE,URBAN,MOUNTAIN,WINTER,HUMID,DRYHOT,RURAL,MONSOON
Goa,Palolem,Beach,A crescent beach in south Goa,Calm waters,Kayaking; dolphin trips,Goan fish curry,Shigmo,Beach huts,Accessible,Well connected by road,Easy,Direct buses from Margao,,https://example.com/palolem.jpg,\"October, November, December\",15.0100,74.0232,0,0,0,1,0,0,1
Goa,Agonda,Beach,A quiet stretch south of Palolem,Turtle nesting site,Swimming,Prawn balchão,,Guesthouses,Moderate,Narrow approach road,Moderate,Shared taxis from Canacona,,,\"November, December\",15.0442,73.9852,0,0,0,1,0,1,1
Himachal Pradesh,Khajjiar,Meadow,A saucer-shaped plateau ringed by deodars,Called mini Switzerland,Zorbing; horse riding,Siddu,Minjar fair,Forest rest house,Not Accessible,Last stretch closes in snow,Difficult,Roads ice over in January,,,\"December, January\",32.5492,76.0644,0,1,1,0,0,0,0
Assam,Majuli,River Island,The world's largest river island,Neo-Vaishnavite satras,Mask making workshops,Apong and fish,Raas Leela,Bamboo cottages,Moderate,Ferry from Jorhat,Moderate,Ferries suspended in floods,River bank protection works,,\"October, November, February\",26.9526,94.1680,0,0,0,1,0,1,1
";

fn load() -> TourDb<StandardBackend> {
    TourDb::from_csv_reader(CSV.as_bytes(), None).unwrap()
}

#[test]
fn selector_cascade() {
    let db = load();

    // State dropdown
    assert_eq!(db.states(), vec!["Assam", "Goa", "Himachal Pradesh"]);

    // Place dropdown for the chosen state
    assert_eq!(db.places_in_state("Goa"), vec!["Agonda", "Palolem"]);
    assert_eq!(db.places_in_state("Sikkim"), Vec::<&str>::new());

    // Detail lookups
    assert_eq!(db.place_attribute("Palolem", PlaceField::Type), "Beach");
    assert_eq!(
        db.place_attribute("Palolem", PlaceField::Cuisine),
        "Goan fish curry"
    );
    // Agonda has no events column value
    assert_eq!(db.place_attribute("Agonda", PlaceField::Events), NOT_AVAILABLE);
    // Unknown place: every field is the sentinel, never an error
    assert_eq!(
        db.place_attribute("Nonexistent Place", PlaceField::Type),
        NOT_AVAILABLE
    );
}

#[test]
fn month_filter_drives_state_dropdown() {
    let db = load();

    assert_eq!(
        db.months(),
        vec!["December", "February", "January", "November", "October"]
    );
    assert_eq!(db.states_for_month("December"), vec!["Goa", "Himachal Pradesh"]);
    assert_eq!(db.states_for_month("february"), vec!["Assam"]);
    assert!(db.states_for_month("June").is_empty());
}

#[test]
fn detail_page_ratings() {
    let db = load();

    let khajjiar = db.find_place("Khajjiar").unwrap();
    assert_eq!(khajjiar.travel_rating(), Some(TravelRating::Difficult));
    assert_eq!(
        khajjiar.travel_rating().map(TravelRating::severity),
        Some(Severity::Error)
    );
    assert_eq!(
        khajjiar.accessibility_rating(),
        Some(AccessibilityRating::NotAccessible)
    );

    let palolem = db.find_place("Palolem").unwrap();
    assert_eq!(
        palolem.accessibility_rating().map(AccessibilityRating::severity),
        Some(Severity::Success)
    );
    assert_eq!(palolem.image(), Some("https://example.com/palolem.jpg"));
}

#[test]
fn tips_follow_category_flags() {
    let db = load();

    let khajjiar = db.find_place("Khajjiar").unwrap();
    assert_eq!(
        khajjiar.categories(),
        vec![Category::General, Category::Mountain, Category::Winter]
    );

    let majuli = db.find_place("Majuli").unwrap();
    assert_eq!(
        majuli.categories(),
        vec![
            Category::General,
            Category::Humid,
            Category::Rural,
            Category::Monsoon
        ]
    );

    for (category, guideline) in majuli.guidelines() {
        assert!(!guideline.dos.is_empty(), "{} has no dos", category.label());
        assert!(
            !guideline.donts.is_empty(),
            "{} has no donts",
            category.label()
        );
    }
}

#[cfg(feature = "json")]
#[test]
fn map_page_markers_and_center() {
    let db = load();

    let view = map_view(&db, "Goa").unwrap();
    assert_eq!(view.markers.len(), 2);
    assert!((view.center_latitude - 15.0271).abs() < 1e-4);
    assert!((view.center_longitude - 74.0042).abs() < 1e-4);

    // Unknown state has no markers
    assert!(map_view(&db, "Sikkim").is_none());

    // The whole view serializes for the frontend
    let json = serde_json::to_string_pretty(&view).unwrap();
    assert!(json.contains("\"Palolem\""));
}

#[test]
fn binary_cache_is_equivalent() {
    let db = load();
    let bytes = db.to_bytes().unwrap();
    let cached = TourDb::<StandardBackend>::from_bytes(&bytes, None).unwrap();

    assert_eq!(cached.states(), db.states());
    assert_eq!(
        cached.place_attribute("Majuli", PlaceField::Initiatives),
        "River bank protection works"
    );
}
