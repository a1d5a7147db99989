// crates/tourdb-core/src/raw.rs

use serde::Deserialize;

/// Raw place structure as it comes from the source CSV.
///
/// Column names mirror the external tourism table (`STATE`, `NAME`, ...).
/// NOTE: This type mirrors the external dataset schema, misspellings
/// included (`ACCOMODATION`). We do *not* expose this type from the public
/// API.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceRaw {
    #[serde(rename = "STATE")]
    pub state: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "TYPE", default)]
    pub place_type: Option<String>,
    #[serde(rename = "DESCRIPTIONS", default)]
    pub descriptions: Option<String>,
    #[serde(rename = "UNIQUE_INFO", default)]
    pub unique_info: Option<String>,
    #[serde(rename = "ACTIVITIES", default)]
    pub activities: Option<String>,
    #[serde(rename = "FOOD_INFO", default)]
    pub food_info: Option<String>,
    #[serde(rename = "EVENTS", default)]
    pub events: Option<String>,
    #[serde(rename = "ACCOMODATION", default)]
    pub accommodation: Option<String>,
    #[serde(rename = "ACCESSIBILITY_RATING", default)]
    pub accessibility_rating: Option<String>,
    #[serde(rename = "ACCESSIBILITY_INFO", default)]
    pub accessibility_info: Option<String>,
    #[serde(rename = "TRAVEL", default)]
    pub travel: Option<String>,
    #[serde(rename = "TRAVEL_INFO", default)]
    pub travel_info: Option<String>,
    #[serde(rename = "INITIATIVES", default)]
    pub initiatives: Option<String>,
    #[serde(rename = "IMAGE", default)]
    pub image: Option<String>,
    /// Comma-separated month list, e.g. "October, November, February".
    #[serde(rename = "TIME", default)]
    pub time: Option<String>,
    #[serde(rename = "LATITUDE", default)]
    pub latitude: Option<String>,
    #[serde(rename = "LONGITUDE", default)]
    pub longitude: Option<String>,

    // Category flags from the tips table: 1 = set, anything else = unset.
    #[serde(rename = "URBAN", default)]
    pub urban: Option<u8>,
    #[serde(rename = "MOUNTAIN", default)]
    pub mountain: Option<u8>,
    #[serde(rename = "WINTER", default)]
    pub winter: Option<u8>,
    #[serde(rename = "HUMID", default)]
    pub humid: Option<u8>,
    #[serde(rename = "DRYHOT", default)]
    pub dry_hot: Option<u8>,
    #[serde(rename = "RURAL", default)]
    pub rural: Option<u8>,
    #[serde(rename = "MONSOON", default)]
    pub monsoon: Option<u8>,
}

pub type PlacesRaw = Vec<PlaceRaw>;
