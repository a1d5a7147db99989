// crates/tourdb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (binary cache vs source CSV).
//!
//! The dataset is loaded wholesale at startup and is read-only afterwards;
//! [`TourDb::load`] memoizes the default dataset process-wide.

use crate::error::{Result, TourDbError};
use crate::model::{DefaultBackend, TourDb};
use crate::traits::TourBackend;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static TOUR_DB_CACHE: OnceCell<TourDb<DefaultBackend>> = OnceCell::new();

/// Guard against corrupt or malicious cache files.
const MAX_CACHE_BYTES: u64 = 64 * 1024 * 1024;

impl TourDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "tourism.csv"
    }

    /// Loads the default dataset once per process and clones it out.
    ///
    /// Prefers the binary cache next to the source CSV and refreshes it
    /// after a source parse.
    pub fn load() -> Result<Self> {
        TOUR_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_with_cache(dir.join(file))
            })
            .cloned()
    }

    /// Loads `source`, trying its binary cache first.
    ///
    /// A missing or unreadable cache falls back to parsing the source; the
    /// cache is then rewritten best-effort (a read-only data directory is
    /// not an error).
    pub fn load_with_cache(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache = cache_path(source);

        if cache.exists() {
            if let Ok(db) = Self::load_from_path(&cache, None) {
                return Ok(db);
            }
        }

        let db = Self::load_from_path(source, None)?;
        let _ = db.write_cache(source);
        Ok(db)
    }

    /// Loads a dataset from `path`, optionally keeping only the named states.
    ///
    /// Files with `.bin` in their name are treated as a binary cache;
    /// everything else is parsed as CSV. A `.gz` suffix is handled
    /// transparently when the `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = Self::open_stream(path)?;

        if is_binary(path) {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            return Self::from_bytes(&data, filter);
        }

        #[cfg(feature = "csv")]
        {
            Self::from_csv_reader(reader, filter)
        }

        #[cfg(not(feature = "csv"))]
        {
            drop(reader);
            Err(TourDbError::NotFound(format!(
                "{} is not a binary cache and the 'csv' feature is disabled",
                path.display()
            )))
        }
    }

    pub fn load_filtered_by_state(states: &[&str]) -> Result<Self> {
        let dir = Self::default_data_dir();
        let file = Self::default_dataset_filename();
        Self::load_from_path(dir.join(file), Some(states))
    }

    /// Serializes this database to a binary cache next to the source file.
    ///
    /// Returns the cache path. Subsequent [`TourDb::load_from_path`] calls
    /// against that path skip CSV parsing entirely.
    pub fn write_cache(&self, source_path: impl AsRef<Path>) -> Result<PathBuf> {
        let cache = cache_path(source_path.as_ref());
        std::fs::write(&cache, self.to_bytes()?)?;
        Ok(cache)
    }

    // -----------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPER
    // -----------------------------------------------------------------------

    /// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
    /// Returns a generic Reader so the caller doesn't care about the
    /// compression.
    fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| {
            TourDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        if path.extension().is_some_and(|ext| ext == "gz") {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        Ok(Box::new(reader))
    }
}

impl<B: TourBackend> TourDb<B> {
    /// Reconstructs the database from its serialized binary form, optionally
    /// filtering places by state name (exact match).
    pub fn from_bytes(data: &[u8], filter: Option<&[&str]>) -> Result<Self> {
        let mut db: TourDb<B> = bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .allow_trailing_bytes()
            .deserialize(data)?;

        if let Some(states) = filter {
            if !states.is_empty() {
                db.retain_states(states);
            }
        }

        Ok(db)
    }

    /// Serializes the database for [`TourDb::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .serialize(self)?)
    }

    /// Parses source CSV rows from any reader, optionally filtering by state.
    #[cfg(feature = "csv")]
    pub fn from_csv_reader<R: Read>(reader: R, filter: Option<&[&str]>) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            let row: crate::raw::PlaceRaw = result?;
            rows.push(row);
        }

        // build_db drops rows without a state.
        let mut db = crate::model::build_db::<B>(rows);
        if let Some(states) = filter {
            if !states.is_empty() {
                db.retain_states(states);
            }
        }
        Ok(db)
    }
}

fn is_binary(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().contains(".bin"))
        .unwrap_or(false)
}

/// `tourism.csv` -> `tourism.csv.bin`, next to the source.
pub fn cache_path(source: &Path) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.bin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::PlaceQuery;

    const CSV: &str = "\
STATE,NAME,TYPE,TIME,LATITUDE,LONGITUDE,URBAN,MOUNTAIN,WINTER,HUMID,DRYHOT,RURAL,MONSOON
Goa,Palolem,Beach,\"October, November\",15.0100,74.0232,0,0,0,1,0,0,1
Goa,Agonda,Beach,December,15.0442,73.9852,0,0,0,1,0,0,1
Assam,Majuli,River Island,\"October, February\",26.9526,94.1680,0,0,0,1,0,1,1
";

    #[cfg(feature = "csv")]
    #[test]
    fn csv_rows_parse_into_places() {
        let db = TourDb::<DefaultBackend>::from_csv_reader(CSV.as_bytes(), None).unwrap();
        assert_eq!(db.place_count(), 3);
        assert_eq!(db.states(), vec!["Assam", "Goa"]);
        let majuli = db.find_place("Majuli").unwrap();
        assert!(majuli.flags.rural);
        assert_eq!(majuli.coordinates(), Some((26.9526, 94.168)));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn state_filter_applies_at_load() {
        let db =
            TourDb::<DefaultBackend>::from_csv_reader(CSV.as_bytes(), Some(&["Assam"])).unwrap();
        assert_eq!(db.place_count(), 1);
        assert_eq!(db.states(), vec!["Assam"]);
    }

    #[cfg(feature = "csv")]
    #[test]
    fn binary_roundtrip_preserves_queries() {
        let db = TourDb::<DefaultBackend>::from_csv_reader(CSV.as_bytes(), None).unwrap();
        let bytes = db.to_bytes().unwrap();
        let again = TourDb::<DefaultBackend>::from_bytes(&bytes, Some(&["Goa"])).unwrap();
        assert_eq!(again.places_in_state("Goa"), vec!["Agonda", "Palolem"]);
        assert!(again.places_in_state("Assam").is_empty());
    }

    // Exercises to_bytes/from_bytes through a generic backend parameter,
    // not just the concrete DefaultBackend instantiation.
    #[cfg(feature = "csv")]
    fn roundtrip<B: TourBackend>(db: &TourDb<B>) -> TourDb<B> {
        TourDb::from_bytes(&db.to_bytes().unwrap(), None).unwrap()
    }

    #[cfg(feature = "csv")]
    #[test]
    fn cache_roundtrip_is_backend_generic() {
        let db = TourDb::<DefaultBackend>::from_csv_reader(CSV.as_bytes(), None).unwrap();
        let again = roundtrip(&db);
        assert_eq!(again.place_count(), db.place_count());
        assert_eq!(again.states(), db.states());
    }

    #[cfg(feature = "csv")]
    #[test]
    fn load_with_cache_prefers_binary() {
        let dir = std::env::temp_dir().join("tourdb-load-with-cache-test");
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("tourism.csv");
        std::fs::write(&source, CSV).unwrap();
        let cache = cache_path(&source);
        let _ = std::fs::remove_file(&cache);

        // First load parses the CSV and materializes the cache.
        let db = TourDb::<DefaultBackend>::load_with_cache(&source).unwrap();
        assert!(cache.exists());
        assert_eq!(db.place_count(), 3);

        // Second load must come from the cache: the CSV is gone.
        std::fs::remove_file(&source).unwrap();
        let cached = TourDb::<DefaultBackend>::load_with_cache(&source).unwrap();
        assert_eq!(cached.states(), db.states());

        let _ = std::fs::remove_file(&cache);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn missing_dataset_reports_not_found() {
        let err = TourDb::<DefaultBackend>::load_from_path("/no/such/file.csv", None).unwrap_err();
        assert!(matches!(err, TourDbError::NotFound(_)));
    }

    #[test]
    fn cache_path_appends_bin() {
        assert_eq!(
            cache_path(Path::new("/data/tourism.csv")),
            PathBuf::from("/data/tourism.csv.bin")
        );
    }
}
