/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::PlaceQuery::stats`], these counts reflect the
/// materialized in-memory database after any filtering that might have been
/// applied at load time.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub states: usize,
    pub places: usize,
}
