//! Error handling example for tourdb-rs
//!
//! This example demonstrates proper error handling and edge cases.
//! Loading can fail; queries cannot — missing data comes back as the
//! NOT_AVAILABLE sentinel.

use tourdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== TourDB-RS Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading database with error handling ---");
    match TourDb::<StandardBackend>::load() {
        Ok(db) => {
            println!("✓ Database loaded successfully");
            println!("  Places: {}", db.place_count());
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    }
    println!();

    let db = TourDb::<StandardBackend>::load()?;

    // Example 2: A missing dataset is a loud, typed error
    println!("--- Example 2: Loading a missing file ---");
    match TourDb::<StandardBackend>::load_from_path("/no/such/dataset.csv", None) {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(TourDbError::NotFound(msg)) => println!("  Not found: {msg}"),
        Err(e) => println!("  Other error: {e}"),
    }
    println!();

    // Example 3: Unknown places yield the sentinel, never an error
    println!("--- Example 3: Unknown place lookups ---");
    for name in ["Atlantis", "El Dorado", ""] {
        let value = db.place_attribute(name, PlaceField::Type);
        println!("  {name:?} -> {value}");
    }
    println!();

    // Example 4: Unknown states yield empty lists
    println!("--- Example 4: Unknown state filters ---");
    for state in ["Sikkim", "goa", ""] {
        let places = db.places_in_state(state);
        println!("  {state:?} -> {} places", places.len());
    }
    println!();

    // Example 5: Ratings parse defensively
    println!("--- Example 5: Rating strings ---");
    for s in ["Easy", "Moderate", "Impossible"] {
        println!("  {s:?} -> {:?}", TravelRating::parse(s));
    }

    Ok(())
}
