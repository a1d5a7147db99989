//! Basic usage example for tourdb-rs
//!
//! This example demonstrates how to:
//! - Load the tourism database
//! - Drive the state → place selector cascade
//! - Look up attributes of a single place
//! - Use the caching mechanism

use tourdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== TourDB-RS Basic Usage Example ===\n");

    // Load the database
    println!("Loading tourism database...");
    let db = TourDb::<StandardBackend>::load()?;
    println!("✓ Database loaded successfully\n");

    // Example 1: List all states
    println!("--- Example 1: List all states ---");
    let states = db.states();
    println!("Total states: {}", states.len());
    for (i, state) in states.iter().enumerate() {
        println!("{}. {}", i + 1, state);
    }
    println!();

    // Example 2: List places within a state
    println!("--- Example 2: List places in a state ---");
    for place in db.places_in_state("Goa") {
        println!("- {place}");
    }
    println!();

    // Example 3: Look up a single place
    println!("--- Example 3: Place detail lookup ---");
    if let Some(place) = db.find_place("Majuli") {
        println!("Name: {}", place.name());
        println!("State: {}", place.state());
        println!("Type: {}", place.attribute(PlaceField::Type));
        println!("Things to do: {}", place.attribute(PlaceField::Activities));
        println!("Cuisine: {}", place.attribute(PlaceField::Cuisine));
        println!("Best time: {}", place.attribute(PlaceField::BestTime));
    }
    println!();

    // Example 4: Attribute lookups never fail
    println!("--- Example 4: Sentinel for missing data ---");
    let value = db.place_attribute("Nonexistent Place", PlaceField::Type);
    println!("Unknown place type: {value}");
    println!();

    // Example 5: Travel months
    println!("--- Example 5: Months covered by the dataset ---");
    for month in db.months() {
        println!("- {month}");
    }
    println!();

    // Example 6: Using the cache
    println!("--- Example 6: Cache usage ---");
    println!("load() memoizes the dataset process-wide; repeat calls only clone:");
    let start = std::time::Instant::now();
    let _db2 = TourDb::<StandardBackend>::load()?;
    println!("Memoized load time: {:?}", start.elapsed());

    println!("Loading from an explicit path (binary cache preferred):");
    let source = TourDb::<StandardBackend>::default_data_dir()
        .join(TourDb::<StandardBackend>::default_dataset_filename());
    let start = std::time::Instant::now();
    let _db3 = TourDb::<StandardBackend>::load_with_cache(&source)?;
    println!("Time: {:?}", start.elapsed());
    println!();

    // Example 7: Database statistics
    println!("--- Example 7: Database statistics ---");
    let stats = db.stats();
    println!("Total states: {}", stats.states);
    println!("Total places: {}", stats.places);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
