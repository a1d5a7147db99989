//! Advanced filtering example for tourdb-rs
//!
//! This example demonstrates month filtering, substring search, and the
//! category-driven travel tips.

use std::collections::HashMap;
use tourdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== TourDB-RS Advanced Filtering Example ===\n");

    let db = TourDb::<StandardBackend>::load()?;

    // Example 1: States worth visiting in a given month
    println!("--- Example 1: Where to go in October ---");
    let states = db.states_for_month("October");
    println!("Found {} states:", states.len());
    for state in &states {
        println!("- {state}");
    }
    println!();

    // Example 2: Substring search across place names
    println!("--- Example 2: Places containing 'kha' ---");
    for place in db.find_places_by_substring("kha") {
        println!("- {} ({})", place.name(), place.state());
    }
    println!();

    // Example 3: Group places by type
    println!("--- Example 3: Places grouped by type ---");
    let mut by_type: HashMap<&str, Vec<&str>> = HashMap::new();
    for place in db.places() {
        by_type
            .entry(place.place_type())
            .or_default()
            .push(place.name());
    }
    for (place_type, names) in by_type.iter() {
        println!("{}: {} places", place_type, names.len());
    }
    println!();

    // Example 4: Places with difficult travel
    println!("--- Example 4: Hard-to-reach places ---");
    let difficult: Vec<_> = db
        .places()
        .iter()
        .filter(|p| p.travel_rating() == Some(TravelRating::Difficult))
        .collect();
    for place in &difficult {
        println!("- {} ({})", place.name(), place.state());
    }
    println!();

    // Example 5: Tips selected by category flags
    println!("--- Example 5: Tips for a mountain destination ---");
    if let Some(place) = db.find_place("Munsiyari") {
        for (category, guideline) in place.guidelines() {
            println!("{}:", category.label());
            for tip in guideline.dos.iter().take(3) {
                println!("  do: {tip}");
            }
            for tip in guideline.donts.iter().take(3) {
                println!("  don't: {tip}");
            }
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
