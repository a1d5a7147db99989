//! tourdb-cli — Command-line interface for tourdb-core
//!
//! This binary provides a simple way to inspect a tourism dataset from your
//! terminal. It supports printing basic statistics, listing states and the
//! places within them, showing the full detail record for a place, printing
//! the responsible-tourism tips that apply to it, and emitting map markers
//! as JSON.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ tourdb stats
//!
//! - List all states (optionally restricted to a month)
//!   $ tourdb states
//!   $ tourdb states --month October
//!
//! - List places in a state
//!   $ tourdb places Goa
//!
//! - Show details / tips for a place
//!   $ tourdb show Palolem
//!   $ tourdb tips Palolem
//!
//! - Map markers for a state
//!   $ tourdb map Goa
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the CSV dataset bundled with the `tourdb-core`
//! crate. Use `--input <path>` to point to a custom CSV and
//! `--filter <State,State,...>` to restrict loading to specific states.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tourdb_core::{PlaceQuery, Severity, StandardBackend, TourDb};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Determine input file (default CSV inside tourdb-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = TourDb::<StandardBackend>::default_data_dir();
        let filename = TourDb::<StandardBackend>::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    // Parse filter if provided
    let state_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    // Load DB (with filter if any)
    let filter_slice = state_filter.as_deref();
    let db = TourDb::<StandardBackend>::load_from_path(&input_path, filter_slice)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  States: {}", stats.states);
            println!("  Places: {}", stats.places);
        }

        Commands::States { month } => {
            let states = match month.as_deref() {
                Some(m) => db.states_for_month(m),
                None => db.states(),
            };
            if states.is_empty() {
                eprintln!("No states found");
            }
            for s in states {
                println!("- {s}");
            }
        }

        Commands::Places { state } => {
            let places = db.places_in_state(&state);
            if places.is_empty() {
                eprintln!("No places found in: {state}");
            } else {
                println!("Places in {state}:");
                for p in places {
                    println!("- {p}");
                }
            }
        }

        Commands::Show { name } => match db.find_place(&name) {
            Some(place) => print_place(place),
            None => eprintln!("No place found for: {name}"),
        },

        Commands::Tips { name } => match db.find_place(&name) {
            Some(place) => {
                println!("Responsible tourism tips for {}:", place.name());
                for (category, guideline) in place.guidelines() {
                    println!("\n## {}", category.label());
                    println!("Do:");
                    for tip in guideline.dos {
                        println!("  - {tip}");
                    }
                    println!("Don't:");
                    for tip in guideline.donts {
                        println!("  - {tip}");
                    }
                }
            }
            None => eprintln!("No place found for: {name}"),
        },

        Commands::Months => {
            for m in db.months() {
                println!("- {m}");
            }
        }

        #[cfg(feature = "json")]
        Commands::Map { state } => match tourdb_core::api::map_view(&db, &state) {
            Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
            None => eprintln!("No mapped places in: {state}"),
        },

        Commands::Search { query } => {
            let matches = db.find_places_by_substring(&query);
            if matches.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for place in matches {
                    println!("{} — {}", place.name(), place.state());
                }
            }
        }
    }

    Ok(())
}

fn print_place(place: &tourdb_core::Place<StandardBackend>) {
    use tourdb_core::PlaceField as F;

    println!("Discover: {}", place.name());
    println!("State: {}", place.state());
    println!("Type: {}", place.attribute(F::Type));
    println!("Description: {}", place.attribute(F::Description));
    println!("Uniqueness: {}", place.attribute(F::UniqueInfo));
    println!("Things to Do: {}", place.attribute(F::Activities));
    println!("Cuisine: {}", place.attribute(F::Cuisine));
    println!("Cultural Events: {}", place.attribute(F::Events));
    println!("Accommodation: {}", place.attribute(F::Accommodation));
    println!("Best Time to Visit: {}", place.attribute(F::BestTime));
    if let Some(image) = place.image() {
        println!("Image: {image}");
    }
    if let Some((lat, lng)) = place.coordinates() {
        println!("Coordinates: {lat}, {lng}");
    }

    if let Some(initiatives) = place.initiatives() {
        println!("\nInitiatives Existing / Ongoing:\n{initiatives}");
    } else {
        println!("\nTravel Details:");
        println!(
            "  {} {}",
            severity_tag(place.travel_rating().map(|r| r.severity())),
            place.attribute(F::TravelInfo)
        );
        println!("Accessibility Information:");
        println!(
            "  {} {}",
            severity_tag(place.accessibility_rating().map(|r| r.severity())),
            place.attribute(F::AccessibilityInfo)
        );
    }
}

fn severity_tag(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Success) => "[ok]",
        Some(Severity::Warning) => "[warn]",
        Some(Severity::Error) => "[alert]",
        None => "[?]",
    }
}
