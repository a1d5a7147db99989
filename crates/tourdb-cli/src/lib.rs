//! tourdb-cli
//! ==========
//!
//! Command-line interface for the `tourdb-core` tourism database.
//!
//! This crate primarily provides a binary (`tourdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install tourdb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! tourdb-cli --help
//! tourdb-cli stats
//! tourdb-cli states --month October
//! tourdb-cli places Goa
//! tourdb-cli show Palolem
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`tourdb-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/sparrow-desh/tourdb-rs>
//! - Core crate: <https://docs.rs/tourdb-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
