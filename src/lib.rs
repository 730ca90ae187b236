//! Contact Finder - find companies and start contact with them from the terminal
//!
//! A client for a contact-finder backend. It supports:
//!
//! - Searching companies by city and industry, optionally narrowed by company
//!   types and areas (`POST /search`)
//! - Keeping the last result list in a single-slot store, optionally on disk
//! - Starting contact with a company through a chosen channel
//!   (`POST /contact`) and opening the returned link externally
//! - An interactive TUI and one-shot CLI subcommands over the same core
//!
//! # Example
//!
//! ```no_run
//! use contact_finder::{ContactFinderApi, HttpApiClient, SearchCriteria, SearchOutcome};
//!
//! let api = HttpApiClient::new("http://localhost:5000", None)?;
//! let criteria = SearchCriteria::from_input("Amsterdam", "IT", "software", "").unwrap();
//! if let SearchOutcome::Found(companies) = api.search(&criteria)? {
//!     println!("Found {} companies", companies.len());
//! }
//! # Ok::<(), contact_finder::ApiError>(())
//! ```

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod models;
pub mod opener;
pub mod store;
pub mod tui;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use api::{ApiError, ContactFinderApi, ContactOutcome, HttpApiClient, SearchOutcome};
pub use models::{Company, CompanyId, ContactMethod, ContactRequest, SearchCriteria, split_list};
pub use opener::{ExternalOpener, RecordingOpener};
pub use store::ResultStore;
pub use views::{ResultsView, SearchForm};
