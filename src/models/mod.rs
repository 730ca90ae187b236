//! Data models for the company search and contact workflow.
//!
//! - [`SearchCriteria`] - What the user asked for (city, industry, type and area lists)
//! - [`Company`] - A candidate business returned by the backend
//! - [`ContactMethod`] - The closed set of outreach channels
//! - [`ContactRequest`] - One outreach attempt for one company
//!
//! Backend payloads are loosely typed, so a few fields go through the custom
//! deserializers in the `deserializers` module.

pub mod company;
pub mod contact;
pub mod deserializers;
pub mod search;

pub use company::{Company, CompanyId, UNKNOWN_CONTACT};
pub use contact::{ContactMethod, ContactRequest, ParseContactMethodError};
pub use search::{SearchCriteria, split_list};
