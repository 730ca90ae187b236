//! Screen state, independent of how it is drawn.
//!
//! The TUI renders these and feeds them key actions; the CLI subcommands reuse
//! the same outcome handling so both surfaces say the same things.

pub mod name_filter;
pub mod results;
pub mod search_form;
pub mod selector;

pub use name_filter::NameFilter;
pub use results::{
    Feedback, NO_RESULTS_HINT, NO_RESULTS_TITLE, PendingContact, ResultRow, ResultsView,
};
pub use search_form::{FormField, Notice, REQUIRED_FIELDS_MISSING, SearchForm};
pub use selector::ContactMethodSelector;
