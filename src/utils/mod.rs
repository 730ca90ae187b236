pub mod environment;
pub mod terminal;
pub mod timestamps;

pub use environment::default_cache_dir;
pub use terminal::{display_line, strip_ansi_codes};
pub use timestamps::format_timestamp;
