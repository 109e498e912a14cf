pub mod context;
pub mod health;
pub mod parse_note;
pub mod prompt;
pub mod upstream;

pub use context::RelayContext;
pub use health::handle_health_check;
pub use parse_note::handle_parse_note;
