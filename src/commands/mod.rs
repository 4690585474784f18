//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `words.rs` — transcode/preview/inspect.
//! - `config.rs` — config show/init.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod config;
pub mod words;

pub use config::handle_config_commands;
pub use words::handle_word_commands;
