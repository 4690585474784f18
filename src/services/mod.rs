//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `transcoder.rs` — read word list, write declaration, inspect.
//! - `syntax.rs` — declaration rendering per target language.
//! - `config.rs` — config file loading and settings resolution.
//! - `logging.rs` — fern dispatcher setup.
//! - `output.rs` — JSON/text output helpers and error envelope.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod logging;
pub mod output;
pub mod syntax;
pub mod transcoder;
