//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — settings, report and JSON envelope structs.
//! - `constants.rs` — built-in defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
