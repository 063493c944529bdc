//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — validation outcome and JSON output envelope.
//! - `constants.rs` — the frontmatter schema and size limits.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. The outcome pair is the
//! whole caller contract; keep schema-impacting changes explicit.

pub mod constants;
pub mod models;
