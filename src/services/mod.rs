//! Service layer containing the validation logic and output helpers.
//!
//! ## Service map
//! - `frontmatter.rs` — header block extraction (two-pass line scan).
//! - `validator.rs` — the ordered rule pipeline producing a verdict.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod frontmatter;
pub mod output;
pub mod validator;
