//! skillcheck — validates a skill document's YAML frontmatter against a
//! fixed schema of allowed fields, naming conventions, and size limits.
//!
//! The validator never fails with an error: every problem it finds is folded
//! into a [`domain::models::ValidationOutcome`] verdict. Callers that want a
//! process exit code map the boolean themselves (the bundled CLI does).

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
