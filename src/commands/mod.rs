//! Command handler layer.
//!
//! ## Files
//! - `validate.rs` — run the validator on a skill directory.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod validate;

pub use validate::handle_validate;
