use crate::cli::Cli;
use crate::services::{output, validator};
use std::path::Path;

/// Runs the validator and prints the verdict. Returns the boolean for the
/// caller to map onto a process exit code.
pub fn handle_validate(cli: &Cli) -> anyhow::Result<bool> {
    let outcome = validator::validate(Path::new(&cli.skill_dir));
    output::print_outcome(cli.json, &outcome)?;
    Ok(outcome.valid)
}
