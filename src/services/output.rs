use crate::domain::models::{JsonOut, ValidationOutcome};

/// Prints the verdict: a single marked line, or the JSON envelope with `ok`
/// mirroring the verdict.
pub fn print_outcome(json: bool, outcome: &ValidationOutcome) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: outcome.valid,
                data: outcome
            })?
        );
    } else if outcome.valid {
        println!("✓ {}", outcome.message);
    } else {
        println!("✗ {}", outcome.message);
    }
    Ok(())
}
