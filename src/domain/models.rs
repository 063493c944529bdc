use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Verdict of a single validation run. Exactly one is produced per call;
/// `message` carries either the success summary or the first rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn pass(message: String) -> Self {
        Self {
            valid: true,
            message,
        }
    }

    pub fn fail(message: String) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}
