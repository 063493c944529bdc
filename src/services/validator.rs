//! The document validator: an ordered chain of gates over a skill's
//! frontmatter and size, short-circuiting on the first violation.
//!
//! Ordering is a contract. Callers rely on which failure is reported when a
//! document breaks several rules at once (the unexpected-key gate fires
//! before the required-field gates, name gates before description gates), so
//! new rules are appended, never interleaved.

use crate::domain::constants::{
    ALLOWED_FIELDS, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS, MAX_SKILL_LINES, SKILL_FILE_NAME,
};
use crate::domain::models::ValidationOutcome;
use crate::services::frontmatter::{self, FrontmatterError};
use serde_yaml::{Mapping, Value};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ValidationFailure {
    #[error("SKILL.md not found")]
    MissingDocument,
    #[error("SKILL.md could not be read: {0}")]
    Unreadable(String),
    #[error("No YAML frontmatter found")]
    MissingHeader,
    #[error("Invalid frontmatter format")]
    MalformedHeaderDelimiters,
    #[error("Invalid YAML in frontmatter: {0}")]
    MalformedHeaderSyntax(String),
    #[error("Frontmatter must be a YAML dictionary")]
    HeaderNotAMapping,
    #[error("Unexpected key(s) in frontmatter: {unexpected}. Allowed: {allowed}")]
    UnexpectedFields { unexpected: String, allowed: String },
    #[error("Missing '{0}' in frontmatter")]
    MissingField(&'static str),
    #[error("{field} must be a string, got {actual}")]
    TypeMismatch {
        field: &'static str,
        actual: &'static str,
    },
    #[error("Name '{0}' should be hyphen-case (lowercase, digits, hyphens only)")]
    NameNotHyphenCase(String),
    #[error("Name '{0}' cannot start/end with hyphen or contain consecutive hyphens")]
    NameHyphenPlacement(String),
    #[error("Name too long ({actual} chars). Max: {max}")]
    NameTooLong { actual: usize, max: usize },
    #[error("Description cannot contain angle brackets (< or >)")]
    DescriptionAngleBrackets,
    #[error("Description too long ({actual} chars). Max: {max}")]
    DescriptionTooLong { actual: usize, max: usize },
    #[error("SKILL.md too long ({actual} lines). Recommended max: {max}")]
    DocumentTooLong { actual: usize, max: usize },
}

/// Validates the skill document inside `skill_dir`.
///
/// Never returns an error: every violation (including I/O trouble) is folded
/// into the outcome pair. Pure apart from the single file read, so repeated
/// calls on an unchanged document yield identical results.
pub fn validate(skill_dir: &Path) -> ValidationOutcome {
    match run_gates(skill_dir) {
        Ok(line_count) => {
            ValidationOutcome::pass(format!("Skill is valid! ({} lines)", line_count))
        }
        Err(failure) => ValidationOutcome::fail(failure.to_string()),
    }
}

/// The gate chain. `Ok` carries the whole-document line count for the
/// success message.
fn run_gates(skill_dir: &Path) -> Result<usize, ValidationFailure> {
    let skill_md = skill_dir.join(SKILL_FILE_NAME);
    if !skill_md.exists() {
        return Err(ValidationFailure::MissingDocument);
    }
    let content = std::fs::read_to_string(&skill_md)
        .map_err(|e| ValidationFailure::Unreadable(e.to_string()))?;

    let block = frontmatter::extract(&content).map_err(|e| match e {
        FrontmatterError::Missing => ValidationFailure::MissingHeader,
        FrontmatterError::Unterminated => ValidationFailure::MalformedHeaderDelimiters,
    })?;

    let parsed: Value = serde_yaml::from_str(&block)
        .map_err(|e| ValidationFailure::MalformedHeaderSyntax(e.to_string()))?;
    let mapping = match parsed {
        Value::Mapping(m) => m,
        _ => return Err(ValidationFailure::HeaderNotAMapping),
    };

    check_unexpected_keys(&mapping)?;

    let name = field(&mapping, "name").ok_or(ValidationFailure::MissingField("name"))?;
    let description =
        field(&mapping, "description").ok_or(ValidationFailure::MissingField("description"))?;

    let name = match name {
        Value::String(s) => s,
        other => {
            return Err(ValidationFailure::TypeMismatch {
                field: "Name",
                actual: type_label(other),
            })
        }
    };
    check_name(name.trim())?;

    let description = match description {
        Value::String(s) => s,
        other => {
            return Err(ValidationFailure::TypeMismatch {
                field: "Description",
                actual: type_label(other),
            })
        }
    };
    check_description(description.trim())?;

    let line_count = content.lines().count();
    if line_count > MAX_SKILL_LINES {
        return Err(ValidationFailure::DocumentTooLong {
            actual: line_count,
            max: MAX_SKILL_LINES,
        });
    }
    Ok(line_count)
}

fn check_unexpected_keys(mapping: &Mapping) -> Result<(), ValidationFailure> {
    let mut unexpected: Vec<String> = mapping
        .keys()
        .map(key_label)
        .filter(|k| !ALLOWED_FIELDS.contains(&k.as_str()))
        .collect();
    if unexpected.is_empty() {
        return Ok(());
    }
    unexpected.sort();
    Err(ValidationFailure::UnexpectedFields {
        unexpected: unexpected.join(", "),
        allowed: ALLOWED_FIELDS.join(", "),
    })
}

/// An empty (after trimming) name skips the content gates by design.
fn check_name(name: &str) -> Result<(), ValidationFailure> {
    if name.is_empty() {
        return Ok(());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationFailure::NameNotHyphenCase(name.to_string()));
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(ValidationFailure::NameHyphenPlacement(name.to_string()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_CHARS {
        return Err(ValidationFailure::NameTooLong {
            actual: len,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ValidationFailure> {
    if description.is_empty() {
        return Ok(());
    }
    if description.contains('<') || description.contains('>') {
        return Err(ValidationFailure::DescriptionAngleBrackets);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(ValidationFailure::DescriptionTooLong {
            actual: len,
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(())
}

/// Lookup by string key. Iteration instead of `Mapping::get` keeps non-string
/// YAML keys from ever matching a schema field.
fn field<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.iter().find_map(|(k, v)| match k {
        Value::String(s) if s == key => Some(v),
        _ => None,
    })
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}
