/// File name the validator expects inside a skill directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Frontmatter keys the schema allows. Kept sorted so failure messages can
/// print the set verbatim.
pub const ALLOWED_FIELDS: [&str; 5] =
    ["allowed-tools", "description", "license", "metadata", "name"];

/// Maximum trimmed length of the `name` field, in characters.
pub const MAX_NAME_CHARS: usize = 64;

/// Maximum trimmed length of the `description` field, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1024;

/// Recommended maximum line count for the whole document, header included.
pub const MAX_SKILL_LINES: usize = 500;
