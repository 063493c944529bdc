//! Frontmatter extraction.
//!
//! The header block is everything between the opening `---` line and the
//! next line that is exactly `---`. A two-pass line scan keeps "delimiter
//! not found" an explicit outcome instead of a failed regex match.

pub const DELIMITER: &str = "---";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("No YAML frontmatter found")]
    Missing,
    #[error("Invalid frontmatter format")]
    Unterminated,
}

/// Extracts the frontmatter block, delimiters excluded.
///
/// The document must start with `---`; the first line must be exactly the
/// delimiter (so `---abc` is malformed, not a header), and the block runs to
/// the next exact delimiter line.
pub fn extract(content: &str) -> Result<String, FrontmatterError> {
    if !content.starts_with(DELIMITER) {
        return Err(FrontmatterError::Missing);
    }

    let mut lines = content.lines();
    match lines.next() {
        Some(first) if first == DELIMITER => {}
        _ => return Err(FrontmatterError::Unterminated),
    }

    let mut block: Vec<&str> = Vec::new();
    for line in lines {
        if line == DELIMITER {
            return Ok(block.join("\n"));
        }
        block.push(line);
    }
    Err(FrontmatterError::Unterminated)
}
