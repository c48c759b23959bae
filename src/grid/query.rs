use crate::error::PhotoError;

pub const SEARCH_MIN_LENGTH: usize = 2;
pub const SEARCH_MAX_LENGTH: usize = 100;

const STRIPPED_CHARS: [char; 5] = ['"', '\'', '<', '>', ';'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Nothing to search for; the grid falls back to recent photos.
    Blank,
    Term(String),
}

/// Trim, length-check and strip `" ' < > ;` from raw user input, in that order.
/// Lengths count characters of the trimmed input, before stripping.
pub fn parse_search_query(raw: &str) -> Result<SearchInput, PhotoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(SearchInput::Blank);
    }

    let len = trimmed.chars().count();
    if len < SEARCH_MIN_LENGTH {
        return Err(PhotoError::validation(format!(
            "Search query must be at least {} characters",
            SEARCH_MIN_LENGTH
        )));
    }
    if len > SEARCH_MAX_LENGTH {
        return Err(PhotoError::validation(format!(
            "Search query must be less than {} characters",
            SEARCH_MAX_LENGTH
        )));
    }

    let sanitized: String = trimmed.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    if sanitized.is_empty() {
        return Err(PhotoError::validation("Search query contains invalid characters"));
    }
    Ok(SearchInput::Term(sanitized))
}
