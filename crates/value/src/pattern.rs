use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// A compiled textual pattern.
///
/// Equality throughout the workspace is by canonical source text (the
/// pattern string including inline flags), which is coarser than behavioral
/// equivalence: two differently written patterns matching the same strings
/// are not equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Pattern, PatternError> {
        Ok(Pattern {
            regex: Regex::new(source)?,
        })
    }

    /// The canonical source text, exactly as given to [`Pattern::new`].
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
