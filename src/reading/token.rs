use crate::engine::error::CalcError;

/// A slice of the number body between two delimiters
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Zero-based index of the token within the body, used in error messages.
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, position: usize) -> Self {
        Self { text, position }
    }
}

/// Checks a token and parses its signed integer value.
///
/// Whitespace anywhere in the token is reported before emptiness, so a
/// blank token is an invalid character rather than a missing operand.
pub fn validate_token(token: &Token<'_>) -> Result<i64, CalcError> {
    if token.text.chars().any(char::is_whitespace) {
        return Err(CalcError::InvalidCharacter {
            token: token.text.to_string(),
            position: token.position,
        });
    }

    let invalid_format = || CalcError::InvalidFormat {
        token: token.text.to_string(),
        position: token.position,
    };

    if token.text.is_empty() {
        return Err(invalid_format());
    }

    token.text.parse::<i64>().map_err(|_| invalid_format())
}
