use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Malformed delimiter header: {0}")]
    MalformedHeader(String),

    #[error("Invalid character in token {position}: {token:?}")]
    InvalidCharacter { token: String, position: usize },

    #[error("Invalid number format in token {position}: {token:?}")]
    InvalidFormat { token: String, position: usize },

    #[error("Negatives not allowed: {}", join_values(.0))]
    NegativeNumbers(Vec<i64>),
}

/// Error category, for callers that do not need the offending token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedHeader,
    InvalidCharacter,
    InvalidFormat,
    NegativeNumbers,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MalformedHeader(_) => ErrorKind::MalformedHeader,
            CalcError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            CalcError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            CalcError::NegativeNumbers(_) => ErrorKind::NegativeNumbers,
        }
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_numbers_message() {
        let err = CalcError::NegativeNumbers(vec![-2, -4]);
        assert_eq!(err.to_string(), "Negatives not allowed: -2,-4");
    }

    #[test]
    fn test_single_negative_message() {
        let err = CalcError::NegativeNumbers(vec![-1]);
        assert_eq!(err.to_string(), "Negatives not allowed: -1");
    }

    #[test]
    fn test_invalid_character_message_shows_whitespace() {
        let err = CalcError::InvalidCharacter {
            token: " 3".to_string(),
            position: 2,
        };
        assert_eq!(err.to_string(), "Invalid character in token 2: \" 3\"");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            CalcError::MalformedHeader("x".to_string()).kind(),
            ErrorKind::MalformedHeader
        );
        assert_eq!(
            CalcError::InvalidFormat {
                token: String::new(),
                position: 0
            }
            .kind(),
            ErrorKind::InvalidFormat
        );
    }
}
