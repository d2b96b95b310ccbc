use crate::ast::Location;
use crate::error::Error;
use thiserror::Error as ThisError;

/// Failure inside the lexer or parser, always tied to a source location
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found '{found}' at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("unexpected end of input, expected {expected} (after {location})")]
    UnexpectedEndOfInput { expected: String, location: Location },

    #[error("{message} at {location}")]
    InvalidSyntax { message: String, location: Location },

    #[error("{message} at {location}")]
    LexicalError { message: String, location: Location },
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn unexpected_token(expected: &str, found: &str, location: Location) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            location,
        }
    }

    pub fn unexpected_end_of_input(expected: &str, location: Location) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.to_string(),
            location,
        }
    }

    pub fn invalid_syntax(message: &str, location: Location) -> Self {
        Self::InvalidSyntax {
            message: message.to_string(),
            location,
        }
    }

    pub fn lexical_error(message: &str, location: Location) -> Self {
        Self::LexicalError {
            message: message.to_string(),
            location,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Self::UnexpectedToken { location, .. }
            | Self::UnexpectedEndOfInput { location, .. }
            | Self::InvalidSyntax { location, .. }
            | Self::LexicalError { location, .. } => *location,
        }
    }

    /// Description without the location suffix
    fn detail(&self) -> String {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                format!("expected {}, found '{}'", expected, found)
            }
            Self::UnexpectedEndOfInput { expected, .. } => {
                format!("unexpected end of input, expected {}", expected)
            }
            Self::InvalidSyntax { message, .. } | Self::LexicalError { message, .. } => message.clone(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let location = err.location();
        match err {
            ParseError::LexicalError { .. } => Error::lexical_error(err.to_string()),
            _ => Error::parse_error(location.line, location.column, err.detail()),
        }
    }
}
