//! Error types for boolean expression parsing

use super::Symbol;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to boolean expression parsing
///
/// Parsing stops at the first error; there is no recovery and no partial
/// tree. Positions are character indices into the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// A character outside the expression alphabet
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Position of the character in the input
        position: usize,
        /// The original input string that failed to parse
        input: Arc<str>,
    },
    /// A grammar violation: unmatched parenthesis, missing operand, trailing input
    InvalidSyntax {
        /// Description of what the parser required at this point
        expected: &'static str,
        /// What was found instead
        found: Symbol,
        /// Position of the offending symbol in the input
        position: usize,
        /// The original input string that failed to parse
        input: Arc<str>,
    },
}

impl ExpressionParseError {
    /// Position in the input where parsing stopped
    pub fn position(&self) -> usize {
        match self {
            ExpressionParseError::UnexpectedCharacter { position, .. }
            | ExpressionParseError::InvalidSyntax { position, .. } => *position,
        }
    }

    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ExpressionParseError::UnexpectedCharacter { input, .. }
            | ExpressionParseError::InvalidSyntax { input, .. } => input,
        }
    }
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::UnexpectedCharacter {
                character,
                position,
                input,
            } => write!(
                f,
                "Unexpected character '{}' at position {}. Input: {:?}",
                character, position, input
            ),
            ExpressionParseError::InvalidSyntax {
                expected,
                found,
                position,
                input,
            } => write!(
                f,
                "Expected {} but found {} at position {}. Input: {:?}",
                expected, found, position, input
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
