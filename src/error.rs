//! Error types for the logic-forms crate
//!
//! Parse failures carry their own detailed type,
//! [`ExpressionParseError`]; [`LogicError`] wraps it together with the
//! usage errors raised at the command-line boundary.

use crate::expression::ExpressionParseError;
use std::fmt;
use std::io;

/// The main error type for the logic-forms crate
///
/// The rewrite passes are total functions and never fail; errors only arise
/// while turning text into a tree or while validating how the tool was
/// invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// Failed to parse a boolean expression
    ///
    /// Wraps the scanner/grammar diagnostic with the offending position and
    /// the original input.
    Parse(ExpressionParseError),

    /// The tool was invoked incorrectly
    ///
    /// Used for missing or empty expressions and invalid option values.
    Usage {
        /// Description of what was wrong with the invocation
        message: String,
    },
}

impl LogicError {
    /// Create a usage error from a message
    pub fn usage(message: impl Into<String>) -> Self {
        LogicError::Usage {
            message: message.into(),
        }
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Parse(err) => write!(f, "Failed to parse boolean expression: {}", err),
            LogicError::Usage { message } => write!(f, "Usage error: {}", message),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Parse(err) => Some(err),
            LogicError::Usage { .. } => None,
        }
    }
}

impl From<ExpressionParseError> for LogicError {
    fn from(err: ExpressionParseError) -> Self {
        LogicError::Parse(err)
    }
}

// Conversion from LogicError to io::Error for callers working in io::Result
impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Parse(parse_err) => parse_err.into(),
            usage @ LogicError::Usage { .. } => io::Error::new(io::ErrorKind::InvalidInput, usage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoolExpr;
    use std::error::Error;
    use test_log::test;

    #[test]
    fn test_parse_error_display() {
        let parse_err = BoolExpr::parse("a*b").unwrap_err();
        let err = LogicError::from(parse_err);
        let msg = err.to_string();
        assert!(msg.contains("Failed to parse"));
        assert!(msg.contains("'*'"));
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn test_usage_error_display() {
        let err = LogicError::usage("no expression given");
        assert_eq!(err.to_string(), "Usage error: no expression given");
    }

    #[test]
    fn test_error_trait_source() {
        let parse_err = LogicError::from(BoolExpr::parse("(a").unwrap_err());
        assert!(parse_err.source().is_some());

        let usage_err = LogicError::usage("test");
        assert!(usage_err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err: io::Error = LogicError::from(BoolExpr::parse("a+").unwrap_err()).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let io_err: io::Error = LogicError::usage("bad flag").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("bad flag"));
    }
}
