//! Error types shared by the parser, the generator and the DOM node.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Position within a JSON document.
///
/// # Examples
/// Consider the following JSON document:
/// ```json
/// {
///   "a": null
/// }
/// ```
/// The position of `null` is line 1, column 7: both start at 0, and the
/// `n` is the 8th character of the second line.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct JsonPosition {
    /// Line number, starting at 0
    ///
    /// CR (U+000D), LF (U+000A) and CR LF each count as one line break.
    pub line: u64,
    /// Character column within the current line, starting at 0
    ///
    /// Every Unicode character counts as one column regardless of how many
    /// bytes its UTF-8 encoding uses.
    pub column: u64,
    /// Byte offset from the start of the document, starting at 0
    pub byte_pos: u64,
}

impl Display for JsonPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.byte_pos
        )
    }
}

/// Describes why a syntax error occurred
#[non_exhaustive]
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum SyntaxErrorKind {
    /// A literal value is incomplete or invalid, for example `tru` instead of `true`
    InvalidLiteral,
    /// Unexpected trailing data after a literal, for example `truey`
    TrailingDataAfterLiteral,
    /// A closing bracket (`]` or `}`) did not match the enclosing container
    UnexpectedClosingBracket,
    /// A comma (`,`) is missing between array items or object members
    MissingComma,
    /// A trailing comma before the end of an array or object, for example `[1,]`
    TrailingComma,
    /// The colon (`:`) between a member name and its value is missing
    MissingColon,
    /// A JSON number is malformed, for example a lone `-` or `1.` without digits
    MalformedNumber,
    /// A number has a leading zero, for example `01`
    LeadingZero,
    /// Unexpected trailing data after a number, for example `123a`
    TrailingDataAfterNumber,
    /// A member name or the end of the object (`}`) was expected
    ExpectingMemberNameOrObjectEnd,
    /// A control character in the range 0x00 to 0x1F appeared unescaped in a string
    NotEscapedControlCharacter,
    /// An unknown escape sequence, for example `\x`
    UnknownEscapeSequence,
    /// A malformed escape sequence, for example `\u00` followed by the closing quote
    MalformedEscapeSequence,
    /// A `\uXXXX` escape encoded an unpaired UTF-16 surrogate
    ///
    /// Rust strings are UTF-8, so surrogate escapes must always form a
    /// high/low pair which combines into a single code point.
    UnpairedSurrogateEscape,
    /// A member name or string value contained invalid UTF-8 data
    MalformedUtf8,
    /// A string value is missing its closing quote
    UnterminatedString,
    /// The document ended although the current value or container is incomplete
    IncompleteDocument,
    /// An unexpected byte was encountered where a value was expected
    MalformedJson,
}

/// Error produced by the parser, the generator or the DOM node.
///
/// After a `Syntax` or `Io` error the originating parser or generator is
/// left in an unspecified state and must not be used further; create a
/// fresh instance on a new stream instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum JsonError {
    /// The wire grammar was violated
    #[error("JSON syntax error {kind} at {location}")]
    Syntax {
        /// Kind of the error
        kind: SyntaxErrorKind,
        /// Location where the error occurred in the JSON document
        location: JsonPosition,
    },
    /// A typed accessor was called for a token or node of a different kind
    #[error("attempted to read {actual} as {expected}")]
    TypeMismatch {
        /// What the accessor was asked for
        expected: &'static str,
        /// What the current token or node actually is
        actual: &'static str,
    },
    /// The generator was asked to write something its current state does not allow
    #[error("invalid generator state: {0}")]
    Structural(&'static str),
    /// Recursion while reading or writing a DOM node went past the configured limit
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(u32),
    /// A non-finite double cannot be encoded as a JSON number
    #[error("not a valid JSON number: {0}")]
    InvalidNumber(f64),
    /// The underlying byte sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let error = JsonError::Syntax {
            kind: SyntaxErrorKind::TrailingComma,
            location: JsonPosition {
                line: 1,
                column: 7,
                byte_pos: 12,
            },
        };
        assert_eq!(
            "JSON syntax error TrailingComma at line 1, column 7 (byte 12)",
            error.to_string()
        );

        let error = JsonError::TypeMismatch {
            expected: "a boolean",
            actual: "a string",
        };
        assert_eq!("attempted to read a string as a boolean", error.to_string());
    }
}
