//! Module for locating JSON pointer targets
//!
//! [`get_line_number`] resolves a JSON pointer string against a JSON document and
//! returns the line/column position of the addressed value. [`locate_segments`] is the
//! same operation for a pointer which has already been decoded into its segments.

/// Module for JSON Pointer decoding
///
/// A JSON Pointer ([RFC 6901](https://www.rfc-editor.org/rfc/rfc6901)) consists of zero
/// or more `/`-separated segments which either represent the name of a JSON object
/// member or the decimal index of a JSON array item. Within a segment the escape
/// sequence `~1` stands for `/` and `~0` stands for `~`.
///
/// [`parse`] decodes the textual form into its unescaped segments. The locator compares
/// segments textually, so the pointer `/a/0` addresses both the member `"0"` of an
/// object stored under `"a"` and the first item of an array stored under `"a"`,
/// whichever the scanned document actually contains.
pub mod json_pointer {
    use thiserror::Error;

    /// Error which occurred while [parsing a JSON pointer](parse)
    #[derive(Error, Clone, Debug)]
    #[error("parse error at index {index}: {message}")]
    pub struct PointerParseError {
        /// Index (starting at 0) where the error occurred within the pointer string
        pub index: usize,
        /// Message describing why the error occurred
        pub message: String,
    }

    /// Parses a JSON pointer into its unescaped segments
    ///
    /// The empty pointer denotes the document root and yields no segments. Every other
    /// pointer must start with `/`; within segments `~1` is decoded to `/` and `~0` to
    /// `~`. A `~` followed by anything else (or by nothing) is malformed and an error
    /// is returned.
    ///
    /// # Examples
    /// ```
    /// # use jsonpos::locator::json_pointer::*;
    /// let segments = parse("/a/~1etc~1hosts/0")?;
    /// assert_eq!(
    ///     segments,
    ///     vec!["a".to_owned(), "/etc/hosts".to_owned(), "0".to_owned()],
    /// );
    /// # Ok::<(), PointerParseError>(())
    /// ```
    ///
    /// Note that `/` is *not* the root pointer: it consists of one empty segment and
    /// addresses the member with the empty string as name. The special treatment of a
    /// bare `/` as document root is applied by [`get_line_number`](super::get_line_number),
    /// not here.
    pub fn parse(pointer: &str) -> Result<Vec<String>, PointerParseError> {
        if pointer.is_empty() {
            return Ok(Vec::new());
        }
        if !pointer.starts_with('/') {
            return Err(PointerParseError {
                index: 0,
                message: "pointer must be empty or start with '/'".to_owned(),
            });
        }

        let mut segments = Vec::new();
        let mut segment = String::new();
        let mut chars = pointer.char_indices();
        // Consume the leading '/'
        chars.next();

        while let Some((index, c)) = chars.next() {
            match c {
                '/' => segments.push(std::mem::take(&mut segment)),
                '~' => match chars.next() {
                    Some((_, '0')) => segment.push('~'),
                    Some((_, '1')) => segment.push('/'),
                    _ => {
                        return Err(PointerParseError {
                            index,
                            message: "expecting '~0' or '~1'".to_owned(),
                        })
                    }
                },
                other => segment.push(other),
            }
        }
        segments.push(segment);
        Ok(segments)
    }

}

use std::fmt::{Display, Formatter};

use thiserror::Error;

mod scanner;
// Re-export the scanner implementation under the `locator` module
pub use scanner::*;

/// Line and column position
///
/// # Examples
/// Consider the following JSON document:
/// ```json
/// {
///   "a": null
/// }
/// ```
/// The position of the member name `"a"` is:
/// - line: 2
///   Line numbering starts at 1 and the name is in the second line
/// - column: 3
///   Column numbering starts at 1 and the opening `"` of the name is the third
///   character in that line
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePosition {
    /// Line number, starting at 1
    ///
    /// Only the character _LF_ (U+000A) is considered a line break. Escaped line breaks
    /// in member names and string values are not considered line breaks.
    pub line: u64,
    /// Character column within the current line, starting at 1
    ///
    /// For all Unicode characters this value is incremented only by one, regardless of
    /// whether some encodings such as UTF-8 might use more than one byte for the
    /// character. Similarly the tab character (U+0009) is also considered a single
    /// character even though code editors might display it as if it consisted of more
    /// than one space character.
    pub column: u64,
}

impl Display for LinePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

fn display_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_owned(),
    }
}

/// Describes why a syntax error occurred
#[non_exhaustive]
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum SyntaxErrorKind {
    /// A different character than the one required by the grammar at this point was
    /// encountered, for example a missing `:` between member name and member value
    #[error("Expected '{}' instead of {}", .expected, display_found(.found))]
    ExpectedCharacter {
        /// The character the grammar requires at this point
        expected: char,
        /// The character actually encountered, or `None` at the end of the input
        found: Option<char>,
    },
    /// A number is malformed, for example `-` without digits, `1e` with an empty
    /// exponent, or a value which overflows into infinity such as `1e999`
    #[error("Bad number")]
    BadNumber,
    /// A string is unterminated, contains an unknown escape sequence, or a `\uXXXX`
    /// escape with an invalid hex digit
    #[error("Bad string")]
    BadString,
    /// A character which cannot start any JSON value was encountered, for example `x`
    #[error("Unexpected '{0}'")]
    UnexpectedCharacter(char),
    /// The input ended where a value was required
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    /// A JSON object contains the same member name twice
    #[error("Duplicate key \"{0}\"")]
    DuplicateKey(String),
    /// A JSON object is missing its opening `{` or ends without a closing `}`
    #[error("Bad object")]
    BadObject,
    /// A JSON array is missing its opening `[` or ends without a closing `]`
    #[error("Bad array")]
    BadArray,
}

/// JSON syntax error
///
/// Raised when the scanned text does not conform to the JSON grammar at the point the
/// scanner is examining. There is no recoverable category: every violation aborts the
/// current call, and the scan never resumes.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("JSON syntax error at {location}: {kind}")]
pub struct JsonSyntaxError {
    /// Kind of the error
    pub kind: SyntaxErrorKind,
    /// Line and column where the error was detected
    pub location: LinePosition,
    /// Character offset (starting at 0) where the error was detected
    pub offset: usize,
    /// The complete source text which was being scanned
    ///
    /// Kept so that callers can render context around the error,
    /// see [`source_line`](Self::source_line).
    pub text: String,
}

impl JsonSyntaxError {
    /// Returns the line of the source text in which the error occurred
    ///
    /// Intended for rendering an excerpt next to the error message:
    ///
    /// ```
    /// # use jsonpos::locator::get_line_number;
    /// let error = match get_line_number("[1, 2, fals]", "/3") {
    ///     Err(e) => e.into_syntax_error().unwrap(),
    ///     Ok(_) => unreachable!(),
    /// };
    /// assert_eq!("[1, 2, fals]", error.source_line());
    /// ```
    pub fn source_line(&self) -> &str {
        self.text
            .lines()
            .nth(self.location.line as usize - 1)
            .unwrap_or("")
    }
}

/// Error which occurred while locating the value addressed by a JSON pointer
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LocateError {
    /// The JSON pointer itself is malformed
    #[error("invalid JSON pointer: {0}")]
    InvalidPointer(#[from] json_pointer::PointerParseError),
    /// A syntax error was encountered in the JSON document
    #[error("syntax error: {0}")]
    SyntaxError(#[from] JsonSyntaxError),
}

impl LocateError {
    /// Returns the wrapped [`JsonSyntaxError`], if this is one
    pub fn into_syntax_error(self) -> Option<JsonSyntaxError> {
        match self {
            LocateError::SyntaxError(e) => Some(e),
            _ => None,
        }
    }
}
