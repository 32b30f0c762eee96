#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Allow needless `return` because that makes it sometimes more obvious that
// an expression is the result of the function
#![allow(clippy::needless_return)]
// Allow `assert_eq!(true, ...)` because in some cases it is used to check a bool
// value and not a 'flag' / 'state', and `assert_eq!` makes that more explicit
#![allow(clippy::bool_assert_comparison)]
// Enable 'unused' warnings for doc tests (are disabled by default)
#![doc(test(no_crate_inject))]
#![doc(test(attr(warn(unused))))]
// Fail on warnings in doc tests
#![doc(test(attr(deny(warnings))))]
// When `docsrs` configuration flag is set enable banner for features in documentation
// See https://stackoverflow.com/q/61417452
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Jsonpos locates the line and column of the value addressed by a
//! [JSON Pointer (RFC 6901)](https://www.rfc-editor.org/rfc/rfc6901) inside raw JSON text.
//!
//! Its main purpose is allowing tools which report problems about a logically-addressed
//! JSON value, such as schema validators, to point the user at the exact source position
//! of that value without first building a complete parsed document. The JSON text is
//! scanned in a single left-to-right pass which validates the grammar character by
//! character and stops as soon as the addressed value is reached.
//!
//! It is *not* a JSON parser in the usual sense: no parsed value is built or returned,
//! and malformed JSON aborts the whole operation with an error instead of being
//! recovered from.
//!
//! # Terminology
//!
//! - *JSON Pointer*: a string such as `/a/0/b` identifying one value inside a JSON
//!   document, with `~1` escaping `/` and `~0` escaping `~` in segments
//! - *segment*: one unescaped component of a pointer — an object member name, or a
//!   decimal array index rendered as a string
//! - *position*: a 1-based line and column within the source text, counting every
//!   character (including whitespace) and starting a new line at every `\n`
//!
//! # Usage examples
//!
//! ```
//! # use jsonpos::locator::{get_line_number, LinePosition};
//! let json = "{\n  \"name\": \"example\",\n  \"tags\": [\"json\", \"pointer\"]\n}";
//!
//! // Object members are located at the opening quote of their name
//! assert_eq!(
//!     Some(LinePosition { line: 2, column: 3 }),
//!     get_line_number(json, "/name")?,
//! );
//!
//! // Array items are located at the first character of their value
//! assert_eq!(
//!     Some(LinePosition { line: 3, column: 20 }),
//!     get_line_number(json, "/tags/1")?,
//! );
//!
//! // A well-formed document simply not containing the addressed value is not an error
//! assert_eq!(None, get_line_number(json, "/does-not-exist")?);
//! # Ok::<(), jsonpos::locator::LocateError>(())
//! ```
//!
//! Malformed JSON is reported with the position at which the violation was detected:
//!
//! ```
//! # use jsonpos::locator::get_line_number;
//! let error = get_line_number("{\"a\": nul}", "/b").unwrap_err();
//! assert_eq!(
//!     "syntax error: JSON syntax error at line 1, column 10: Expected 'l' instead of '}'",
//!     error.to_string(),
//! );
//! ```

pub mod locator;
