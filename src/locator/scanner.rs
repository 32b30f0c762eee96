use std::collections::HashSet;
use std::str::Chars;

use super::json_pointer;
use super::{JsonSyntaxError, LinePosition, LocateError, SyntaxErrorKind};

/// Position of the first character of every document
const DOCUMENT_START: LinePosition = LinePosition { line: 1, column: 1 };

/// Single-pass scanner which validates JSON grammar character by character while
/// tracking the JSON pointer path and line/column of the scan cursor
///
/// One scanner is created per locate call and discarded afterwards; no state is
/// shared between calls.
struct Scanner<'a> {
    /// The full input, kept for embedding into syntax errors
    text: &'a str,
    chars: Chars<'a>,
    /// Character the cursor is on; `None` once the end of the input is reached
    current: Option<char>,
    /// Character offset (starting at 0) of `current`; equals the total character
    /// count once the end of the input is reached
    offset: usize,
    line: u64,
    column: u64,
    /// Pointer path of the value currently being scanned; its length always equals
    /// the current nesting depth
    path: Vec<String>,
    /// The decoded segments to match against
    target: &'a [String],
    /// Set exactly once, the instant `path` becomes equal to `target`
    result: Option<LinePosition>,
}

// Implementation with cursor primitives and error utility methods
impl<'a> Scanner<'a> {
    fn new(text: &'a str, target: &'a [String]) -> Self {
        let mut chars = text.chars();
        let current = chars.next();
        Scanner {
            text,
            chars,
            current,
            offset: 0,
            line: 1,
            column: 1,
            path: Vec::new(),
            target,
            result: None,
        }
    }

    fn position(&self) -> LinePosition {
        LinePosition {
            line: self.line,
            column: self.column,
        }
    }

    fn syntax_error(&self, kind: SyntaxErrorKind) -> JsonSyntaxError {
        JsonSyntaxError {
            kind,
            location: self.position(),
            offset: self.offset,
            text: self.text.to_owned(),
        }
    }

    /// Advances the cursor by exactly one character
    ///
    /// Returns the new current character, or `None` once the end of the input is
    /// reached. Line bookkeeping is the whitespace skipper's job; a line break
    /// consumed through this method only advances the column.
    fn advance(&mut self) -> Option<char> {
        if self.current.is_some() {
            self.offset += 1;
            self.column += 1;
        }
        self.current = self.chars.next();
        self.current
    }

    /// Consumes the current character, which must be `expected`
    fn expect(&mut self, expected: char) -> Result<(), JsonSyntaxError> {
        match self.current {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            found => Err(self.syntax_error(SyntaxErrorKind::ExpectedCharacter { expected, found })),
        }
    }
}

// Implementation with whitespace skipping logic
impl Scanner<'_> {
    /// Consumes a maximal run of characters with code point <= 0x20
    ///
    /// Increments the line and resets the column to 1 for every `\n` consumed.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current {
            if c > ' ' {
                break;
            }
            self.advance();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            }
        }
    }
}

// Implementation with scalar value scanning logic
impl Scanner<'_> {
    /// Scans a JSON number, discarding its value
    ///
    /// The grammar is validated by assembling the literal and requiring it to parse
    /// as a finite `f64`, which rejects an empty mantissa, a bare exponent and
    /// values which overflow into infinity.
    fn scan_number(&mut self) -> Result<(), JsonSyntaxError> {
        let mut literal = String::new();
        if self.current == Some('-') {
            literal.push('-');
            self.advance();
        }
        while let Some(c @ '0'..='9') = self.current {
            literal.push(c);
            self.advance();
        }
        if self.current == Some('.') {
            literal.push('.');
            while let Some(c @ '0'..='9') = self.advance() {
                literal.push(c);
            }
        }
        if let Some(e @ ('e' | 'E')) = self.current {
            literal.push(e);
            self.advance();
            if let Some(sign @ ('-' | '+')) = self.current {
                literal.push(sign);
                self.advance();
            }
            while let Some(c @ '0'..='9') = self.current {
                literal.push(c);
                self.advance();
            }
        }

        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(()),
            _ => Err(self.syntax_error(SyntaxErrorKind::BadNumber)),
        }
    }

    /// Scans a JSON string and returns its unescaped value
    ///
    /// The value is assembled because object scanning uses decoded member names as
    /// path segments; for string *values* it is simply discarded.
    fn scan_string(&mut self) -> Result<String, JsonSyntaxError> {
        if self.current != Some('"') {
            return Err(self.syntax_error(SyntaxErrorKind::BadString));
        }

        let mut value = String::new();
        while let Some(c) = self.advance() {
            match c {
                '"' => {
                    self.advance();
                    return Ok(value);
                }
                '\\' => match self.advance() {
                    Some('u') => value.push(self.scan_unicode_escape()?),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some('/') => value.push('/'),
                    Some('b') => value.push('\u{0008}'),
                    Some('f') => value.push('\u{000C}'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    // Unknown escape, or end of input
                    _ => break,
                },
                other => value.push(other),
            }
        }
        // Unterminated string
        Err(self.syntax_error(SyntaxErrorKind::BadString))
    }

    /// Scans the four hex digits of a `\uXXXX` escape into one UTF-16 code unit
    ///
    /// Surrogate pairs are not merged; an unpaired surrogate cannot be stored in a
    /// Rust string and decodes to U+FFFD.
    fn scan_unicode_escape(&mut self) -> Result<char, JsonSyntaxError> {
        let mut code_unit = 0;
        for _ in 0..4 {
            let digit = match self.advance().and_then(|c| c.to_digit(16)) {
                Some(digit) => digit,
                None => return Err(self.syntax_error(SyntaxErrorKind::BadString)),
            };
            code_unit = code_unit * 16 + digit;
        }
        Ok(char::from_u32(code_unit).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Scans one of the literal words `true`, `false` or `null`
    fn scan_word(&mut self) -> Result<(), JsonSyntaxError> {
        match self.current {
            Some('t') => self.expect_literal("true"),
            Some('f') => self.expect_literal("false"),
            Some('n') => self.expect_literal("null"),
            Some(c) => Err(self.syntax_error(SyntaxErrorKind::UnexpectedCharacter(c))),
            None => Err(self.syntax_error(SyntaxErrorKind::UnexpectedEndOfInput)),
        }
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), JsonSyntaxError> {
        for expected in literal.chars() {
            self.expect(expected)?;
        }
        Ok(())
    }
}

// Implementation with structural scanning and path bookkeeping logic
impl Scanner<'_> {
    /// Scans the child value identified by `segment`, keeping the path stack in sync
    ///
    /// Pushes the segment, records `position` as the match result if the path now
    /// equals the target (a result is set exactly once and never overwritten), runs
    /// `scan` only when no match has been recorded yet, and pops the segment again.
    /// Pairing the push and pop here keeps the bookkeeping correct on every exit
    /// path, including the short-circuit taken once a match exists.
    fn in_child<F>(
        &mut self,
        segment: String,
        position: LinePosition,
        scan: F,
    ) -> Result<(), JsonSyntaxError>
    where
        F: FnOnce(&mut Self) -> Result<(), JsonSyntaxError>,
    {
        self.path.push(segment);
        if self.result.is_none() && self.path == self.target {
            self.result = Some(position);
        }
        let result = if self.result.is_some() {
            Ok(())
        } else {
            scan(self)
        };
        self.path.pop();
        result
    }

    /// Scans a JSON object
    ///
    /// A member name which completes the target path is recorded at the opening `"`
    /// of the name, and no further input is consumed afterwards.
    fn scan_object(&mut self) -> Result<(), JsonSyntaxError> {
        if self.result.is_some() {
            return Ok(());
        }
        if self.current != Some('{') {
            return Err(self.syntax_error(SyntaxErrorKind::BadObject));
        }
        self.advance();
        self.skip_whitespace();
        if self.current == Some('}') {
            self.advance();
            return Ok(());
        }

        let mut seen_names = HashSet::new();
        while self.current.is_some() {
            let name_position = self.position();
            let name = self.scan_string()?;
            let is_duplicate = !seen_names.insert(name.clone());
            self.in_child(name.clone(), name_position, move |scanner| {
                scanner.skip_whitespace();
                scanner.expect(':')?;
                if is_duplicate {
                    return Err(scanner.syntax_error(SyntaxErrorKind::DuplicateKey(name)));
                }
                scanner.scan_value()
            })?;
            if self.result.is_some() {
                return Ok(());
            }

            self.skip_whitespace();
            if self.current == Some('}') {
                self.advance();
                return Ok(());
            }
            self.expect(',')?;
            self.skip_whitespace();
        }
        Err(self.syntax_error(SyntaxErrorKind::BadObject))
    }

    /// Scans a JSON array
    ///
    /// An item whose stringified index completes the target path is recorded at the
    /// first character of its value, and no further input is consumed afterwards.
    fn scan_array(&mut self) -> Result<(), JsonSyntaxError> {
        if self.result.is_some() {
            return Ok(());
        }
        if self.current != Some('[') {
            return Err(self.syntax_error(SyntaxErrorKind::BadArray));
        }
        self.advance();
        self.skip_whitespace();
        if self.current == Some(']') {
            self.advance();
            return Ok(());
        }

        let mut index = 0_u64;
        while self.current.is_some() {
            let item_position = self.position();
            self.in_child(index.to_string(), item_position, |scanner| {
                scanner.scan_value()
            })?;
            if self.result.is_some() {
                return Ok(());
            }
            index += 1;

            self.skip_whitespace();
            if self.current == Some(']') {
                self.advance();
                return Ok(());
            }
            self.expect(',')?;
            self.skip_whitespace();
        }
        Err(self.syntax_error(SyntaxErrorKind::BadArray))
    }
}

// Implementation with value dispatch
impl Scanner<'_> {
    /// Scans a single JSON value of any type
    ///
    /// Re-checks the match guard so that a completed match anywhere in the tree
    /// unwinds the remaining recursion without consuming further input.
    fn scan_value(&mut self) -> Result<(), JsonSyntaxError> {
        if self.result.is_some() {
            return Ok(());
        }
        self.skip_whitespace();
        match self.current {
            Some('{') => self.scan_object(),
            Some('[') => self.scan_array(),
            Some('"') => self.scan_string().map(|_| ()),
            Some('-') => self.scan_number(),
            Some(c) if c.is_ascii_digit() => self.scan_number(),
            _ => self.scan_word(),
        }
    }
}

/// Returns the position of the value addressed by `json_pointer` within `json`
///
/// The pointer is decoded with [`json_pointer::parse`]. The document root (the empty
/// pointer, or a bare `/` by this crate's convention) is always located at
/// `line 1, column 1` without scanning the text. For every other pointer the text is
/// scanned left to right up to the first match:
///
/// - object members are located at the opening `"` of their name
/// - array items are located at the first character of their value
///
/// A well-formed document which does not contain the addressed value yields
/// `Ok(None)`; that is not an error. The scanned part of the document is validated
/// against the JSON grammar, but since scanning stops as soon as the match is found,
/// malformed data behind the match is not detected.
///
/// # Examples
/// ```
/// # use jsonpos::locator::{get_line_number, LinePosition};
/// let json = "{\n  \"a\": [1, true]\n}";
/// assert_eq!(
///     Some(LinePosition { line: 2, column: 12 }),
///     get_line_number(json, "/a/1")?,
/// );
/// assert_eq!(None, get_line_number(json, "/a/2")?);
/// # Ok::<(), jsonpos::locator::LocateError>(())
/// ```
///
/// # Errors
/// [`LocateError::InvalidPointer`] if the pointer is malformed, and
/// [`LocateError::SyntaxError`] if the scanned part of the document violates the
/// JSON grammar.
pub fn get_line_number(
    json: &str,
    json_pointer: &str,
) -> Result<Option<LinePosition>, LocateError> {
    let target = json_pointer::parse(json_pointer)?;
    // By convention a bare "/" addresses the document root, like the empty pointer,
    // even though RFC 6901 reads it as a single empty member name
    if target.is_empty() || json_pointer == "/" {
        return Ok(Some(DOCUMENT_START));
    }
    Ok(locate_segments(json, &target)?)
}

/// Returns the position of the value addressed by the already-decoded `segments`
///
/// This is the scan underlying [`get_line_number`], for callers which obtained the
/// pointer segments by other means. An empty segment sequence addresses the document
/// root, located at `line 1, column 1` without scanning.
///
/// # Examples
/// ```
/// # use jsonpos::locator::{locate_segments, LinePosition};
/// let segments = vec!["a".to_owned(), "0".to_owned()];
/// assert_eq!(
///     Some(LinePosition { line: 1, column: 8 }),
///     locate_segments("{\"a\": [null]}", &segments)?,
/// );
/// # Ok::<(), jsonpos::locator::JsonSyntaxError>(())
/// ```
pub fn locate_segments(
    json: &str,
    segments: &[String],
) -> Result<Option<LinePosition>, JsonSyntaxError> {
    if segments.is_empty() {
        return Ok(Some(DOCUMENT_START));
    }
    let mut scanner = Scanner::new(json, segments);
    scanner.scan_value()?;
    Ok(scanner.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn assert_position(json: &str, pointer: &str, expected_line: u64, expected_column: u64) {
        match get_line_number(json, pointer) {
            Ok(Some(position)) => assert_eq!(
                LinePosition {
                    line: expected_line,
                    column: expected_column
                },
                position,
                "For pointer '{pointer}' in {json:?}"
            ),
            other => panic!("Expected a position for '{pointer}' in {json:?}, got {other:?}"),
        }
    }

    fn assert_not_found(json: &str, pointer: &str) {
        match get_line_number(json, pointer) {
            Ok(None) => {}
            other => panic!("Expected no match for '{pointer}' in {json:?}, got {other:?}"),
        }
    }

    fn assert_syntax_error(
        json: &str,
        pointer: &str,
        expected_kind: SyntaxErrorKind,
        expected_line: u64,
        expected_column: u64,
        expected_offset: usize,
    ) {
        match get_line_number(json, pointer) {
            Err(LocateError::SyntaxError(e)) => assert_eq!(
                JsonSyntaxError {
                    kind: expected_kind,
                    location: LinePosition {
                        line: expected_line,
                        column: expected_column
                    },
                    offset: expected_offset,
                    text: json.to_owned(),
                },
                e,
                "For input: {json:?}"
            ),
            other => panic!("Expected a syntax error for {json:?}, got {other:?}"),
        }
    }

    #[test]
    fn root_pointer() {
        assert_position("{}", "", 1, 1);
        assert_position("[1, 2]", "", 1, 1);
        assert_position("null", "/", 1, 1);
        // The root is located by definition, without scanning
        assert_position("{not even json", "", 1, 1);
    }

    #[test]
    fn object_members() {
        assert_position("{\"a\": 1}", "/a", 1, 2);
        assert_position("{\"a\": 1, \"b\": 2}", "/b", 1, 10);
        assert_position("{\n \"a\": 1\n}", "/a", 2, 2);
        assert_position("{\r\n \"a\": 1\r\n}", "/a", 2, 2);
        // Member names are located at their opening quote, independent of the
        // whitespace around the ':'
        assert_position("{ \"a\"  :  1 }", "/a", 1, 3);
    }

    #[test]
    fn array_items() {
        assert_position("[1, 2, 3]", "/0", 1, 2);
        assert_position("[1, 2, 3]", "/1", 1, 5);
        assert_position("[1, 2, 3]", "/2", 1, 8);
        // Items are located at the first character of their value
        assert_position("[\n  10,\n  20\n]", "/1", 3, 3);
        assert_position("[\"a\", \"b\"]", "/1", 1, 7);
    }

    #[test]
    fn nested_path() {
        let json = "{\"a\":{\"b\":[1,2,{\"c\":3}]}}";
        assert_position(json, "/a", 1, 2);
        assert_position(json, "/a/b", 1, 7);
        assert_position(json, "/a/b/0", 1, 12);
        assert_position(json, "/a/b/1", 1, 14);
        assert_position(json, "/a/b/2", 1, 16);
        assert_position(json, "/a/b/2/c", 1, 17);
        assert_not_found(json, "/a/b/3");
        assert_not_found(json, "/a/c");
    }

    #[test]
    fn not_found() {
        assert_not_found("{}", "/a");
        assert_not_found("[]", "/0");
        assert_not_found("{\"a\": 1}", "/b");
        // A pointer descending through a scalar resolves to nothing
        assert_not_found("{\"a\": 1}", "/a/b");
        assert_not_found("[1, 2]", "/2");
        assert_not_found("[1, 2]", "/x");
        // Matching is by full path, not by name anywhere in the tree
        assert_not_found("{\"a\": {\"b\": 1}}", "/b");
        // String values are opaque; their content takes no part in path matching
        assert_not_found("{\"a\": \"b/c\"}", "/b");
    }

    #[test]
    fn match_short_circuits() {
        // Once the target is matched the rest of the document is not scanned,
        // so malformed data behind the match goes undetected
        assert_position("{\"a\": !}", "/a", 1, 2);
        assert_position("[true, !]", "/0", 1, 2);
        assert_position("{\"a\": {\"b\": !}}", "/a", 1, 2);
        // A match on the first occurrence wins over a duplicate further on
        assert_position("{\"a\": 1, \"a\": 2}", "/a", 1, 2);
    }

    #[test]
    fn empty_containers() {
        assert_not_found("{}", "/a");
        assert_not_found("[]", "/0");
        assert_not_found("{\"a\": []}", "/a/0");
        assert_not_found("{\"a\": {}}", "/a/b");
        // Siblings after an empty container must still be matched correctly
        assert_position("{\"a\": [], \"b\": 1}", "/b", 1, 11);
        assert_position("{\"a\": {}, \"b\": 1}", "/b", 1, 11);
        assert_position("{\"x\": {\"a\": [], \"b\": 1}}", "/x/b", 1, 17);
        assert_position("[[], [1]]", "/1/0", 1, 7);
    }

    #[test]
    fn escaped_pointer_segments() {
        assert_position("{\"a/b\": 1}", "/a~1b", 1, 2);
        assert_position("{\"m~n\": 1}", "/m~0n", 1, 2);
        assert_position("{\"\": 1}", "/", 1, 1); // bare "/" is the root by convention
        assert_not_found("{\"a~1b\": 1}", "/a~1b");
    }

    #[test]
    fn member_name_escapes() {
        // Escapes in member names are decoded before segment comparison
        assert_position("{\"\\u0041\": 1}", "/A", 1, 2);
        assert_position("{\"a\\nb\": 1}", "/a\nb", 1, 2);
        assert_position("{\"say \\\"hi\\\"\": 1}", "/say \"hi\"", 1, 2);
        assert_position("{\"a\\/b\": 1}", "/a~1b", 1, 2);
    }

    #[test]
    fn multibyte_columns() {
        // Columns count characters, not bytes
        assert_position("{\"é\": 1}", "/é", 1, 2);
        assert_position("[\"α\", 1]", "/1", 1, 7);
    }

    #[test]
    fn valid_number_grammar() {
        // Resolving a pointer which matches nothing still validates every number
        assert_not_found("[0, -1, 2.5, 1e3, 1E+3, 2e-2, 1.25e2, -0.5e-10]", "/x");
    }

    #[test]
    fn lenient_number_grammar() {
        // The scanner accepts every literal which casts to a finite number, which
        // is slightly wider than the JSON grammar
        assert_not_found("[01, 1., -.5]", "/x");
    }

    #[test]
    fn invalid_literals() {
        assert_syntax_error(
            "x",
            "/a",
            SyntaxErrorKind::UnexpectedCharacter('x'),
            1,
            1,
            0,
        );
        assert_syntax_error(
            "+1",
            "/a",
            SyntaxErrorKind::UnexpectedCharacter('+'),
            1,
            1,
            0,
        );
        assert_syntax_error(
            "tru",
            "/a",
            SyntaxErrorKind::ExpectedCharacter {
                expected: 'e',
                found: None,
            },
            1,
            4,
            3,
        );
        assert_syntax_error(
            "truE",
            "/a",
            SyntaxErrorKind::ExpectedCharacter {
                expected: 'e',
                found: Some('E'),
            },
            1,
            4,
            3,
        );
        assert_syntax_error(
            "{\n  \"a\": nul\n}",
            "/b",
            SyntaxErrorKind::ExpectedCharacter {
                expected: 'l',
                found: Some('\n'),
            },
            2,
            11,
            12,
        );
    }

    #[test]
    fn invalid_numbers() {
        assert_syntax_error("-", "/a", SyntaxErrorKind::BadNumber, 1, 2, 1);
        assert_syntax_error("1e", "/a", SyntaxErrorKind::BadNumber, 1, 3, 2);
        // Overflows into infinity
        assert_syntax_error("1e999", "/a", SyntaxErrorKind::BadNumber, 1, 6, 5);
    }

    #[test]
    fn invalid_strings() {
        // Unterminated
        assert_syntax_error("\"abc", "/a", SyntaxErrorKind::BadString, 1, 5, 4);
        // Unknown escape
        assert_syntax_error("\"a\\x\"", "/a", SyntaxErrorKind::BadString, 1, 4, 3);
        // Invalid hex digit
        assert_syntax_error("\"\\uZZZZ\"", "/a", SyntaxErrorKind::BadString, 1, 4, 3);
        // Too short \u escape
        assert_syntax_error("\"\\u00\"", "/a", SyntaxErrorKind::BadString, 1, 6, 5);
    }

    #[test]
    fn invalid_objects() {
        assert_syntax_error("{", "/a", SyntaxErrorKind::BadObject, 1, 2, 1);
        assert_syntax_error("{\"a\":1,", "/x", SyntaxErrorKind::BadObject, 1, 8, 7);
        // Trailing comma: the next member name is expected
        assert_syntax_error("{\"a\":1,}", "/x", SyntaxErrorKind::BadString, 1, 8, 7);
        // Member names must be strings
        assert_syntax_error("{1: 2}", "/x", SyntaxErrorKind::BadString, 1, 2, 1);
        assert_syntax_error(
            "{\"a\" 1}",
            "/b",
            SyntaxErrorKind::ExpectedCharacter {
                expected: ':',
                found: Some('1'),
            },
            1,
            6,
            5,
        );
        assert_syntax_error(
            "{\"a\":1 \"b\":2}",
            "/x",
            SyntaxErrorKind::ExpectedCharacter {
                expected: ',',
                found: Some('"'),
            },
            1,
            8,
            7,
        );
        assert_syntax_error(
            "{\"a\":1",
            "/x",
            SyntaxErrorKind::ExpectedCharacter {
                expected: ',',
                found: None,
            },
            1,
            7,
            6,
        );
        // Missing member value
        assert_syntax_error(
            "{\"a\":}",
            "/x",
            SyntaxErrorKind::UnexpectedCharacter('}'),
            1,
            6,
            5,
        );
    }

    #[test]
    fn invalid_arrays() {
        assert_syntax_error("[", "/0", SyntaxErrorKind::BadArray, 1, 2, 1);
        assert_syntax_error("[1,", "/x", SyntaxErrorKind::BadArray, 1, 4, 3);
        // Trailing comma: the next value is expected
        assert_syntax_error(
            "[1,]",
            "/x",
            SyntaxErrorKind::UnexpectedCharacter(']'),
            1,
            4,
            3,
        );
        assert_syntax_error(
            "[1 2]",
            "/x",
            SyntaxErrorKind::ExpectedCharacter {
                expected: ',',
                found: Some('2'),
            },
            1,
            4,
            3,
        );
        assert_syntax_error(
            "[1",
            "/x",
            SyntaxErrorKind::ExpectedCharacter {
                expected: ',',
                found: None,
            },
            1,
            3,
            2,
        );
    }

    #[test]
    fn duplicate_keys() {
        assert_syntax_error(
            "{\"a\":1,\"a\":2}",
            "/b",
            SyntaxErrorKind::DuplicateKey("a".to_owned()),
            1,
            12,
            11,
        );
        // The same name in different objects is fine
        assert_position("[{\"a\":1},{\"a\":2}]", "/1/a", 1, 11);
        assert_not_found("{\"x\": {\"a\": 1}, \"y\": {\"a\": 2}}", "/a");
    }

    #[test]
    fn empty_input() {
        assert_syntax_error("", "/a", SyntaxErrorKind::UnexpectedEndOfInput, 1, 1, 0);
        assert_syntax_error("   ", "/a", SyntaxErrorKind::UnexpectedEndOfInput, 1, 4, 3);
        assert_syntax_error("\n\n", "/a", SyntaxErrorKind::UnexpectedEndOfInput, 3, 1, 2);
    }

    #[test]
    fn error_carries_source_text() {
        let json = "{\n  \"a\": nul\n}";
        let error = match get_line_number(json, "/b") {
            Err(LocateError::SyntaxError(e)) => e,
            other => panic!("Expected a syntax error, got {other:?}"),
        };
        assert_eq!(json, error.text);
        assert_eq!("  \"a\": nul", error.source_line());
    }

    #[test]
    fn idempotence() -> TestResult {
        let json = "{\"a\": [1, {\"b\": 2}]}";
        let first = get_line_number(json, "/a/1/b")?;
        let second = get_line_number(json, "/a/1/b")?;
        assert_eq!(first, second);
        assert_eq!(Some(LinePosition { line: 1, column: 12 }), first);
        Ok(())
    }

    #[test]
    fn segments_api() -> TestResult {
        assert_eq!(
            Some(DOCUMENT_START),
            locate_segments("{\"a\": 1}", &[])?
        );
        assert_eq!(
            Some(LinePosition { line: 1, column: 2 }),
            locate_segments("{\"a\": 1}", &["a".to_owned()])?
        );
        // Array indices are matched as their decimal string form
        assert_eq!(
            Some(LinePosition { line: 1, column: 5 }),
            locate_segments("[0, 1]", &["1".to_owned()])?
        );
        assert_eq!(None, locate_segments("[0, 1]", &["01".to_owned()])?);
        Ok(())
    }

    #[test]
    fn invalid_pointer() {
        match get_line_number("{}", "a") {
            Err(LocateError::InvalidPointer(e)) => {
                assert_eq!(0, e.index);
                assert_eq!("pointer must be empty or start with '/'", e.message);
            }
            other => panic!("Expected a pointer error, got {other:?}"),
        }
    }
}
