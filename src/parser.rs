//! Pull parser turning a byte stream into a stream of [`JsonToken`]s.
//!
//! [`JsonParser`] reads from any [`Read`] and yields one token per
//! [`next_token`](JsonParser::next_token) call. Scalar payloads are kept in
//! the parser and read through the typed accessors.

use std::io::{ErrorKind, Read};

use crate::error::{JsonError, JsonPosition, SyntaxErrorKind};
use crate::numeric;
use crate::token::JsonToken;

/// Default size in bytes of the input buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Settings to customize the JSON parser behavior
///
/// These settings are used by [`JsonParser::new_custom`]. To avoid
/// repeating the default values for unchanged settings
/// `..Default::default()` can be used.
#[derive(Clone, Debug)]
pub struct ParserSettings {
    /// Size in bytes of the internal input buffer
    ///
    /// The parser refills the buffer with a single read from the
    /// underlying source each time it has consumed the buffer completely,
    /// so wrapping the source in a [`std::io::BufReader`] is normally not
    /// necessary.
    pub buffer_size: usize,
}

impl Default for ParserSettings {
    /// Creates the default parser settings: a 32 KiB input buffer
    fn default() -> Self {
        ParserSettings {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Container {
    Array,
    Object,
}

/// A pull parser which consumes UTF-8 JSON data from a [`Read`]
///
/// One instance is bound to one source and produces a finite token stream:
/// the tokens of one document, or of several whitespace-separated
/// top-level documents, followed by [`JsonToken::NotAvailable`].
///
/// Errors from the underlying reader are collapsed into end of input; the
/// parser then reports either `NotAvailable` or an `IncompleteDocument`
/// syntax error depending on where the data ended. Reads interrupted with
/// [`ErrorKind::Interrupted`] are retried.
///
/// After a syntax error the parser is left in an unspecified state and
/// must not be used further.
///
/// # Examples
/// ```
/// use tokson::{parser::JsonParser, JsonToken};
///
/// let mut parser = JsonParser::new(r#"{"a": [1, true]}"#.as_bytes());
/// assert_eq!(parser.next_token()?, JsonToken::StartObject);
/// assert_eq!(parser.next_token()?, JsonToken::FieldName);
/// assert_eq!(parser.current_name(), "a");
/// assert_eq!(parser.next_token()?, JsonToken::StartArray);
/// assert_eq!(parser.next_token()?, JsonToken::Integer);
/// assert_eq!(parser.integer_value()?, 1);
/// assert_eq!(parser.next_token()?, JsonToken::True);
/// assert_eq!(parser.next_token()?, JsonToken::EndArray);
/// assert_eq!(parser.next_token()?, JsonToken::EndObject);
/// assert_eq!(parser.next_token()?, JsonToken::NotAvailable);
/// # Ok::<(), tokson::error::JsonError>(())
/// ```
pub struct JsonParser<R: Read> {
    input: R,
    buf: Box<[u8]>,
    buf_pos: usize,
    buf_end: usize,
    reached_eof: bool,

    token: JsonToken,
    integer: i64,
    double: f64,
    current_name: String,
    current_string: String,
    stack: Vec<Container>,

    line: u64,
    column: u64,
    byte_pos: u64,
}

impl<R: Read> JsonParser<R> {
    /// Creates a parser with [default settings](ParserSettings::default)
    pub fn new(input: R) -> Self {
        JsonParser::new_custom(input, ParserSettings::default())
    }

    /// Creates a parser with custom settings
    pub fn new_custom(input: R, settings: ParserSettings) -> Self {
        JsonParser {
            input,
            buf: vec![0; settings.buffer_size.max(1)].into_boxed_slice(),
            buf_pos: 0,
            buf_end: 0,
            reached_eof: false,
            token: JsonToken::NotAvailable,
            integer: 0,
            double: 0.0,
            current_name: String::with_capacity(32),
            current_string: String::with_capacity(32),
            stack: Vec::with_capacity(32),
            line: 0,
            column: 0,
            byte_pos: 0,
        }
    }

    /// Returns the token the parser is currently positioned on.
    pub fn current_token(&self) -> JsonToken {
        self.token
    }

    /// Returns the position of the parser within the document.
    pub fn current_position(&self) -> JsonPosition {
        JsonPosition {
            line: self.line,
            column: self.column,
            byte_pos: self.byte_pos,
        }
    }

    /// Returns the name of the most recently read object member.
    ///
    /// The returned value is only meaningful while the current token is
    /// [`JsonToken::FieldName`]; it keeps the previous name afterwards.
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// Returns the text of the current `String` or `FieldName` token.
    pub fn text(&self) -> Result<&str, JsonError> {
        match self.token {
            JsonToken::String => Ok(&self.current_string),
            JsonToken::FieldName => Ok(&self.current_name),
            _ => Err(self.type_mismatch("a string")),
        }
    }

    /// Returns the value of the current `Integer` token.
    ///
    /// A `Float` token is coerced with truncation toward zero; the
    /// coercion does not check for loss of range.
    pub fn integer_value(&self) -> Result<i64, JsonError> {
        match self.token {
            JsonToken::Integer => Ok(self.integer),
            JsonToken::Float => Ok(self.double as i64),
            _ => Err(self.type_mismatch("an integer")),
        }
    }

    /// Returns the value of the current `Float` token.
    ///
    /// An `Integer` token is coerced; the coercion may lose precision for
    /// magnitudes above 2^53.
    pub fn float_value(&self) -> Result<f64, JsonError> {
        match self.token {
            JsonToken::Float => Ok(self.double),
            JsonToken::Integer => Ok(self.integer as f64),
            _ => Err(self.type_mismatch("a float")),
        }
    }

    /// Returns the value of the current `True` or `False` token.
    pub fn boolean_value(&self) -> Result<bool, JsonError> {
        match self.token {
            JsonToken::True => Ok(true),
            JsonToken::False => Ok(false),
            _ => Err(self.type_mismatch("a boolean")),
        }
    }

    /// Advances past field names until a value token is reached.
    pub fn next_value(&mut self) -> Result<JsonToken, JsonError> {
        loop {
            if self.next_token()? != JsonToken::FieldName {
                return Ok(self.token);
            }
        }
    }

    /// Advances past the matching end of the current container.
    ///
    /// Does nothing unless the current token is `StartObject` or
    /// `StartArray`. Afterwards the current token is the container's end
    /// token; the next [`next_token`](Self::next_token) call continues
    /// behind it.
    pub fn skip_children(&mut self) -> Result<(), JsonError> {
        let (start, end) = match self.token {
            JsonToken::StartObject => (JsonToken::StartObject, JsonToken::EndObject),
            JsonToken::StartArray => (JsonToken::StartArray, JsonToken::EndArray),
            _ => return Ok(()),
        };
        let mut open = 1_u32;
        while open > 0 {
            let token = self.next_token()?;
            if token == start {
                open += 1;
            } else if token == end {
                open -= 1;
            }
        }
        Ok(())
    }

    /// Advances to and returns the next token in the document.
    ///
    /// At the top level, once the input is exhausted,
    /// [`JsonToken::NotAvailable`] is returned. Inside an unterminated
    /// array or object the end of input is an
    /// [`IncompleteDocument`](SyntaxErrorKind::IncompleteDocument) error.
    pub fn next_token(&mut self) -> Result<JsonToken, JsonError> {
        let mut after_comma = false;
        if self.token == JsonToken::FieldName {
            let b = self.next_significant(SyntaxErrorKind::IncompleteDocument)?;
            if b != b':' {
                return Err(self.syntax_error(SyntaxErrorKind::MissingColon));
            }
            self.skip_peeked_byte();
        } else if !self.stack.is_empty()
            && self.token != JsonToken::StartArray
            && self.token != JsonToken::StartObject
        {
            // expect a comma or the end of the current container
            let b = self.next_significant(SyntaxErrorKind::IncompleteDocument)?;
            self.skip_peeked_byte();
            match b {
                b']' => return self.close_array(),
                b'}' => return self.close_object(),
                b',' => after_comma = true,
                _ => return Err(self.syntax_error(SyntaxErrorKind::MissingComma)),
            }
            if self.stack.last() == Some(&Container::Object) {
                // after a comma the next member name is mandatory
                let b = self.next_significant(SyntaxErrorKind::IncompleteDocument)?;
                if b == b'}' {
                    return Err(self.syntax_error(SyntaxErrorKind::TrailingComma));
                }
                if b != b'"' {
                    return Err(self.syntax_error(SyntaxErrorKind::ExpectingMemberNameOrObjectEnd));
                }
                self.skip_peeked_byte();
                self.parse_name()?;
                return Ok(self.found(JsonToken::FieldName));
            }
        } else if self.token == JsonToken::StartObject {
            // first member name, or the end of an empty object
            let b = self.next_significant(SyntaxErrorKind::IncompleteDocument)?;
            self.skip_peeked_byte();
            match b {
                b'}' => return self.close_object(),
                b'"' => {
                    self.parse_name()?;
                    return Ok(self.found(JsonToken::FieldName));
                }
                _ => return Err(self.syntax_error(SyntaxErrorKind::ExpectingMemberNameOrObjectEnd)),
            }
        }

        let b = match self.skip_whitespace() {
            Some(b) => b,
            None => {
                if self.stack.is_empty() {
                    return Ok(self.found(JsonToken::NotAvailable));
                }
                return Err(self.syntax_error(SyntaxErrorKind::IncompleteDocument));
            }
        };
        self.skip_peeked_byte();
        match b {
            b'-' | b'0'..=b'9' => self.parse_number(b),
            b'"' => {
                self.parse_string_value()?;
                Ok(self.found(JsonToken::String))
            }
            b't' => self.parse_literal("rue", JsonToken::True),
            b'f' => self.parse_literal("alse", JsonToken::False),
            b'n' => self.parse_literal("ull", JsonToken::Null),
            b'{' => {
                self.stack.push(Container::Object);
                Ok(self.found(JsonToken::StartObject))
            }
            b'[' => {
                self.stack.push(Container::Array);
                Ok(self.found(JsonToken::StartArray))
            }
            b']' => {
                if self.token == JsonToken::StartArray && self.stack.last() == Some(&Container::Array)
                {
                    self.close_array()
                } else if after_comma {
                    Err(self.syntax_error(SyntaxErrorKind::TrailingComma))
                } else {
                    Err(self.syntax_error(SyntaxErrorKind::UnexpectedClosingBracket))
                }
            }
            b'}' => Err(self.syntax_error(SyntaxErrorKind::UnexpectedClosingBracket)),
            _ => Err(self.syntax_error(SyntaxErrorKind::MalformedJson)),
        }
    }
}

// Implementation with low level byte reading methods
impl<R: Read> JsonParser<R> {
    /// Refills the buffer with a single read from the source.
    ///
    /// Returns `false` once the input is exhausted. Read failures other
    /// than `Interrupted` are treated as end of input as well.
    fn fill_buffer(&mut self) -> bool {
        if self.reached_eof {
            return false;
        }
        self.buf_pos = 0;
        loop {
            match self.input.read(&mut self.buf) {
                Ok(n) => {
                    self.buf_end = n;
                    break;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => {
                    self.buf_end = 0;
                    break;
                }
            }
        }
        if self.buf_end == 0 {
            self.reached_eof = true;
            false
        } else {
            true
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if self.buf_pos < self.buf_end || self.fill_buffer() {
            Some(self.buf[self.buf_pos])
        } else {
            None
        }
    }

    /// Consumes the byte returned by the last [`peek_byte`](Self::peek_byte).
    fn skip_peeked_byte(&mut self) {
        debug_assert!(self.buf_pos < self.buf_end);
        let b = self.buf[self.buf_pos];
        self.buf_pos += 1;
        self.byte_pos += 1;
        if !is_continuation_byte(b) {
            self.column += 1;
        }
    }

    fn read_byte(&mut self, eof_error: SyntaxErrorKind) -> Result<u8, JsonError> {
        match self.peek_byte() {
            Some(b) => {
                self.skip_peeked_byte();
                Ok(b)
            }
            None => Err(self.syntax_error(eof_error)),
        }
    }

    /// Skips insignificant whitespace and peeks at the next byte, without
    /// consuming it. Returns `None` at the end of the input.
    fn skip_whitespace(&mut self) -> Option<u8> {
        let mut has_cr = false;
        while let Some(b) = self.peek_byte() {
            match b {
                b' ' | b'\t' => {
                    self.buf_pos += 1;
                    self.byte_pos += 1;
                    self.column += 1;
                }
                b'\n' => {
                    self.buf_pos += 1;
                    self.byte_pos += 1;
                    // count CR LF as a single line break
                    if !has_cr {
                        self.line += 1;
                        self.column = 0;
                    }
                }
                b'\r' => {
                    self.buf_pos += 1;
                    self.byte_pos += 1;
                    self.line += 1;
                    self.column = 0;
                }
                _ => return Some(b),
            }
            has_cr = b == b'\r';
        }
        None
    }

    fn next_significant(&mut self, eof_error: SyntaxErrorKind) -> Result<u8, JsonError> {
        match self.skip_whitespace() {
            Some(b) => Ok(b),
            None => Err(self.syntax_error(eof_error)),
        }
    }

    fn next_is_delimiter(&mut self) -> bool {
        match self.peek_byte() {
            None => true,
            Some(b) => is_delimiter(b),
        }
    }
}

// Implementation with error utility methods and structural helpers
impl<R: Read> JsonParser<R> {
    fn syntax_error(&self, kind: SyntaxErrorKind) -> JsonError {
        JsonError::Syntax {
            kind,
            location: self.current_position(),
        }
    }

    fn type_mismatch(&self, expected: &'static str) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            actual: self.token.description(),
        }
    }

    fn found(&mut self, token: JsonToken) -> JsonToken {
        self.token = token;
        token
    }

    fn close_array(&mut self) -> Result<JsonToken, JsonError> {
        if self.stack.last() != Some(&Container::Array) {
            return Err(self.syntax_error(SyntaxErrorKind::UnexpectedClosingBracket));
        }
        self.stack.pop();
        Ok(self.found(JsonToken::EndArray))
    }

    fn close_object(&mut self) -> Result<JsonToken, JsonError> {
        if self.stack.last() != Some(&Container::Object) {
            return Err(self.syntax_error(SyntaxErrorKind::UnexpectedClosingBracket));
        }
        self.stack.pop();
        Ok(self.found(JsonToken::EndObject))
    }

    fn parse_literal(
        &mut self,
        remainder: &str,
        token: JsonToken,
    ) -> Result<JsonToken, JsonError> {
        for expected in remainder.bytes() {
            let b = self.read_byte(SyntaxErrorKind::InvalidLiteral)?;
            if b != expected {
                return Err(self.syntax_error(SyntaxErrorKind::InvalidLiteral));
            }
        }
        if !self.next_is_delimiter() {
            return Err(self.syntax_error(SyntaxErrorKind::TrailingDataAfterLiteral));
        }
        Ok(self.found(token))
    }
}

// Implementation with string parsing methods
impl<R: Read> JsonParser<R> {
    fn parse_name(&mut self) -> Result<(), JsonError> {
        let mut out = std::mem::take(&mut self.current_name).into_bytes();
        out.clear();
        self.parse_string_bytes(&mut out)?;
        self.current_name = String::from_utf8(out)
            .map_err(|_| self.syntax_error(SyntaxErrorKind::MalformedUtf8))?;
        Ok(())
    }

    fn parse_string_value(&mut self) -> Result<(), JsonError> {
        let mut out = std::mem::take(&mut self.current_string).into_bytes();
        out.clear();
        self.parse_string_bytes(&mut out)?;
        self.current_string = String::from_utf8(out)
            .map_err(|_| self.syntax_error(SyntaxErrorKind::MalformedUtf8))?;
        Ok(())
    }

    /// Consumes a string whose opening quote has already been consumed,
    /// appending the decoded bytes to `out`.
    fn parse_string_bytes(&mut self, out: &mut Vec<u8>) -> Result<(), JsonError> {
        loop {
            // bulk-copy the run up to the next quote, escape or control byte
            let run_start = self.buf_pos;
            let mut terminator = 0_u8;
            while self.buf_pos < self.buf_end {
                let b = self.buf[self.buf_pos];
                if b < 0x20 || b == b'"' || b == b'\\' {
                    terminator = b;
                    break;
                }
                self.buf_pos += 1;
            }
            if self.buf_pos > run_start {
                let run = &self.buf[run_start..self.buf_pos];
                out.extend_from_slice(run);
                self.byte_pos += run.len() as u64;
                self.column += run.iter().filter(|b| !is_continuation_byte(**b)).count() as u64;
            }

            if self.buf_pos >= self.buf_end {
                if !self.fill_buffer() {
                    return Err(self.syntax_error(SyntaxErrorKind::UnterminatedString));
                }
                continue;
            }

            self.skip_peeked_byte();
            match terminator {
                b'"' => {
                    if !self.next_is_delimiter() {
                        return Err(self.syntax_error(SyntaxErrorKind::MalformedJson));
                    }
                    return Ok(());
                }
                b'\\' => self.parse_escape(out)?,
                _ => return Err(self.syntax_error(SyntaxErrorKind::NotEscapedControlCharacter)),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut Vec<u8>) -> Result<(), JsonError> {
        let b = self.read_byte(SyntaxErrorKind::UnterminatedString)?;
        match b {
            b'"' | b'\\' | b'/' => out.push(b),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'u' => {
                let code = self.parse_hex_code()?;
                let code_point = if (0xD800..=0xDBFF).contains(&code) {
                    // a high surrogate must combine with a following low one
                    if self.read_byte(SyntaxErrorKind::UnpairedSurrogateEscape)? != b'\\'
                        || self.read_byte(SyntaxErrorKind::UnpairedSurrogateEscape)? != b'u'
                    {
                        return Err(self.syntax_error(SyntaxErrorKind::UnpairedSurrogateEscape));
                    }
                    let low = self.parse_hex_code()?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(self.syntax_error(SyntaxErrorKind::UnpairedSurrogateEscape));
                    }
                    0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
                } else if (0xDC00..=0xDFFF).contains(&code) {
                    return Err(self.syntax_error(SyntaxErrorKind::UnpairedSurrogateEscape));
                } else {
                    code
                };
                if code_point < 0x80 {
                    out.push(code_point as u8);
                } else if code_point < 0x800 {
                    out.push(0xC0 | (code_point >> 6) as u8);
                    out.push(0x80 | (code_point & 0x3F) as u8);
                } else if code_point < 0x10000 {
                    out.push(0xE0 | (code_point >> 12) as u8);
                    out.push(0x80 | ((code_point >> 6) & 0x3F) as u8);
                    out.push(0x80 | (code_point & 0x3F) as u8);
                } else {
                    out.push(0xF0 | (code_point >> 18) as u8);
                    out.push(0x80 | ((code_point >> 12) & 0x3F) as u8);
                    out.push(0x80 | ((code_point >> 6) & 0x3F) as u8);
                    out.push(0x80 | (code_point & 0x3F) as u8);
                }
            }
            _ => return Err(self.syntax_error(SyntaxErrorKind::UnknownEscapeSequence)),
        }
        Ok(())
    }

    fn parse_hex_code(&mut self) -> Result<u32, JsonError> {
        let mut code = 0_u32;
        for _ in 0..4 {
            let b = self.read_byte(SyntaxErrorKind::MalformedEscapeSequence)?;
            let digit = match b {
                b'0'..=b'9' => u32::from(b - b'0'),
                b'a'..=b'f' => u32::from(b - b'a') + 10,
                b'A'..=b'F' => u32::from(b - b'A') + 10,
                _ => return Err(self.syntax_error(SyntaxErrorKind::MalformedEscapeSequence)),
            };
            code = code * 16 + digit;
        }
        Ok(code)
    }
}

// Implementation with number parsing methods
impl<R: Read> JsonParser<R> {
    /// Lexes a number whose first byte has already been consumed.
    ///
    /// Digits accumulate into a 64-bit significand; once it would
    /// overflow, the first discarded digit is banker's-rounded into it and
    /// the decimal exponent keeps track of the discarded positions.
    fn parse_number(&mut self, first: u8) -> Result<JsonToken, JsonError> {
        let negative = first == b'-';
        let first_digit = if negative {
            match self.peek_byte() {
                Some(d) if d.is_ascii_digit() => {
                    self.skip_peeked_byte();
                    d
                }
                _ => return Err(self.syntax_error(SyntaxErrorKind::MalformedNumber)),
            }
        } else {
            first
        };
        if first_digit == b'0' {
            if let Some(d) = self.peek_byte() {
                if d.is_ascii_digit() {
                    return Err(self.syntax_error(SyntaxErrorKind::LeadingZero));
                }
            }
        }

        let mut significand = u64::from(first_digit - b'0');
        let mut decimal_exponent = 0_i32;
        let mut rounded = false;
        let mut is_float = false;
        // one more digit fits below the cutoff; at the cutoff the sign
        // decides, so that the magnitude of i64::MIN still accumulates
        let cutoff = i64::MAX as u64 / 10;
        let max_last_digit = if negative { b'8' } else { b'7' };

        let mut next = self.peek_byte();
        while let Some(d) = next {
            if !d.is_ascii_digit() {
                break;
            }
            self.skip_peeked_byte();
            if !rounded && (significand < cutoff || (significand == cutoff && d <= max_last_digit))
            {
                significand = significand * 10 + u64::from(d - b'0');
            } else {
                if !rounded {
                    rounded = true;
                    if d > b'5' || (d == b'5' && significand & 1 == 1) {
                        significand += 1;
                    }
                }
                decimal_exponent = decimal_exponent.saturating_add(1);
            }
            next = self.peek_byte();
        }

        if next == Some(b'.') {
            is_float = true;
            self.skip_peeked_byte();
            match self.peek_byte() {
                Some(d) if d.is_ascii_digit() => {}
                _ => return Err(self.syntax_error(SyntaxErrorKind::MalformedNumber)),
            }
            next = self.peek_byte();
            while let Some(d) = next {
                if !d.is_ascii_digit() {
                    break;
                }
                self.skip_peeked_byte();
                if !rounded
                    && (significand < cutoff || (significand == cutoff && d <= max_last_digit))
                {
                    significand = significand * 10 + u64::from(d - b'0');
                    decimal_exponent = decimal_exponent.saturating_sub(1);
                } else if !rounded {
                    rounded = true;
                    if d > b'5' || (d == b'5' && significand & 1 == 1) {
                        significand += 1;
                    }
                }
                next = self.peek_byte();
            }
        }

        if next == Some(b'e') || next == Some(b'E') {
            is_float = true;
            self.skip_peeked_byte();
            let mut exponent_negative = false;
            next = self.peek_byte();
            if next == Some(b'+') {
                self.skip_peeked_byte();
                next = self.peek_byte();
            } else if next == Some(b'-') {
                exponent_negative = true;
                self.skip_peeked_byte();
                next = self.peek_byte();
            }
            let mut exponent_value = 0_i32;
            let mut any_digit = false;
            while let Some(d) = next {
                if !d.is_ascii_digit() {
                    break;
                }
                self.skip_peeked_byte();
                any_digit = true;
                exponent_value = exponent_value
                    .saturating_mul(10)
                    .saturating_add(i32::from(d - b'0'));
                next = self.peek_byte();
            }
            if !any_digit {
                return Err(self.syntax_error(SyntaxErrorKind::MalformedNumber));
            }
            decimal_exponent = decimal_exponent.saturating_add(if exponent_negative {
                -exponent_value
            } else {
                exponent_value
            });
        }

        if let Some(d) = next {
            if !is_delimiter(d) {
                return Err(self.syntax_error(SyntaxErrorKind::TrailingDataAfterNumber));
            }
        }

        if !is_float && !rounded {
            if negative && significand == 0 {
                // keep the sign of "-0" by reporting it as a float
                self.double = -0.0;
                return Ok(self.found(JsonToken::Float));
            }
            self.integer = if negative {
                (significand as i64).wrapping_neg()
            } else {
                significand as i64
            };
            return Ok(self.found(JsonToken::Integer));
        }

        let digit_count = significand.checked_ilog10().map_or(1, |log| log + 1);
        let magnitude = numeric::decimal_to_double(significand, digit_count, decimal_exponent);
        self.double = if negative { -magnitude } else { magnitude };
        Ok(self.found(JsonToken::Float))
    }
}

fn is_continuation_byte(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b',' | b':' | b']' | b'}' | b' ' | b'\t' | b'\r' | b'\n')
}
