//! Document-level parser behavior: token sequences, strings and escapes.

use std::error::Error;

use tokson::error::{JsonError, SyntaxErrorKind};
use tokson::parser::JsonParser;
use tokson::JsonToken;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn token_sequence_with_number_kinds() -> TestResult {
    let mut parser = JsonParser::new(r#"[1012e0, {"hey": 1.2}]"#.as_bytes());

    assert_eq!(JsonToken::StartArray, parser.next_token()?);

    // an exponent marks the number as a float even when it shifts nothing
    assert_eq!(JsonToken::Float, parser.next_token()?);
    assert_eq!(1012.0, parser.float_value()?);

    assert_eq!(JsonToken::StartObject, parser.next_token()?);
    assert_eq!(JsonToken::FieldName, parser.next_token()?);
    assert_eq!("hey", parser.current_name());
    assert_eq!("hey", parser.text()?);
    assert_eq!(JsonToken::Float, parser.next_token()?);
    assert_eq!(1.2, parser.float_value()?);
    assert_eq!(JsonToken::EndObject, parser.next_token()?);
    assert_eq!(JsonToken::EndArray, parser.next_token()?);
    assert_eq!(JsonToken::NotAvailable, parser.next_token()?);
    Ok(())
}

fn parse_string_value(json: &str) -> Result<String, JsonError> {
    let mut parser = JsonParser::new(json.as_bytes());
    parser.next_token()?;
    Ok(parser.text()?.to_owned())
}

#[test]
fn string_escapes() -> TestResult {
    assert_eq!("é", parse_string_value(r#""\u00E9""#)?);
    assert_eq!(vec![0xC3, 0xA9], parse_string_value(r#""\u00E9""#)?.into_bytes());
    assert_eq!("a\"b", parse_string_value(r#""a\"b""#)?);
    assert_eq!("a\\b", parse_string_value(r#""a\\b""#)?);
    assert_eq!("a/b", parse_string_value(r#""a\/b""#)?);
    assert_eq!("\u{8}\u{c}\n\r\t", parse_string_value(r#""\b\f\n\r\t""#)?);
    assert_eq!("\0", parse_string_value(r#""\u0000""#)?);
    assert_eq!("\u{ABCD}", parse_string_value(r#""\uABCD""#)?);
    // hex digits in either case
    assert_eq!("\u{ABCD}", parse_string_value(r#""\uabcd""#)?);
    Ok(())
}

#[test]
fn surrogate_pairs_combine() -> TestResult {
    assert_eq!("😀", parse_string_value(r#""\uD83D\uDE00""#)?);
    assert_eq!("\u{10FFFF}", parse_string_value(r#""\uDBFF\uDFFF""#)?);
    assert_eq!("a😀b", parse_string_value(r#""a\uD83D\uDE00b""#)?);
    Ok(())
}

fn assert_string_error(json: &str, expected_kind: SyntaxErrorKind) {
    match parse_string_value(json) {
        Err(JsonError::Syntax { kind, .. }) => assert_eq!(expected_kind, kind, "for {json}"),
        r => panic!("unexpected result for {json}: {r:?}"),
    }
}

#[test]
fn unpaired_surrogates_are_rejected() {
    assert_string_error(r#""\uD83D""#, SyntaxErrorKind::UnpairedSurrogateEscape);
    assert_string_error(r#""\uD83Dx""#, SyntaxErrorKind::UnpairedSurrogateEscape);
    assert_string_error(r#""\uD83D\n""#, SyntaxErrorKind::UnpairedSurrogateEscape);
    assert_string_error(r#""\uD83D\uD83D""#, SyntaxErrorKind::UnpairedSurrogateEscape);
    assert_string_error(r#""\uDE00""#, SyntaxErrorKind::UnpairedSurrogateEscape);
}

#[test]
fn invalid_utf8_is_rejected() {
    // 0xFF can never occur in UTF-8 data
    let mut parser = JsonParser::new(&[b'"', 0xFF, b'"'][..]);
    match parser.next_token() {
        Err(JsonError::Syntax { kind, .. }) => {
            assert_eq!(SyntaxErrorKind::MalformedUtf8, kind);
        }
        r => panic!("unexpected result: {r:?}"),
    }

    // overlong two byte encoding of '/'
    let mut parser = JsonParser::new(&[b'"', 0xC0, 0xAF, b'"'][..]);
    assert!(parser.next_token().is_err());
}

#[test]
fn strings_across_buffer_boundaries() -> TestResult {
    use tokson::parser::ParserSettings;

    let long = "abcé".repeat(2000);
    let json = format!("[\"{long}\", \"\\n{long}\"]");
    // a tiny buffer forces refills inside strings and across UTF-8 sequences
    let mut parser = JsonParser::new_custom(json.as_bytes(), ParserSettings { buffer_size: 7 });
    assert_eq!(JsonToken::StartArray, parser.next_token()?);
    assert_eq!(JsonToken::String, parser.next_token()?);
    assert_eq!(long, parser.text()?);
    assert_eq!(JsonToken::String, parser.next_token()?);
    assert_eq!(format!("\n{long}"), parser.text()?);
    assert_eq!(JsonToken::EndArray, parser.next_token()?);
    Ok(())
}

#[test]
fn number_token_classification() -> TestResult {
    let cases: &[(&str, JsonToken)] = &[
        ("5", JsonToken::Integer),
        ("-5", JsonToken::Integer),
        ("0", JsonToken::Integer),
        ("5.0", JsonToken::Float),
        ("5e0", JsonToken::Float),
        ("5E2", JsonToken::Float),
        ("0.5", JsonToken::Float),
        ("-0", JsonToken::Float),
        ("9223372036854775807", JsonToken::Integer),
        ("-9223372036854775808", JsonToken::Integer),
        ("9223372036854775808", JsonToken::Float),
        ("10000000000000000000", JsonToken::Float),
    ];
    for (json, expected) in cases {
        let mut parser = JsonParser::new(json.as_bytes());
        assert_eq!(*expected, parser.next_token()?, "for {json}");
    }

    let mut parser = JsonParser::new("-9223372036854775808".as_bytes());
    parser.next_token()?;
    assert_eq!(i64::MIN, parser.integer_value()?);
    Ok(())
}

#[test]
fn whitespace_and_line_tracking() -> TestResult {
    let mut parser = JsonParser::new("\r\n  {\t\"a\"\n:1}  ".as_bytes());
    assert_eq!(JsonToken::StartObject, parser.next_token()?);
    assert_eq!(JsonToken::FieldName, parser.next_token()?);
    assert_eq!(JsonToken::Integer, parser.next_token()?);
    assert_eq!(JsonToken::EndObject, parser.next_token()?);
    assert_eq!(JsonToken::NotAvailable, parser.next_token()?);

    let mut parser = JsonParser::new("[\n1,\nbad]".as_bytes());
    parser.next_token()?;
    parser.next_token()?;
    match parser.next_token() {
        Err(JsonError::Syntax { location, .. }) => {
            assert_eq!(2, location.line);
            assert_eq!(1, location.column);
        }
        r => panic!("unexpected result: {r:?}"),
    }
    Ok(())
}

#[test]
fn literals_need_delimiters() -> TestResult {
    let mut parser = JsonParser::new("[true,false,null]".as_bytes());
    assert_eq!(JsonToken::StartArray, parser.next_token()?);
    assert_eq!(JsonToken::True, parser.next_token()?);
    assert!(parser.boolean_value()?);
    assert_eq!(JsonToken::False, parser.next_token()?);
    assert!(!parser.boolean_value()?);
    assert_eq!(JsonToken::Null, parser.next_token()?);
    assert_eq!(JsonToken::EndArray, parser.next_token()?);

    let mut parser = JsonParser::new("nullx".as_bytes());
    assert!(matches!(
        parser.next_token(),
        Err(JsonError::Syntax {
            kind: SyntaxErrorKind::TrailingDataAfterLiteral,
            ..
        })
    ));
    Ok(())
}
