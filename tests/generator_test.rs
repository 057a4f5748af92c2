//! Generator behavior: structural enforcement, escaping, buffering and
//! pretty printing.

use std::error::Error;

use tokson::error::JsonError;
use tokson::generator::{GeneratorSettings, JsonGenerator};

type TestResult = Result<(), Box<dyn Error>>;

fn collect<F>(settings: GeneratorSettings, build: F) -> Result<String, JsonError>
where
    F: FnOnce(&mut JsonGenerator<&mut Vec<u8>>) -> Result<(), JsonError>,
{
    let mut out = Vec::new();
    let mut generator = JsonGenerator::new_custom(&mut out, settings);
    build(&mut generator)?;
    generator.flush()?;
    drop(generator);
    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

#[test]
fn compact_document() -> TestResult {
    let json = collect(GeneratorSettings::default(), |g| {
        g.start_object()?;
        g.write_field_name("a")?;
        g.start_array()?;
        g.write_integer(1)?;
        g.write_double(2.5)?;
        g.write_string("x")?;
        g.write_boolean(false)?;
        g.write_null()?;
        g.end_array()?;
        g.end_object()
    })?;
    assert_eq!(r#"{"a":[1,2.5,"x",false,null]}"#, json);
    Ok(())
}

#[test]
fn pretty_document() -> TestResult {
    let json = collect(
        GeneratorSettings {
            pretty_print: true,
            ..Default::default()
        },
        |g| {
            g.start_object()?;
            g.write_field_name("a")?;
            g.start_array()?;
            g.write_integer(1)?;
            g.write_integer(2)?;
            g.end_array()?;
            g.end_object()
        },
    )?;
    assert_eq!("{\n\t\"a\" : [\n\t\t1,\n\t\t2\n\t]\n}", json);
    Ok(())
}

#[test]
fn string_escaping() -> TestResult {
    let json = collect(GeneratorSettings::default(), |g| {
        g.write_string("a\"b\\c\u{8}\u{c}\n\r\t\u{1}\u{1f}é😀")
    })?;
    assert_eq!(
        "\"a\\\"b\\\\c\\b\\f\\n\\r\\t\\u0001\\u001F\u{e9}\u{1f600}\"",
        json
    );
    Ok(())
}

#[test]
fn tiny_buffer_splits_writes() -> TestResult {
    let long = "x".repeat(100);
    let json = collect(
        GeneratorSettings {
            buffer_size: 4,
            ..Default::default()
        },
        |g| {
            g.start_array()?;
            g.write_string(&long)?;
            g.write_integer(1234567890)?;
            g.end_array()
        },
    )?;
    assert_eq!(format!("[\"{long}\",1234567890]"), json);
    Ok(())
}

#[test]
fn negative_zero_and_non_finite() -> TestResult {
    let json = collect(GeneratorSettings::default(), |g| {
        g.start_array()?;
        g.write_double(-0.0)?;
        g.write_double(0.0)?;
        g.end_array()
    })?;
    assert_eq!("[-0,0]", json);

    let mut out = Vec::new();
    let mut generator = JsonGenerator::new(&mut out);
    generator.write_integer(1)?;
    match generator.write_double(f64::NAN) {
        Err(JsonError::InvalidNumber(v)) => assert!(v.is_nan()),
        r => panic!("unexpected result: {r:?}"),
    }
    generator.flush()?;
    drop(generator);
    // nothing was emitted for the rejected value
    assert_eq!(b"1", out.as_slice());
    Ok(())
}

fn assert_structural<F>(build: F, expected_message: &str)
where
    F: FnOnce(&mut JsonGenerator<&mut Vec<u8>>) -> Result<(), JsonError>,
{
    let mut out = Vec::new();
    let mut generator = JsonGenerator::new(&mut out);
    match build(&mut generator) {
        Err(JsonError::Structural(message)) => assert_eq!(expected_message, message),
        r => panic!("unexpected result: {r:?}"),
    }
}

#[test]
fn structural_errors() {
    assert_structural(
        |g| {
            g.start_object()?;
            g.write_integer(1)
        },
        "tried to write a value without giving it a field name",
    );
    assert_structural(
        |g| g.write_field_name("a"),
        "tried to write a field name outside of an object",
    );
    assert_structural(
        |g| {
            g.start_object()?;
            g.write_field_name("a")?;
            g.write_field_name("b")
        },
        "tried to write a field name when a member value was expected",
    );
    assert_structural(
        |g| {
            g.start_array()?;
            g.end_object()
        },
        "tried to close an object while outside of an object",
    );
    assert_structural(
        |g| {
            g.start_object()?;
            g.write_field_name("a")?;
            g.end_object()
        },
        "tried to close an object while its member value was expected",
    );
    assert_structural(
        |g| {
            g.start_object()?;
            g.end_array()
        },
        "tried to close an array while outside of an array",
    );
    assert_structural(
        |g| {
            g.write_integer(1)?;
            g.write_integer(2)
        },
        "tried to write a second top-level value",
    );
}

#[test]
fn multiple_top_level_values() -> TestResult {
    let json = collect(
        GeneratorSettings {
            multi_top_level_value_separator: Some("\n".to_owned()),
            ..Default::default()
        },
        |g| {
            g.write_integer(1)?;
            g.write_integer(2)?;
            g.write_boolean(true)
        },
    )?;
    assert_eq!("1\n2\ntrue", json);
    Ok(())
}

#[test]
fn flush_on_drop() {
    let mut out = Vec::new();
    {
        let mut generator = JsonGenerator::new(&mut out);
        generator.write_integer(42).unwrap();
    }
    assert_eq!(b"42", out.as_slice());
}
