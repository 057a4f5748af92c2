//! Streams a JSON document from one file to another, re-encoding it
//! compactly or, with `--prettify`, with indentation.

use std::env;
use std::fs::File;
use std::process::ExitCode;

use tokson::error::JsonError;
use tokson::generator::{GeneratorSettings, JsonGenerator};
use tokson::parser::JsonParser;
use tokson::JsonToken;

fn transfer(input: File, output: File, prettify: bool) -> Result<(), JsonError> {
    let mut parser = JsonParser::new(input);
    let mut generator = JsonGenerator::new_custom(
        output,
        GeneratorSettings {
            pretty_print: prettify,
            multi_top_level_value_separator: Some("\n".to_owned()),
            ..Default::default()
        },
    );
    loop {
        match parser.next_token()? {
            JsonToken::NotAvailable => break,
            JsonToken::StartObject => generator.start_object()?,
            JsonToken::EndObject => generator.end_object()?,
            JsonToken::StartArray => generator.start_array()?,
            JsonToken::EndArray => generator.end_array()?,
            JsonToken::FieldName => generator.write_field_name(parser.current_name())?,
            JsonToken::String => generator.write_string(parser.text()?)?,
            JsonToken::Integer => generator.write_integer(parser.integer_value()?)?,
            JsonToken::Float => generator.write_double(parser.float_value()?)?,
            JsonToken::True => generator.write_boolean(true)?,
            JsonToken::False => generator.write_boolean(false)?,
            JsonToken::Null => generator.write_null()?,
        }
    }
    generator.flush()
}

fn main() -> ExitCode {
    let arguments: Vec<String> = env::args().skip(1).collect();
    let mut files = Vec::new();
    let mut prettify = false;
    for argument in &arguments {
        if argument == "--prettify" {
            prettify = true;
        } else if argument.starts_with("--") {
            eprintln!("unknown option: {argument}");
            return ExitCode::from(2);
        } else {
            files.push(argument.as_str());
        }
    }
    let [input_path, output_path] = files.as_slice() else {
        eprintln!("usage: uglify <infile> <outfile> [--prettify]");
        return ExitCode::from(2);
    };

    let input = match File::open(input_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("failed to open {input_path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let output = match File::create(output_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("failed to create {output_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = transfer(input, output, prettify) {
        eprintln!("failed to process {input_path}: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
