#![warn(missing_docs)]
// Enable 'unused' warnings for doc tests (are disabled by default)
#![doc(test(no_crate_inject))]
#![doc(test(attr(warn(unused))))]

//! tokson is an [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259.html)
//! compliant streaming JSON codec: a pull parser emitting a token stream,
//! a push generator enforcing structural validity, and an in-memory
//! document tree bridging the two.
//!
//! Underneath sits an engineered number codec: doubles are written as the
//! shortest decimal string that parses back to the identical bit pattern,
//! and parsed back with correct round-to-nearest-even rounding. Neither
//! direction goes through intermediate decimal scaling that could drop
//! the last bit.
//!
//! # Reading
//! [`JsonParser`](parser::JsonParser) pulls tokens from any
//! [`Read`](std::io::Read):
//!
//! ```
//! use tokson::{parser::JsonParser, JsonToken};
//!
//! // in this example JSON data comes from a string; normally it would
//! // come from a file or a network connection
//! let mut parser = JsonParser::new(r#"{"a": [1, true]}"#.as_bytes());
//!
//! assert_eq!(parser.next_token()?, JsonToken::StartObject);
//! assert_eq!(parser.next_token()?, JsonToken::FieldName);
//! assert_eq!(parser.current_name(), "a");
//! assert_eq!(parser.next_token()?, JsonToken::StartArray);
//! assert_eq!(parser.next_token()?, JsonToken::Integer);
//! assert_eq!(parser.integer_value()?, 1);
//! assert_eq!(parser.next_token()?, JsonToken::True);
//! assert_eq!(parser.next_token()?, JsonToken::EndArray);
//! assert_eq!(parser.next_token()?, JsonToken::EndObject);
//! assert_eq!(parser.next_token()?, JsonToken::NotAvailable);
//! # Ok::<(), tokson::error::JsonError>(())
//! ```
//!
//! # Writing
//! [`JsonGenerator`](generator::JsonGenerator) pushes tokens to any
//! [`Write`](std::io::Write):
//!
//! ```
//! use tokson::generator::JsonGenerator;
//!
//! let mut out = Vec::<u8>::new();
//! let mut generator = JsonGenerator::new(&mut out);
//! generator.start_object()?;
//! generator.write_field_name("a")?;
//! generator.write_double(0.1)?;
//! generator.end_object()?;
//! generator.flush()?;
//! drop(generator);
//!
//! assert_eq!(String::from_utf8(out)?, r#"{"a":0.1}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Documents in memory
//! [`JsonNode`](node::JsonNode) materializes a parsed value as a tree and
//! can replay it into a generator:
//!
//! ```
//! use tokson::{node::JsonNode, parser::JsonParser};
//!
//! let json = r#"{ "stuff" : 5, "success" : true }"#;
//! let mut node = JsonNode::default();
//! node.read_from(&mut JsonParser::new(json.as_bytes()))?;
//!
//! assert_eq!(node.get_integer("stuff")?, 5);
//! assert!(node.get_boolean("success")?);
//! # Ok::<(), tokson::error::JsonError>(())
//! ```

pub mod error;
pub mod generator;
pub mod node;
pub mod numeric;
pub mod parser;

mod token;

pub use token::JsonToken;
