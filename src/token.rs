//! Token kinds shared by the parser, the generator and the DOM node.

/// A lexical element of a JSON document.
///
/// [`JsonParser::next_token`](crate::parser::JsonParser::next_token) yields
/// these in document order; the generator tracks the last one it emitted.
/// `NotAvailable` is only produced at the top level once the input is
/// exhausted.
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum JsonToken {
    /// End of the token stream
    NotAvailable,
    /// Opening `{` of an object
    StartObject,
    /// Closing `}` of an object
    EndObject,
    /// Opening `[` of an array
    StartArray,
    /// Closing `]` of an array
    EndArray,
    /// The name of an object member
    FieldName,
    /// A string value
    String,
    /// A number value that fits an `i64` without rounding
    Integer,
    /// Any other number value
    Float,
    /// The literal `true`
    True,
    /// The literal `false`
    False,
    /// The literal `null`
    Null,
}

impl JsonToken {
    pub(crate) fn description(self) -> &'static str {
        match self {
            JsonToken::NotAvailable => "end of stream",
            JsonToken::StartObject => "an object start",
            JsonToken::EndObject => "an object end",
            JsonToken::StartArray => "an array start",
            JsonToken::EndArray => "an array end",
            JsonToken::FieldName => "a field name",
            JsonToken::String => "a string",
            JsonToken::Integer => "an integer",
            JsonToken::Float => "a float",
            JsonToken::True | JsonToken::False => "a boolean",
            JsonToken::Null => "a null",
        }
    }
}
