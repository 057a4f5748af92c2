//! DOM node behavior: accessors, mutation, duplicate keys and the depth
//! guard on streaming read and write.

use std::error::Error;

use tokson::error::JsonError;
use tokson::generator::JsonGenerator;
use tokson::node::JsonNode;
use tokson::parser::JsonParser;
use tokson::JsonToken;

type TestResult = Result<(), Box<dyn Error>>;

fn parse(json: &str) -> Result<JsonNode, JsonError> {
    let mut node = JsonNode::default();
    node.read_from(&mut JsonParser::new(json.as_bytes()))?;
    Ok(node)
}

fn to_compact(node: &JsonNode) -> Result<String, JsonError> {
    let mut out = Vec::new();
    let mut generator = JsonGenerator::new(&mut out);
    node.write_to(&mut generator)?;
    generator.flush()?;
    drop(generator);
    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

#[test]
fn accessors() -> TestResult {
    let node = parse(r#"{"stuff": 5, "success": true, "pi": 3.5, "name": "x"}"#)?;
    assert_eq!(5, node.get_integer("stuff")?);
    assert!(node.get_boolean("success")?);
    assert_eq!(3.5, node.get_double("pi")?);
    assert_eq!("x", node.get_string("name")?);

    // numeric coercion in both directions
    assert_eq!(5.0, node.get_double("stuff")?);
    assert_eq!(3, node.get_integer("pi")?);

    // missing members read as null
    assert!(node.get("missing").is_null());
    assert_eq!(7, node.get_integer_or("missing", 7)?);
    assert_eq!("d", node.get_string_or("missing", "d")?);
    assert!(node.get_integer("name").is_err());
    Ok(())
}

#[test]
fn array_access() -> TestResult {
    let node = parse("[10, 20, 30]")?;
    assert_eq!(3, node.size());
    assert_eq!(20, node.get_index(1).as_integer()?);
    assert!(node.get_index(5).is_null());
    let values: Vec<i64> = node
        .elements()
        .map(|item| item.as_integer())
        .collect::<Result<_, _>>()?;
    assert_eq!(vec![10, 20, 30], values);
    Ok(())
}

#[test]
fn duplicate_keys_first_match_wins() -> TestResult {
    let node = parse(r#"{"a": 1, "a": 2}"#)?;
    assert_eq!(1, node.get_integer("a")?);
    // both members survive a rewrite
    assert_eq!(r#"{"a":1,"a":2}"#, to_compact(&node)?);
    Ok(())
}

#[test]
fn mutation() -> TestResult {
    let mut node = JsonNode::default();
    node.set("b", 2)?;
    node.set("a", 1)?;
    node.set("b", 3)?;
    // insertion order is preserved; set replaces in place
    assert_eq!(r#"{"b":3,"a":1}"#, to_compact(&node)?);

    let mut array = JsonNode::default();
    array.push(1)?;
    array.push(3)?;
    array.insert(1, 2)?;
    assert_eq!("[1,2,3]", to_compact(&array)?);
    assert!(array.insert(9, 4).is_err());

    // a non-null scalar does not silently become a container
    let mut scalar = JsonNode::Integer(1);
    assert!(scalar.set("a", 2).is_err());
    assert!(scalar.push(2).is_err());
    Ok(())
}

#[test]
fn clone_is_deep() -> TestResult {
    let original = parse(r#"{"a": [1, {"b": 2}]}"#)?;
    let mut copy = original.clone();
    if let JsonNode::Object(members) = &mut copy {
        members[0].1 = JsonNode::Null;
    }
    assert_eq!(r#"{"a":[1,{"b":2}]}"#, to_compact(&original)?);
    assert_eq!(r#"{"a":null}"#, to_compact(&copy)?);
    Ok(())
}

#[test]
fn read_leaves_parser_behind_value() -> TestResult {
    let mut parser = JsonParser::new("[1, 2] true".as_bytes());
    let mut node = JsonNode::default();
    node.read_from(&mut parser)?;
    assert_eq!("[1,2]", to_compact(&node)?);
    assert_eq!(JsonToken::True, parser.current_token());
    Ok(())
}

#[test]
fn depth_guard() -> TestResult {
    let json = format!("{}1{}", "[".repeat(60), "]".repeat(60));
    let mut node = JsonNode::default();
    let result = node.read_from(&mut JsonParser::new(json.as_bytes()));
    assert!(matches!(result, Err(JsonError::DepthExceeded(50))));
    // nothing was materialized
    assert!(node.is_null());

    let shallow = format!("{}1{}", "[".repeat(50), "]".repeat(50));
    node.read_from(&mut JsonParser::new(shallow.as_bytes()))?;
    assert!(!node.is_null());

    let mut deep = JsonNode::Integer(1);
    for _ in 0..60 {
        let mut outer = JsonNode::default();
        outer.push(deep)?;
        deep = outer;
    }
    let mut out = Vec::new();
    let mut generator = JsonGenerator::new(&mut out);
    let result = deep.write_to(&mut generator);
    assert!(matches!(result, Err(JsonError::DepthExceeded(50))));
    Ok(())
}

#[test]
fn conversions() -> TestResult {
    let mut node = JsonNode::default();
    node.set("int", 5_i32)?;
    node.set("float", 1.5_f64)?;
    node.set("flag", true)?;
    node.set("text", "hi")?;
    node.set("nothing", JsonNode::Null)?;
    assert_eq!(
        r#"{"int":5,"float":1.5,"flag":true,"text":"hi","nothing":null}"#,
        to_compact(&node)?
    );
    Ok(())
}
