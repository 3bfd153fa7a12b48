use json_dom::{parse, to_string_pretty, Value};

#[test]
fn test_json_stringify_literals() {
    assert_eq!(to_string_pretty(&Value::Null), "null");
    assert_eq!(to_string_pretty(&Value::Bool(true)), "true");
    assert_eq!(to_string_pretty(&Value::Bool(false)), "false");
}

#[test]
fn test_json_stringify_integers_have_no_trailing_point() {
    assert_eq!(to_string_pretty(&Value::Number(5.0)), "5");
    assert_eq!(to_string_pretty(&Value::Number(-3.0)), "-3");
}

#[test]
fn test_json_stringify_negative_zero() {
    assert_eq!(to_string_pretty(&Value::Number(-0.0)), "-0");
}

#[test]
fn test_json_stringify_fraction_uses_shortest_round_trip_form() {
    assert_eq!(to_string_pretty(&Value::Number(0.1)), "0.1");
}

#[test]
fn test_json_stringify_non_finite_number_degrades_to_null() {
    assert_eq!(to_string_pretty(&Value::Number(f64::NAN)), "null");
    assert_eq!(to_string_pretty(&Value::Number(f64::INFINITY)), "null");
}

#[test]
fn test_json_stringify_string_escapes() {
    let value = Value::String("a\"b\\c\u{8}\u{c}\n\r\t\u{1}".to_owned());
    assert_eq!(
        to_string_pretty(&value),
        "\"a\\\"b\\\\c\\b\\f\\n\\r\\t\\u0001\""
    );
}

#[test]
fn test_json_stringify_empty_array_and_object() {
    assert_eq!(to_string_pretty(&Value::array()), "[]");
    assert_eq!(to_string_pretty(&Value::object()), "{}");
}

#[test]
fn test_json_stringify_array_pretty_layout() {
    let value = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(to_string_pretty(&value), "[\n  1,\n  2\n]");
}

#[test]
fn test_json_stringify_object_pretty_layout() {
    let mut value = Value::object();
    *value.set_object_value("a") = Value::Number(1.0);
    assert_eq!(to_string_pretty(&value), "{\n  \"a\" : 1\n}");
}

#[test]
fn test_json_stringify_nested_layout_indents_each_level() {
    let inner = Value::Array(vec![Value::Number(1.0)]);
    let outer = Value::Array(vec![inner]);
    assert_eq!(to_string_pretty(&outer), "[\n  [\n    1\n  ]\n]");
}

#[test]
fn test_json_display_matches_to_string_pretty() {
    let value = parse(r#"{"a":[1,2]}"#).unwrap();
    assert_eq!(value.to_string(), to_string_pretty(&value));
}

#[test]
fn test_json_round_trip_through_parse_and_stringify() {
    let original = parse(r#"{"a":1,"b":[true,null,"x"],"c":{"d":2.5}}"#).unwrap();
    let text = to_string_pretty(&original);
    let reparsed = parse(&text).unwrap();
    assert_eq!(reparsed, original);
}
