use indoc::indoc;
use json_dom::{parse, ErrorKind, Value};

#[test]
fn test_json_array_empty() {
    let value = parse("[]").unwrap();
    assert_eq!(value.array_len(), Some(0));
}

#[test]
fn test_json_array_of_numbers() {
    let value = parse("[ 1 , 2 , 3 ]").unwrap();
    assert_eq!(value.array_len(), Some(3));
    assert_eq!(value.get_array_element(0), Some(&Value::Number(1.0)));
    assert_eq!(value.get_array_element(1), Some(&Value::Number(2.0)));
    assert_eq!(value.get_array_element(2), Some(&Value::Number(3.0)));
}

#[test]
fn test_json_array_nested() {
    let value = parse("[[], [1], [1, [2]]]").unwrap();
    assert_eq!(value.array_len(), Some(3));
    assert_eq!(value.get_array_element(0).unwrap().array_len(), Some(0));
    assert_eq!(value.get_array_element(2).unwrap().array_len(), Some(2));
}

#[test]
fn test_json_array_truncated_is_miss_comma_or_square_bracket() {
    assert_eq!(
        parse("[1,2").unwrap_err().kind(),
        ErrorKind::MissCommaOrSquareBracket
    );
}

#[test]
fn test_json_array_no_trailing_comma() {
    assert_eq!(
        parse("[1,2,]").unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
}

#[test]
fn test_json_object_empty() {
    let value = parse("{}").unwrap();
    assert_eq!(value.object_len(), Some(0));
}

#[test]
fn test_json_object_two_members() {
    let value = parse(r#"{"a":1,"b":"x"}"#).unwrap();
    assert_eq!(value.object_len(), Some(2));
    assert_eq!(value.find_object_index("a"), Some(0));
    assert_eq!(value.find_object_index("b"), Some(1));
    assert_eq!(value.find_object_index("c"), None);
    assert_eq!(value.find_object_value("a"), Some(&Value::Number(1.0)));
}

#[test]
fn test_json_object_duplicate_keys_are_preserved_structurally() {
    let value = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(value.object_len(), Some(2));
    // First match wins on lookup, but both members still exist.
    assert_eq!(value.find_object_value("a"), Some(&Value::Number(1.0)));
    assert_eq!(value.get_object_member(1), Some(("a", &Value::Number(2.0))));
}

#[test]
fn test_json_object_pretty_printed_nested() {
    let text = indoc! {r#"
        {
          "name": "leptjson",
          "tags": [
            "json",
            "parser"
          ]
        }
    "#};
    let value = parse(text).unwrap();
    assert_eq!(value.find_object_value("name").unwrap().as_str(), Some("leptjson"));
    let tags = value.find_object_value("tags").unwrap();
    assert_eq!(tags.array_len(), Some(2));
}

#[test]
fn test_json_object_miss_colon() {
    assert_eq!(parse(r#"{"a" 1}"#).unwrap_err().kind(), ErrorKind::MissColon);
}

#[test]
fn test_json_object_miss_key() {
    assert_eq!(parse("{1:1}").unwrap_err().kind(), ErrorKind::MissKey);
}

#[test]
fn test_json_object_miss_comma_or_curly_bracket() {
    assert_eq!(
        parse(r#"{"a":1"#).unwrap_err().kind(),
        ErrorKind::MissCommaOrCurlyBracket
    );
}

#[test]
fn test_json_deeply_nested_array_exceeds_recursion_limit() {
    let mut text = String::new();
    for _ in 0..200 {
        text.push('[');
    }
    for _ in 0..200 {
        text.push(']');
    }
    assert_eq!(
        parse(&text).unwrap_err().kind(),
        ErrorKind::RecursionLimitExceeded
    );
}
