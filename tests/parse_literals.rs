use json_dom::{parse, ErrorKind, Type};

#[test]
fn test_json_parse_null() {
    let value = parse("null").unwrap();
    assert_eq!(value.value_type(), Type::Null);
}

#[test]
fn test_json_parse_true_false() {
    assert_eq!(parse("true").unwrap().value_type(), Type::True);
    assert_eq!(parse("false").unwrap().value_type(), Type::False);
}

#[test]
fn test_json_parse_literals_with_surrounding_whitespace() {
    assert_eq!(parse("  null\n").unwrap().value_type(), Type::Null);
    assert_eq!(parse("\t\rtrue ").unwrap().value_type(), Type::True);
}

#[test]
fn test_json_parse_expect_value_on_empty_input() {
    assert_eq!(parse("").unwrap_err().kind(), ErrorKind::ExpectValue);
    assert_eq!(parse(" ").unwrap_err().kind(), ErrorKind::ExpectValue);
}

#[test]
fn test_json_parse_invalid_value() {
    assert_eq!(parse("nul").unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(parse("?").unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_json_parse_root_not_singular() {
    assert_eq!(parse("null x").unwrap_err().kind(), ErrorKind::RootNotSingular);
    assert_eq!(parse("true x").unwrap_err().kind(), ErrorKind::RootNotSingular);
}
