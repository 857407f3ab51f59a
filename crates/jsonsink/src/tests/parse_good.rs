use alloc::string::ToString;

use rstest::rstest;

use crate::{Map, Value, from_slice, from_str};

#[rstest]
#[case("null", "null")]
#[case(" true ", "true")]
#[case("\n\t\rfalse\r\n", "false")]
#[case("0", "0")]
#[case("-0", "-0")]
#[case("-12.5e+3", "-12.5e+3")]
#[case("1E400", "1E400")]
#[case(r#""""#, r#""""#)]
#[case(r#""\u00e9\t""#, "\"é\\t\"")]
#[case(r#""\/""#, r#""/""#)]
#[case(r#""😀""#, "\"😀\"")]
#[case(r#""\ud83d\ude00""#, "\"😀\"")]
#[case("[]", "[]")]
#[case("[ ]", "[]")]
#[case("{}", "{}")]
#[case("{ \n }", "{}")]
#[case("[[[[]]]]", "[[[[]]]]")]
#[case(r#"{ "a" : [ 1 , { "b" : null } ] }"#, r#"{"a":[1,{"b":null}]}"#)]
#[case(r#"[true,false,null,"",0,{},[]]"#, r#"[true,false,null,"",0,{},[]]"#)]
#[case(r#"{"a":1,"a":2}"#, r#"{"a":1,"a":2}"#)]
#[case("\"😀é\u{7f}\"", "\"😀é\\u007F\"")]
fn parses_to_canonical_text(#[case] input: &str, #[case] canonical: &str) {
    assert_eq!(from_str(input).unwrap().to_string(), canonical);
}

#[test]
fn numbers_keep_their_text() {
    let value = from_str("[12345678901234567890123, 1.0, 1e-7]").unwrap();
    let texts: alloc::vec::Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_number().unwrap().as_str())
        .collect();
    assert_eq!(texts, ["12345678901234567890123", "1.0", "1e-7"]);

    let big = value.get(0).and_then(Value::as_number).unwrap();
    assert_eq!(big.as_u64(), None);
    assert!(big.as_f64().is_some_and(|f| f > 1.2e22));
}

#[test]
fn duplicate_names_are_kept_and_last_wins() {
    let value = from_str(r#"{"k": 1, "other": true, "k": 2}"#).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(object.get("k"), Some(&Value::from(2i64)));
    assert_eq!(object.keys().collect::<alloc::vec::Vec<_>>(), ["k", "other", "k"]);
}

#[test]
fn members_stay_in_document_order() {
    let value = from_str(r#"{"z": 0, "a": 1, "m": 2}"#).unwrap();
    let mut expected = Map::new();
    expected.push("z", Value::from(0i64));
    expected.push("a", Value::from(1i64));
    expected.push("m", Value::from(2i64));
    assert_eq!(value, Value::Object(expected));
}

#[test]
fn slices_decode_utf8() {
    let value = from_slice("{\"naïve\": \"café ☕\"}".as_bytes()).unwrap();
    assert_eq!(value.get("naïve").and_then(Value::as_str), Some("café ☕"));
}

#[test]
fn value_parses_from_str() {
    let value: Value = "[1, \"two\"]".parse().unwrap();
    assert_eq!(value.get(1).and_then(Value::as_str), Some("two"));
}

#[test]
fn default_depth_limit_is_one_thousand() {
    let nested = |depth: usize| {
        let mut input = "[".repeat(depth);
        input.push_str(&"]".repeat(depth));
        input
    };
    assert!(from_str(&nested(crate::DEFAULT_MAX_DEPTH)).is_ok());

    let err = from_str(&nested(crate::DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err.to_string(), "Nesting too deep at line 1, column 1001");
}
