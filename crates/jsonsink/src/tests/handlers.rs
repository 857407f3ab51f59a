use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::convert::Infallible;

use crate::{
    DomBuilder, Error, Handler, Location, Map, Number, Parser, StrSource, Value, from_str,
    parse_with,
};

/// Builds values bottom-up from the per-structure handler values, without a
/// stack of its own.
#[derive(Default)]
struct BottomUp {
    last: Option<Value>,
}

impl BottomUp {
    fn finish(&mut self, value: Value) -> Result<(), Infallible> {
        self.last = Some(value);
        Ok(())
    }

    fn take(&mut self) -> Value {
        self.last.take().unwrap_or_default()
    }
}

impl Handler for BottomUp {
    type Array = Vec<Value>;
    type Object = Map;
    type Error = Infallible;

    fn end_null(&mut self, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::Null)
    }

    fn end_true(&mut self, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::Boolean(true))
    }

    fn end_false(&mut self, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::Boolean(false))
    }

    fn end_string(&mut self, text: &str, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::String(text.to_string()))
    }

    fn end_number(&mut self, text: &str, _at: Location) -> Result<(), Infallible> {
        let n: i64 = text.parse().unwrap_or_default();
        self.finish(Value::Number(Number::from(n)))
    }

    fn end_array(&mut self, array: Vec<Value>, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::Array(array))
    }

    fn end_array_value(&mut self, array: &mut Vec<Value>, _at: Location) -> Result<(), Infallible> {
        array.push(self.take());
        Ok(())
    }

    fn end_object(&mut self, object: Map, _at: Location) -> Result<(), Infallible> {
        self.finish(Value::Object(object))
    }

    fn end_object_value(&mut self, object: &mut Map, name: &str, _at: Location) -> Result<(), Infallible> {
        object.push(name, self.take());
        Ok(())
    }
}

#[test]
fn per_structure_values_build_the_same_tree() {
    let input = r#"{"a": [1, [2, []], {"b": null}], "c": {"d": [true, false, "s"]}, "e": {}}"#;
    let mut built = parse_with(input, BottomUp::default()).unwrap();
    assert_eq!(built.take(), from_str(input).unwrap());
}

#[test]
fn borrowed_handler_stays_with_caller() {
    let mut builder = DomBuilder::new();
    parse_with("[1, 2]", &mut builder).unwrap();
    assert_eq!(builder.into_value(), Value::Array(vec![1i64.into(), 2i64.into()]));
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("found {name:?} at {at}")]
struct Found {
    name: String,
    at: Location,
}

/// Stops at the first member named `needle`.
#[derive(Debug)]
struct Search<'a> {
    needle: &'a str,
    names_seen: usize,
}

impl Handler for Search<'_> {
    type Array = ();
    type Object = ();
    type Error = Found;

    fn end_object_name(&mut self, (): &mut (), name: &str, at: Location) -> Result<(), Found> {
        self.names_seen += 1;
        if name == self.needle {
            return Err(Found { name: name.to_string(), at });
        }
        Ok(())
    }
}

#[test]
fn handler_error_aborts_the_parse() {
    let mut search = Search { needle: "target", names_seen: 0 };
    // The input is malformed after the member, which is never reached.
    let err = parse_with(r#"{"x": 1, "target": 2, ]"#, &mut search).unwrap_err();
    let Error::Handler(found) = err else {
        panic!("expected a handler error");
    };
    assert_eq!(found.name, "target");
    assert_eq!(found.at, Location { offset: 17, line: 1, column: 18 });
    assert_eq!(search.names_seen, 2);
}

#[test]
fn handler_error_message_is_wrapped() {
    let search = Search { needle: "k", names_seen: 0 };
    let err = parse_with(r#"{"k": 0}"#, search).unwrap_err();
    assert_eq!(err.to_string(), "handler error: found \"k\" at line 1, column 5");
    assert!(err.as_syntax().is_none());
}

#[test]
fn syntax_error_is_reported_when_handler_is_silent() {
    let search = Search { needle: "absent", names_seen: 0 };
    let err = parse_with(r#"{"a": 1,, }"#, search).unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(err.to_string(), "Expected string key at line 1, column 9");
}

#[test]
fn independent_parsers_run_in_parallel() {
    let inputs: Vec<String> = (0..8)
        .map(|i| {
            let items: Vec<String> = (0..500).map(|j| (i * j).to_string()).collect();
            alloc::format!("{{\"id\": {i}, \"items\": [{}]}}", items.join(","))
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                scope.spawn(move || {
                    Parser::new(StrSource::new(input), DomBuilder::new())
                        .parse()
                        .map(DomBuilder::into_value)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap().unwrap();
            assert_eq!(value.get("id").and_then(Value::as_number).and_then(Number::as_u64), u64::try_from(i).ok());
            assert_eq!(value.get("items").and_then(Value::as_array).map(Vec::len), Some(500));
        }
    });
}
