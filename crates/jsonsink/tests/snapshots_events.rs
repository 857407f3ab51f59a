#![expect(missing_docs)]

mod common;

use common::{DOCUMENT, Recorder, init_logging};
use jsonsink::Parser;

fn render(input: &str) -> String {
    init_logging();
    let mut recorder = Recorder::default();
    let result = Parser::new(jsonsink::StrSource::new(input), &mut recorder).parse();
    if let Err(err) = result {
        recorder.out.push_str(&format!("error: {err}\n"));
    }
    recorder.out
}

#[test]
fn snapshot_events_document() {
    insta::assert_snapshot!(render(DOCUMENT), @r#"
    1:1 start_object
    1:2 start_object_name
    1:6 end_object_name "id"
    1:8 start_object_value "id"
    1:8 start_number
    1:9 end_number "7"
    1:9 end_object_value "id"
    1:11 start_object_name
    1:17 end_object_name "tags"
    1:19 start_object_value "tags"
    1:19 start_array
    1:20 start_array_value
    1:20 start_string
    1:23 end_string "a"
    1:23 end_array_value
    1:25 start_array_value
    1:25 start_null
    1:29 end_null
    1:29 end_array_value
    1:30 end_array
    1:30 end_object_value "tags"
    1:32 start_object_name
    1:36 end_object_name "ok"
    1:38 start_object_value "ok"
    1:38 start_false
    1:43 end_false
    1:43 end_object_value "ok"
    1:44 end_object
    "#);
}

#[test]
fn snapshot_events_scalar_document() {
    insta::assert_snapshot!(render("  true\n"), @r#"
    1:3 start_true
    1:7 end_true
    "#);
}

#[test]
fn snapshot_events_stop_at_error() {
    insta::assert_snapshot!(render("{\n  \"a\" 1\n}"), @r#"
    1:1 start_object
    2:3 start_object_name
    2:6 end_object_name "a"
    error: Expected ':' at line 2, column 7
    "#);
}

#[test]
fn snapshot_events_escaped_text() {
    insta::assert_snapshot!(render(r#"["tab\t", "\u00e9", -1.5e3]"#), @r#"
    1:1 start_array
    1:2 start_array_value
    1:2 start_string
    1:9 end_string "tab\t"
    1:9 end_array_value
    1:11 start_array_value
    1:11 start_string
    1:19 end_string "é"
    1:19 end_array_value
    1:21 start_array_value
    1:21 start_number
    1:27 end_number "-1.5e3"
    1:27 end_array_value
    1:28 end_array
    "#);
}

#[test]
fn snapshot_value_display() {
    let value = jsonsink::from_str(DOCUMENT).unwrap();
    insta::assert_snapshot!(value.to_string(), @r#"{"id":7,"tags":["a",null],"ok":false}"#);
}
