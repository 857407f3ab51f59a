#![allow(dead_code)]

use core::{convert::Infallible, fmt::Write};

use jsonsink::{Handler, Location};

pub const DOCUMENT: &str = r#"{"id": 7, "tags": ["a", null], "ok": false}"#;

/// Renders every event as `line:column event [text]`, one per line.
#[derive(Default)]
pub struct Recorder {
    pub out: String,
}

impl Recorder {
    fn line(&mut self, at: Location, event: &str, text: Option<&str>) -> Result<(), Infallible> {
        write!(self.out, "{}:{} {event}", at.line, at.column).unwrap();
        if let Some(text) = text {
            write!(self.out, " {text:?}").unwrap();
        }
        self.out.push('\n');
        Ok(())
    }
}

impl Handler for Recorder {
    type Array = ();
    type Object = ();
    type Error = Infallible;

    fn start_null(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_null", None)
    }

    fn end_null(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_null", None)
    }

    fn start_true(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_true", None)
    }

    fn end_true(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_true", None)
    }

    fn start_false(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_false", None)
    }

    fn end_false(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_false", None)
    }

    fn start_string(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_string", None)
    }

    fn end_string(&mut self, text: &str, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_string", Some(text))
    }

    fn start_number(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_number", None)
    }

    fn end_number(&mut self, text: &str, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_number", Some(text))
    }

    fn start_array(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_array", None)
    }

    fn end_array(&mut self, (): (), at: Location) -> Result<(), Infallible> {
        self.line(at, "end_array", None)
    }

    fn start_array_value(&mut self, (): &mut (), at: Location) -> Result<(), Infallible> {
        self.line(at, "start_array_value", None)
    }

    fn end_array_value(&mut self, (): &mut (), at: Location) -> Result<(), Infallible> {
        self.line(at, "end_array_value", None)
    }

    fn start_object(&mut self, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_object", None)
    }

    fn end_object(&mut self, (): (), at: Location) -> Result<(), Infallible> {
        self.line(at, "end_object", None)
    }

    fn start_object_name(&mut self, (): &mut (), at: Location) -> Result<(), Infallible> {
        self.line(at, "start_object_name", None)
    }

    fn end_object_name(&mut self, (): &mut (), name: &str, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_object_name", Some(name))
    }

    fn start_object_value(&mut self, (): &mut (), name: &str, at: Location) -> Result<(), Infallible> {
        self.line(at, "start_object_value", Some(name))
    }

    fn end_object_value(&mut self, (): &mut (), name: &str, at: Location) -> Result<(), Infallible> {
        self.line(at, "end_object_value", Some(name))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
