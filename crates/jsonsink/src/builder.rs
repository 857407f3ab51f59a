//! The default handler: builds a [`Value`] tree.

use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use crate::{
    handler::Handler,
    location::Location,
    value::{Array, Map, Number, Value},
};

/// An open container and, for objects, the name of the member being read.
#[derive(Debug)]
enum Frame {
    Array(Array),
    Object(Map, Option<String>),
}

/// Assembles parse events into a [`Value`].
///
/// The builder keeps its own stack of open containers instead of using the
/// per-structure values of the [`Handler`] protocol. Object members are
/// appended in document order, duplicates included.
#[derive(Debug, Default)]
pub struct DomBuilder {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl DomBuilder {
    /// A builder with nothing built yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished value, or `Null` if nothing was parsed.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root.unwrap_or_default()
    }

    fn add(&mut self, value: Value) {
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object(map, name)) => {
                map.push(name.take().unwrap_or_default(), value);
            }
        }
    }
}

impl Handler for DomBuilder {
    type Array = ();
    type Object = ();
    type Error = Infallible;

    fn end_null(&mut self, _at: Location) -> Result<(), Infallible> {
        self.add(Value::Null);
        Ok(())
    }

    fn end_true(&mut self, _at: Location) -> Result<(), Infallible> {
        self.add(Value::Boolean(true));
        Ok(())
    }

    fn end_false(&mut self, _at: Location) -> Result<(), Infallible> {
        self.add(Value::Boolean(false));
        Ok(())
    }

    fn end_string(&mut self, text: &str, _at: Location) -> Result<(), Infallible> {
        self.add(Value::String(text.into()));
        Ok(())
    }

    fn end_number(&mut self, text: &str, _at: Location) -> Result<(), Infallible> {
        self.add(Value::Number(Number::from_text(text.into())));
        Ok(())
    }

    fn start_array(&mut self, _at: Location) -> Result<(), Infallible> {
        self.stack.push(Frame::Array(Array::new()));
        Ok(())
    }

    fn end_array(&mut self, (): (), _at: Location) -> Result<(), Infallible> {
        if let Some(Frame::Array(items)) = self.stack.pop() {
            self.add(Value::Array(items));
        }
        Ok(())
    }

    fn start_object(&mut self, _at: Location) -> Result<(), Infallible> {
        self.stack.push(Frame::Object(Map::new(), None));
        Ok(())
    }

    fn end_object(&mut self, (): (), _at: Location) -> Result<(), Infallible> {
        if let Some(Frame::Object(map, _)) = self.stack.pop() {
            self.add(Value::Object(map));
        }
        Ok(())
    }

    fn end_object_name(&mut self, _object: &mut (), name: &str, _at: Location) -> Result<(), Infallible> {
        if let Some(Frame::Object(_, pending)) = self.stack.last_mut() {
            *pending = Some(name.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn builds_nested_value_from_events() {
        let at = Location::START;
        let mut b = DomBuilder::new();
        b.start_object(at).unwrap();
        b.end_object_name(&mut (), "a", at).unwrap();
        b.start_array(at).unwrap();
        b.end_number("1", at).unwrap();
        b.end_null(at).unwrap();
        b.end_array((), at).unwrap();
        b.end_object_name(&mut (), "b", at).unwrap();
        b.end_string("x", at).unwrap();
        b.end_object((), at).unwrap();

        let mut expected = Map::new();
        expected.push("a", Value::Array(vec![Value::from(1i64), Value::Null]));
        expected.push("b", "x".into());
        assert_eq!(b.into_value(), Value::Object(expected));
    }

    #[test]
    fn empty_builder_yields_null() {
        assert_eq!(DomBuilder::new().into_value(), Value::Null);
    }
}
