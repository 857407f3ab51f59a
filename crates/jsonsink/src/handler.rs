//! The handler protocol: structural events delivered while parsing.
//!
//! The parser calls one `start_*`/`end_*` pair per JSON production, in
//! document order. Every method has an empty default, so an implementation
//! overrides only the events it cares about.
//!
//! Arrays and objects get a per-structure value: whatever
//! [`Handler::start_array`] (or [`Handler::start_object`]) returns is passed
//! by `&mut` to every child event of that structure and handed back by value
//! to `end_array` (`end_object`). This lets a handler build structures
//! bottom-up without keeping its own stack. Handlers that do not need it use
//! `()`.
//!
//! Every method receives the [`Location`] at which the event occurs: for
//! `start_*` the position of the first character of the production, for
//! `end_*` the position just after its last character. Locations are
//! snapshots and may be retained.
//!
//! Returning `Err` from any method aborts the parse; the error reaches the
//! caller as [`Error::Handler`](crate::Error::Handler).

use crate::location::Location;

/// A sink for parse events.
///
/// ```
/// use core::convert::Infallible;
/// use jsonsink::{Handler, Location};
///
/// /// Counts the numbers in a document.
/// #[derive(Default)]
/// struct CountNumbers(usize);
///
/// impl Handler for CountNumbers {
///     type Array = ();
///     type Object = ();
///     type Error = Infallible;
///
///     fn end_number(&mut self, _text: &str, _at: Location) -> Result<(), Infallible> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let counted = jsonsink::parse_with("[1, {\"a\": 2.5}, \"3\"]", CountNumbers::default()).unwrap();
/// assert_eq!(counted.0, 2);
/// ```
#[allow(unused_variables)]
pub trait Handler {
    /// Per-array value returned by [`Handler::start_array`].
    type Array: Default;
    /// Per-object value returned by [`Handler::start_object`].
    type Object: Default;
    /// Error a handler may return to abort the parse.
    type Error;

    /// Beginning of a `null` literal, at its `n`.
    fn start_null(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a `null` literal.
    fn end_null(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of a `true` literal, at its `t`.
    fn start_true(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a `true` literal.
    fn end_true(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of a `false` literal, at its `f`.
    fn start_false(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a `false` literal.
    fn end_false(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of a string value, at its opening quote.
    fn start_string(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a string value. `text` has all escapes resolved.
    fn end_string(&mut self, text: &str, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of a number, at its first character.
    fn start_number(&mut self, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a number. `text` is the number exactly as written.
    fn end_number(&mut self, text: &str, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of an array, at its `[`.
    fn start_array(&mut self, at: Location) -> Result<Self::Array, Self::Error> {
        Ok(Self::Array::default())
    }

    /// End of an array, after its `]`.
    fn end_array(&mut self, array: Self::Array, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of an array element.
    fn start_array_value(
        &mut self,
        array: &mut Self::Array,
        at: Location,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of an array element.
    fn end_array_value(&mut self, array: &mut Self::Array, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of an object, at its `{`.
    fn start_object(&mut self, at: Location) -> Result<Self::Object, Self::Error> {
        Ok(Self::Object::default())
    }

    /// End of an object, after its `}`.
    fn end_object(&mut self, object: Self::Object, at: Location) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of a member name, at its opening quote.
    fn start_object_name(
        &mut self,
        object: &mut Self::Object,
        at: Location,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of a member name. `name` has all escapes resolved.
    fn end_object_name(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Beginning of the value of member `name`.
    fn start_object_value(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// End of the value of member `name`.
    fn end_object_value(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Array = H::Array;
    type Object = H::Object;
    type Error = H::Error;

    fn start_null(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).start_null(at)
    }

    fn end_null(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).end_null(at)
    }

    fn start_true(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).start_true(at)
    }

    fn end_true(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).end_true(at)
    }

    fn start_false(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).start_false(at)
    }

    fn end_false(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).end_false(at)
    }

    fn start_string(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).start_string(at)
    }

    fn end_string(&mut self, text: &str, at: Location) -> Result<(), Self::Error> {
        (**self).end_string(text, at)
    }

    fn start_number(&mut self, at: Location) -> Result<(), Self::Error> {
        (**self).start_number(at)
    }

    fn end_number(&mut self, text: &str, at: Location) -> Result<(), Self::Error> {
        (**self).end_number(text, at)
    }

    fn start_array(&mut self, at: Location) -> Result<Self::Array, Self::Error> {
        (**self).start_array(at)
    }

    fn end_array(&mut self, array: Self::Array, at: Location) -> Result<(), Self::Error> {
        (**self).end_array(array, at)
    }

    fn start_array_value(
        &mut self,
        array: &mut Self::Array,
        at: Location,
    ) -> Result<(), Self::Error> {
        (**self).start_array_value(array, at)
    }

    fn end_array_value(&mut self, array: &mut Self::Array, at: Location) -> Result<(), Self::Error> {
        (**self).end_array_value(array, at)
    }

    fn start_object(&mut self, at: Location) -> Result<Self::Object, Self::Error> {
        (**self).start_object(at)
    }

    fn end_object(&mut self, object: Self::Object, at: Location) -> Result<(), Self::Error> {
        (**self).end_object(object, at)
    }

    fn start_object_name(
        &mut self,
        object: &mut Self::Object,
        at: Location,
    ) -> Result<(), Self::Error> {
        (**self).start_object_name(object, at)
    }

    fn end_object_name(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        (**self).end_object_name(object, name, at)
    }

    fn start_object_value(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        (**self).start_object_value(object, name, at)
    }

    fn end_object_value(
        &mut self,
        object: &mut Self::Object,
        name: &str,
        at: Location,
    ) -> Result<(), Self::Error> {
        (**self).end_object_value(object, name, at)
    }
}
