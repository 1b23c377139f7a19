//! Structural serialization of compound values for entity hashing
//!
//! [`to_vec`] encodes any [`Serialize`] value in the length-prefixed format PHP's `serialize()`
//! writes, so that hashes of sequences and objects stay compatible with identifiers produced by
//! existing PHP deployments:
//!
//! | Value                     | Encoding                                   |
//! | ------------------------- | ------------------------------------------ |
//! | unit, `None`              | `N;`                                       |
//! | `bool`                    | `b:0;` or `b:1;`                           |
//! | integer                   | `i:42;`                                    |
//! | float                     | `d:0.5;`, `d:INF;`, `d:NAN;`               |
//! | string, `char`, bytes     | `s:5:"hello";` (length in bytes)           |
//! | sequence, tuple           | `a:2:{i:0;<value>i:1;<value>}`             |
//! | map, struct variant       | `a:1:{<key><value>}`                       |
//! | struct                    | `O:4:"Name":1:{s:5:"field";<value>}`       |
//! | unit variant              | `E:9:"Enum:Case";`                         |
//! | other variants            | `a:1:{s:4:"Case";<content>}`               |
//!
//! Map keys must serialize as integers or strings.

use std::fmt::Display;

use serde::ser::{self, Impossible, Serialize};

use crate::Entity;

/// Error serializing a value for hashing.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    /// A message raised by a [`Serialize`] implementation.
    #[error("{0}")]
    Custom(String),
    /// A map key serialized as something other than an integer or a string.
    #[error("map key must be an integer or a string")]
    KeyMustBeScalar,
}

impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Encodes `value` in the structural format described in the [module documentation](self).
///
/// # Examples
///
/// ```rust
/// let bytes = uuid_forge::ser::to_vec(&["This", "is"])?;
/// assert_eq!(bytes, br#"a:2:{i:0;s:4:"This";i:1;s:2:"is";}"#);
/// # Ok::<(), uuid_forge::ser::Error>(())
/// ```
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut serializer = Serializer::nested();
    value.serialize(&mut serializer)?;
    Ok(serializer.output)
}

/// Normalizes `value` into an [`Entity`], keeping top-level scalars in their textual form.
pub(crate) fn to_entity<T: Serialize + ?Sized>(value: &T) -> Result<Entity> {
    let mut serializer = Serializer {
        output: Vec::new(),
        text: None,
        top_level: true,
    };
    value.serialize(&mut serializer)?;
    Ok(match serializer.text {
        Some(text) => Entity::from(text),
        None => Entity::Structured(serializer.output),
    })
}

/// A serializer that writes the structural format into a byte buffer.
#[derive(Debug)]
pub struct Serializer {
    output: Vec<u8>,

    /// The textual form of a top-level scalar, captured instead of being encoded.
    text: Option<String>,
    top_level: bool,
}

impl Serializer {
    const fn nested() -> Self {
        Self {
            output: Vec::new(),
            text: None,
            top_level: false,
        }
    }

    fn push(&mut self, raw: &[u8]) {
        self.output.extend_from_slice(raw);
    }

    fn push_display(&mut self, value: impl Display) {
        self.push(value.to_string().as_bytes());
    }

    fn push_int(&mut self, value: impl Display) {
        self.push(b"i:");
        self.push_display(value);
        self.push(b";");
    }

    fn push_bytes(&mut self, value: &[u8]) {
        self.push(b"s:");
        self.push_display(value.len());
        self.push(b":\"");
        self.push(value);
        self.push(b"\";");
    }

    fn push_float(&mut self, value: f64) {
        self.push(b"d:");
        if value.is_nan() {
            self.push(b"NAN");
        } else if value == f64::INFINITY {
            self.push(b"INF");
        } else if value == f64::NEG_INFINITY {
            self.push(b"-INF");
        } else {
            self.push_display(value);
        }
        self.push(b";");
    }

    /// Captures a top-level scalar as text, returning `false` when nested.
    fn capture(&mut self, text: impl FnOnce() -> String) -> bool {
        if self.top_level {
            self.text = Some(text());
        }
        self.top_level
    }

    fn compound(&mut self, shape: Shape, variant: Option<&'static str>) -> Compound<'_> {
        self.top_level = false;
        Compound {
            ser: self,
            shape,
            variant,
            body: Serializer::nested(),
            count: 0,
        }
    }
}

/// The container a [`Compound`] closes with.
#[derive(Copy, Clone, Debug)]
enum Shape {
    Array,
    Object(&'static str),
}

/// Accumulates the entries of a sequence, map or struct until their count is known.
#[derive(Debug)]
pub struct Compound<'a> {
    ser: &'a mut Serializer,
    shape: Shape,
    variant: Option<&'static str>,
    body: Serializer,
    count: usize,
}

impl Compound<'_> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.body.push_int(self.count);
        value.serialize(&mut self.body)?;
        self.count += 1;
        Ok(())
    }

    fn field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.body.push_bytes(key.as_bytes());
        value.serialize(&mut self.body)?;
        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        let Self {
            ser,
            shape,
            variant,
            body,
            count,
        } = self;

        if let Some(variant) = variant {
            ser.push(b"a:1:{");
            ser.push_bytes(variant.as_bytes());
        }
        match shape {
            Shape::Array => ser.push(b"a:"),
            Shape::Object(name) => {
                ser.push(b"O:");
                ser.push_display(name.len());
                ser.push(b":\"");
                ser.push(name.as_bytes());
                ser.push(b"\":");
            }
        }
        ser.push_display(count);
        ser.push(b":{");
        ser.push(&body.output);
        ser.push(b"}");
        if variant.is_some() {
            ser.push(b"}");
        }
        Ok(())
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        if !self.capture(|| String::from(if v { "1" } else { "" })) {
            self.push(if v { b"b:1;" } else { b"b:0;" });
        }
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        if !self.capture(|| v.to_string()) {
            self.push_int(v);
        }
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        if !self.capture(|| v.to_string()) {
            self.push_int(v);
        }
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        if !self.capture(|| v.to_string()) {
            self.push_int(v);
        }
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        if !self.capture(|| v.to_string()) {
            self.push_int(v);
        }
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        // negative zero is falsy too
        if !self.capture(|| if v == 0.0 { String::from("0") } else { v.to_string() }) {
            self.push_float(v);
        }
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.serialize_str(v.encode_utf8(&mut [0u8; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        if !self.capture(|| v.to_owned()) {
            self.push_bytes(v.as_bytes());
        }
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.top_level = false;
        self.push_bytes(v);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        if !self.capture(String::new) {
            self.push(b"N;");
        }
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        if !self.capture(|| variant.to_owned()) {
            self.push(b"E:");
            self.push_display(name.len() + 1 + variant.len());
            self.push(b":\"");
            self.push(name.as_bytes());
            self.push(b":");
            self.push(variant.as_bytes());
            self.push(b"\";");
        }
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.top_level = false;
        self.push(b"a:1:{");
        self.push_bytes(variant.as_bytes());
        value.serialize(&mut *self)?;
        self.push(b"}");
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(self.compound(Shape::Array, None))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(self.compound(Shape::Array, None))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self.compound(Shape::Array, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(self.compound(Shape::Array, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(self.compound(Shape::Array, None))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self.compound(Shape::Object(name), None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(self.compound(Shape::Array, Some(variant)))
    }

    fn collect_str<T: Display + ?Sized>(self, value: &T) -> Result<()> {
        self.serialize_str(&value.to_string())
    }
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeMap for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        key.serialize(KeySerializer(&mut self.body))
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut self.body)?;
        self.count += 1;
        Ok(())
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Writes map keys, which are restricted to integers and strings.
struct KeySerializer<'a>(&'a mut Serializer);

impl KeySerializer<'_> {
    fn int(self, value: impl Display) -> Result<()> {
        self.0.push_int(value);
        Ok(())
    }
}

impl ser::Serializer for KeySerializer<'_> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.int(u8::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.int(v)
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.int(v)
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.int(v)
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.int(v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.int(v)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.int(v)
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.int(v)
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.int(v)
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.int(v)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.int(v)
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.serialize_str(v.encode_utf8(&mut [0u8; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.0.push_bytes(v.as_bytes());
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.0.push_bytes(v);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::KeyMustBeScalar)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::KeyMustBeScalar)
    }

    fn collect_str<T: Display + ?Sized>(self, value: &T) -> Result<()> {
        self.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{to_entity, to_vec, Error};
    use crate::{is_valid, v4_hash, v4_hash_serialize, Entity};
    use serde::{ser::SerializeStruct, Serialize, Serializer};
    use std::collections::BTreeMap;

    /// Serializes like a PHP object cast from a list, whose properties are named by index.
    struct StdClass(&'static [&'static str]);

    impl Serialize for StdClass {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            const KEYS: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];
            let mut s = serializer.serialize_struct("stdClass", self.0.len())?;
            for (key, value) in KEYS.iter().zip(self.0) {
                s.serialize_field(*key, value)?;
            }
            s.end()
        }
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u8, h: u8 },
    }

    /// Reproduces legacy vectors for sequences and objects
    #[test]
    fn reproduces_legacy_vectors_for_sequences_and_objects() {
        let cases: [(&str, Entity); 4] = [
            (
                "720d14db-d02f-1d79-adbf-e29e28a2ad72",
                Entity::serialize(&["This", "is", "an", "array"]).unwrap(),
            ),
            (
                "ac2cbd34-ad0b-42e1-79c9-c6b64c4fe1e2",
                Entity::serialize(&vec!["This", "is", "another", "array"]).unwrap(),
            ),
            (
                "78029fcf-1090-48ef-cc59-7e7047238b5e",
                Entity::serialize(&StdClass(&["And", "this", "is", "an", "object"])).unwrap(),
            ),
            (
                "9f94de43-e71b-39eb-92dc-2bc177442cca",
                Entity::serialize(&StdClass(&["And", "this", "is", "a", "different", "object"]))
                    .unwrap(),
            ),
        ];

        let mut previous = Entity::Empty;
        for (expected, entity) in cases {
            let e = v4_hash(entity.clone());
            assert!(is_valid(e.as_deref().unwrap()));
            assert_eq!(e, v4_hash(entity.clone()));
            assert_ne!(e, v4_hash(previous));
            assert_eq!(e.as_deref(), Some(expected));
            previous = entity;
        }
    }

    /// Encodes sequences with indexed entries
    #[test]
    fn encodes_sequences_with_indexed_entries() {
        assert_eq!(
            to_vec(&["This", "is", "an", "array"]).unwrap(),
            br#"a:4:{i:0;s:4:"This";i:1;s:2:"is";i:2;s:2:"an";i:3;s:5:"array";}"#
        );
        assert_eq!(to_vec(&Vec::<u8>::new()).unwrap(), b"a:0:{}");
        assert_eq!(
            to_vec(&(true, -3, 0.5, 'é', ())).unwrap(),
            "a:5:{i:0;b:1;i:1;i:-3;i:2;d:0.5;i:3;s:2:\"é\";i:4;N;}".as_bytes()
        );
        assert_eq!(
            to_vec(&[f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1.0]).unwrap(),
            b"a:4:{i:0;d:INF;i:1;d:-INF;i:2;d:NAN;i:3;d:1;}"
        );
    }

    /// Encodes maps with integer and string keys
    #[test]
    fn encodes_maps_with_integer_and_string_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        assert_eq!(to_vec(&map).unwrap(), br#"a:2:{s:1:"a";i:1;s:1:"b";i:2;}"#);

        let map = BTreeMap::from([(7u16, vec![Some("x"), None])]);
        assert_eq!(
            to_vec(&map).unwrap(),
            br#"a:1:{i:7;a:2:{i:0;s:1:"x";i:1;N;}}"#
        );

        let map = BTreeMap::from([(vec![1], "nested key")]);
        assert_eq!(to_vec(&map), Err(Error::KeyMustBeScalar));
    }

    /// Encodes structs as named objects and enums by variant
    #[test]
    fn encodes_structs_as_named_objects_and_enums_by_variant() {
        let p = Point {
            x: 1,
            y: None,
            label: None,
        };
        assert_eq!(
            to_vec(&p).unwrap(),
            br#"O:5:"Point":2:{s:1:"x";i:1;s:1:"y";N;}"#
        );

        assert_eq!(to_vec(&Shape::Empty).unwrap(), br#"E:11:"Shape:Empty";"#);
        assert_eq!(
            to_vec(&Shape::Circle(2.5)).unwrap(),
            br#"a:1:{s:6:"Circle";d:2.5;}"#
        );
        assert_eq!(
            to_vec(&Shape::Line(1, 2)).unwrap(),
            br#"a:1:{s:4:"Line";a:2:{i:0;i:1;i:1;i:2;}}"#
        );
        assert_eq!(
            to_vec(&Shape::Rect { w: 3, h: 4 }).unwrap(),
            br#"a:1:{s:4:"Rect";a:2:{s:1:"w";i:3;s:1:"h";i:4;}}"#
        );
    }

    /// Keeps top-level scalars in their textual form
    #[test]
    fn keeps_top_level_scalars_in_their_textual_form() {
        assert_eq!(
            to_entity("This is a fairly long string.").unwrap(),
            Entity::from("This is a fairly long string.")
        );
        assert_eq!(to_entity(&Some(42)).unwrap(), Entity::from("42"));
        assert_eq!(to_entity(&true).unwrap(), Entity::from("1"));
        assert_eq!(to_entity(&false).unwrap(), Entity::Empty);
        assert_eq!(to_entity(&None::<u8>).unwrap(), Entity::Empty);
        assert_eq!(to_entity(&()).unwrap(), Entity::Empty);
        assert_eq!(to_entity(&Shape::Empty).unwrap(), Entity::from("Empty"));
        assert_eq!(
            v4_hash_serialize("This is a different string.").unwrap(),
            v4_hash("This is a different string.")
        );
        assert!(matches!(
            to_entity(&Shape::Circle(1.0)).unwrap(),
            Entity::Structured(_)
        ));
    }

    /// Hashes falsy top-level scalars as the nil UUID
    #[test]
    fn hashes_falsy_top_level_scalars_as_the_nil_uuid() {
        let nil = Some(crate::Uuid::NIL.to_string());
        for e in [
            to_entity(&0).unwrap(),
            to_entity(&0u64).unwrap(),
            to_entity(&0.0).unwrap(),
            to_entity(&-0.0f32).unwrap(),
            to_entity("0").unwrap(),
            to_entity(&'0').unwrap(),
            to_entity(&Some(0)).unwrap(),
            to_entity(&false).unwrap(),
        ] {
            assert_eq!(e, Entity::Empty);
            assert_eq!(v4_hash(e), nil);
        }
        assert_eq!(v4_hash_serialize(&0).unwrap(), nil);

        assert_eq!(to_entity(&1).unwrap(), Entity::from("1"));
        assert_eq!(to_entity(&0.5).unwrap(), Entity::from("0.5"));
        assert_eq!(to_entity(&-1).unwrap(), Entity::from("-1"));

        // compound values are encoded even when empty or made of zeros
        let empty: [u8; 0] = [];
        assert_eq!(to_entity(&empty).unwrap(), Entity::Structured(b"a:0:{}".to_vec()));
        assert_eq!(
            to_entity(&[0]).unwrap(),
            Entity::Structured(b"a:1:{i:0;i:0;}".to_vec())
        );
        assert_ne!(v4_hash_serialize(&empty).unwrap(), nil);
    }

    /// Differs between structurally different values
    #[test]
    fn differs_between_structurally_different_values() {
        let a = v4_hash_serialize(&["a", "b"]).unwrap();
        let b = v4_hash_serialize(&["b", "a"]).unwrap();
        let c = v4_hash_serialize(&("a", "b", ())).unwrap();
        let d = v4_hash_serialize(&BTreeMap::from([(0, "a"), (1, "b")])).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        // a list and a map with the same integer keys share one encoding
        assert_eq!(a, d);
        assert_eq!(a, v4_hash_serialize(&vec!["a", "b"]).unwrap());
    }
}
