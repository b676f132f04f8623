//! Serde bridge: build [`Template`] trees from `Serialize` types.
//!
//! The renderer's own encoding path never goes through serde (streamed
//! output is produced directly by the structure encoder and sequence
//! streamer), but callers rarely hold hand-built trees: row structs come out
//! of a data layer with `#[derive(Serialize)]` on them. [`to_template`]
//! converts any such value into a [`Template`] so it can sit in a document
//! skeleton or be the value of a streamed record.
//!
//! ## Usage
//!
//! ```rust
//! use json_drip::{to_template, Template};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Article {
//!     id: u32,
//!     title: String,
//! }
//!
//! let article = Article { id: 7, title: "streams".to_string() };
//! let value: Template = to_template(&article).unwrap();
//! assert!(value.is_object());
//! ```

use crate::{Error, Number, Result, Template, TemplateMap};
use serde::{ser, Serialize};

/// Converts any `T: Serialize` to a [`Template`].
///
/// Enum variants map the way JSON serializers conventionally do: unit
/// variants become their name as a string, data-carrying variants become a
/// single-member object `{"Variant": ...}`. Integer map keys render as their
/// decimal string form, the same rendering streamed index keys get in object
/// shape.
///
/// # Errors
///
/// Returns an error for map keys that are neither strings nor integers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_template<T: Serialize + ?Sized>(value: &T) -> Result<Template> {
    value.serialize(TemplateSerializer)
}

/// Serializer producing a [`Template`] tree instead of text.
pub struct TemplateSerializer;

pub struct SerializeVec {
    vec: Vec<Template>,
}

pub struct SerializeMap {
    map: TemplateMap,
    current_key: Option<String>,
}

pub struct SerializeVariantVec {
    variant: &'static str,
    vec: Vec<Template>,
}

pub struct SerializeVariantMap {
    variant: &'static str,
    map: TemplateMap,
}

impl ser::Serializer for TemplateSerializer {
    type Ok = Template;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariantVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeVariantMap;

    fn serialize_bool(self, v: bool) -> Result<Template> {
        Ok(Template::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Template> {
        Ok(Template::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Template> {
        if v <= i64::MAX as u64 {
            Ok(Template::Number(Number::Integer(v as i64)))
        } else {
            Ok(Template::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Template> {
        Ok(Template::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Template> {
        Ok(Template::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Template> {
        Ok(Template::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Template> {
        Ok(Template::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Template> {
        let vec = v
            .iter()
            .map(|&b| Template::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Template::Array(vec))
    }

    fn serialize_none(self) -> Result<Template> {
        Ok(Template::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Template>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Template> {
        Ok(Template::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Template> {
        Ok(Template::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Template> {
        Ok(Template::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Template>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Template>
    where
        T: ?Sized + Serialize,
    {
        let mut map = TemplateMap::with_capacity(1);
        map.insert(variant.to_string(), value.serialize(TemplateSerializer)?);
        Ok(Template::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariantVec> {
        Ok(SerializeVariantVec {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVariantMap> {
        Ok(SerializeVariantMap {
            variant,
            map: TemplateMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: TemplateMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Template;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        Ok(Template::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Template;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        Ok(Template::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Template;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        Ok(Template::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVariantVec {
    type Ok = Template;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        let mut map = TemplateMap::with_capacity(1);
        map.insert(self.variant.to_string(), Template::Array(self.vec));
        Ok(Template::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Template;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_template(key)? {
            Template::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            Template::Number(Number::Integer(i)) => {
                self.current_key = Some(i.to_string());
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings or integers")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        Ok(Template::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Template;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        Ok(Template::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeVariantMap {
    type Ok = Template;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_template(value)?);
        Ok(())
    }

    fn end(self) -> Result<Template> {
        let mut map = TemplateMap::with_capacity(1);
        map.insert(self.variant.to_string(), Template::Object(self.map));
        Ok(Template::Object(map))
    }
}
