//! Coercion of dynamic cell values into the types callers ask for.

use crate::error::{Error, Result};
use crate::object::{ArrayValue, ObjectValue};
use crate::text;
use indexmap::IndexMap;
use nervusdb_cursor_api::{
    NodeValue, PathElementRef, PathValue, PropertyValue, RelationshipValue, TypedArray, Value,
};

/// Conversion from a raw cell value into a getter's return type.
///
/// Implementations decide what a null cell becomes; the adapter records
/// nullness separately for `was_null`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

fn integral(value: &Value, to: &'static str) -> Result<i64> {
    match value {
        Value::Null => Ok(0),
        Value::Int(i) => Ok(*i),
        // Only whole floats inside the i64 range convert; anything else would truncate.
        Value::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Ok(*f as i64)
        }
        other => Err(Error::conversion(other.kind_name(), to)),
    }
}

fn floating(value: &Value, to: &'static str) -> Result<f64> {
    match value {
        Value::Null => Ok(0.0),
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(Error::conversion(other.kind_name(), to)),
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        integral(value, "i64")
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self> {
        let wide = integral(value, "i32")?;
        i32::try_from(wide).map_err(|_| Error::conversion(value.kind_name(), "i32"))
    }
}

impl FromValue for i16 {
    fn from_value(value: &Value) -> Result<Self> {
        let wide = integral(value, "i16")?;
        i16::try_from(wide).map_err(|_| Error::conversion(value.kind_name(), "i16"))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        floating(value, "f64")
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        floating(value, "f32").map(|f| f as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            other => Err(Error::conversion(other.kind_name(), "bool")),
        }
    }
}

/// Null cells have no text and fail here; read them as `Option<String>`.
impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(float_text(*f)),
            Value::String(s) => Ok(s.clone()),
            Value::Node(n) => text::node_text(n),
            Value::Relationship(r) => text::relationship_text(r),
            Value::Path(p) => text::path_text(p),
            Value::Null | Value::Array(_) => Err(Error::conversion(value.kind_name(), "String")),
        }
    }
}

impl FromValue for ObjectValue {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(to_object(value))
    }
}

impl FromValue for ArrayValue {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(a) => Ok(ArrayValue::new(a.clone())),
            other => Err(Error::conversion(other.kind_name(), "ArrayValue")),
        }
    }
}

/// Shortest round-trip form, always with a fractional part (`2.0`, `1.6`,
/// `1.0e300`). Non-finite values render as `NaN`, `inf` and `-inf`.
pub fn float_text(f: f64) -> String {
    let text = format!("{f:?}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !mantissa.contains('.') => format!("{mantissa}.0e{exp}"),
        _ => text,
    }
}

/// Generic representation of any cell value.
pub fn to_object(value: &Value) -> ObjectValue {
    match value {
        Value::Null => ObjectValue::Null,
        Value::Bool(b) => ObjectValue::Bool(*b),
        Value::Int(i) => ObjectValue::Int(*i),
        Value::Float(f) => ObjectValue::Float(*f),
        Value::String(s) => ObjectValue::String(s.clone()),
        Value::Array(a) => array_to_object(a),
        Value::Node(n) => node_to_object(n),
        Value::Relationship(r) => relationship_to_object(r),
        Value::Path(p) => path_to_object(p),
    }
}

/// Identity entries (`_id`, `_labels`) take precedence over properties with
/// the same key.
pub fn node_to_object(node: &NodeValue) -> ObjectValue {
    let mut map = IndexMap::with_capacity(2 + node.properties.len());
    map.insert("_id".to_string(), ObjectValue::Int(node.id));
    map.insert(
        "_labels".to_string(),
        ObjectValue::List(node.labels.iter().cloned().map(ObjectValue::String).collect()),
    );
    for (k, v) in &node.properties {
        map.entry(k.clone()).or_insert_with(|| property_to_object(v));
    }
    ObjectValue::Map(map)
}

/// Identity entries (`_id`, `_type`, `_startId`, `_endId`) take precedence
/// over properties with the same key.
pub fn relationship_to_object(rel: &RelationshipValue) -> ObjectValue {
    let mut map = IndexMap::with_capacity(4 + rel.properties.len());
    map.insert("_id".to_string(), ObjectValue::Int(rel.id));
    map.insert("_type".to_string(), ObjectValue::String(rel.rel_type.clone()));
    map.insert("_startId".to_string(), ObjectValue::Int(rel.start_id));
    map.insert("_endId".to_string(), ObjectValue::Int(rel.end_id));
    for (k, v) in &rel.properties {
        map.entry(k.clone()).or_insert_with(|| property_to_object(v));
    }
    ObjectValue::Map(map)
}

pub fn path_to_object(path: &PathValue) -> ObjectValue {
    ObjectValue::List(
        path.elements()
            .map(|element| match element {
                PathElementRef::Node(n) => node_to_object(n),
                PathElementRef::Relationship(r) => relationship_to_object(r),
            })
            .collect(),
    )
}

fn property_to_object(value: &PropertyValue) -> ObjectValue {
    match value {
        PropertyValue::Null => ObjectValue::Null,
        PropertyValue::Bool(b) => ObjectValue::Bool(*b),
        PropertyValue::Int(i) => ObjectValue::Int(*i),
        PropertyValue::Float(f) => ObjectValue::Float(*f),
        PropertyValue::String(s) => ObjectValue::String(s.clone()),
        PropertyValue::Array(a) => array_to_object(a),
    }
}

fn array_to_object(array: &TypedArray) -> ObjectValue {
    let items = match array {
        TypedArray::String(v) => v.iter().cloned().map(ObjectValue::String).collect(),
        TypedArray::Int(v) => v.iter().copied().map(ObjectValue::Int).collect(),
        TypedArray::Bool(v) => v.iter().copied().map(ObjectValue::Bool).collect(),
        TypedArray::Float(v) => v.iter().copied().map(ObjectValue::Float).collect(),
    };
    ObjectValue::List(items)
}
