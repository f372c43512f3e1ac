//! Untyped views of cell values handed to callers.

use indexmap::IndexMap;
use nervusdb_cursor_api::TypedArray;
use serde::ser::{SerializeMap, SerializeSeq};

/// Generic representation of a cell: scalars, sequences and string-keyed maps.
///
/// Nodes and relationships become maps with reserved `_`-prefixed keys and
/// paths become sequences of those maps.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ObjectValue>),
    Map(IndexMap<String, ObjectValue>),
}

impl ObjectValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ObjectValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ObjectValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ObjectValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ObjectValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ObjectValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ObjectValue]> {
        match self {
            ObjectValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, ObjectValue>> {
        match self {
            ObjectValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Map entry lookup; `None` for non-map values.
    pub fn get(&self, key: &str) -> Option<&ObjectValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl From<&str> for ObjectValue {
    fn from(s: &str) -> Self {
        ObjectValue::String(s.to_string())
    }
}

impl From<String> for ObjectValue {
    fn from(s: String) -> Self {
        ObjectValue::String(s)
    }
}

impl From<i64> for ObjectValue {
    fn from(i: i64) -> Self {
        ObjectValue::Int(i)
    }
}

impl From<f64> for ObjectValue {
    fn from(f: f64) -> Self {
        ObjectValue::Float(f)
    }
}

impl From<bool> for ObjectValue {
    fn from(b: bool) -> Self {
        ObjectValue::Bool(b)
    }
}

impl serde::Serialize for ObjectValue {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ObjectValue::Null => serializer.serialize_none(),
            ObjectValue::Bool(b) => serializer.serialize_bool(*b),
            ObjectValue::Int(i) => serializer.serialize_i64(*i),
            ObjectValue::Float(f) => serializer.serialize_f64(*f),
            ObjectValue::String(s) => serializer.serialize_str(s),
            ObjectValue::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ObjectValue::Map(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    ser.serialize_entry(k, v)?;
                }
                ser.end()
            }
        }
    }
}

/// Element kind of an [`ArrayValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    String,
    Long,
    Boolean,
    Double,
}

/// Accessor over a typed array cell.
///
/// Exposes the backing array as its own element kind only; asking for a
/// different kind yields `None` rather than a converted copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    inner: TypedArray,
}

impl ArrayValue {
    pub fn new(inner: TypedArray) -> Self {
        Self { inner }
    }

    pub fn kind(&self) -> ArrayKind {
        match self.inner {
            TypedArray::String(_) => ArrayKind::String,
            TypedArray::Int(_) => ArrayKind::Long,
            TypedArray::Bool(_) => ArrayKind::Boolean,
            TypedArray::Float(_) => ArrayKind::Double,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match &self.inner {
            TypedArray::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_longs(&self) -> Option<&[i64]> {
        match &self.inner {
            TypedArray::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_booleans(&self) -> Option<&[bool]> {
        match &self.inner {
            TypedArray::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_doubles(&self) -> Option<&[f64]> {
        match &self.inner {
            TypedArray::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_inner(self) -> TypedArray {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrayKind, ArrayValue, ObjectValue};
    use indexmap::IndexMap;
    use nervusdb_cursor_api::TypedArray;

    #[test]
    fn array_accessor_never_crosses_kinds() {
        let arr = ArrayValue::new(TypedArray::Int(vec![5, 10, 99]));
        assert_eq!(arr.kind(), ArrayKind::Long);
        assert_eq!(arr.as_longs(), Some(&[5_i64, 10, 99][..]));
        assert_eq!(arr.as_doubles(), None);
        assert_eq!(arr.as_strings(), None);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.into_inner(), TypedArray::Int(vec![5, 10, 99]));
    }

    #[test]
    fn object_serializes_map_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("_id".to_string(), ObjectValue::Int(1));
        map.insert("b".to_string(), ObjectValue::from("x"));
        map.insert("a".to_string(), ObjectValue::List(vec![ObjectValue::Bool(true)]));
        let json = serde_json::to_string(&ObjectValue::Map(map)).unwrap();
        assert_eq!(json, r#"{"_id":1,"b":"x","a":[true]}"#);
    }

    #[test]
    fn get_reads_map_entries_only() {
        let mut map = IndexMap::new();
        map.insert("k".to_string(), ObjectValue::Float(2.5));
        let obj = ObjectValue::Map(map);
        assert_eq!(obj.get("k").and_then(ObjectValue::as_f64), Some(2.5));
        assert_eq!(ObjectValue::Int(3).get("k"), None);
    }
}
