//! Values, records and the cursor trait shared between a graph query engine
//! and the result-set adapter built on top of it.

use indexmap::IndexMap;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;

/// Identity of a node as reported by the query engine.
pub type NodeId = i64;

/// Identity of a relationship as reported by the query engine.
pub type RelationshipId = i64;

/// Property map of a node or relationship.
///
/// Iteration order is the order in which the engine produced the entries.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// Homogeneous array value. Elements are never coerced across kinds.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypedArray {
    String(Vec<String>),
    Int(Vec<i64>),
    Bool(Vec<bool>),
    Float(Vec<f64>),
}

impl TypedArray {
    pub fn len(&self) -> usize {
        match self {
            TypedArray::String(v) => v.len(),
            TypedArray::Int(v) => v.len(),
            TypedArray::Bool(v) => v.len(),
            TypedArray::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Values that may be stored as node or relationship properties.
///
/// Graph-structured values are not valid properties.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(TypedArray),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Int(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<PropertyValue> for Value {
    fn from(p: PropertyValue) -> Self {
        match p {
            PropertyValue::Null => Value::Null,
            PropertyValue::Bool(b) => Value::Bool(b),
            PropertyValue::Int(i) => Value::Int(i),
            PropertyValue::Float(f) => Value::Float(f),
            PropertyValue::String(s) => Value::String(s),
            PropertyValue::Array(a) => Value::Array(a),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeValue {
    pub id: NodeId,
    pub labels: Vec<String>,
    pub properties: PropertyMap,
}

impl NodeValue {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipValue {
    pub id: RelationshipId,
    pub rel_type: String,
    pub start_id: NodeId,
    pub end_id: NodeId,
    pub properties: PropertyMap,
}

impl RelationshipValue {
    pub fn new(
        id: RelationshipId,
        rel_type: impl Into<String>,
        start_id: NodeId,
        end_id: NodeId,
    ) -> Self {
        Self {
            id,
            rel_type: rel_type.into(),
            start_id,
            end_id,
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// One step of a path, borrowed from a [`PathValue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElementRef<'a> {
    Node(&'a NodeValue),
    Relationship(&'a RelationshipValue),
}

/// Owned path step, used to build a [`PathValue`] from a flat sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    Node(NodeValue),
    Relationship(RelationshipValue),
}

/// Returned when a flat element sequence is not a valid path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPath {
    pub position: usize,
    pub reason: &'static str,
}

impl fmt::Display for InvalidPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid path at element {}: {}", self.position, self.reason)
    }
}

impl std::error::Error for InvalidPath {}

/// A path alternating node, relationship, node, ... that starts and ends on a node.
///
/// `nodes.len() == relationships.len() + 1` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PathValue {
    nodes: Vec<NodeValue>,
    relationships: Vec<RelationshipValue>,
}

impl PathValue {
    /// A zero-length path made of a single node.
    pub fn new(start: NodeValue) -> Self {
        Self {
            nodes: vec![start],
            relationships: Vec::new(),
        }
    }

    /// Extends the path by one hop.
    pub fn push(&mut self, rel: RelationshipValue, node: NodeValue) {
        self.relationships.push(rel);
        self.nodes.push(node);
    }

    pub fn with_hop(mut self, rel: RelationshipValue, node: NodeValue) -> Self {
        self.push(rel, node);
        self
    }

    /// Builds a path from its flat element sequence, checking the alternation.
    pub fn from_elements(elements: Vec<PathElement>) -> Result<Self, InvalidPath> {
        let mut iter = elements.into_iter().enumerate();
        let mut path = match iter.next() {
            Some((_, PathElement::Node(n))) => PathValue::new(n),
            Some((pos, PathElement::Relationship(_))) => {
                return Err(InvalidPath {
                    position: pos,
                    reason: "path must start with a node",
                });
            }
            None => {
                return Err(InvalidPath {
                    position: 0,
                    reason: "path must contain at least one node",
                });
            }
        };

        while let Some((pos, element)) = iter.next() {
            let rel = match element {
                PathElement::Relationship(r) => r,
                PathElement::Node(_) => {
                    return Err(InvalidPath {
                        position: pos,
                        reason: "expected a relationship",
                    });
                }
            };
            match iter.next() {
                Some((_, PathElement::Node(n))) => path.push(rel, n),
                Some((pos, PathElement::Relationship(_))) => {
                    return Err(InvalidPath {
                        position: pos,
                        reason: "expected a node",
                    });
                }
                None => {
                    return Err(InvalidPath {
                        position: pos,
                        reason: "path must end with a node",
                    });
                }
            }
        }
        Ok(path)
    }

    pub fn nodes(&self) -> &[NodeValue] {
        &self.nodes
    }

    pub fn relationships(&self) -> &[RelationshipValue] {
        &self.relationships
    }

    /// Number of relationships in the path.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Start node, relationship, node, ... in path order.
    pub fn elements(&self) -> impl Iterator<Item = PathElementRef<'_>> + '_ {
        let rels = self
            .relationships
            .iter()
            .map(PathElementRef::Relationship)
            .map(Some)
            .chain(std::iter::once(None));
        self.nodes
            .iter()
            .map(PathElementRef::Node)
            .zip(rels)
            .flat_map(|(node, rel)| std::iter::once(node).chain(rel))
    }
}

/// A dynamic cell value produced by the query engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(TypedArray),
    Node(NodeValue),
    Relationship(RelationshipValue),
    Path(PathValue),
}

impl Value {
    /// Stable kind name, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Node(_) => "NODE",
            Value::Relationship(_) => "RELATIONSHIP",
            Value::Path(_) => "PATH",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<TypedArray> for Value {
    fn from(a: TypedArray) -> Self {
        Value::Array(a)
    }
}

impl From<NodeValue> for Value {
    fn from(n: NodeValue) -> Self {
        Value::Node(n)
    }
}

impl From<RelationshipValue> for Value {
    fn from(r: RelationshipValue) -> Self {
        Value::Relationship(r)
    }
}

impl From<PathValue> for Value {
    fn from(p: PathValue) -> Self {
        Value::Path(p)
    }
}

/// One row of a query result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    // Small row: linear search is fine.
    cols: Vec<(String, Value)>,
}

impl Record {
    /// Pairs `keys` with `values` positionally.
    pub fn from_values(keys: &[String], values: Vec<Value>) -> Self {
        Self {
            cols: keys.iter().cloned().zip(values).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cols.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Value at a 0-based column position.
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.cols.get(index).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    pub fn columns(&self) -> &[(String, Value)] {
        &self.cols
    }
}

/// Forward-only record source produced by a query engine.
///
/// `keys()` is fixed for the lifetime of the cursor and every record carries
/// the same labels in the same order.
pub trait QueryCursor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ordered, duplicate-free column labels.
    fn keys(&self) -> &[String];

    /// Pulls the next record, blocking until one is available.
    ///
    /// Returns `Ok(None)` once the cursor is exhausted.
    fn next_record(&mut self) -> Result<Option<Record>, Self::Error>;

    /// Releases engine-side resources held by the cursor.
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// A cursor over records that are already materialized.
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    keys: Vec<String>,
    records: VecDeque<Record>,
    close_calls: usize,
}

impl MemoryCursor {
    pub fn new(keys: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            keys,
            records: records.into(),
            close_calls: 0,
        }
    }

    /// Builds records from positional value rows.
    pub fn from_rows<K, I>(keys: I, rows: Vec<Vec<Value>>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let records = rows
            .into_iter()
            .map(|values| Record::from_values(&keys, values))
            .collect();
        Self::new(keys, records)
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls
    }
}

impl QueryCursor for MemoryCursor {
    type Error = Infallible;

    fn keys(&self) -> &[String] {
        &self.keys
    }

    fn next_record(&mut self) -> Result<Option<Record>, Self::Error> {
        Ok(self.records.pop_front())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.close_calls += 1;
        self.records.clear();
        Ok(())
    }
}
