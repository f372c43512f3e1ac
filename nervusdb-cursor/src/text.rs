//! Canonical textual form of graph values.
//!
//! Node:         `{"id":1, "labels":["a", "b"], "k":v, ...}`
//! Relationship: `{"id":1, "type":"t", "startId":1, "endId":2, "k":v, ...}`
//! Path:         `[<node>, <relationship>, <node>, ...]`
//!
//! Property entries follow the order of the underlying property map.

use crate::error::Result;
use nervusdb_cursor_api::{NodeValue, PathElementRef, PathValue, RelationshipValue};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::io;

/// JSON with `", "` between entries and no other whitespace.
struct CanonicalFormatter;

impl serde_json::ser::Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

struct NodeText<'a>(&'a NodeValue);

impl Serialize for NodeText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let node = self.0;
        let mut map = serializer.serialize_map(Some(2 + node.properties.len()))?;
        map.serialize_entry("id", &node.id)?;
        map.serialize_entry("labels", &node.labels)?;
        for (k, v) in &node.properties {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RelationshipText<'a>(&'a RelationshipValue);

impl Serialize for RelationshipText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rel = self.0;
        let mut map = serializer.serialize_map(Some(4 + rel.properties.len()))?;
        map.serialize_entry("id", &rel.id)?;
        map.serialize_entry("type", &rel.rel_type)?;
        map.serialize_entry("startId", &rel.start_id)?;
        map.serialize_entry("endId", &rel.end_id)?;
        for (k, v) in &rel.properties {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct PathText<'a>(&'a PathValue);

impl Serialize for PathText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let path = self.0;
        let mut seq = serializer.serialize_seq(Some(2 * path.len() + 1))?;
        for element in path.elements() {
            match element {
                PathElementRef::Node(n) => seq.serialize_element(&NodeText(n))?,
                PathElementRef::Relationship(r) => seq.serialize_element(&RelationshipText(r))?,
            }
        }
        seq.end()
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

pub fn node_text(node: &NodeValue) -> Result<String> {
    render(&NodeText(node))
}

pub fn relationship_text(rel: &RelationshipValue) -> Result<String> {
    render(&RelationshipText(rel))
}

pub fn path_text(path: &PathValue) -> Result<String> {
    render(&PathText(path))
}
