//! # NervusDB Cursor
//!
//! Tabular, typed access to graph query results.
//!
//! A graph query yields records whose cells may hold scalars, typed arrays,
//! nodes, relationships or whole paths. [`ResultSet`] wraps the engine's
//! forward-only [`QueryCursor`] and exposes what a tabular consumer expects:
//!
//! - column addressing by label or 1-based ordinal ([`ColumnRef`]),
//! - fixed-type getters (`get_int`, `get_string`, ...) with strict coercion,
//! - a generic [`ObjectValue`] view where nodes and relationships become maps
//!   and paths become sequences of maps,
//! - a canonical text form for graph values when a string is requested.
//!
//! ```
//! use nervusdb_cursor::{MemoryCursor, NodeValue, ResultSet, Value};
//!
//! let node = NodeValue::new(1)
//!     .with_label("Person")
//!     .with_property("name", "alice");
//! let mut rs = ResultSet::new(MemoryCursor::from_rows(["n"], vec![vec![Value::Node(node)]]));
//!
//! rs.advance()?;
//! assert_eq!(
//!     rs.get_string("n")?.as_deref(),
//!     Some(r#"{"id":1, "labels":["Person"], "name":"alice"}"#)
//! );
//! let obj = rs.get_object(1)?;
//! assert_eq!(obj.get("_id").and_then(|v| v.as_i64()), Some(1));
//! # Ok::<(), nervusdb_cursor::Error>(())
//! ```

mod columns;
pub mod convert;
mod error;
mod object;
mod options;
mod result_set;
mod text;

pub use columns::{ColumnDirectory, ColumnRef};
pub use convert::FromValue;
pub use error::{Error, Result};
pub use nervusdb_cursor_api as api;
pub use nervusdb_cursor_api::{
    MemoryCursor, NodeValue, PathValue, PropertyValue, QueryCursor, Record, RelationshipValue,
    TypedArray, Value,
};
pub use object::{ArrayKind, ArrayValue, ObjectValue};
pub use options::{Concurrency, Holdability, ResultSetOptions, ScrollType};
pub use result_set::{ResultSet, ResultSetMetadata};
