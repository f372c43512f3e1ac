//! Forward-only, read-only tabular view over a graph query cursor.

use crate::columns::{ColumnDirectory, ColumnRef};
use crate::convert::FromValue;
use crate::error::{Error, Result};
use crate::object::{ArrayValue, ObjectValue};
use crate::options::{Concurrency, Holdability, ResultSetOptions, ScrollType};
use nervusdb_cursor_api::{MemoryCursor, QueryCursor, Record, Value};
use tracing::{debug, trace, warn};

#[derive(Debug)]
enum Position {
    BeforeFirst,
    OnRow(Record),
    AfterLast,
}

/// Adapts a [`QueryCursor`] to typed, column-addressed getters.
///
/// The adapter owns the cursor and closes it exactly once, either through
/// [`ResultSet::close`] or when dropped. After `close` every operation except
/// `close` and `is_closed` fails with [`Error::CursorClosed`].
///
/// # Example
///
/// ```
/// use nervusdb_cursor::{MemoryCursor, ResultSet, Value};
///
/// let cursor = MemoryCursor::from_rows(
///     ["name", "age"],
///     vec![vec![Value::from("alice"), Value::Int(42)]],
/// );
/// let mut rs = ResultSet::new(cursor);
/// while rs.advance()? {
///     assert_eq!(rs.get_string("name")?.as_deref(), Some("alice"));
///     assert_eq!(rs.get_int(2)?, 42);
/// }
/// rs.close()?;
/// # Ok::<(), nervusdb_cursor::Error>(())
/// ```
#[derive(Debug)]
pub struct ResultSet<C: QueryCursor = MemoryCursor> {
    cursor: Option<C>,
    columns: ColumnDirectory,
    options: ResultSetOptions,
    position: Position,
    row: usize,
    was_null: bool,
    closed: bool,
}

impl ResultSet<MemoryCursor> {
    /// A result set without backing data, exposing only its options.
    ///
    /// It has no columns, `advance` always returns `false`, and every getter
    /// fails column resolution.
    pub fn metadata_only(options: ResultSetOptions) -> Self {
        Self {
            cursor: None,
            columns: ColumnDirectory::empty(),
            options,
            position: Position::BeforeFirst,
            row: 0,
            was_null: false,
            closed: false,
        }
    }
}

impl<C: QueryCursor> ResultSet<C> {
    pub fn new(cursor: C) -> Self {
        Self::with_options(cursor, ResultSetOptions::default())
    }

    pub fn with_options(cursor: C, options: ResultSetOptions) -> Self {
        let columns = ColumnDirectory::new(cursor.keys());
        debug!(columns = columns.len(), "resultset.open");
        Self {
            cursor: Some(cursor),
            columns,
            options,
            position: Position::BeforeFirst,
            row: 0,
            was_null: false,
            closed: false,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::CursorClosed)
        } else {
            Ok(())
        }
    }

    /// Moves to the next record.
    ///
    /// Returns `false` once the cursor is exhausted; from then on the engine
    /// is not asked again. Engine failures are returned as [`Error::Engine`]
    /// and leave the position unchanged.
    pub fn advance(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if matches!(self.position, Position::AfterLast) {
            return Ok(false);
        }
        let Some(cursor) = self.cursor.as_mut() else {
            self.position = Position::AfterLast;
            return Ok(false);
        };
        match cursor.next_record().map_err(Error::engine)? {
            Some(record) => {
                self.row += 1;
                trace!(row = self.row, "resultset.advance");
                self.position = Position::OnRow(record);
                Ok(true)
            }
            None => {
                debug!(rows = self.row, "resultset.exhausted");
                self.position = Position::AfterLast;
                Ok(false)
            }
        }
    }

    /// 1-based ordinal of the column labelled `label`.
    pub fn find_column(&self, label: &str) -> Result<usize> {
        self.ensure_open()?;
        self.columns.ordinal_of(label)
    }

    /// Reads the current record's value at `column`, converted to `T`.
    ///
    /// Records whether the raw value was null for [`ResultSet::was_null`].
    /// A null cell read as `String` fails; read it as `Option<String>`.
    pub fn get<T: FromValue>(&mut self, column: impl Into<ColumnRef>) -> Result<T> {
        self.ensure_open()?;
        let idx = self.columns.resolve(&column.into())?;
        let Position::OnRow(record) = &self.position else {
            return Err(Error::NoCurrentRow);
        };
        let value = record.value_at(idx).unwrap_or(&Value::Null);
        let out = T::from_value(value)?;
        let is_null = value.is_null();
        self.was_null = is_null;
        Ok(out)
    }

    pub fn get_string(&mut self, column: impl Into<ColumnRef>) -> Result<Option<String>> {
        self.get(column)
    }

    pub fn get_short(&mut self, column: impl Into<ColumnRef>) -> Result<i16> {
        self.get(column)
    }

    pub fn get_int(&mut self, column: impl Into<ColumnRef>) -> Result<i32> {
        self.get(column)
    }

    pub fn get_long(&mut self, column: impl Into<ColumnRef>) -> Result<i64> {
        self.get(column)
    }

    pub fn get_float(&mut self, column: impl Into<ColumnRef>) -> Result<f32> {
        self.get(column)
    }

    pub fn get_double(&mut self, column: impl Into<ColumnRef>) -> Result<f64> {
        self.get(column)
    }

    pub fn get_boolean(&mut self, column: impl Into<ColumnRef>) -> Result<bool> {
        self.get(column)
    }

    /// Generic representation: scalars as-is, nodes and relationships as
    /// maps, paths as sequences of maps.
    pub fn get_object(&mut self, column: impl Into<ColumnRef>) -> Result<ObjectValue> {
        self.get(column)
    }

    pub fn get_array(&mut self, column: impl Into<ColumnRef>) -> Result<Option<ArrayValue>> {
        self.get(column)
    }

    /// Whether the value read by the last successful getter was null.
    pub fn was_null(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.was_null)
    }

    /// Closes the result set and releases the underlying cursor.
    ///
    /// Closing an already closed result set does nothing. If the engine
    /// fails to release its cursor the error is returned, but the result set
    /// is closed regardless.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.position = Position::AfterLast;
        debug!(rows = self.row, "resultset.close");
        if let Some(mut cursor) = self.cursor.take() {
            cursor.close().map_err(Error::engine)?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of the current record, starting at 1; 0 when not on a record.
    pub fn row(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(match self.position {
            Position::OnRow(_) => self.row,
            _ => 0,
        })
    }

    pub fn is_before_first(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(matches!(self.position, Position::BeforeFirst))
    }

    pub fn is_after_last(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(matches!(self.position, Position::AfterLast))
    }

    pub fn is_first(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(matches!(self.position, Position::OnRow(_)) && self.row == 1)
    }

    pub fn column_count(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.columns.len())
    }

    pub fn metadata(&self) -> Result<ResultSetMetadata> {
        self.ensure_open()?;
        Ok(ResultSetMetadata {
            columns: self.columns.clone(),
        })
    }

    pub fn options(&self) -> Result<ResultSetOptions> {
        self.ensure_open()?;
        Ok(self.options)
    }

    pub fn scroll_type(&self) -> Result<ScrollType> {
        self.ensure_open()?;
        Ok(self.options.scroll_type)
    }

    pub fn concurrency(&self) -> Result<Concurrency> {
        self.ensure_open()?;
        Ok(self.options.concurrency)
    }

    pub fn holdability(&self) -> Result<Holdability> {
        self.ensure_open()?;
        Ok(self.options.holdability)
    }
}

impl<C: QueryCursor> Drop for ResultSet<C> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(error = %err, "resultset.drop.close_failed");
        }
    }
}

/// Column description of a result, detached from the result set itself.
#[derive(Debug, Clone)]
pub struct ResultSetMetadata {
    columns: ColumnDirectory,
}

impl ResultSetMetadata {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Label of a 1-based column ordinal.
    pub fn column_label(&self, ordinal: impl Into<i64>) -> Result<&str> {
        self.columns.label_of(ordinal.into())
    }

    pub fn column_labels(&self) -> &[String] {
        self.columns.labels()
    }
}
