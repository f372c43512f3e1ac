//! Label and ordinal resolution for the columns of one result.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Addresses a column either by 1-based ordinal or by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Ordinal(i64),
    Label(String),
}

impl From<i32> for ColumnRef {
    fn from(ordinal: i32) -> Self {
        ColumnRef::Ordinal(i64::from(ordinal))
    }
}

impl From<i64> for ColumnRef {
    fn from(ordinal: i64) -> Self {
        ColumnRef::Ordinal(ordinal)
    }
}

impl From<usize> for ColumnRef {
    fn from(ordinal: usize) -> Self {
        ColumnRef::Ordinal(i64::try_from(ordinal).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ColumnRef {
    fn from(label: &str) -> Self {
        ColumnRef::Label(label.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(label: String) -> Self {
        ColumnRef::Label(label)
    }
}

impl From<&String> for ColumnRef {
    fn from(label: &String) -> Self {
        ColumnRef::Label(label.clone())
    }
}

/// Ordered column labels of a result with label -> ordinal lookup.
///
/// Labels are case-sensitive. Should the engine ever report a label twice,
/// lookups resolve to its first position.
#[derive(Debug, Clone, Default)]
pub struct ColumnDirectory {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnDirectory {
    pub fn new(labels: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(labels.len());
        for (idx, label) in labels.iter().enumerate() {
            positions.entry(label.clone()).or_insert(idx);
        }
        Self {
            labels: labels.to_vec(),
            positions,
        }
    }

    /// A directory with no columns; every resolution fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// 1-based ordinal of `label`.
    pub fn ordinal_of(&self, label: &str) -> Result<usize> {
        self.positions
            .get(label)
            .map(|idx| idx + 1)
            .ok_or_else(|| Error::UnknownColumn(label.to_string()))
    }

    /// Label of a 1-based ordinal.
    pub fn label_of(&self, ordinal: i64) -> Result<&str> {
        let idx = self.index_of_ordinal(ordinal)?;
        Ok(&self.labels[idx])
    }

    /// Resolves a column reference to a 0-based record position.
    pub fn resolve(&self, column: &ColumnRef) -> Result<usize> {
        match column {
            ColumnRef::Label(label) => self.ordinal_of(label).map(|ordinal| ordinal - 1),
            ColumnRef::Ordinal(ordinal) => self.index_of_ordinal(*ordinal),
        }
    }

    fn index_of_ordinal(&self, ordinal: i64) -> Result<usize> {
        let invalid = || Error::InvalidColumnIndex {
            index: ordinal,
            count: self.labels.len(),
        };
        let idx = usize::try_from(ordinal)
            .ok()
            .and_then(|o| o.checked_sub(1))
            .ok_or_else(invalid)?;
        if idx < self.labels.len() {
            Ok(idx)
        } else {
            Err(invalid())
        }
    }
}
