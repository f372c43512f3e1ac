//! Result-set configuration echoed back through the metadata accessors.
//!
//! The integer codes match the constants used by tabular database APIs so
//! callers bridging to such an API can pass them through unchanged.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollType {
    #[default]
    ForwardOnly,
    ScrollInsensitive,
    ScrollSensitive,
}

impl ScrollType {
    pub fn code(self) -> i32 {
        match self {
            ScrollType::ForwardOnly => 1003,
            ScrollType::ScrollInsensitive => 1004,
            ScrollType::ScrollSensitive => 1005,
        }
    }
}

impl TryFrom<i32> for ScrollType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1003 => Ok(ScrollType::ForwardOnly),
            1004 => Ok(ScrollType::ScrollInsensitive),
            1005 => Ok(ScrollType::ScrollSensitive),
            other => Err(Error::Config(format!("unknown scroll type code {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concurrency {
    #[default]
    ReadOnly,
    Updatable,
}

impl Concurrency {
    pub fn code(self) -> i32 {
        match self {
            Concurrency::ReadOnly => 1007,
            Concurrency::Updatable => 1008,
        }
    }
}

impl TryFrom<i32> for Concurrency {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1007 => Ok(Concurrency::ReadOnly),
            1008 => Ok(Concurrency::Updatable),
            other => Err(Error::Config(format!("unknown concurrency code {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holdability {
    HoldCursorsOverCommit,
    #[default]
    CloseCursorsAtCommit,
}

impl Holdability {
    pub fn code(self) -> i32 {
        match self {
            Holdability::HoldCursorsOverCommit => 1,
            Holdability::CloseCursorsAtCommit => 2,
        }
    }
}

impl TryFrom<i32> for Holdability {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Holdability::HoldCursorsOverCommit),
            2 => Ok(Holdability::CloseCursorsAtCommit),
            other => Err(Error::Config(format!("unknown holdability code {other}"))),
        }
    }
}

/// Immutable settings supplied when a result set is created.
///
/// Defaults describe a forward-only, read-only cursor closed at commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSetOptions {
    pub scroll_type: ScrollType,
    pub concurrency: Concurrency,
    pub holdability: Holdability,
}

impl ResultSetOptions {
    pub fn new(scroll_type: ScrollType, concurrency: Concurrency, holdability: Holdability) -> Self {
        Self {
            scroll_type,
            concurrency,
            holdability,
        }
    }

    /// Builds options from raw integer codes.
    pub fn from_codes(scroll_type: i32, concurrency: i32, holdability: i32) -> Result<Self> {
        Ok(Self {
            scroll_type: ScrollType::try_from(scroll_type)?,
            concurrency: Concurrency::try_from(concurrency)?,
            holdability: Holdability::try_from(holdability)?,
        })
    }

    /// Parses options from JSON; missing fields keep their defaults.
    ///
    /// ```
    /// use nervusdb_cursor::{Holdability, ResultSetOptions};
    ///
    /// let opts = ResultSetOptions::from_json(r#"{"holdability":"hold_cursors_over_commit"}"#)?;
    /// assert_eq!(opts.holdability, Holdability::HoldCursorsOverCommit);
    /// # Ok::<(), nervusdb_cursor::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
