//! Grid positions on a board.
//!
//! A position is identified electrically by its canonical string form
//! `"<column>,<row>"`. Two positions name the same point iff those strings
//! match.

use core::fmt;
use core::str::FromStr;

use crate::error::BbError;

/// A hole on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Canonical string form used for electrical identity.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// True when both positions denote the same electrical point.
    pub fn same_point(&self, other: &Position) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

impl FromStr for Position {
    type Err = BbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| BbError::InvalidPosition {
            input: s.to_string(),
            reason,
        };

        let (column, row) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected '<column>,<row>'"))?;
        let column = column
            .trim()
            .parse()
            .map_err(|_| invalid("column is not an integer"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| invalid("row is not an integer"))?;

        Ok(Position { column, row })
    }
}

impl From<(i32, i32)> for Position {
    fn from((column, row): (i32, i32)) -> Self {
        Position::new(column, row)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
