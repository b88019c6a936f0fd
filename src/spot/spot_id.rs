use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LotError;

const DELIMITER: char = '-';

/// Canonical address of a spot: `"{floor}-{row}-{column}"`, all 1-indexed.
///
/// Parsing is strict: exactly three components, each an unsigned integer.
/// Bounds are not checked here; the lot checks them against its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpotId {
    pub floor: usize,
    pub row: usize,
    pub column: usize,
}

impl SpotId {
    pub fn new(floor: usize, row: usize, column: usize) -> Self {
        SpotId { floor, row, column }
    }

    pub fn parse(s: &str) -> Result<Self, LotError> {
        let invalid = || LotError::InvalidSpotId(s.to_string());

        let mut parts = [0usize; 3];
        let mut count = 0;
        for part in s.split(DELIMITER) {
            if count == parts.len() {
                return Err(invalid());
            }
            parts[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }
        if count != parts.len() {
            return Err(invalid());
        }

        Ok(SpotId::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.floor, DELIMITER, self.row, DELIMITER, self.column
        )
    }
}

impl FromStr for SpotId {
    type Err = LotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpotId::parse(s)
    }
}

impl TryFrom<String> for SpotId {
    type Error = LotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SpotId::parse(&value)
    }
}

impl From<SpotId> for String {
    fn from(id: SpotId) -> Self {
        id.to_string()
    }
}

impl PartialEq<str> for SpotId {
    fn eq(&self, other: &str) -> bool {
        SpotId::parse(other).map(|id| id == *self).unwrap_or(false)
    }
}

impl PartialEq<&str> for SpotId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
