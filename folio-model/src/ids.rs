use std::str::FromStr;

use crate::error::ModelError;

/// Backend-assigned row id of a content record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContentId(pub i64);

impl From<i64> for ContentId {
    fn from(value: i64) -> Self {
        ContentId(value)
    }
}

impl FromStr for ContentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ContentId)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
