//! Store-assigned record identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the store when a record is created.
///
/// Identifiers are random UUIDs and are never reused. Path segments that do
/// not parse as a UUID cannot name any record, so callers treat a parse
/// failure as "not found" rather than as a malformed request.
///
/// # Examples
/// ```
/// use backend::domain::RecordId;
///
/// let id = RecordId::random();
/// let parsed: RecordId = id.to_string().parse().expect("round trip");
/// assert_eq!(parsed, id);
/// assert!("Goa".parse::<RecordId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
