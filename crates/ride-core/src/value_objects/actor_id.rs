//! Actor ID - opaque identifier shared by riders and drivers
//!
//! Backed by a random UUID (v4). Serialized as the hyphenated string form.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a persisted actor record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(Uuid);

impl ActorId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ActorIdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ActorIdParseError::InvalidFormat)
    }
}

/// Error when parsing an ActorId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActorIdParseError {
    #[error("invalid actor id format")]
    InvalidFormat,
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ActorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ActorId> for Uuid {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ActorId {
    type Err = ActorIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorId::parse(s)
    }
}
