//! Actor kind - the two disjoint identity spaces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which identity space an actor (and its tokens) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Rider,
    Driver,
}

impl ActorKind {
    /// Stable lowercase name, used in token claims and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rider => "rider",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
