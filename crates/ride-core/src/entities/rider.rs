//! Rider entity - a passenger account

use chrono::{DateTime, Utc};

use super::actor::{normalize_email, Actor, FullName, Location};
use crate::value_objects::{ActorId, ActorKind};

/// Rider account (exposed on the wire as "user")
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id: ActorId,
    pub fullname: FullName,
    pub email: String,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rider {
    /// Create a new Rider; the email is normalized
    pub fn new(id: ActorId, fullname: FullName, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            fullname,
            email: normalize_email(email),
            location: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Actor for Rider {
    const KIND: ActorKind = ActorKind::Rider;

    fn id(&self) -> ActorId {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn fullname(&self) -> &FullName {
        &self.fullname
    }
}
