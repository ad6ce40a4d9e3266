//! Shared actor capability and the value types both actor kinds carry

use serde::{Deserialize, Serialize};

use crate::value_objects::{ActorId, ActorKind};

/// Capability shared by riders and drivers
///
/// Registration, login and the auth gate are written once against this
/// trait; kind-specific data (vehicle, status) stays on the concrete types.
pub trait Actor: Clone + Send + Sync + 'static {
    /// Identity space this actor type lives in
    const KIND: ActorKind;

    fn id(&self) -> ActorId;

    fn email(&self) -> &str;

    fn fullname(&self) -> &FullName;
}

/// Person name; the first name is required, the last optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub firstname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl FullName {
    pub fn new(firstname: impl Into<String>, lastname: Option<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.filter(|l| !l.trim().is_empty()),
        }
    }

    /// "First Last", or just the first name
    pub fn display_name(&self) -> String {
        match &self.lastname {
            Some(last) => format!("{} {}", self.firstname, last),
            None => self.firstname.clone(),
        }
    }
}

/// Last reported position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Combine nullable columns; a location needs both coordinates
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }
}

/// Canonical form used for storage and uniqueness checks
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
