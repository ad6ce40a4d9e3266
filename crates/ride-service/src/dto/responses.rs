//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The password hash
//! has no field here, so it can never reach the wire.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ride_core::{DriverStatus, FullName, Location, VehicleType};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ============================================================================
// Actor Views
// ============================================================================

/// Public projection of an actor, nested under a kind-specific key
pub trait ActorView: Serialize + Send {
    /// JSON key the view is nested under (`user` / `captain`)
    const FIELD: &'static str;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: FullName,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
}

impl ActorView for RiderResponse {
    const FIELD: &'static str = "user";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub color: String,
    pub plate_number: String,
    pub capacity: u8,
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: FullName,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    pub status: DriverStatus,
    pub vehicle: VehicleResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
}

impl ActorView for DriverResponse {
    const FIELD: &'static str = "captain";
}

// ============================================================================
// Auth Responses
// ============================================================================

/// `{token, user}` or `{token, captain}`
#[derive(Debug, Clone)]
pub struct AuthInfo<V> {
    pub token: String,
    pub actor: V,
}

impl<V: ActorView> Serialize for AuthInfo<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AuthInfo", 2)?;
        state.serialize_field("token", &self.token)?;
        state.serialize_field(V::FIELD, &self.actor)?;
        state.end()
    }
}

/// Register/login result
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "V: ActorView"))]
pub struct AuthResponse<V> {
    pub message: String,
    pub info: AuthInfo<V>,
    /// Token lifetime in seconds, for the cookie; not part of the body
    #[serde(skip)]
    pub expires_in: i64,
}

impl<V: ActorView> AuthResponse<V> {
    pub fn new(message: impl Into<String>, token: String, expires_in: i64, actor: V) -> Self {
        Self {
            message: message.into(),
            info: AuthInfo { token, actor },
            expires_in,
        }
    }

    pub fn token(&self) -> &str {
        &self.info.token
    }
}

/// `{user: ...}` or `{captain: ...}`
#[derive(Debug, Clone)]
pub struct ProfileResponse<V>(pub V);

impl<V: ActorView> Serialize for ProfileResponse<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProfileResponse", 1)?;
        state.serialize_field(V::FIELD, &self.0)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: BTreeMap<&'static str, &'static str>,
}

impl ReadinessResponse {
    pub fn from_checks(results: impl IntoIterator<Item = (&'static str, bool)>) -> Self {
        let checks: BTreeMap<_, _> = results
            .into_iter()
            .map(|(name, ok)| (name, if ok { "healthy" } else { "unhealthy" }))
            .collect();
        let ready = checks.values().all(|status| *status == "healthy");

        Self {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
