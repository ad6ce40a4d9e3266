//! Test fixtures and data generators
//!
//! Request bodies in the public JSON shape, and the response shapes tests read.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullName {
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lastname: Option<String>,
}

/// Rider registration body
#[derive(Debug, Serialize)]
pub struct RegisterUser {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            fullname: FullName {
                firstname: "Alice".to_string(),
                lastname: Some("Walker".to_string()),
            },
            email: format!("rider{suffix}@example.com"),
            password: "secret1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub color: String,
    pub plate_number: String,
    pub capacity: u8,
    pub vehicle_type: String,
}

/// Driver registration body
#[derive(Debug, Serialize)]
pub struct RegisterCaptain {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
    pub vehicle: Vehicle,
}

impl RegisterCaptain {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            fullname: FullName {
                firstname: "Ravi".to_string(),
                lastname: None,
            },
            email: format!("captain{suffix}@example.com"),
            password: "secret1".to_string(),
            vehicle: Vehicle {
                color: "red".to_string(),
                plate_number: format!("KA01AB{suffix:04}"),
                capacity: 4,
                vehicle_type: "car".to_string(),
            },
        }
    }
}

/// Login body, shared by both kinds
#[derive(Debug, Serialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl Login {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: FullName,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainView {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: FullName,
    pub email: String,
    pub status: String,
    pub vehicle: Vehicle,
}

#[derive(Debug, Deserialize)]
pub struct UserAuthInfo {
    pub token: String,
    pub user: UserView,
}

#[derive(Debug, Deserialize)]
pub struct CaptainAuthInfo {
    pub token: String,
    pub captain: CaptainView,
}

/// `{message, info: {token, user|captain}}`
#[derive(Debug, Deserialize)]
pub struct AuthEnvelope<I> {
    pub message: String,
    pub info: I,
}

#[derive(Debug, Deserialize)]
pub struct UserProfile {
    pub user: UserView,
}

#[derive(Debug, Deserialize)]
pub struct CaptainProfile {
    pub captain: CaptainView,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
