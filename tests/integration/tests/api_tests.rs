//! API Integration Tests
//!
//! Most tests run against in-memory stores and need no services. Tests named
//! `database_*` additionally need PostgreSQL:
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, database_available, fixtures::*, TestServer,
};
use reqwest::{header, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Captain Flow
// ============================================================================

#[tokio::test]
async fn test_captain_register_profile_logout() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = serde_json::json!({
        "fullname": {"firstname": "Ravi"},
        "email": "ravi@x.com",
        "password": "secret1",
        "vehicle": {
            "color": "red",
            "plateNumber": "KA01AB1234",
            "capacity": 4,
            "vehicleType": "car"
        }
    });
    let response = server.post("/api/v1/register/captain", &body).await.unwrap();
    let auth: AuthEnvelope<CaptainAuthInfo> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!auth.info.token.is_empty());
    assert_eq!(auth.info.captain.status, "inactive");
    let token = auth.info.token;

    let response = server
        .get_bearer("/api/v1/captain/profile", &token)
        .await
        .unwrap();
    let profile: CaptainProfile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.captain.email, "ravi@x.com");
    assert_eq!(profile.captain.vehicle.plate_number, "KA01AB1234");

    let response = server
        .get_bearer("/api/v1/logout/captain", &token)
        .await
        .unwrap();
    let message: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Logged out successfully");

    let response = server
        .get_bearer("/api/v1/captain/profile", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_captain_capacity_out_of_range() {
    let server = TestServer::start().await.expect("Failed to start server");

    for capacity in [0, 6] {
        let mut request = RegisterCaptain::unique();
        request.vehicle.capacity = capacity;
        let response = server.post("/api/v1/register/captain", &request).await.unwrap();
        let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.error.code, "VALIDATION_ERROR");
    }
}

// ============================================================================
// Rider Flow
// ============================================================================

#[tokio::test]
async fn test_user_login_uses_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUser::unique();

    let response = server.post("/api/v1/register/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/login/user", &Login::new(&request.email, &request.password))
        .await
        .unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    let auth: AuthEnvelope<UserAuthInfo> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.message, "User logged in successfully");

    // The client's cookie store now carries the token
    let response = server.get("/api/v1/user/profile").await.unwrap();
    let profile: UserProfile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.user.email, request.email);
    assert_eq!(profile.user.id, auth.info.user.id);

    // Logout clears the cookie and revokes the token
    let response = server.get("/api/v1/logout/user").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/user/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_bearer("/api/v1/user/profile", &auth.info.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_user_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUser::unique();

    let response = server.post("/api/v1/register/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/register/user", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_identity_spaces_are_disjoint() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUser::unique();

    let response = server.post("/api/v1/register/user", &request).await.unwrap();
    let auth: AuthEnvelope<UserAuthInfo> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_bearer("/api/v1/captain/profile", &auth.info.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post("/api/v1/login/captain", &Login::new(&request.email, &request.password))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Invalid email or password");
}

// ============================================================================
// PostgreSQL-backed
// ============================================================================

#[tokio::test]
async fn database_captain_round_trip() {
    if !database_available() {
        return;
    }

    let server = TestServer::start_with_database()
        .await
        .expect("Failed to start server");
    let request = RegisterCaptain::unique();

    let response = server.post("/api/v1/register/captain", &request).await.unwrap();
    let auth: AuthEnvelope<CaptainAuthInfo> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_bearer("/api/v1/captain/profile", &auth.info.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_bearer("/api/v1/logout/captain", &auth.info.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_bearer("/api/v1/captain/profile", &auth.info.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
