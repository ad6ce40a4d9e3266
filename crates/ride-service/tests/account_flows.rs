//! Account flows and the auth gate against in-memory stores

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Duration as ChronoDuration, Utc};
use ride_common::{PasswordService, TokenService};
use ride_core::testing::{InMemoryActorRepository, InMemoryRevokedTokenRepository};
use ride_core::{ActorKind, Driver, DriverStatus, RevokedTokenRepository, Rider, VehicleType};
use ride_service::dto::{
    FullNameRequest, LoginRequest, RegisterDriverRequest, RegisterRiderRequest, VehicleRequest,
};
use ride_service::{
    AccountService, AuthGate, HealthService, RevocationSweeper, ServiceContext,
};

const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

struct Harness {
    ctx: ServiceContext,
    riders: Arc<InMemoryActorRepository<Rider>>,
    drivers: Arc<InMemoryActorRepository<Driver>>,
    revoked: Arc<InMemoryRevokedTokenRepository>,
}

fn harness() -> Harness {
    let riders = Arc::new(InMemoryActorRepository::<Rider>::new());
    let drivers = Arc::new(InMemoryActorRepository::<Driver>::new());
    let revoked = Arc::new(InMemoryRevokedTokenRepository::new());

    let ctx = ServiceContext::builder()
        .rider_repo(riders.clone())
        .driver_repo(drivers.clone())
        .revoked_tokens(revoked.clone())
        .token_service(Arc::new(TokenService::new(SECRET, 86_400)))
        .password_service(PasswordService::new())
        .health_check(revoked.clone())
        .build()
        .unwrap();

    Harness {
        ctx,
        riders,
        drivers,
        revoked,
    }
}

fn rider_request(email: &str) -> RegisterRiderRequest {
    RegisterRiderRequest {
        fullname: FullNameRequest {
            firstname: "Alice".to_string(),
            lastname: Some("Walker".to_string()),
        },
        email: email.to_string(),
        password: "secret1".to_string(),
    }
}

fn driver_request(email: &str, plate: &str, capacity: u8) -> RegisterDriverRequest {
    RegisterDriverRequest {
        fullname: FullNameRequest {
            firstname: "Bob".to_string(),
            lastname: None,
        },
        email: email.to_string(),
        password: "secret1".to_string(),
        vehicle: VehicleRequest {
            color: "red".to_string(),
            plate_number: plate.to_string(),
            capacity,
            vehicle_type: VehicleType::Car,
        },
    }
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn register_rider_stores_hash_and_issues_token() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    let response = accounts
        .register_rider(rider_request("Alice@Example.com"))
        .await
        .unwrap();

    assert_eq!(response.message, "User registered successfully");
    assert_eq!(response.info.actor.email, "alice@example.com");
    assert_eq!(h.riders.len(), 1);

    let hash = h.riders.password_hash_of("alice@example.com").unwrap();
    assert_ne!(hash, "secret1");
    assert!(hash.starts_with("$argon2"));

    let claims = h.ctx.token_service().verify(response.token()).unwrap();
    assert_eq!(claims.kind, ActorKind::Rider);
    assert_eq!(claims.sub.to_string(), response.info.actor.id);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();
    let err = accounts
        .register_rider(rider_request("ALICE@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "EMAIL_ALREADY_EXISTS");
    assert_eq!(h.riders.len(), 1);
}

#[tokio::test]
async fn concurrent_duplicate_registration_admits_one() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    let (a, b) = tokio::join!(
        accounts.register_rider(rider_request("race@example.com")),
        accounts.register_rider(rider_request("race@example.com")),
    );

    assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
    assert_eq!(h.riders.len(), 1);
}

#[tokio::test]
async fn same_email_may_exist_in_both_identity_spaces() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    accounts
        .register_rider(rider_request("both@example.com"))
        .await
        .unwrap();
    accounts
        .register_driver(driver_request("both@example.com", "KA01", 4))
        .await
        .unwrap();

    assert_eq!(h.riders.len(), 1);
    assert_eq!(h.drivers.len(), 1);
}

#[tokio::test]
async fn register_driver_validates_vehicle() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    let err = accounts
        .register_driver(driver_request("bob@example.com", "KA01", 6))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(h.drivers.is_empty());

    let response = accounts
        .register_driver(driver_request("bob@example.com", "KA01", 5))
        .await
        .unwrap();
    assert_eq!(response.message, "Captain registered successfully");
    assert_eq!(response.info.actor.vehicle.capacity, 5);
    assert_eq!(response.info.actor.status, DriverStatus::Inactive);

    let err = accounts
        .register_driver(driver_request("other@example.com", "KA01", 2))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "PLATE_NUMBER_ALREADY_EXISTS");
}

#[tokio::test]
async fn login_does_not_reveal_which_part_was_wrong() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();

    let wrong_password = accounts
        .login::<Rider>(login("alice@example.com", "wrong-password"))
        .await
        .unwrap_err();
    let unknown_email = accounts
        .login::<Rider>(login("nobody@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(wrong_password.status_code(), 400);
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.error_code(), unknown_email.error_code());

    // Riders are not drivers
    let as_driver = accounts
        .login::<Driver>(login("alice@example.com", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(as_driver.to_string(), unknown_email.to_string());

    let ok = accounts
        .login::<Rider>(login(" Alice@Example.com ", "secret1"))
        .await
        .unwrap();
    assert_eq!(ok.message, "User logged in successfully");
}

#[tokio::test]
async fn unknown_email_costs_as_much_as_a_wrong_password() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();

    let started = Instant::now();
    for _ in 0..3 {
        accounts
            .login::<Rider>(login("alice@example.com", "wrong-password"))
            .await
            .unwrap_err();
    }
    let wrong_password = started.elapsed();

    let started = Instant::now();
    for _ in 0..3 {
        accounts
            .login::<Rider>(login("nobody@example.com", "wrong-password"))
            .await
            .unwrap_err();
    }
    let unknown_email = started.elapsed();

    assert!(
        unknown_email * 4 >= wrong_password,
        "unknown email took {unknown_email:?}, wrong password took {wrong_password:?}"
    );
}

#[tokio::test]
async fn padding_does_not_satisfy_minimum_lengths() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    let mut rider = rider_request("alice@example.com");
    rider.fullname.firstname = "  ab".to_string();
    let err = accounts.register_rider(rider).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(h.riders.is_empty());

    let mut driver = driver_request("bob@example.com", "  AB", 4);
    driver.vehicle.color = " rd".to_string();
    let err = accounts.register_driver(driver).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(h.drivers.is_empty());

    // Long enough once trimmed: stored without the padding
    let mut driver = driver_request(" Bob@Example.com ", "  KA01AB1234 ", 4);
    driver.fullname.firstname = "  Bob ".to_string();
    driver.vehicle.color = " red ".to_string();
    let captain = accounts.register_driver(driver).await.unwrap().info.actor;
    assert_eq!(captain.email, "bob@example.com");
    assert_eq!(captain.fullname.firstname, "Bob");
    assert_eq!(captain.vehicle.color, "red");
    assert_eq!(captain.vehicle.plate_number, "KA01AB1234");
}

#[tokio::test]
async fn gate_admits_valid_token_for_its_own_kind_only() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    let gate = AuthGate::new(&h.ctx);

    let rider = accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();

    let actor = gate
        .authenticate::<Rider>(Some(rider.token()))
        .await
        .unwrap();
    assert_eq!(actor.email, "alice@example.com");

    let err = gate
        .authenticate::<Driver>(Some(rider.token()))
        .await
        .unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn gate_rejects_missing_invalid_and_expired_tokens() {
    let h = harness();
    let gate = AuthGate::new(&h.ctx);

    for token in [None, Some(""), Some("not-a-jwt")] {
        let err = gate.authenticate::<Rider>(token).await.unwrap_err();
        assert!(err.is_unauthenticated());
        assert_eq!(err.status_code(), 401);
    }

    let accounts = AccountService::new(&h.ctx);
    let rider = accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();
    let claims = h.ctx.token_service().verify(rider.token()).unwrap();

    let expired = h
        .ctx
        .token_service()
        .issue_with_ttl(claims.sub, ActorKind::Rider, -10)
        .unwrap();
    let err = gate
        .authenticate::<Rider>(Some(&expired.token))
        .await
        .unwrap_err();
    assert!(err.is_unauthenticated());

    let foreign = TokenService::new("another-secret-that-is-long-enough!!", 3600)
        .issue(claims.sub, ActorKind::Rider)
        .unwrap();
    let err = gate
        .authenticate::<Rider>(Some(&foreign.token))
        .await
        .unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn gate_rejects_token_of_deleted_actor() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    let gate = AuthGate::new(&h.ctx);

    let rider = accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();
    let claims = h.ctx.token_service().verify(rider.token()).unwrap();
    assert!(h.riders.remove(claims.sub));

    let err = gate
        .authenticate::<Rider>(Some(rider.token()))
        .await
        .unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn logout_revokes_until_expiry() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    let gate = AuthGate::new(&h.ctx);

    let driver = accounts
        .register_driver(driver_request("bob@example.com", "KA01", 3))
        .await
        .unwrap();
    let token = driver.token().to_string();

    let response = accounts.logout(&token).await.unwrap();
    assert_eq!(response.message, "Logged out successfully");
    assert!(h.revoked.is_revoked(&token).await.unwrap());

    let err = gate
        .authenticate::<Driver>(Some(&token))
        .await
        .unwrap_err();
    assert!(err.is_unauthenticated());

    // Logging out twice is harmless
    accounts.logout(&token).await.unwrap();
    assert_eq!(h.revoked.len(), 1);

    // A fresh login gets a token that still works
    let again = accounts
        .login::<Driver>(login("bob@example.com", "secret1"))
        .await
        .unwrap();
    assert_ne!(again.token(), token);
    gate.authenticate::<Driver>(Some(again.token()))
        .await
        .unwrap();
}

#[tokio::test]
async fn logout_with_garbage_token_records_nothing() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);

    accounts.logout("garbage").await.unwrap();
    assert!(h.revoked.is_empty());
}

#[tokio::test]
async fn gate_fails_closed_when_revocation_store_is_down() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    let gate = AuthGate::new(&h.ctx);

    let rider = accounts
        .register_rider(rider_request("alice@example.com"))
        .await
        .unwrap();

    h.revoked.set_unavailable(true);
    let err = gate
        .authenticate::<Rider>(Some(rider.token()))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);

    let readiness = HealthService::new(&h.ctx).readiness().await;
    assert!(!readiness.is_ready());
}

#[tokio::test]
async fn profile_projects_public_fields() {
    let h = harness();
    let accounts = AccountService::new(&h.ctx);
    let gate = AuthGate::new(&h.ctx);

    let driver = accounts
        .register_driver(driver_request("bob@example.com", "KA01", 3))
        .await
        .unwrap();
    let actor = gate
        .authenticate::<Driver>(Some(driver.token()))
        .await
        .unwrap();

    let value = serde_json::to_value(accounts.profile(&actor)).unwrap();
    let captain = &value["captain"];
    assert_eq!(captain["email"], "bob@example.com");
    assert_eq!(captain["vehicle"]["plateNumber"], "KA01");
    assert!(captain.get("password").is_none());
}

#[tokio::test]
async fn sweeper_prunes_only_expired_entries() {
    let h = harness();
    let now = Utc::now();
    h.revoked
        .revoke("old", now - ChronoDuration::seconds(5))
        .await
        .unwrap();
    h.revoked
        .revoke("fresh", now + ChronoDuration::hours(1))
        .await
        .unwrap();

    let sweeper = RevocationSweeper::new(h.ctx.revoked_tokens_handle(), Duration::from_secs(60));
    assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
    assert!(h.revoked.is_revoked("fresh").await.unwrap());
    assert!(!h.revoked.is_revoked("old").await.unwrap());
}

#[tokio::test]
async fn spawned_sweeper_runs_periodically() {
    let h = harness();
    h.revoked
        .revoke("old", Utc::now() - ChronoDuration::seconds(5))
        .await
        .unwrap();

    let handle = RevocationSweeper::new(h.revoked.clone(), Duration::from_millis(20)).spawn();
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.abort();

    assert!(h.revoked.is_empty());
}
