//! # ride-service
//!
//! Application layer containing account flows, the auth gate, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccountActor, AccountService, AuthGate, GateRejection, HealthService, RevocationSweeper,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
