//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    FullNameRequest, LoginRequest, Normalize, RegisterDriverRequest, RegisterRiderRequest,
    VehicleRequest,
};

pub use responses::{
    ActorView, AuthInfo, AuthResponse, DriverResponse, HealthResponse, MessageResponse,
    ProfileResponse, ReadinessResponse, RiderResponse, VehicleResponse,
};
