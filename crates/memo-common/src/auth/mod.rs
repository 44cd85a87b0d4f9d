//! Authentication utilities
//!
//! Account registration and password flows live outside this service; only
//! access-token validation (session resolution) is needed here.

mod jwt;

pub use jwt::{Claims, JwtService};
