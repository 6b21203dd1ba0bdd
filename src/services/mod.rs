//! Service layer for business logic
//!
//! Business logic shared by the HTTP interface, independent of actix types
//! wherever possible so it can be exercised directly in tests.

pub mod geoip;

pub use geoip::{GeoDatabase, GeoLocation, MaxMindReader, SubdivisionInfo, resolve};
