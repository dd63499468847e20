//! HTTP API handlers for tempora-api

pub mod eras;
pub mod facets;
pub mod health;
pub mod params;
pub mod tours;

pub use eras::list_eras;
pub use facets::facet_availability;
pub use health::health_routes;
pub use tours::list_tours;
