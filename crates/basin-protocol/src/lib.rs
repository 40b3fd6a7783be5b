//! Basin Term Service protocol types.
//!
//! This crate provides the domain and wire types shared by the basin term
//! resolution engine and the HTTP service: coordinates, the basin and
//! basin-model enumerations, raw/resolved depth values, query parameters,
//! and the JSON response envelopes.
//!
//! # Example
//!
//! ```rust
//! use basin_protocol::{Basin, BasinModel};
//!
//! let basin = Basin::from_id("puget-lowland").unwrap();
//! assert_eq!(basin.default_model(), BasinModel::Seattle);
//! assert_eq!(BasinModel::Seattle.z2p5_key(), "seattle_z2p5");
//! ```

pub mod errors;
pub mod models;
pub mod queries;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use errors::BasinError;
pub use models::{Basin, BasinModel};
pub use queries::TermQuery;
pub use responses::{BasinValuePayload, ErrorResponse, Status, TermResponse, UsageResponse};
pub use types::{BasinValues, Coordinate, RegionSummary, ResolvedTerm};

/// Media types used in service responses
pub mod media_types {
    /// JSON media type
    pub const JSON: &str = "application/json";
    /// GeoJSON media type
    pub const GEO_JSON: &str = "application/geo+json";
}
