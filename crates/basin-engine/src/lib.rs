//! Basin term resolution engine.
//!
//! Resolves z1p0/z2p5 basin depth terms for a coordinate: normalization to
//! dataset resolution, region containment, model selection, raw value
//! retrieval from a local grid or the remote ArcGIS model service, and
//! region-specific corrections.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use basin_data::testdata;
//! use basin_engine::{LocalGridSource, ResolutionEngine};
//!
//! # async fn run() -> Result<(), basin_protocol::BasinError> {
//! let engine = ResolutionEngine::new(Arc::new(testdata::test_basins()));
//! let source = LocalGridSource::new(Arc::new(testdata::test_basin_data()));
//!
//! let term = engine.resolve(47.6, -122.3, None, &source).await?;
//! assert!(term.region.is_some());
//! # Ok(())
//! # }
//! ```

pub mod arcgis;
pub mod correction;
pub mod engine;
pub mod normalize;
pub mod select;
pub mod source;

pub use arcgis::{ArcGisConfig, ArcGisSource, ARC_DATA_SPACING};
pub use correction::{CorrectionPolicy, StandardCorrections};
pub use engine::ResolutionEngine;
pub use normalize::{normalize, round_to};
pub use select::select_model;
pub use source::{LocalGridSource, SourceKind, ValueSource};
