//! Basin region boundaries and local depth grids.
//!
//! Both datasets load once at process start and are shared read-only across
//! requests:
//!
//! - [`Basins`]: the ordered basin region set from a GeoJSON
//!   FeatureCollection, with point-in-polygon containment.
//! - [`BasinData`]: per-basin depth grids at [`BASIN_DATA_SPACING`] (0.01°),
//!   keyed by rounded coordinate cell.
//!
//! The [`testdata`] module provides synthetic fixtures for tests.

pub mod error;
pub mod grid;
pub mod regions;
pub mod testdata;

pub use error::DataError;
pub use grid::{BasinData, BASIN_DATA_SPACING};
pub use regions::{BasinRegion, Basins};
