//! Application state for the basin term service.

use std::sync::Arc;

use anyhow::{Context, Result};

use basin_data::{BasinData, Basins};
use basin_engine::{ArcGisSource, LocalGridSource, ResolutionEngine};

use crate::config::ServiceConfig;

/// Shared application state.
///
/// Everything here is immutable after startup, so the state is shared
/// across request handlers without locks.
pub struct AppState {
    /// The resolution engine (holds the region set).
    pub engine: ResolutionEngine,

    /// Local precomputed-grid value source.
    pub local: LocalGridSource,

    /// Remote ArcGIS value source.
    pub arcgis: ArcGisSource,
}

impl AppState {
    /// Load datasets and build the state from service configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let geojson_path = config.data_dir.join("basins.geojson");
        let basins = Basins::load_from_file(&geojson_path)
            .with_context(|| format!("Failed to load basin regions: {:?}", geojson_path))?;

        let grid = BasinData::load_from_dir(
            &config.data_dir,
            basins.regions().iter().map(|r| r.basin),
        )
        .with_context(|| format!("Failed to load basin grids: {:?}", config.data_dir))?;

        let arcgis = ArcGisSource::new(&config.arcgis())?;

        Ok(Self::from_parts(Arc::new(basins), Arc::new(grid), arcgis))
    }

    /// Build the state from already-loaded datasets (used by tests).
    pub fn from_parts(basins: Arc<Basins>, grid: Arc<BasinData>, arcgis: ArcGisSource) -> Self {
        Self {
            engine: ResolutionEngine::new(basins),
            local: LocalGridSource::new(grid),
            arcgis,
        }
    }
}
