//! Value sources for raw horizon depths.
//!
//! A [`ValueSource`] retrieves the two raw horizon values for a coordinate
//! that has already been normalized to the source's grid spacing. The engine
//! is generic over the source; the caller picks local grid or remote model
//! per request.

use std::sync::Arc;

use async_trait::async_trait;

use basin_data::{BasinData, BASIN_DATA_SPACING};
use basin_protocol::{Basin, BasinError, BasinModel, BasinValues, Coordinate};

/// Which kind of dataset a source reads.
///
/// Correction policies are scoped by provenance: the Puget Lowland z1p0
/// derivation applies to remote-model values only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    LocalGrid,
    RemoteModel,
}

/// Capability to fetch raw horizon depths for a coordinate and model.
#[async_trait]
pub trait ValueSource: Send + Sync {
    /// Grid spacing (degrees) coordinates must be normalized to before
    /// fetching; the engine rounds to this before calling [`fetch`].
    ///
    /// [`fetch`]: ValueSource::fetch
    fn spacing(&self) -> f64;

    /// The provenance of values this source returns.
    fn kind(&self) -> SourceKind;

    /// Retrieve raw horizon depths in km; `None` per horizon where the
    /// dataset has no coverage.
    async fn fetch(
        &self,
        basin: Basin,
        model: BasinModel,
        coordinate: Coordinate,
    ) -> Result<BasinValues, BasinError>;
}

/// Value source backed by the precomputed local depth grids.
///
/// Pure lookup, never blocks; a cell or column absent from the grid yields
/// null for that horizon rather than an error.
pub struct LocalGridSource {
    data: Arc<BasinData>,
}

impl LocalGridSource {
    pub fn new(data: Arc<BasinData>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ValueSource for LocalGridSource {
    fn spacing(&self) -> f64 {
        BASIN_DATA_SPACING
    }

    fn kind(&self) -> SourceKind {
        SourceKind::LocalGrid
    }

    async fn fetch(
        &self,
        basin: Basin,
        model: BasinModel,
        coordinate: Coordinate,
    ) -> Result<BasinValues, BasinError> {
        Ok(self.data.get_values(basin, model, coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_data::testdata;

    #[tokio::test]
    async fn test_local_fetch_known_cell() {
        let source = LocalGridSource::new(Arc::new(testdata::test_basin_data()));
        let values = source
            .fetch(
                Basin::PugetLowland,
                BasinModel::Seattle,
                Coordinate::new(47.6, -122.3).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(values.z1p0, Some(0.35));
        assert_eq!(values.z2p5, Some(4.1));
    }

    #[tokio::test]
    async fn test_local_fetch_uncovered_cell_is_null_not_error() {
        let source = LocalGridSource::new(Arc::new(testdata::test_basin_data()));
        let values = source
            .fetch(
                Basin::PugetLowland,
                BasinModel::Seattle,
                Coordinate::new(48.4, -123.4).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(values, BasinValues::empty());
    }

    #[test]
    fn test_local_spacing_matches_dataset() {
        let source = LocalGridSource::new(Arc::new(testdata::test_basin_data()));
        assert_eq!(source.spacing(), BASIN_DATA_SPACING);
        assert_eq!(source.kind(), SourceKind::LocalGrid);
    }
}
