//! The resolution pipeline.

use std::sync::Arc;

use basin_data::Basins;
use basin_protocol::{BasinError, ResolvedTerm};

use crate::correction::{CorrectionPolicy, StandardCorrections};
use crate::normalize::normalize;
use crate::select::select_model;
use crate::source::ValueSource;

/// Orchestrates basin term resolution.
///
/// The pipeline is strictly linear: normalize, locate, select model, fetch,
/// correct. Its one branch is region-found vs. not; outside every region is
/// a successful all-null result, not an error. The engine holds only the
/// immutable region set, so a single instance serves any number of
/// concurrent requests without coordination.
pub struct ResolutionEngine {
    basins: Arc<Basins>,
    corrections: Box<dyn CorrectionPolicy>,
}

impl ResolutionEngine {
    /// Engine with the standard correction set.
    pub fn new(basins: Arc<Basins>) -> Self {
        Self::with_corrections(basins, Box::new(StandardCorrections))
    }

    /// Engine with a caller-supplied correction policy.
    pub fn with_corrections(basins: Arc<Basins>, corrections: Box<dyn CorrectionPolicy>) -> Self {
        Self {
            basins,
            corrections,
        }
    }

    /// Resolve basin terms for a raw coordinate.
    ///
    /// The coordinate is rounded to the source's grid spacing before region
    /// and value lookup. `explicit_model` overrides the region's default
    /// model when present; an unknown id fails with `UnknownModel`. The only
    /// stage that can suspend is the source fetch.
    pub async fn resolve(
        &self,
        latitude: f64,
        longitude: f64,
        explicit_model: Option<&str>,
        source: &dyn ValueSource,
    ) -> Result<ResolvedTerm, BasinError> {
        let coordinate = normalize(latitude, longitude, source.spacing())?;

        let Some(region) = self.basins.find_region(coordinate) else {
            return Ok(ResolvedTerm::outside());
        };

        let model = select_model(region, explicit_model)?;
        let raw = source.fetch(region.basin, model, coordinate).await?;
        let values = self
            .corrections
            .correct(region.basin, model, source.kind(), raw);

        Ok(ResolvedTerm::new(region.basin, model, values))
    }

    /// The region set the engine resolves against.
    pub fn basins(&self) -> &Basins {
        &self.basins
    }
}
