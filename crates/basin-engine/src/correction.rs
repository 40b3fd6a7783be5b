//! Region-specific corrections to raw horizon values.

use basin_protocol::{Basin, BasinModel, BasinValues};

use crate::source::SourceKind;

/// Applies region-specific overrides to raw retrieved values.
///
/// Kept behind a trait so further region rules can be added without
/// touching the resolution pipeline.
pub trait CorrectionPolicy: Send + Sync {
    fn correct(
        &self,
        basin: Basin,
        model: BasinModel,
        kind: SourceKind,
        values: BasinValues,
    ) -> BasinValues;
}

/// The standard correction set. Exactly one rule exists today.
///
/// Puget Lowland: for remote-model values with a non-null z2p5, z1p0 is
/// derived from z2p5 with two 50%-weighted linear regressions instead of
/// being read from its own field. The remote z1p0 raster covers less area
/// than the z2p5 raster the region polygon was drawn from, so locations
/// inside the polygon can have a null z1p0 the dataset would otherwise
/// treat as a fault. When z2p5 is null the rule is skipped and the raw
/// (possibly null) z1p0 passes through.
///
/// The rule is deliberately not generalized to other regions; a confirmed
/// coverage mismatch elsewhere becomes one new arm here.
pub struct StandardCorrections;

impl CorrectionPolicy for StandardCorrections {
    fn correct(
        &self,
        basin: Basin,
        _model: BasinModel,
        kind: SourceKind,
        values: BasinValues,
    ) -> BasinValues {
        match (basin, kind, values.z2p5) {
            (Basin::PugetLowland, SourceKind::RemoteModel, Some(z2p5)) => {
                let z1p0 = 0.5 * (0.1146 * z2p5 + 0.2826) + 0.5 * (0.0933 * z2p5 + 0.1444);
                BasinValues::new(Some(z1p0), Some(z2p5))
            }
            _ => values,
        }
    }
}
