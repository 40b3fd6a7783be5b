//! Core value types for basin term resolution.

use serde::{Deserialize, Serialize};

use crate::errors::BasinError;
use crate::models::{Basin, BasinModel};

/// A validated geographic coordinate in decimal degrees (WGS84).
///
/// Immutable once constructed; construction enforces the valid ranges so the
/// rest of the pipeline never sees an out-of-range or non-finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating ranges.
    ///
    /// Latitude must be in [-90, 90], longitude in [-180, 180], both finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, BasinError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(BasinError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(BasinError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Raw or corrected horizon depths in kilometers.
///
/// `None` is a meaningful result: the source dataset has no coverage for
/// that horizon at the queried cell. It serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BasinValues {
    pub z1p0: Option<f64>,
    pub z2p5: Option<f64>,
}

impl BasinValues {
    pub fn new(z1p0: Option<f64>, z2p5: Option<f64>) -> Self {
        Self { z1p0, z2p5 }
    }

    /// Both horizons null: the "outside any basin" or "no coverage" result.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Identifying summary of a basin region, without its boundary geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: Basin,
    pub title: String,
}

impl RegionSummary {
    pub fn new(basin: Basin) -> Self {
        Self {
            id: basin,
            title: basin.title().to_string(),
        }
    }
}

/// Final output of basin term resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTerm {
    /// The containing region, if any.
    pub region: Option<RegionSummary>,

    /// The model the values came from; absent when outside every region.
    pub model: Option<BasinModel>,

    /// Corrected horizon depths (km); each null where coverage is missing.
    pub values: BasinValues,
}

impl ResolvedTerm {
    /// The successful null result for a coordinate outside every basin.
    pub fn outside() -> Self {
        Self {
            region: None,
            model: None,
            values: BasinValues::empty(),
        }
    }

    pub fn new(basin: Basin, model: BasinModel, values: BasinValues) -> Self {
        Self {
            region: Some(RegionSummary::new(basin)),
            model: Some(model),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        let c = Coordinate::new(47.6, -122.3).unwrap();
        assert_eq!(c.latitude, 47.6);
        assert_eq!(c.longitude, -122.3);
    }

    #[test]
    fn test_coordinate_out_of_range() {
        assert!(Coordinate::new(90.01, 0.0).is_err());
        assert!(Coordinate::new(-90.01, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_coordinate_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_null_values_serialize_as_null() {
        let json = serde_json::to_string(&BasinValues::empty()).unwrap();
        assert_eq!(json, "{\"z1p0\":null,\"z2p5\":null}");
    }

    #[test]
    fn test_outside_result_shape() {
        let term = ResolvedTerm::outside();
        assert!(term.region.is_none());
        assert!(term.model.is_none());
        assert_eq!(term.values, BasinValues::empty());
    }
}
