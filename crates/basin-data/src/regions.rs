//! Basin region boundaries and containment testing.
//!
//! Regions are loaded once at startup from a GeoJSON FeatureCollection and
//! are read-only thereafter. Each feature carries the basin id, a title, and
//! the default model id in its properties; geometry is a WGS84 Polygon or
//! MultiPolygon with lon/lat positions.

use serde::{Deserialize, Serialize};

use basin_protocol::{Basin, BasinModel, Coordinate};

use crate::error::{DataError, Result};

/// A GeoJSON FeatureCollection of basin regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegionFeatureCollection {
    #[serde(rename = "type")]
    type_: String,
    features: Vec<RegionFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegionFeature {
    #[serde(rename = "type")]
    type_: String,
    properties: RegionProperties,
    geometry: RegionGeometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegionProperties {
    /// Basin identifier (e.g. "puget-lowland").
    id: String,

    /// Human-readable title; falls back to the basin's built-in title.
    title: Option<String>,

    /// Default model identifier (e.g. "seattle").
    model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum RegionGeometry {
    Polygon {
        /// Array of linear rings (first is exterior, rest are holes).
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// One basin region: identity, default model, and boundary polygons.
#[derive(Debug, Clone)]
pub struct BasinRegion {
    pub basin: Basin,
    pub title: String,
    pub default_model: BasinModel,

    /// Boundary polygons; each polygon is a list of rings, exterior first.
    polygons: Vec<Vec<Vec<[f64; 2]>>>,
}

impl BasinRegion {
    /// Even-odd containment test against this region's boundary.
    ///
    /// A point is inside when it crosses an odd number of rings, so holes
    /// punch out of the exterior without special-casing ring roles.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let (lon, lat) = (coordinate.longitude, coordinate.latitude);
        self.polygons.iter().any(|rings| {
            rings
                .iter()
                .filter(|ring| ring_contains(ring, lon, lat))
                .count()
                % 2
                == 1
        })
    }
}

/// Ray-casting test for a single linear ring.
fn ring_contains(ring: &[[f64; 2]], lon: f64, lat: f64) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// The fixed, ordered set of basin regions.
pub struct Basins {
    regions: Vec<BasinRegion>,

    /// The source FeatureCollection, re-serialized for the geojson endpoint.
    geojson: String,
}

impl Basins {
    /// Parse a region FeatureCollection from GeoJSON text.
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let collection: RegionFeatureCollection = serde_json::from_str(text)?;

        let mut regions = Vec::with_capacity(collection.features.len());
        for feature in &collection.features {
            let basin = Basin::from_id(&feature.properties.id).ok_or_else(|| {
                DataError::InvalidRegion(format!("unknown basin id: {}", feature.properties.id))
            })?;
            let default_model =
                BasinModel::from_id(&feature.properties.model).ok_or_else(|| {
                    DataError::InvalidRegion(format!(
                        "unknown default model {} for basin {}",
                        feature.properties.model, feature.properties.id
                    ))
                })?;

            let polygons = match &feature.geometry {
                RegionGeometry::Polygon { coordinates } => vec![coordinates.clone()],
                RegionGeometry::MultiPolygon { coordinates } => coordinates.clone(),
            };
            if polygons.iter().any(|rings| rings.is_empty()) {
                return Err(DataError::InvalidRegion(format!(
                    "basin {} has a polygon with no rings",
                    feature.properties.id
                )));
            }

            regions.push(BasinRegion {
                basin,
                title: feature
                    .properties
                    .title
                    .clone()
                    .unwrap_or_else(|| basin.title().to_string()),
                default_model,
                polygons,
            });
        }

        tracing::info!(regions = regions.len(), "Loaded basin region boundaries");

        Ok(Self {
            regions,
            geojson: serde_json::to_string(&collection)?,
        })
    }

    /// Load the region set from a GeoJSON file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&text)
    }

    /// Find the region containing a coordinate.
    ///
    /// Regions are tested in source-file order and the first match wins.
    /// The shipped dataset is non-overlapping, so ordering is only a
    /// tie-break against a malformed dataset. `None` is the normal
    /// "outside all basins" outcome, not an error.
    pub fn find_region(&self, coordinate: Coordinate) -> Option<&BasinRegion> {
        self.regions.iter().find(|r| r.contains(coordinate))
    }

    /// The regions in their fixed order.
    pub fn regions(&self) -> &[BasinRegion] {
        &self.regions
    }

    /// The region set as GeoJSON.
    pub fn geojson(&self) -> &str {
        &self.geojson
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_point_inside_region() {
        let basins = testdata::test_basins();
        let region = basins.find_region(coord(47.6, -122.3)).unwrap();
        assert_eq!(region.basin, Basin::PugetLowland);
        assert_eq!(region.default_model, BasinModel::Seattle);
    }

    #[test]
    fn test_point_outside_all_regions() {
        let basins = testdata::test_basins();
        assert!(basins.find_region(coord(0.0, 0.0)).is_none());
        assert!(basins.find_region(coord(47.6, -100.0)).is_none());
    }

    #[test]
    fn test_point_in_second_region() {
        let basins = testdata::test_basins();
        let region = basins.find_region(coord(40.75, -111.9)).unwrap();
        assert_eq!(region.basin, Basin::WasatchFront);
    }

    #[test]
    fn test_hole_is_outside() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "id": "puget-lowland", "title": null, "model": "seattle" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[-123.0, 47.0], [-121.0, 47.0], [-121.0, 48.0], [-123.0, 48.0], [-123.0, 47.0]],
                        [[-122.5, 47.4], [-121.5, 47.4], [-121.5, 47.6], [-122.5, 47.6], [-122.5, 47.4]]
                    ]
                }
            }]
        }"#;
        let basins = Basins::from_geojson_str(geojson).unwrap();

        assert!(basins.find_region(coord(47.9, -122.0)).is_some());
        // Inside the hole ring: even crossing count, outside the region.
        assert!(basins.find_region(coord(47.5, -122.0)).is_none());
    }

    #[test]
    fn test_unknown_basin_id_rejected() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "id": "atlantis", "title": null, "model": "seattle" },
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] }
            }]
        }"#;
        assert!(matches!(
            Basins::from_geojson_str(geojson),
            Err(DataError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_unknown_model_id_rejected() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "id": "puget-lowland", "title": null, "model": "cvm99" },
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] }
            }]
        }"#;
        assert!(matches!(
            Basins::from_geojson_str(geojson),
            Err(DataError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_geojson_round_trips() {
        let basins = testdata::test_basins();
        let parsed: serde_json::Value = serde_json::from_str(basins.geojson()).unwrap();
        assert_eq!(parsed["type"], "FeatureCollection");
        assert_eq!(
            parsed["features"].as_array().unwrap().len(),
            basins.regions().len()
        );
    }
}
