//! Synthetic basin datasets for tests.
//!
//! Two square regions with known containment and a small Puget Lowland grid
//! around (47.6, -122.3), so unit and integration tests across the workspace
//! share one set of fixtures instead of each inventing geometry.

use basin_protocol::Basin;

use crate::grid::BasinData;
use crate::regions::Basins;

/// A two-region FeatureCollection: a Puget Lowland square and a Wasatch
/// Front square, both with their standard default models.
pub fn test_basins_geojson() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "id": "puget-lowland", "title": "Puget Lowland", "model": "seattle" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-123.5, 46.5], [-121.5, 46.5], [-121.5, 48.5], [-123.5, 48.5], [-123.5, 46.5]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": { "id": "wasatch-front", "title": "Wasatch Front", "model": "wasatch" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-112.3, 40.2], [-111.5, 40.2], [-111.5, 41.3], [-112.3, 41.3], [-112.3, 40.2]
                    ]]
                }
            }
        ]
    }"#
}

/// The parsed test region set.
pub fn test_basins() -> Basins {
    Basins::from_geojson_str(test_basins_geojson()).expect("test basins parse")
}

/// A small Puget Lowland grid at 0.01° spacing.
///
/// The (47.61, -122.30) cell deliberately has an empty z1p0 so tests can
/// exercise per-horizon null coverage.
pub fn seattle_grid_csv() -> &'static str {
    "latitude,longitude,seattle_z1p0,seattle_z2p5\n\
     47.59,-122.30,0.30,3.80\n\
     47.60,-122.30,0.35,4.10\n\
     47.60,-122.29,0.36,4.20\n\
     47.61,-122.30,,4.00\n"
}

/// A BasinData store holding only the Puget Lowland test grid.
pub fn test_basin_data() -> BasinData {
    let mut data = BasinData::default();
    data.insert_grid(Basin::PugetLowland, seattle_grid_csv())
        .expect("test grid parse");
    data
}
