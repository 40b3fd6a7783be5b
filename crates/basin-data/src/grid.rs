//! Local basin depth-grid store.
//!
//! One grid file per basin, `<data_dir>/<basin-id>.csv`, with a
//! `latitude,longitude,<field key>...` header and one row per 0.01° cell.
//! An empty cell means the model has no coverage for that horizon there.
//! The store is loaded once at startup and shared read-only.

use std::collections::HashMap;
use std::path::Path;

use basin_protocol::{Basin, BasinModel, BasinValues, Coordinate};

use crate::error::{DataError, Result};

/// Resolution of the local basin depth data, in degrees.
///
/// Coordinates must be rounded to this spacing before lookup; cells are
/// keyed on the rounded coordinate.
pub const BASIN_DATA_SPACING: f64 = 0.01;

/// Integer cell key for a coordinate at [`BASIN_DATA_SPACING`].
fn cell_key(coordinate: Coordinate) -> (i64, i64) {
    (
        (coordinate.latitude / BASIN_DATA_SPACING).round() as i64,
        (coordinate.longitude / BASIN_DATA_SPACING).round() as i64,
    )
}

/// Depth grid for a single basin.
#[derive(Debug, Default)]
struct BasinGrid {
    /// Field keys in column order (after the two coordinate columns).
    columns: Vec<String>,

    /// Cell values, one `Option<f64>` per column.
    cells: HashMap<(i64, i64), Vec<Option<f64>>>,
}

impl BasinGrid {
    fn field(&self, cell: (i64, i64), key: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == key)?;
        self.cells.get(&cell).and_then(|row| row[idx])
    }
}

/// The precomputed local depth grids for all basins.
#[derive(Debug, Default)]
pub struct BasinData {
    grids: HashMap<Basin, BasinGrid>,
}

impl BasinData {
    /// Load grid files for the given basins from a data directory.
    ///
    /// A missing file is allowed (that basin simply has no local coverage
    /// and every lookup returns null values); a malformed file is not.
    pub fn load_from_dir(
        dir: impl AsRef<Path>,
        basins: impl IntoIterator<Item = Basin>,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let mut data = Self::default();

        for basin in basins {
            let path = dir.join(format!("{}.csv", basin.id()));
            if !path.exists() {
                tracing::warn!(basin = basin.id(), "No local grid file, lookups return null");
                continue;
            }
            let text = std::fs::read_to_string(&path)?;
            data.insert_grid(basin, &text)?;
        }

        tracing::info!(grids = data.grids.len(), "Loaded local basin depth grids");
        Ok(data)
    }

    /// Parse and register one basin's grid from CSV text.
    pub fn insert_grid(&mut self, basin: Basin, csv: &str) -> Result<()> {
        let mut lines = csv.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| DataError::invalid_grid(basin.id(), "empty grid file"))?;
        let mut fields = header.split(',').map(str::trim);
        if fields.next() != Some("latitude") || fields.next() != Some("longitude") {
            return Err(DataError::invalid_grid(
                basin.id(),
                "header must start with latitude,longitude",
            ));
        }
        let columns: Vec<String> = fields.map(String::from).collect();
        if columns.is_empty() {
            return Err(DataError::invalid_grid(basin.id(), "no value columns"));
        }

        let mut grid = BasinGrid {
            columns,
            cells: HashMap::new(),
        };

        for (line_no, line) in lines.enumerate() {
            let mut parts = line.split(',').map(str::trim);
            let lat = parse_coord_field(basin, line_no, parts.next())?;
            let lon = parse_coord_field(basin, line_no, parts.next())?;

            let mut row = Vec::with_capacity(grid.columns.len());
            for part in parts {
                if part.is_empty() {
                    row.push(None);
                } else {
                    let value = part.parse::<f64>().map_err(|_| {
                        DataError::invalid_grid(
                            basin.id(),
                            format!("bad value {:?} on data row {}", part, line_no + 1),
                        )
                    })?;
                    row.push(Some(value));
                }
            }
            if row.len() != grid.columns.len() {
                return Err(DataError::invalid_grid(
                    basin.id(),
                    format!("row {} has {} values, expected {}", line_no + 1, row.len(), grid.columns.len()),
                ));
            }

            let coord = Coordinate::new(lat, lon).map_err(|e| {
                DataError::invalid_grid(basin.id(), format!("row {}: {}", line_no + 1, e))
            })?;
            grid.cells.insert(cell_key(coord), row);
        }

        self.grids.insert(basin, grid);
        Ok(())
    }

    /// Look up the two horizon values for a basin/model at a grid cell.
    ///
    /// The coordinate must already be normalized to [`BASIN_DATA_SPACING`].
    /// Returns null per horizon when the cell or column is absent; a basin
    /// with no grid at all yields both null.
    pub fn get_values(
        &self,
        basin: Basin,
        model: BasinModel,
        coordinate: Coordinate,
    ) -> BasinValues {
        match self.grids.get(&basin) {
            Some(grid) => {
                let cell = cell_key(coordinate);
                BasinValues::new(
                    grid.field(cell, model.z1p0_key()),
                    grid.field(cell, model.z2p5_key()),
                )
            }
            None => BasinValues::empty(),
        }
    }
}

fn parse_coord_field(basin: Basin, line_no: usize, field: Option<&str>) -> Result<f64> {
    field
        .and_then(|f| f.parse::<f64>().ok())
        .ok_or_else(|| {
            DataError::invalid_grid(
                basin.id(),
                format!("bad coordinate on data row {}", line_no + 1),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_lookup_known_cell() {
        let data = testdata::test_basin_data();
        let values = data.get_values(Basin::PugetLowland, BasinModel::Seattle, coord(47.6, -122.3));
        assert_eq!(values.z1p0, Some(0.35));
        assert_eq!(values.z2p5, Some(4.1));
    }

    #[test]
    fn test_lookup_cell_with_missing_horizon() {
        let data = testdata::test_basin_data();
        // Cell present but z1p0 column empty there.
        let values = data.get_values(Basin::PugetLowland, BasinModel::Seattle, coord(47.61, -122.3));
        assert_eq!(values.z1p0, None);
        assert_eq!(values.z2p5, Some(4.0));
    }

    #[test]
    fn test_lookup_absent_cell_is_null() {
        let data = testdata::test_basin_data();
        let values = data.get_values(Basin::PugetLowland, BasinModel::Seattle, coord(10.0, 10.0));
        assert_eq!(values, BasinValues::empty());
    }

    #[test]
    fn test_lookup_unknown_model_column_is_null() {
        let data = testdata::test_basin_data();
        // The test grid only carries seattle_* columns.
        let values = data.get_values(Basin::PugetLowland, BasinModel::Cca06, coord(47.6, -122.3));
        assert_eq!(values, BasinValues::empty());
    }

    #[test]
    fn test_basin_without_grid_is_null() {
        let data = testdata::test_basin_data();
        let values = data.get_values(Basin::LosAngeles, BasinModel::Cvms426, coord(34.05, -118.25));
        assert_eq!(values, BasinValues::empty());
    }

    #[test]
    fn test_bad_header_rejected() {
        let mut data = BasinData::default();
        let err = data.insert_grid(Basin::PugetLowland, "lat,lon,seattle_z1p0\n47.6,-122.3,0.3\n");
        assert!(matches!(err, Err(DataError::InvalidGrid { .. })));
    }

    #[test]
    fn test_bad_value_rejected() {
        let mut data = BasinData::default();
        let csv = "latitude,longitude,seattle_z1p0,seattle_z2p5\n47.6,-122.3,abc,4.1\n";
        let err = data.insert_grid(Basin::PugetLowland, csv);
        assert!(matches!(err, Err(DataError::InvalidGrid { .. })));
    }

    #[test]
    fn test_load_from_dir_missing_file_ok() {
        let dir = tempfile::tempdir().unwrap();
        let data = BasinData::load_from_dir(dir.path(), Basin::ALL).unwrap();
        let values = data.get_values(Basin::PugetLowland, BasinModel::Seattle, coord(47.6, -122.3));
        assert_eq!(values, BasinValues::empty());
    }

    #[test]
    fn test_load_from_dir_reads_grid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("puget-lowland.csv"),
            testdata::seattle_grid_csv(),
        )
        .unwrap();

        let data = BasinData::load_from_dir(dir.path(), Basin::ALL).unwrap();
        let values = data.get_values(Basin::PugetLowland, BasinModel::Seattle, coord(47.6, -122.3));
        assert_eq!(values.z2p5, Some(4.1));
    }
}
