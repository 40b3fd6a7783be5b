//! Basin model selection.

use basin_data::BasinRegion;
use basin_protocol::{BasinError, BasinModel};

/// Resolve the model to query: an explicit override or the region default.
///
/// Only called once a region has been located. An unknown explicit id is an
/// error, never a silent fallback to the default.
pub fn select_model(
    region: &BasinRegion,
    explicit: Option<&str>,
) -> Result<BasinModel, BasinError> {
    match explicit {
        Some(id) => {
            BasinModel::from_id(id).ok_or_else(|| BasinError::UnknownModel(id.to_string()))
        }
        None => Ok(region.default_model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_data::testdata;
    use basin_protocol::Coordinate;

    fn puget_region() -> BasinRegion {
        let basins = testdata::test_basins();
        basins
            .find_region(Coordinate::new(47.6, -122.3).unwrap())
            .unwrap()
            .clone()
    }

    #[test]
    fn test_default_model_when_unspecified() {
        let region = puget_region();
        assert_eq!(select_model(&region, None).unwrap(), BasinModel::Seattle);
    }

    #[test]
    fn test_explicit_model_overrides_default() {
        let region = puget_region();
        assert_eq!(
            select_model(&region, Some("cvms426")).unwrap(),
            BasinModel::Cvms426
        );
    }

    #[test]
    fn test_unknown_model_is_an_error() {
        let region = puget_region();
        assert!(matches!(
            select_model(&region, Some("cvm99")),
            Err(BasinError::UnknownModel(_))
        ));
    }
}
