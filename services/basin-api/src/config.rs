//! Service configuration.

use std::path::PathBuf;
use std::time::Duration;

use basin_engine::ArcGisConfig;

/// Runtime configuration for the basin term service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding `basins.geojson` and the per-basin grid files.
    pub data_dir: PathBuf,

    /// ArcGIS point-service query URL.
    pub arcgis_url: String,

    /// Request timeout for the ArcGIS point service.
    pub arcgis_timeout: Duration,
}

impl ServiceConfig {
    /// The ArcGIS client configuration derived from this service config.
    pub fn arcgis(&self) -> ArcGisConfig {
        ArcGisConfig {
            url: self.arcgis_url.clone(),
            timeout: self.arcgis_timeout,
            ..ArcGisConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcgis_config_carries_url_and_timeout() {
        let config = ServiceConfig {
            data_dir: PathBuf::from("/data/basin"),
            arcgis_url: "https://some.agol.server/query".to_string(),
            arcgis_timeout: Duration::from_secs(3),
        };

        let arc = config.arcgis();
        assert_eq!(arc.url, "https://some.agol.server/query");
        assert_eq!(arc.timeout, Duration::from_secs(3));
    }
}
