//! Remote ArcGIS basin-model point service client.
//!
//! The remote service answers a point query with an attribute map from model
//! field key to raw depth in millimeters; values are converted to km here so
//! the rest of the pipeline works in one unit. Transport failures and
//! timeouts surface as `UpstreamUnavailable`; there is no internal retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use basin_protocol::{Basin, BasinError, BasinModel, BasinValues, Coordinate};

use crate::source::{SourceKind, ValueSource};

/// Resolution the remote basin-model rasters are queried at, in degrees.
/// Coarser than the local grid.
pub const ARC_DATA_SPACING: f64 = 0.05;

/// Configuration for the ArcGIS point-service client.
#[derive(Debug, Clone)]
pub struct ArcGisConfig {
    /// Point-service query URL.
    pub url: String,
    /// Bound on the whole request.
    pub timeout: Duration,
    /// Bound on connection establishment.
    pub connect_timeout: Duration,
}

impl Default for ArcGisConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6080/arcgis/rest/basin/query".to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// One point-service result: field key to raw value in millimeters.
///
/// Attribute values other than numbers (the service also returns object ids
/// and source strings) are ignored.
#[derive(Debug, Deserialize)]
struct ArcGisResponse {
    attributes: serde_json::Map<String, serde_json::Value>,
}

/// Value source backed by the remote ArcGIS basin-model service.
pub struct ArcGisSource {
    client: Client,
    url: String,
}

impl ArcGisSource {
    /// Create a client with bounded timeouts.
    pub fn new(config: &ArcGisConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .context("Failed to create ArcGIS HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Query the point service, returning the raw attribute map.
    async fn query(&self, coordinate: Coordinate) -> Result<ArcGisResponse, BasinError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("latitude", coordinate.latitude),
                ("longitude", coordinate.longitude),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let response = response.error_for_status().map_err(request_error)?;

        response.json::<ArcGisResponse>().await.map_err(|e| {
            BasinError::UpstreamUnavailable(format!("malformed point-service response: {}", e))
        })
    }
}

fn request_error(e: reqwest::Error) -> BasinError {
    if e.is_timeout() {
        BasinError::UpstreamUnavailable("point service timed out".to_string())
    } else {
        BasinError::UpstreamUnavailable(format!("point service request failed: {}", e))
    }
}

#[async_trait]
impl ValueSource for ArcGisSource {
    fn spacing(&self) -> f64 {
        ARC_DATA_SPACING
    }

    fn kind(&self) -> SourceKind {
        SourceKind::RemoteModel
    }

    async fn fetch(
        &self,
        basin: Basin,
        model: BasinModel,
        coordinate: Coordinate,
    ) -> Result<BasinValues, BasinError> {
        tracing::debug!(
            basin = basin.id(),
            model = model.id(),
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "Querying ArcGIS point service"
        );

        let result = self.query(coordinate).await?;

        // Native unit is millimeters.
        let horizon = |key: &str| {
            result
                .attributes
                .get(key)
                .and_then(serde_json::Value::as_f64)
                .map(|mm| mm / 1000.0)
        };

        Ok(BasinValues::new(
            horizon(model.z1p0_key()),
            horizon(model.z2p5_key()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_attribute_map() {
        let json = r#"{
            "attributes": {
                "OBJECTID": 12,
                "source": "raster-4",
                "seattle_z1p0": 350.0,
                "seattle_z2p5": 4100.0
            }
        }"#;
        let parsed: ArcGisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.attributes.get("seattle_z2p5").unwrap().as_f64(),
            Some(4100.0)
        );
        // Non-numeric attributes are carried but ignored by the fetch path.
        assert!(parsed.attributes.get("source").unwrap().as_f64().is_none());
    }

    #[test]
    fn test_null_attribute_is_missing_coverage() {
        let json = r#"{ "attributes": { "seattle_z1p0": null, "seattle_z2p5": 4100.0 } }"#;
        let parsed: ArcGisResponse = serde_json::from_str(json).unwrap();
        assert!(parsed
            .attributes
            .get("seattle_z1p0")
            .unwrap()
            .as_f64()
            .is_none());
    }

    #[test]
    fn test_client_builds_with_defaults() {
        let source = ArcGisSource::new(&ArcGisConfig::default()).unwrap();
        assert_eq!(source.spacing(), ARC_DATA_SPACING);
        assert_eq!(source.kind(), SourceKind::RemoteModel);
    }
}
