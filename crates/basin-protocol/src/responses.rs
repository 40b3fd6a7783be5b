//! JSON response envelopes for the basin term service.
//!
//! The envelope shape (status/name/date/url plus echoed request and the
//! per-horizon value objects) is part of the service's public contract.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{Basin, BasinModel};
use crate::types::{RegionSummary, ResolvedTerm};

/// Service name reported in every envelope.
pub const SERVICE_NAME: &str = "Basin Term Service";

/// Service description reported in the usage envelope.
pub const SERVICE_DESCRIPTION: &str = "Get basin terms";

/// Request syntax template reported in the usage envelope.
pub const SERVICE_SYNTAX: &str =
    "/basin/{local-data|arc-data}?latitude={latitude}&longitude={longitude}&model={basinModel}";

/// Response status discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Usage,
    Success,
    Error,
}

/// One horizon value with the dataset field key it was read from.
///
/// `name` is empty for the outside-all-basins result, where no model was
/// selected and no field was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasinValuePayload {
    pub name: String,
    pub value: Option<f64>,
}

/// Echo of the resolved request parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSummary {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(rename = "basinModel")]
    pub model: Option<BasinModel>,

    #[serde(rename = "basinRegion")]
    pub region: Option<RegionSummary>,
}

/// Success envelope for a term-resolution request.
#[derive(Debug, Clone, Serialize)]
pub struct TermResponse {
    pub status: Status,
    pub name: String,
    pub date: String,
    pub url: String,
    pub request: RequestSummary,
    pub response: TermValues,
}

/// The two horizon values of a term response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermValues {
    pub z1p0: BasinValuePayload,
    pub z2p5: BasinValuePayload,
}

impl TermResponse {
    /// Build the success envelope from a resolved term.
    ///
    /// `latitude`/`longitude` are the normalized values the resolution was
    /// keyed on, echoed back so callers see the cell actually queried.
    pub fn new(url: impl Into<String>, latitude: f64, longitude: f64, term: &ResolvedTerm) -> Self {
        let (z1p0_name, z2p5_name) = match term.model {
            Some(model) => (model.z1p0_key().to_string(), model.z2p5_key().to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            status: Status::Success,
            name: SERVICE_NAME.to_string(),
            date: Utc::now().to_rfc3339(),
            url: url.into(),
            request: RequestSummary {
                latitude,
                longitude,
                model: term.model,
                region: term.region.clone(),
            },
            response: TermValues {
                z1p0: BasinValuePayload {
                    name: z1p0_name,
                    value: term.values.z1p0,
                },
                z2p5: BasinValuePayload {
                    name: z2p5_name,
                    value: term.values.z2p5,
                },
            },
        }
    }
}

/// One model entry in the usage envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub id: BasinModel,
    pub z1p0: &'static str,
    pub z2p5: &'static str,
}

/// Usage/metadata envelope returned from the service root.
#[derive(Debug, Clone, Serialize)]
pub struct UsageResponse {
    pub status: Status,
    pub name: String,
    pub description: String,
    pub syntax: String,

    #[serde(rename = "basinModels")]
    pub basin_models: Vec<ModelEntry>,

    #[serde(rename = "basinRegions")]
    pub basin_regions: Vec<RegionSummary>,
}

impl UsageResponse {
    /// Build the usage envelope for the given region set.
    pub fn new(regions: impl IntoIterator<Item = Basin>) -> Self {
        Self {
            status: Status::Usage,
            name: SERVICE_NAME.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            syntax: SERVICE_SYNTAX.to_string(),
            basin_models: BasinModel::ALL
                .iter()
                .map(|m| ModelEntry {
                    id: *m,
                    z1p0: m.z1p0_key(),
                    z2p5: m.z2p5_key(),
                })
                .collect(),
            basin_regions: regions.into_iter().map(RegionSummary::new).collect(),
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
    pub url: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BasinValues, ResolvedTerm};

    #[test]
    fn test_success_envelope_fields() {
        let term = ResolvedTerm::new(
            Basin::PugetLowland,
            BasinModel::Seattle,
            BasinValues::new(Some(0.35), Some(4.1)),
        );
        let resp = TermResponse::new("/basin/local-data?...", 47.6, -122.3, &term);

        assert_eq!(resp.status, Status::Success);
        assert_eq!(resp.request.model, Some(BasinModel::Seattle));
        assert_eq!(resp.response.z1p0.name, "seattle_z1p0");
        assert_eq!(resp.response.z1p0.value, Some(0.35));
        assert_eq!(resp.response.z2p5.value, Some(4.1));
    }

    #[test]
    fn test_outside_envelope_has_empty_keys_and_nulls() {
        let term = ResolvedTerm::outside();
        let resp = TermResponse::new("/basin/local-data?...", 10.0, 10.0, &term);

        assert!(resp.request.region.is_none());
        assert!(resp.request.model.is_none());
        assert_eq!(resp.response.z1p0.name, "");
        assert_eq!(resp.response.z1p0.value, None);

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"value\":null"));
        assert!(json.contains("\"basinRegion\":null"));
    }

    #[test]
    fn test_usage_envelope_lists_models_and_regions() {
        let usage = UsageResponse::new([Basin::PugetLowland, Basin::WasatchFront]);

        assert_eq!(usage.status, Status::Usage);
        assert_eq!(usage.basin_models.len(), BasinModel::ALL.len());
        assert_eq!(usage.basin_regions.len(), 2);
        assert_eq!(usage.basin_regions[0].title, "Puget Lowland");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Usage).unwrap(), "\"usage\"");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"error\"");
    }
}
