//! Basin and basin-model enumerations.
//!
//! Both sets are closed: the region dataset shipped with the service names
//! exactly these basins, and every depth-model dataset (local grid columns
//! and remote attribute fields) is keyed by one of these models.

use serde::{Deserialize, Serialize};

/// A named geologic basin with its own depth datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Basin {
    PugetLowland,
    LosAngeles,
    SanFranciscoBay,
    WasatchFront,
}

impl Basin {
    /// All known basins, in region-dataset order.
    pub const ALL: [Basin; 4] = [
        Basin::PugetLowland,
        Basin::LosAngeles,
        Basin::SanFranciscoBay,
        Basin::WasatchFront,
    ];

    /// The basin identifier used in the region dataset and grid file names.
    pub fn id(&self) -> &'static str {
        match self {
            Basin::PugetLowland => "puget-lowland",
            Basin::LosAngeles => "los-angeles",
            Basin::SanFranciscoBay => "san-francisco-bay",
            Basin::WasatchFront => "wasatch-front",
        }
    }

    /// Human-readable basin title.
    pub fn title(&self) -> &'static str {
        match self {
            Basin::PugetLowland => "Puget Lowland",
            Basin::LosAngeles => "Los Angeles Basin",
            Basin::SanFranciscoBay => "San Francisco Bay Area",
            Basin::WasatchFront => "Wasatch Front",
        }
    }

    /// The depth model used when the caller does not name one explicitly.
    pub fn default_model(&self) -> BasinModel {
        match self {
            Basin::PugetLowland => BasinModel::Seattle,
            Basin::LosAngeles => BasinModel::Cvms426,
            Basin::SanFranciscoBay => BasinModel::BayArea,
            Basin::WasatchFront => BasinModel::Wasatch,
        }
    }

    /// Look up a basin by its identifier.
    pub fn from_id(id: &str) -> Option<Basin> {
        Basin::ALL.iter().copied().find(|b| b.id() == id)
    }
}

/// A named basin depth-model dataset.
///
/// Each model carries the two field keys used to look up horizon values in
/// that model's dataset (local grid columns, remote attribute names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasinModel {
    Seattle,
    Cvms426,
    Cca06,
    BayArea,
    Wasatch,
}

impl BasinModel {
    /// All known models.
    pub const ALL: [BasinModel; 5] = [
        BasinModel::Seattle,
        BasinModel::Cvms426,
        BasinModel::Cca06,
        BasinModel::BayArea,
        BasinModel::Wasatch,
    ];

    /// The model identifier accepted in the `model` query parameter.
    pub fn id(&self) -> &'static str {
        match self {
            BasinModel::Seattle => "seattle",
            BasinModel::Cvms426 => "cvms426",
            BasinModel::Cca06 => "cca06",
            BasinModel::BayArea => "bay-area",
            BasinModel::Wasatch => "wasatch",
        }
    }

    /// Field key for the z1p0 horizon in this model's dataset.
    pub fn z1p0_key(&self) -> &'static str {
        match self {
            BasinModel::Seattle => "seattle_z1p0",
            BasinModel::Cvms426 => "cvms426_z1p0",
            BasinModel::Cca06 => "cca06_z1p0",
            BasinModel::BayArea => "bay_area_z1p0",
            BasinModel::Wasatch => "wasatch_z1p0",
        }
    }

    /// Field key for the z2p5 horizon in this model's dataset.
    pub fn z2p5_key(&self) -> &'static str {
        match self {
            BasinModel::Seattle => "seattle_z2p5",
            BasinModel::Cvms426 => "cvms426_z2p5",
            BasinModel::Cca06 => "cca06_z2p5",
            BasinModel::BayArea => "bay_area_z2p5",
            BasinModel::Wasatch => "wasatch_z2p5",
        }
    }

    /// Look up a model by its identifier.
    pub fn from_id(id: &str) -> Option<BasinModel> {
        BasinModel::ALL.iter().copied().find(|m| m.id() == id)
    }
}
