//! HTTP request handlers.

pub mod geojson;
pub mod health;
pub mod terms;
pub mod usage;
