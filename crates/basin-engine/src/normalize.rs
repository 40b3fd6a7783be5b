//! Coordinate normalization to dataset resolution.
//!
//! Region lookup and value lookup are both keyed on the rounded coordinate,
//! so the rounding here must match the backing dataset's grid exactly.

use basin_protocol::{BasinError, Coordinate};

/// Round a value to the nearest multiple of `spacing`, half away from zero.
///
/// The result is snapped to the spacing's decimal precision so a rounded
/// coordinate re-keys the same grid cell without floating-point drift.
pub fn round_to(value: f64, spacing: f64) -> f64 {
    let multiple = (value / spacing).round() * spacing;
    let scale = 10f64.powi(-(spacing.log10().floor() as i32));
    (multiple * scale).round() / scale
}

/// Validate and round a raw latitude/longitude to dataset resolution.
///
/// Fails with `InvalidCoordinate` for out-of-range or non-finite input.
/// Idempotent: normalizing an already-normalized coordinate is a no-op.
pub fn normalize(latitude: f64, longitude: f64, spacing: f64) -> Result<Coordinate, BasinError> {
    let raw = Coordinate::new(latitude, longitude)?;
    Coordinate::new(
        round_to(raw.latitude, spacing),
        round_to(raw.longitude, spacing),
    )
}
