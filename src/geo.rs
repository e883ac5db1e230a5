//! Distance lookup between two free-text locations.
//!
//! Geocoding is an outside capability. The engine only ever asks for a
//! distance and copes with "unknown", so a provider that cannot answer is not
//! an error.

/// Source of road or great-circle distances between two locations.
pub trait DistanceProvider {
    /// Distance in kilometres, or `None` when it cannot be determined.
    fn distance_km(&self, from: &str, to: &str) -> Option<f64>;
}

/// Provider that never knows a distance. Location scoring falls back to text
/// similarity with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDistance;

impl DistanceProvider for NoDistance {
    fn distance_km(&self, _from: &str, _to: &str) -> Option<f64> {
        None
    }
}

impl<F> DistanceProvider for F
where
    F: Fn(&str, &str) -> Option<f64>,
{
    fn distance_km(&self, from: &str, to: &str) -> Option<f64> {
        self(from, to)
    }
}
