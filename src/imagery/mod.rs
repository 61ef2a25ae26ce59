use crate::map::models::LatLng;
use std::future::Future;

pub mod street_view;

/// Street-level imagery lookups for sampled locations. The availability
/// check is the gate candidates have to pass during target sampling.
pub trait ImageryProvider: Clone + Send + Sync + 'static {
    /// Whether imagery exists at the location. Implementations treat
    /// their own failures as "not available".
    fn has_imagery(&self, location: LatLng) -> impl Future<Output = bool> + Send;

    /// Display URL for the location's imagery.
    fn imagery_url(&self, location: LatLng) -> String;
}
