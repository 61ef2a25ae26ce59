use consts::EARTH_RADIUS;
use models::LatLng;

pub mod consts;
pub mod models;
pub mod sampler;

/// Haversine great-circle distance between two points, in meters.
pub fn distance_meters(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat * std::f64::consts::PI / 180.0;
    let phi_2 = b.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (b.lat - a.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (b.lng - a.lng) * std::f64::consts::PI / 180.0;
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (h.sqrt().atan2((1.0 - h).sqrt()));
    EARTH_RADIUS * c
}
