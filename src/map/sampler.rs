use crate::map::consts::{MAX_SAMPLING_ATTEMPTS, METERS_PER_DEGREE};
use crate::map::models::LatLng;
use rand::Rng;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("sampling origin is not a valid coordinate")]
    InvalidOrigin,
    #[error("sampling radius must be positive and finite")]
    InvalidRadius,
    #[error("no valid location found after {attempts} attempts")]
    NoValidLocationFound { attempts: u32 },
}

/// Draws random points around `origin` until `is_valid` accepts one.
///
/// Candidates are checked one at a time; each candidate triggers exactly
/// one `is_valid` call. Gives up after `MAX_SAMPLING_ATTEMPTS` rejections.
pub async fn sample_within_radius<F, Fut>(
    origin: LatLng,
    radius_meters: f64,
    is_valid: F,
) -> Result<LatLng, SampleError>
where
    F: Fn(LatLng) -> Fut,
    Fut: Future<Output = bool>,
{
    if !origin.is_valid() {
        return Err(SampleError::InvalidOrigin);
    }
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err(SampleError::InvalidRadius);
    }
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = random_within_radius(origin, radius_meters);
        if is_valid(candidate).await {
            return Ok(candidate);
        }
    }
    Err(SampleError::NoValidLocationFound {
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// A point at a uniformly random bearing and distance up to
/// `radius_meters` from `origin`, with no validation.
pub fn random_within_radius(origin: LatLng, radius_meters: f64) -> LatLng {
    let mut rng = rand::thread_rng();
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance = rng.gen_range(0.0..radius_meters);
    offset_by(origin, angle, distance)
}

// Equirectangular approximation: good for gameplay radii (tens of km),
// degrades towards the poles where `cos(lat)` approaches zero.
fn offset_by(origin: LatLng, angle: f64, distance_meters: f64) -> LatLng {
    let origin_lat_rad = origin.lat * std::f64::consts::PI / 180.0;
    let lat_offset = distance_meters / METERS_PER_DEGREE * angle.cos();
    let lng_offset = distance_meters / (METERS_PER_DEGREE * origin_lat_rad.cos()) * angle.sin();
    LatLng {
        lat: origin.lat + lat_offset,
        lng: origin.lng + lng_offset,
    }
}
