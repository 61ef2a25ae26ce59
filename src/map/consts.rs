pub const EARTH_RADIUS: f64 = 6371e3;

/// Meters in one degree of latitude; also used for longitude after
/// scaling by `cos(lat)`.
pub const METERS_PER_DEGREE: f64 = 111_111.0;

pub const MAX_SAMPLING_ATTEMPTS: u32 = 32;
