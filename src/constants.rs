// Unit Conversion
pub const M_PER_KM: f64 = 1_000.0;

// Earth Constants
pub const EARTH_RADIUS: f64 = 6_371.0; // km
pub const EARTH_SURFACE_GRAVITY: f64 = 9.80665; // m/s²
pub const EARTH_MU: f64 = 398_600.4418; // km³/s²

// Moon Constants
pub const MOON_RADIUS: f64 = 1_737.4; // km
pub const MOON_SURFACE_GRAVITY: f64 = 1.62; // m/s²
pub const MOON_MU: f64 = 4_902.800066; // km³/s²

// Mars Constants
pub const MARS_RADIUS: f64 = 3_389.5; // km
pub const MARS_SURFACE_GRAVITY: f64 = 3.72076; // m/s²
pub const MARS_MU: f64 = 42_828.37; // km³/s²

// Estimator Parameters
pub const DEFAULT_DROP_INCREMENT: f64 = 1.0; // km
