use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::constants::{
    EARTH_MU, EARTH_RADIUS, EARTH_SURFACE_GRAVITY, MARS_MU, MARS_RADIUS, MARS_SURFACE_GRAVITY,
    MOON_MU, MOON_RADIUS, MOON_SURFACE_GRAVITY, M_PER_KM,
};
use crate::errors::{require_positive, OrbitError};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PrimaryBody {
    pub name: String,
    pub radius_km: f64,
    pub surface_gravity_m_s2: f64,
    pub mu_km3_s2: f64,
}

impl PrimaryBody {
    pub fn new(name: String, radius_km: f64, surface_gravity_m_s2: f64, mu_km3_s2: f64) -> Self {
        PrimaryBody {
            name,
            radius_km,
            surface_gravity_m_s2,
            mu_km3_s2,
        }
    }

    pub fn earth() -> Self {
        Self::new(
            "Earth".to_string(),
            EARTH_RADIUS,
            EARTH_SURFACE_GRAVITY,
            EARTH_MU,
        )
    }

    pub fn moon() -> Self {
        Self::new("Moon".to_string(), MOON_RADIUS, MOON_SURFACE_GRAVITY, MOON_MU)
    }

    pub fn mars() -> Self {
        Self::new("Mars".to_string(), MARS_RADIUS, MARS_SURFACE_GRAVITY, MARS_MU)
    }

    pub fn presets() -> Vec<PrimaryBody> {
        vec![Self::earth(), Self::moon(), Self::mars()]
    }

    pub fn validate(&self) -> Result<(), OrbitError> {
        require_positive("reference radius", self.radius_km)?;
        require_positive("surface gravity", self.surface_gravity_m_s2)?;
        require_positive("gravitational parameter", self.mu_km3_s2)?;
        Ok(())
    }

    // km/s²
    pub fn surface_gravity_km_s2(&self) -> f64 {
        self.surface_gravity_m_s2 / M_PER_KM
    }

    pub fn radius_at_altitude(&self, altitude: f64) -> Result<f64, OrbitError> {
        if !altitude.is_finite() {
            return Err(OrbitError::DomainError(format!(
                "altitude must be finite, got {}",
                altitude
            )));
        }
        if altitude <= -self.radius_km {
            return Err(OrbitError::DomainError(format!(
                "altitude {} km places the orbit at or below the center of {} (radius {} km)",
                altitude, self.name, self.radius_km
            )));
        }
        Ok(self.radius_km + altitude)
    }

    // Inverse-square scaling of surface gravity, km/s²
    pub fn gravity_at_radius(&self, radius_orbit: f64) -> Result<f64, OrbitError> {
        let radius_orbit = require_positive("orbit radius", radius_orbit)?;
        Ok(self.surface_gravity_km_s2() * (self.radius_km / radius_orbit).powi(2))
    }

    // mu / r², km/s²
    pub fn gravity_from_mu(&self, radius_orbit: f64) -> Result<f64, OrbitError> {
        let radius_orbit = require_positive("orbit radius", radius_orbit)?;
        Ok(self.mu_km3_s2 / radius_orbit.powi(2))
    }
}

// How the cannonball estimate gets local gravity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GravityModel {
    #[default]
    SurfaceScaled, // g0 * (r_ref / r)²
    Consistent,    // mu / r², same source as vis-viva
}

impl GravityModel {
    pub fn gravity_at(&self, body: &PrimaryBody, radius_orbit: f64) -> Result<f64, OrbitError> {
        match self {
            GravityModel::SurfaceScaled => body.gravity_at_radius(radius_orbit),
            GravityModel::Consistent => body.gravity_from_mu(radius_orbit),
        }
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravityModel::SurfaceScaled => write!(f, "surface-scaled"),
            GravityModel::Consistent => write!(f, "consistent"),
        }
    }
}
