use crate::errors::{require_positive, OrbitError};

// v = sqrt(mu * (2/r - 1/a)) with mu in km³/s², r and a in km
pub fn vis_viva_velocity(mu: f64, radius: f64, semi_major_axis: f64) -> Result<f64, OrbitError> {
    let mu = require_positive("gravitational parameter", mu)?;
    let radius = require_positive("orbit radius", radius)?;
    let semi_major_axis = require_positive("semi-major axis", semi_major_axis)?;

    let bracket = 2.0 / radius - 1.0 / semi_major_axis;
    if bracket < 0.0 {
        return Err(OrbitError::DomainError(format!(
            "radius {} km is unreachable on an orbit with semi-major axis {} km",
            radius, semi_major_axis
        )));
    }

    let velocity = (mu * bracket).sqrt();
    if !velocity.is_finite() {
        return Err(OrbitError::DomainError(format!(
            "vis-viva speed overflows for mu = {} km³/s², r = {} km, a = {} km",
            mu, radius, semi_major_axis
        )));
    }

    Ok(velocity)
}

pub fn circular_velocity(mu: f64, radius: f64) -> Result<f64, OrbitError> {
    vis_viva_velocity(mu, radius, radius)
}
