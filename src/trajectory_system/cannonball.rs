use crate::control::driver::OrbitParameters;
use crate::errors::{require_positive, OrbitError};

// Newton's cannonball: a projectile launched horizontally at `radius_orbit`
// covers the horizontal leg of a right triangle with hypotenuse
// `radius_orbit + drop_increment` in the time free fall takes to drop it by
// `drop_increment`. `gravity` is in km/s², already scaled for altitude.
pub fn newtons_orbital_velocity(
    radius_orbit: f64,
    gravity: f64,
    drop_increment: f64,
) -> Result<f64, OrbitError> {
    let radius_orbit = require_positive("orbit radius", radius_orbit)?;
    let gravity = require_positive("gravitational acceleration", gravity)?;
    let drop_increment = require_positive("drop increment", drop_increment)?;

    // (r + d)² - r² expanded, so small increments keep their precision
    let distance = (drop_increment * (2.0 * radius_orbit + drop_increment)).sqrt();

    // s = ut + 1/2 at² with u = 0
    let time_to_drop = (2.0 * drop_increment / gravity).sqrt();

    let velocity = distance / time_to_drop;
    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(OrbitError::DomainError(format!(
            "cannonball estimate is not representable for r = {} km, g = {} km/s², d = {} km",
            radius_orbit, gravity, drop_increment
        )));
    }

    Ok(velocity)
}

pub fn estimate_at_altitude(altitude: f64, params: &OrbitParameters) -> Result<f64, OrbitError> {
    let radius_orbit = params.body.radius_at_altitude(altitude)?;
    let gravity = params.gravity_model.gravity_at(&params.body, radius_orbit)?;
    newtons_orbital_velocity(radius_orbit, gravity, params.drop_increment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_MU, EARTH_RADIUS};
    use crate::control::primary_body::{GravityModel, PrimaryBody};
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form_matches_sqrt_g_r() {
        // distance² / t² = (2rd + d²) g / 2d = g (r + d/2)
        let radius = 7_000.0;
        let gravity = 0.008;
        let drop = 1.0;
        let velocity = newtons_orbital_velocity(radius, gravity, drop).unwrap();
        assert_relative_eq!(
            velocity,
            (gravity * (radius + drop / 2.0)).sqrt(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_rejects_negative_radius() {
        let result = newtons_orbital_velocity(-100.0, 9.8, 1.0);
        assert!(matches!(result, Err(OrbitError::DomainError(_))));
    }

    #[test]
    fn test_rejects_non_positive_gravity_and_drop() {
        assert!(newtons_orbital_velocity(7_000.0, 0.0, 1.0)
            .unwrap_err()
            .is_domain_error());
        assert!(newtons_orbital_velocity(7_000.0, 0.008, 0.0)
            .unwrap_err()
            .is_domain_error());
        assert!(newtons_orbital_velocity(7_000.0, 0.008, -1.0)
            .unwrap_err()
            .is_domain_error());
        assert!(newtons_orbital_velocity(f64::NAN, 0.008, 1.0)
            .unwrap_err()
            .is_domain_error());
    }

    #[test]
    fn test_smaller_increment_lowers_estimate() {
        let gravity = 0.0086822;
        let coarse = newtons_orbital_velocity(6_771.0, gravity, 1.0).unwrap();
        let fine = newtons_orbital_velocity(6_771.0, gravity, 0.01).unwrap();
        assert!(fine < coarse, "fine {} should be below coarse {}", fine, coarse);
    }

    #[test]
    fn test_small_increments_keep_precision() {
        let radius = EARTH_RADIUS + 400.0;
        let gravity = EARTH_MU / radius.powi(2);
        let limit = (EARTH_MU / radius).sqrt();

        for drop in [1.0, 1e-3, 1e-6, 1e-9, 1e-12, 1e-13] {
            let velocity = newtons_orbital_velocity(radius, gravity, drop).unwrap();
            assert_relative_eq!(
                velocity,
                (gravity * (radius + drop / 2.0)).sqrt(),
                max_relative = 1e-12
            );
            // Error against the circular limit is about d / 4r
            assert!(
                (velocity - limit).abs() / limit <= drop / (2.0 * radius) + 1e-14,
                "d = {} gave {} against limit {}",
                drop,
                velocity,
                limit
            );
        }
    }

    #[test]
    fn test_huge_radius_stays_finite() {
        let velocity = newtons_orbital_velocity(1e200, 1.0, 1.0).unwrap();
        assert_relative_eq!(velocity, 1e100, max_relative = 1e-12);
    }

    #[test]
    fn test_unrepresentable_results_are_domain_errors() {
        // 2r overflows to infinity
        assert!(newtons_orbital_velocity(1e308, 1.0, 1.0)
            .unwrap_err()
            .is_domain_error());
        // d (2r + d) underflows to zero
        assert!(newtons_orbital_velocity(1e-300, 1.0, 1e-300)
            .unwrap_err()
            .is_domain_error());
    }

    #[test]
    fn test_estimate_at_altitude_earth_400km() {
        let params = OrbitParameters::default();
        let velocity = estimate_at_altitude(400.0, &params).unwrap();
        assert_relative_eq!(velocity, 7.6676, epsilon = 1e-3);
    }

    #[test]
    fn test_estimate_at_altitude_consistent_gravity() {
        let params = OrbitParameters {
            gravity_model: GravityModel::Consistent,
            drop_increment: 1e-4,
            ..OrbitParameters::default()
        };
        let velocity = estimate_at_altitude(400.0, &params).unwrap();
        let circular = (EARTH_MU / (EARTH_RADIUS + 400.0)).sqrt();
        assert_relative_eq!(velocity, circular, max_relative = 1e-6);
    }

    #[test]
    fn test_estimate_at_altitude_below_center_fails() {
        let params = OrbitParameters::new(PrimaryBody::earth());
        let result = estimate_at_altitude(-EARTH_RADIUS, &params);
        assert!(result.unwrap_err().is_domain_error());
    }
}
