use std::io::{BufRead, Write};

use log::debug;

use crate::constants::DEFAULT_DROP_INCREMENT;
use crate::control::primary_body::{GravityModel, PrimaryBody};
use crate::errors::{require_positive, OrbitError};
use crate::telemetry_system::report::VelocityReport;
use crate::trajectory_system::cannonball::newtons_orbital_velocity;
use crate::trajectory_system::vis_viva::vis_viva_velocity;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParameters {
    pub body: PrimaryBody,
    pub drop_increment: f64,
    pub gravity_model: GravityModel,
}

impl OrbitParameters {
    pub fn new(body: PrimaryBody) -> Self {
        OrbitParameters {
            body,
            drop_increment: DEFAULT_DROP_INCREMENT,
            gravity_model: GravityModel::default(),
        }
    }

    pub fn with_drop_increment(mut self, drop_increment: f64) -> Self {
        self.drop_increment = drop_increment;
        self
    }

    pub fn with_gravity_model(mut self, gravity_model: GravityModel) -> Self {
        self.gravity_model = gravity_model;
        self
    }
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self::new(PrimaryBody::earth())
    }
}

pub fn compute_report(
    altitude: f64,
    params: &OrbitParameters,
) -> Result<VelocityReport, OrbitError> {
    params.body.validate()?;
    require_positive("drop increment", params.drop_increment)?;

    let radius_orbit = params.body.radius_at_altitude(altitude)?;
    // Circular orbit: semi-major axis equals orbit radius
    let semi_major_axis = radius_orbit;

    let gravity = params.gravity_model.gravity_at(&params.body, radius_orbit)?;
    let estimated = newtons_orbital_velocity(radius_orbit, gravity, params.drop_increment)?;
    let precise = vis_viva_velocity(params.body.mu_km3_s2, radius_orbit, semi_major_axis)?;

    debug!(
        "{} r={} km g={} km/s² model={} estimated={} precise={}",
        params.body.name, radius_orbit, gravity, params.gravity_model, estimated, precise
    );

    Ok(VelocityReport::new(
        params.body.name.clone(),
        altitude,
        radius_orbit,
        params.drop_increment,
        estimated,
        precise,
    ))
}

pub fn parse_altitude(input: &str) -> Result<f64, OrbitError> {
    let trimmed = input.trim();
    let altitude: f64 = trimmed
        .parse()
        .map_err(|_| OrbitError::ParseError(format!("'{}' is not a decimal number", trimmed)))?;
    if !altitude.is_finite() {
        return Err(OrbitError::ParseError(format!(
            "'{}' is not a finite altitude",
            trimmed
        )));
    }
    Ok(altitude)
}

pub fn prompt_altitude<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    body_name: &str,
) -> Result<f64, OrbitError> {
    write!(
        output,
        "What is the orbital altitude above {}'s reference surface (in km)? ",
        body_name
    )
    .and_then(|_| output.flush())
    .map_err(|e| OrbitError::ParseError(format!("failed to write prompt: {}", e)))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| OrbitError::ParseError(format!("failed to read altitude: {}", e)))?;
    if read == 0 {
        return Err(OrbitError::ParseError(
            "no altitude given before end of input".to_string(),
        ));
    }

    parse_altitude(&line)
}
