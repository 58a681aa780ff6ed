use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct VelocityReport {
    pub body_name: String,
    pub altitude: f64,
    pub radius_orbit: f64,
    pub semi_major_axis: f64,
    pub drop_increment: f64,
    pub estimated_velocity: f64,
    pub precise_velocity: f64,
    pub variance: f64,
}

impl VelocityReport {
    pub fn new(
        body_name: String,
        altitude: f64,
        radius_orbit: f64,
        drop_increment: f64,
        estimated_velocity: f64,
        precise_velocity: f64,
    ) -> Self {
        VelocityReport {
            body_name,
            altitude,
            radius_orbit,
            semi_major_axis: radius_orbit,
            drop_increment,
            estimated_velocity,
            precise_velocity,
            variance: precise_velocity - estimated_velocity,
        }
    }

    pub fn relative_variance(&self) -> f64 {
        self.variance / self.precise_velocity
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!(
                "The estimated orbital velocity of an object in circular orbit around {} at {} km above the reference surface is approximately {:.6} km/s.",
                self.body_name, self.altitude, self.estimated_velocity
            ),
            format!(
                "The precise orbital velocity of an object in circular orbit around {} at {} km above the reference surface is {:.6} km/s.",
                self.body_name, self.altitude, self.precise_velocity
            ),
            format!(
                "The variance between the precise orbital velocity and the estimated orbital velocity is {:.6} km/s.",
                self.variance
            ),
        ]
    }
}

impl fmt::Display for VelocityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [estimated, precise, variance] = self.lines();
        writeln!(f, "{}", estimated)?;
        writeln!(f, "{}", precise)?;
        write!(f, "{}", variance)
    }
}
