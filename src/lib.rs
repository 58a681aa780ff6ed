pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::catalog::BodyCatalog;
pub use control::driver::{compute_report, parse_altitude, prompt_altitude, OrbitParameters};
pub use control::primary_body::{GravityModel, PrimaryBody};
pub use errors::OrbitError;

// Re-export the two calculators
pub use trajectory_system::cannonball::{estimate_at_altitude, newtons_orbital_velocity};
pub use trajectory_system::vis_viva::{circular_velocity, vis_viva_velocity};

// Re-export the report
pub use telemetry_system::report::VelocityReport;
