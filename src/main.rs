use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use orbital_velocity::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Circular orbital velocity by Newton's cannonball and by vis-viva"
)]
struct Cli {
    /// Altitude above the reference surface in km (prompted for when omitted)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_altitude)]
    altitude: Option<f64>,

    /// Primary body name (case-insensitive)
    #[arg(long, default_value = "Earth")]
    body: String,

    /// TOML catalog of primary bodies (defaults to Earth, Moon and Mars)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Drop increment of the cannonball estimate in km
    #[arg(long, default_value_t = DEFAULT_DROP_INCREMENT)]
    drop_increment: f64,

    /// How the cannonball estimate scales gravity with altitude
    #[arg(long, value_enum, default_value_t = GravityModel::SurfaceScaled)]
    gravity_model: GravityModel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let catalog = match &cli.bodies {
        Some(path) => BodyCatalog::load(path)?,
        None => BodyCatalog::builtin(),
    };
    let body = catalog.find(&cli.body)?;
    debug!("Using primary body {:?}", body);

    let params = OrbitParameters::new(body)
        .with_drop_increment(cli.drop_increment)
        .with_gravity_model(cli.gravity_model);

    let altitude = match cli.altitude {
        Some(altitude) => altitude,
        None => {
            let stdin = io::stdin();
            let altitude =
                prompt_altitude(&mut stdin.lock(), &mut io::stdout(), &params.body.name)?;
            println!();
            altitude
        }
    };

    let report = compute_report(altitude, &params)?;
    println!("{}", report);

    Ok(())
}
