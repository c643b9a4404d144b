use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use graha_core::{CivilMoment, EventResult};
use graha_engine::{EngineConfig, GeoPosition, HouseSystem, SwissEphemeris};
use graha_host::Module;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "graha", about = "Sidereal positions, sunrise/sunset and houses via Swiss Ephemeris")]
struct Cli {
    /// Directory holding Swiss Ephemeris data files (overrides SE_EPHE_PATH)
    #[arg(long, global = true)]
    ephe_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Local date, time and location of a request.
#[derive(Args)]
struct MomentArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local time (hh:mm[:ss]), default midnight
    #[arg(long, default_value = "00:00:00")]
    time: String,
    /// Offset from UTC in hours, east positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    tz: f64,
    /// Latitude in degrees, north positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lon: f64,
    /// Elevation in meters
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    elev: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Sidereal longitude of a body at a Julian day (Ephemeris Time)
    Longitude {
        /// Body name: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu
        body: String,
        /// Julian Date (ET)
        #[arg(long)]
        jd: f64,
        /// Ayanamsa name (default Lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// First sunrise after the given local moment
    Sunrise(MomentArgs),
    /// First sunset after the given local moment
    Sunset(MomentArgs),
    /// Sidereal house cusps
    Houses {
        #[command(flatten)]
        moment: MomentArgs,
        /// House system letter (P, K, O, R, C, E, W, ...)
        #[arg(long, default_value = "P")]
        system: String,
        /// Ayanamsa name (default Lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// Sidereal ascendant longitude
    Ascendant {
        #[command(flatten)]
        moment: MomentArgs,
        /// House system letter
        #[arg(long, default_value = "P")]
        system: String,
        /// Ayanamsa name (default Lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// Call a module operation by name with a JSON array of arguments
    Call {
        /// Operation name, e.g. get_house_cusps
        op: String,
        /// JSON array of positional arguments
        #[arg(default_value = "[]")]
        args: String,
    },
}

fn parse_moment(args: &MomentArgs) -> Result<CivilMoment, String> {
    let date: Vec<&str> = args.date.split('-').collect();
    let [y, m, d] = date.as_slice() else {
        return Err(format!("Invalid date '{}': expected YYYY-MM-DD", args.date));
    };
    let year: i32 = y.parse().map_err(|_| format!("Invalid year in '{}'", args.date))?;
    let month: i32 = m.parse().map_err(|_| format!("Invalid month in '{}'", args.date))?;
    let day: i32 = d.parse().map_err(|_| format!("Invalid day in '{}'", args.date))?;

    let mut hms = [0i32; 3];
    let parts: Vec<&str> = args.time.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!("Invalid time '{}': expected hh:mm[:ss]", args.time));
    }
    for (slot, part) in hms.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("Invalid time '{}'", args.time))?;
    }

    Ok(CivilMoment::new(year, month, day)
        .at(hms[0], hms[1], hms[2])
        .with_offset(args.tz))
}

fn location(args: &MomentArgs) -> GeoPosition {
    GeoPosition::new(args.lon, args.lat, args.elev)
}

fn open_engine(ephe_path: Option<PathBuf>) -> SwissEphemeris {
    let config = match ephe_path {
        Some(path) => EngineConfig::with_ephemeris_path(path),
        None => EngineConfig::from_env(),
    };
    SwissEphemeris::open(&config).unwrap_or_else(|e| {
        eprintln!("Failed to open Swiss Ephemeris: {e}");
        std::process::exit(1);
    })
}

fn moment_or_exit(args: &MomentArgs) -> CivilMoment {
    parse_moment(args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_event(label: &str, ev: &EventResult) {
    let t = ev.time;
    println!(
        "{label}: {:04}-{:02}-{:02} {:02}:{:02}:{:02} (UTC{:+})",
        t.year, t.month, t.day, t.hour, t.minute, t.second, ev.utc_offset_hours
    );
    println!("  JD (UT): {:.6}", ev.jd_ut);
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut engine = open_engine(cli.ephe_path);

    match cli.command {
        Commands::Longitude { body, jd, ayanamsa } => {
            match graha_core::sidereal_longitude(&mut engine, &body, jd, ayanamsa.as_deref()) {
                Ok(lon) => println!("{body}: {lon:.6} deg"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sunrise(args) => {
            let moment = moment_or_exit(&args);
            match graha_core::sunrise(&mut engine, &moment, &location(&args)) {
                Ok(ev) => print_event("Sunrise", &ev),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sunset(args) => {
            let moment = moment_or_exit(&args);
            match graha_core::sunset(&mut engine, &moment, &location(&args)) {
                Ok(ev) => print_event("Sunset", &ev),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Houses {
            moment,
            system,
            ayanamsa,
        } => {
            let civil = moment_or_exit(&moment);
            let system = HouseSystem::from_code_str(Some(&system));
            match graha_core::house_chart(
                &mut engine,
                &civil,
                &location(&moment),
                system,
                ayanamsa.as_deref(),
            ) {
                Ok(chart) => {
                    println!("House system: {}", chart.system.as_char());
                    for (i, cusp) in chart.cusps.iter().enumerate() {
                        println!("  House {:>2}: {cusp:.6} deg", i + 1);
                    }
                    println!("  Ascendant: {:.6} deg", chart.ascendant_deg);
                    println!("  MC:        {:.6} deg", chart.mc_deg);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Ascendant {
            moment,
            system,
            ayanamsa,
        } => {
            let civil = moment_or_exit(&moment);
            let system = HouseSystem::from_code_str(Some(&system));
            match graha_core::ascendant(
                &mut engine,
                &civil,
                &location(&moment),
                system,
                ayanamsa.as_deref(),
            ) {
                Ok(asc) => println!("Ascendant: {asc:.6} deg"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Call { op, args } => {
            let args: Vec<Value> = serde_json::from_str(&args).unwrap_or_else(|e| {
                eprintln!("Invalid JSON arguments: {e}");
                std::process::exit(1);
            });
            let mut module = Module::new(engine);
            match module.call(&op, &args) {
                Ok(value) => println!("{value}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
