use clap::{Parser, Subcommand};
use surya_core::{deg_to_dms, normalize_360};
use surya_graha::planetary_position_by_name;
use surya_search::{
    conjunctions_on_date, lunar_phenomena, planetary_group_on_date, special_configurations_on_date,
};
use surya_time::ahargana;

#[derive(Parser)]
#[command(name = "surya", about = "Surya Siddhanta planetary position CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Days elapsed since the Kali Yuga epoch
    Ahargana {
        /// Proleptic Julian year (astronomical numbering)
        year: i32,
        month: u32,
        day: u32,
    },
    /// True longitude of a body with the full correction chain
    Position {
        /// Body name: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn,
        /// Rahu, Ketu
        body: String,
        year: i32,
        month: u32,
        day: u32,
        /// Print every correction step
        #[arg(long)]
        verbose: bool,
    },
    /// Tithi, lunar latitude, and eclipse screens
    Lunar {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Conjunctions and planetary groups among the seven planets
    Conjunctions {
        year: i32,
        month: u32,
        day: u32,
        /// Reporting tolerance in degrees
        #[arg(long, default_value_t = surya_core::CLOSE_CONJUNCTION_LIMIT_DEG)]
        tolerance: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

fn fmt_dms(deg: f64) -> String {
    let (d, m, s) = deg_to_dms(normalize_360(deg));
    format!("{d} deg {m} min {s:.1} sec")
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ahargana { year, month, day } => match ahargana(year, month, day) {
            Ok(ah) => println!("{ah:.1}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Position {
            body,
            year,
            month,
            day,
            verbose,
        } => {
            let pos = match planetary_position_by_name(&body, year, month, day) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{e}");
                    eprintln!(
                        "Valid bodies: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu"
                    );
                    std::process::exit(1);
                }
            };
            println!(
                "{} on {year}-{month:02}-{day:02}: {:.4} deg ({})",
                pos.body,
                pos.true_longitude,
                fmt_dms(pos.true_longitude)
            );
            if verbose {
                for rec in &pos.records {
                    println!("  {:<12} {:>14.6} -> {:>14.6}", rec.step, rec.input, rec.output);
                }
                if !pos.converged {
                    println!("  note: manda iteration reached its cap before tolerance");
                }
            }
        }

        Commands::Lunar { year, month, day } => {
            let p = match lunar_phenomena(year, month, day) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            let phase = if p.is_waxing() { "waxing" } else { "waning" };
            println!(
                "Tithi {} ({phase}), {:.1}% elapsed, next in {:.2} days",
                p.tithi_number,
                p.completion_fraction * 100.0,
                p.time_to_next_tithi_days
            );
            println!("Elongation: {:.4} deg", p.elongation_deg);
            println!("Lunar latitude: {:.4} deg", p.latitude_deg);
            println!(
                "Solar eclipse possible: {} (offset {:.2} deg, margin {:.2} deg, magnitude {:.2})",
                p.solar_eclipse.possible,
                p.solar_eclipse.syzygy_offset_deg,
                p.solar_eclipse.margin_deg,
                p.solar_eclipse.magnitude
            );
            println!(
                "Lunar eclipse possible: {} (offset {:.2} deg, margin {:.2} deg, magnitude {:.2})",
                p.lunar_eclipse.possible,
                p.lunar_eclipse.syzygy_offset_deg,
                p.lunar_eclipse.margin_deg,
                p.lunar_eclipse.magnitude
            );
        }

        Commands::Conjunctions {
            year,
            month,
            day,
            tolerance,
        } => {
            let events = match conjunctions_on_date(year, month, day, tolerance) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            if events.is_empty() {
                println!("No pairs within {tolerance} deg");
            }
            for e in &events {
                println!(
                    "{} - {}: {:.4} deg ({})",
                    e.body_a, e.body_b, e.separation_deg, e.kind
                );
            }
            match special_configurations_on_date(year, month, day) {
                Ok(configs) => {
                    for c in &configs {
                        println!(
                            "{} - {}: {:.4} deg ({})",
                            c.body_a, c.body_b, c.separation_deg, c.configuration
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
            match planetary_group_on_date(year, month, day) {
                Ok(Some(group)) => {
                    let names: Vec<&str> = group.bodies.iter().map(|b| b.name()).collect();
                    println!(
                        "Group: {} within {:.2} deg from {:.2} deg",
                        names.join(", "),
                        group.span_deg,
                        group.start_deg
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dms { deg } => {
            println!("{}", fmt_dms(deg));
        }
    }
}
