#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rotation::{
    config::{load_roster, ConfigFile, ConfigSource, RosterConfig},
    io,
    model::{weekday_name, Pattern, Roster},
    render::{TableRenderer, TextTable},
    rotation::{Engine, RotationError},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de roulement Jour/Nuit (14 jours, repos rattachés au poste précédent)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du roster (sinon roster intégré)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthèse Day/Night de tous les employés pour un mois
    Summary {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Calendrier détaillé d'un employé
    Calendar {
        /// Nom de l'employé (vide = aucune sélection)
        #[arg(long)]
        employee: String,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Poste d'un employé pour une date (YYYY-MM-DD)
    Shift {
        #[arg(long)]
        employee: String,
        #[arg(long)]
        date: NaiveDate,
    },

    /// Lister les employés
    Roster,

    /// Écrire le roster intégré dans un fichier de configuration
    Init {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = cli.config.as_deref();
    let renderer = TextTable;
    let today = Utc::now().date_naive();

    match cli.cmd {
        Commands::Summary {
            year,
            month,
            out_csv,
            out_json,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let rows = open_engine(config)?.month_summary(year, month)?;
            if let Some(path) = out_csv {
                io::export_summary_csv(path, &rows)?;
            }
            if let Some(path) = out_json {
                io::export_summary_json(path, &rows)?;
            }
            print!("{}", renderer.render_summary(&rows));
        }
        Commands::Calendar {
            employee,
            year,
            month,
            out_csv,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let engine = open_engine(config)?;
            let records = match engine.employee_calendar(&employee, year, month) {
                Ok(Some(records)) => records,
                Ok(None) => return Ok(()),
                Err(RotationError::UnknownEmployee(name)) => {
                    bail!("unknown employee: {name} (known: {})", known(engine.roster()))
                }
                Err(e) => return Err(e.into()),
            };
            if let Some(path) = out_csv {
                io::export_calendar_csv(path, &records)?;
            }
            println!("Shift Calendar - {employee}");
            print!("{}", renderer.render_calendar(&records));
        }
        Commands::Shift { employee, date } => {
            let engine = open_engine(config)?;
            let shift = match engine.shift_on(&employee, date) {
                Ok(shift) => shift,
                Err(RotationError::UnknownEmployee(name)) => {
                    bail!("unknown employee: {name} (known: {})", known(engine.roster()))
                }
                Err(e) => return Err(e.into()),
            };
            println!("{shift}");
        }
        Commands::Roster => {
            let engine = open_engine(config)?;
            for entry in engine.roster().entries() {
                let offs = entry
                    .employee
                    .week_offs
                    .iter()
                    .map(weekday_name)
                    .collect::<Vec<_>>()
                    .join(",");
                let anchor = match &entry.pattern {
                    Pattern::DayOnly => "-".to_string(),
                    Pattern::DayNight(a) => format!("{} from {}", a.start_shift, a.threshold),
                };
                println!(
                    "{} | {} | {} | {}",
                    entry.employee.name,
                    entry.employee.shift_type,
                    if offs.is_empty() { "-" } else { offs.as_str() },
                    anchor
                );
            }
        }
        Commands::Init { out } => {
            ConfigFile::open(&out).save(&RosterConfig::builtin())?;
            println!("Roster written to {out}");
        }
    }

    Ok(())
}

fn open_engine(config: Option<&str>) -> Result<Engine> {
    let roster = match config {
        Some(path) => load_roster(path)?,
        None => RosterConfig::builtin().into_roster()?,
    };
    Ok(Engine::new(roster))
}

fn known(roster: &Roster) -> String {
    roster.names().collect::<Vec<_>>().join(", ")
}
