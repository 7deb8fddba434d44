use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use postroute::cli::{Cli, Command, ScheduleCommand};
use postroute::commands::{lookup, schedule, AppState};
use postroute::config::{Config, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use postroute::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.db, cli.no_db);
    if !config.store_enabled() {
        log::debug!("Schedule store disabled, using bundled dates");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Lookup { postcode, json } => {
            let state = AppState::open(&config).await;
            lookup::print_lookup(&mut out, &lookup::lookup_postcode(&state, &postcode), json)?;
        }
        Command::Ireland { city, json } => {
            let state = AppState::open(&config).await;
            lookup::print_lookup(&mut out, &lookup::lookup_city(&state, &city), json)?;
        }
        Command::Watch { ireland } => {
            let state = AppState::open(&config).await;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            lookup::watch(&state, stdin, &mut out, ireland).await?;
        }
        Command::Routes { json } => {
            let state = AppState::open(&config).await;
            let routes = schedule::list_routes(&state);
            if json {
                serde_json::to_writer_pretty(&mut out, &routes)?;
                writeln!(out)?;
            } else {
                schedule::print_routes(&mut out, &routes)?;
            }
        }
        Command::Schedule(command) => {
            let mut state = AppState::open_required(&config).await?;
            match command {
                ScheduleCommand::List => {
                    schedule::print_schedule(&mut out, &schedule::list_schedule(&state).await?)?;
                }
                ScheduleCommand::Set { route, date } => {
                    let entry = schedule::set_schedule(&mut state, &route, &date).await?;
                    writeln!(out, "{} now collects on {}", entry.route, entry.collection_date)?;
                }
                ScheduleCommand::Clear { route } => {
                    match schedule::clear_schedule(&mut state, &route).await? {
                        Some(entry) => writeln!(
                            out,
                            "Cleared stored date for {} (was {})",
                            entry.route, entry.collection_date
                        )?,
                        None => {
                            writeln!(out, "No stored date for {}", route.trim().to_uppercase())?
                        }
                    }
                }
            }
        }
        Command::Stats => {
            let state = AppState::open_required(&config).await?;
            let stats = schedule::db_stats(&state).await?;
            serde_json::to_writer_pretty(&mut out, &stats)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
