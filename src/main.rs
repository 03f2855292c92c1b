use chrono::NaiveDate;
use clap::Parser;
use daymark::application::init::init;
use daymark::application::{ConfigService, MarkDayService, OverviewService};
use daymark::cli::{format_day, format_entries, format_weeks, Cli, Commands};
use daymark::domain::date::{self, from_iso, list_days, to_iso};
use daymark::domain::DayState;
use daymark::error::DaymarkError;
use daymark::infrastructure::{FileSystemRepository, TrackerRepository};
use daymark::logging::init_logging;
use log::debug;
use std::str::FromStr;

fn main() {
    let _logger = init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaymarkError> {
    let today = match cli.as_of.as_deref() {
        Some(iso) => from_iso(iso)?,
        None => date::today(),
    };

    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Toggle { day }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let (date, state) = MarkDayService::new(repo).toggle(&day, today)?;
            println!("{}", format_day(date, state, &config));
            Ok(())
        }
        Some(Commands::Set { day, state }) => {
            let state = DayState::from_str(&state)?;
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let date = MarkDayService::new(repo).set(&day, state, today)?;
            println!("{}", format_day(date, state, &config));
            Ok(())
        }
        Some(Commands::Get { day }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let (date, state) = MarkDayService::new(repo).get(&day, today)?;
            println!("{}", format_day(date, state, &config));
            Ok(())
        }
        Some(Commands::Weeks { limit }) => show_weeks(today, limit),
        None => show_weeks(today, None),
        Some(Commands::Entries { from, to }) => {
            let from = from.as_deref().map(from_iso).transpose()?;
            let to = to.as_deref().map(from_iso).transpose()?;
            let repo = FileSystemRepository::discover()?;
            let entries = OverviewService::new(repo).entries(from, to)?;
            println!("{}", format_entries(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Earliest) => {
            let repo = FileSystemRepository::discover()?;
            match OverviewService::new(repo).earliest()? {
                Some(date) => println!("{}", to_iso(date)),
                None => println!("No entries recorded"),
            }
            Ok(())
        }
        Some(Commands::Days { start, end }) => {
            for day in list_days(&start, &end)? {
                println!("{}", day);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("language = {}", config.language);
                println!("marked_symbol = {}", config.marked_symbol);
                println!("unmarked_symbol = {}", config.unmarked_symbol);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: daymark config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, language, marked_symbol, unmarked_symbol");
                Ok(())
            }
        }
    }
}

fn show_weeks(today: NaiveDate, limit: Option<usize>) -> Result<(), DaymarkError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let service = OverviewService::new(repo);

    let weeks = service.weeks(today, limit)?;
    let entries = service.entries(None, None)?;

    debug!("showing {} weeks up to {}", weeks.len(), to_iso(today));
    print!("{}", format_weeks(&weeks, &entries, today, &config));
    Ok(())
}
