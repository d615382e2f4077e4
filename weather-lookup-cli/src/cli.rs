use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_lookup_core::{
    AppShell, Config, FileStore, RecentSearches, Submission, TemperatureUnit, WeatherProvider,
    provider_from_config,
};

use crate::{
    interactive,
    render::{render_panel, render_recent},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Look up current weather by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, passed to the provider as typed.
        city: String,

        /// Temperature unit: celsius (c) or fahrenheit (f).
        #[arg(long, short, default_value = "celsius")]
        unit: TemperatureUnit,
    },

    /// List recent searches, most recent first.
    Recent,

    /// Interactive prompt (the default).
    Interactive {
        /// Starting temperature unit.
        #[arg(long, short, default_value = "celsius")]
        unit: TemperatureUnit,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self
            .command
            .unwrap_or(Command::Interactive { unit: TemperatureUnit::default() });

        match command {
            Command::Configure => configure(),
            Command::Show { city, unit } => show(city, unit).await,
            Command::Recent => {
                let recent = RecentSearches::load(FileStore::open_default()?);
                print!("{}", render_recent(recent.entries()));
                Ok(())
            }
            Command::Interactive { unit } => {
                let mut app = open_shell()?;
                app.set_unit(unit);
                interactive::run(app).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://www.weatherapi.com/")
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String, unit: TemperatureUnit) -> anyhow::Result<()> {
    let mut app = open_shell()?;
    app.set_unit(unit);
    app.set_input(city);

    match app.submit().await {
        Submission::Succeeded => {
            if let Some(panel) = app.view().weather {
                print!("{}", render_panel(&panel));
            }
            Ok(())
        }
        Submission::Failed(err) => Err(err.into()),
        Submission::Ignored => Err(anyhow::anyhow!("City name must not be empty")),
    }
}

fn open_shell() -> anyhow::Result<AppShell<Box<dyn WeatherProvider>, FileStore>> {
    let cfg = Config::load()?.with_env_overrides();
    let provider = provider_from_config(&cfg)?;
    let store = FileStore::open_default()?;
    tracing::debug!(dir = %store.dir().display(), "Using data directory");

    Ok(AppShell::new(provider, store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["weather-lookup"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_parses_unit() {
        let cli = Cli::try_parse_from(["weather-lookup", "show", "New York", "--unit", "f"]).unwrap();
        match cli.command {
            Some(Command::Show { city, unit }) => {
                assert_eq!(city, "New York");
                assert_eq!(unit, TemperatureUnit::Fahrenheit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_defaults_to_celsius() {
        let cli = Cli::try_parse_from(["weather-lookup", "show", "Oslo"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Show { unit: TemperatureUnit::Celsius, .. })
        ));
    }

    #[test]
    fn bad_unit_is_rejected() {
        assert!(Cli::try_parse_from(["weather-lookup", "show", "Oslo", "-u", "kelvin"]).is_err());
    }
}
