//! Interactive prompt loop: the application shell on a terminal.

use anyhow::Result;
use inquire::{InquireError, Text};
use weather_lookup_core::{AppShell, KeyValueStore, Submission, TemperatureUnit, WeatherProvider};

use crate::render::render;

const HELP: &str = "Enter a city, :1-:5 for a recent search, :c / :f / :u for units, :q to quit";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    /// Zero-based index into the recent list.
    Recent(usize),
    SetUnit(TemperatureUnit),
    ToggleUnit,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Action {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Action::Search(line.to_string());
    };

    match command.trim() {
        "q" | "quit" => Action::Quit,
        "u" | "unit" => Action::ToggleUnit,
        "h" | "help" | "?" => Action::Help,
        other => {
            if let Ok(n) = other.parse::<usize>() {
                return match n {
                    0 => Action::Unknown(line.trim().to_string()),
                    n => Action::Recent(n - 1),
                };
            }
            match TemperatureUnit::try_from(other) {
                Ok(unit) => Action::SetUnit(unit),
                Err(_) => Action::Unknown(line.trim().to_string()),
            }
        }
    }
}

pub async fn run<P, S>(mut app: AppShell<P, S>) -> Result<()>
where
    P: WeatherProvider,
    S: KeyValueStore,
{
    println!("Weather Lookup\n{HELP}");
    print!("{}", render(&app.view()));

    loop {
        let line = match Text::new("City:").with_help_message(HELP).prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match parse_line(&line) {
            Action::Search(city) => {
                app.set_input(city);
                if !app.input().trim().is_empty() {
                    println!("Loading...");
                }
                report(app.submit().await);
            }
            Action::Recent(index) => match app.recent_searches().get(index).cloned() {
                Some(city) => {
                    println!("Loading {city}...");
                    report(app.submit_recent(index).await);
                }
                None => {
                    println!("No recent search #{}", index + 1);
                    continue;
                }
            },
            Action::SetUnit(unit) => app.set_unit(unit),
            Action::ToggleUnit => {
                app.toggle_unit();
            }
            Action::Help => {
                println!("{HELP}");
                continue;
            }
            Action::Quit => break,
            Action::Unknown(cmd) => {
                println!("Unknown command: {cmd}\n{HELP}");
                continue;
            }
        }

        print!("{}", render(&app.view()));
    }

    Ok(())
}

fn report(outcome: Submission) {
    if let Submission::Ignored = outcome {
        tracing::debug!("Submission ignored");
    }
}
