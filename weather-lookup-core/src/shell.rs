//! Application shell: the input line, the last result, the error banner,
//! recent searches and the unit toggle, driven by user events.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success ─┐
//!                     └─────err──▶ Failure ─┴─▶ (ready for the next submit)
//! ```
//!
//! A submit while a query is in flight is ignored.

use crate::{
    QueryError, RecentSearches, TemperatureUnit, UnitPreference, WeatherProvider, WeatherResult,
    display::WeatherPanel, storage::KeyValueStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

impl Phase {
    fn accepts_submit(&self) -> bool {
        !matches!(self, Phase::Loading)
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Succeeded,
    Failed(QueryError),
    /// Blank input, out-of-range recent entry, or a query already in flight.
    Ignored,
}

/// Ticket for a query that moved the shell into [`Phase::Loading`].
#[derive(Debug)]
#[must_use = "a started query must be finished"]
pub struct PendingQuery {
    city: String,
}

impl PendingQuery {
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView<'a> {
    pub input: &'a str,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub weather: Option<WeatherPanel>,
    pub recent: &'a [String],
    pub unit: TemperatureUnit,
}

#[derive(Debug)]
pub struct AppShell<P: WeatherProvider, S: KeyValueStore> {
    provider: P,
    recent: RecentSearches<S>,
    unit: UnitPreference,
    phase: Phase,
    input: String,
    last_result: Option<WeatherResult>,
    error: Option<String>,
}

impl<P: WeatherProvider, S: KeyValueStore> AppShell<P, S> {
    /// Start a session; recent searches are loaded from `store` once, here.
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider,
            recent: RecentSearches::load(store),
            unit: UnitPreference::default(),
            phase: Phase::Idle,
            input: String::new(),
            last_result: None,
            error: None,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Enter on the input line.
    pub async fn submit(&mut self) -> Submission {
        let city = self.input.clone();
        self.run_query(city).await
    }

    /// Re-submit the recent search at `index` (zero-based).
    pub async fn submit_recent(&mut self, index: usize) -> Submission {
        match self.recent.get(index) {
            Some(city) => {
                let city = city.to_string();
                self.run_query(city).await
            }
            None => Submission::Ignored,
        }
    }

    /// Move to [`Phase::Loading`] for `city`.
    ///
    /// Returns `None`, leaving the state untouched, for blank input or while
    /// another query is still loading.
    pub fn begin_query(&mut self, city: impl Into<String>) -> Option<PendingQuery> {
        let city = city.into();

        if city.trim().is_empty() {
            return None;
        }

        if !self.phase.accepts_submit() {
            tracing::debug!(city = %city, "Ignoring submit while a query is loading");
            return None;
        }

        tracing::info!(city = %city, "Querying weather");
        self.phase = Phase::Loading;
        Some(PendingQuery { city })
    }

    /// Apply the outcome of a query started with [`AppShell::begin_query`].
    pub fn finish_query(
        &mut self,
        pending: PendingQuery,
        outcome: Result<WeatherResult, QueryError>,
    ) -> Submission {
        match outcome {
            Ok(result) => {
                tracing::info!(city = %pending.city, location = %result.location.name, "Query succeeded");
                self.last_result = Some(result);
                self.error = None;
                self.recent.record(&pending.city);
                self.input.clear();
                self.phase = Phase::Success;
                Submission::Succeeded
            }
            Err(err) => {
                tracing::warn!(city = %pending.city, "Query failed: {}", err);
                self.error = Some(err.message().to_string());
                self.phase = Phase::Failure;
                Submission::Failed(err)
            }
        }
    }

    async fn run_query(&mut self, city: String) -> Submission {
        let Some(pending) = self.begin_query(city) else {
            return Submission::Ignored;
        };

        let outcome = self.provider.current(pending.city()).await;
        self.finish_query(pending, outcome)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit.get()
    }

    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit.set(unit);
    }

    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.unit.toggle()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_result(&self) -> Option<&WeatherResult> {
        self.last_result.as_ref()
    }

    pub fn recent_searches(&self) -> &[String] {
        self.recent.entries()
    }

    pub fn view(&self) -> ShellView<'_> {
        let unit = self.unit.get();

        ShellView {
            input: &self.input,
            loading: self.phase == Phase::Loading,
            error: self.error.as_deref(),
            weather: self.last_result.as_ref().map(|r| WeatherPanel::new(r, unit)),
            recent: self.recent.entries(),
            unit,
        }
    }
}
