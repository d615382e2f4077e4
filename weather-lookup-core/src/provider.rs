use crate::{Config, QueryError, WeatherResult, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// A source of current weather conditions.
///
/// Implementations make exactly one attempt per call: no retry, no backoff.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherResult, QueryError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current(&self, city: &str) -> Result<WeatherResult, QueryError> {
        (**self).current(city).await
    }
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for WeatherAPI.com.\n\
             Hint: run `weather-lookup configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => WeatherApiProvider::with_base_url(api_key.to_owned(), base_url),
        None => WeatherApiProvider::new(api_key.to_owned()),
    };

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `weather-lookup configure`"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
