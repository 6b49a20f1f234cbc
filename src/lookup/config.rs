//! Configuration types for lookup operations

use crate::cep::PostalCode;
use crate::providers::Provider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default wall-clock budget shared by all attempts, in milliseconds
pub const DEFAULT_OVERALL_TIMEOUT_MS: u64 = 1000;

/// Termination semantics of the race coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RaceMode {
    /// The first attempt to produce any outcome ends the whole operation
    #[default]
    FirstWins,
    /// Each attempt runs to completion and reports independently
    BothReport,
}

/// Configuration for a lookup race
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Postal code to resolve
    pub cep: PostalCode,
    /// Termination semantics (default: first-wins)
    pub mode: RaceMode,
    /// Wall-clock budget shared by all attempts (default: 1000ms)
    pub overall_timeout: Duration,
    /// Base URL for the apicep provider
    pub apicep_base_url: String,
    /// Base URL for the viacep provider
    pub viacep_base_url: String,
    /// Treat non-2xx statuses as failures instead of parsing the body
    pub strict_status: bool,
    /// Emit per-attempt diagnostics to stderr
    pub verbose: bool,
}

impl LookupConfig {
    /// Create a new LookupConfig builder
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.overall_timeout.as_millis() == 0 {
            return Err("overall_timeout must be greater than 0".to_string());
        }
        if self.apicep_base_url.is_empty() {
            return Err("apicep_base_url must not be empty".to_string());
        }
        if self.viacep_base_url.is_empty() {
            return Err("viacep_base_url must not be empty".to_string());
        }
        Ok(())
    }

    /// Get the base URL configured for `provider`
    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::ApiCep => &self.apicep_base_url,
            Provider::ViaCep => &self.viacep_base_url,
        }
    }
}

/// Builder for LookupConfig
pub struct LookupConfigBuilder {
    cep: Option<String>,
    mode: RaceMode,
    overall_timeout: Duration,
    apicep_base_url: String,
    viacep_base_url: String,
    strict_status: bool,
    verbose: bool,
}

impl LookupConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            cep: None,
            mode: RaceMode::default(),
            overall_timeout: Duration::from_millis(DEFAULT_OVERALL_TIMEOUT_MS),
            apicep_base_url: Provider::ApiCep.default_base_url().to_string(),
            viacep_base_url: Provider::ViaCep.default_base_url().to_string(),
            strict_status: false,
            verbose: false,
        }
    }

    /// Set the postal code to resolve (bare 8-digit form)
    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = Some(cep.into());
        self
    }

    /// Set the termination semantics
    pub fn mode(mut self, mode: RaceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the shared wall-clock budget
    pub fn overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = timeout;
        self
    }

    /// Override the apicep base URL
    pub fn apicep_base_url(mut self, url: impl Into<String>) -> Self {
        self.apicep_base_url = url.into();
        self
    }

    /// Override the viacep base URL
    pub fn viacep_base_url(mut self, url: impl Into<String>) -> Self {
        self.viacep_base_url = url.into();
        self
    }

    /// Treat non-2xx statuses as failures instead of parsing the body
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Enable or disable per-attempt diagnostics
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the configuration, validating the postal code and all fields
    pub fn build(self) -> Result<LookupConfig, String> {
        let cep = self.cep.ok_or_else(|| "cep must be specified".to_string())?;
        let cep: PostalCode = cep.parse().map_err(|e: crate::cep::ParseCepError| e.to_string())?;

        let config = LookupConfig {
            cep,
            mode: self.mode,
            overall_timeout: self.overall_timeout,
            apicep_base_url: self.apicep_base_url,
            viacep_base_url: self.viacep_base_url,
            strict_status: self.strict_status,
            verbose: self.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for LookupConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = LookupConfig::builder().cep("06550000").build().unwrap();
        assert_eq!(config.cep.as_str(), "06550000");
        assert_eq!(config.mode, RaceMode::FirstWins);
        assert_eq!(
            config.overall_timeout,
            Duration::from_millis(DEFAULT_OVERALL_TIMEOUT_MS)
        );
        assert_eq!(config.apicep_base_url, "https://cdn.apicep.com/file/apicep");
        assert_eq!(config.viacep_base_url, "http://viacep.com.br/ws");
        assert!(!config.strict_status);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder_custom() {
        let config = LookupConfig::builder()
            .cep("06233030")
            .mode(RaceMode::BothReport)
            .overall_timeout(Duration::from_millis(250))
            .apicep_base_url("http://localhost:8080/apicep")
            .viacep_base_url("http://localhost:8080/viacep")
            .strict_status(true)
            .build()
            .unwrap();

        assert_eq!(config.mode, RaceMode::BothReport);
        assert_eq!(config.overall_timeout.as_millis(), 250);
        assert_eq!(config.base_url(Provider::ApiCep), "http://localhost:8080/apicep");
        assert_eq!(config.base_url(Provider::ViaCep), "http://localhost:8080/viacep");
        assert!(config.strict_status);
    }

    #[test]
    fn test_config_validation() {
        // Missing cep
        let result = LookupConfig::builder().build();
        assert!(result.is_err());

        // Invalid cep
        let result = LookupConfig::builder().cep("06550-000").build();
        assert!(result.unwrap_err().contains("invalid CEP"));

        // Zero timeout
        let result = LookupConfig::builder()
            .cep("06550000")
            .overall_timeout(Duration::from_millis(0))
            .build();
        assert!(result.is_err());

        // Empty base URL
        let result = LookupConfig::builder()
            .cep("06550000")
            .viacep_base_url("")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_race_mode_serde() {
        assert_eq!(
            serde_json::to_string(&RaceMode::FirstWins).unwrap(),
            "\"first-wins\""
        );
        assert_eq!(
            serde_json::to_string(&RaceMode::BothReport).unwrap(),
            "\"both-report\""
        );
        let mode: RaceMode = serde_json::from_str("\"both-report\"").unwrap();
        assert_eq!(mode, RaceMode::BothReport);
    }

    #[test]
    fn test_default_mode_is_first_wins() {
        assert_eq!(RaceMode::default(), RaceMode::FirstWins);
    }
}
