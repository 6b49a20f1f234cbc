//! High-level lookup API

use crate::lookup::{LookupConfig, LookupError, LookupRace, RaceResult};

/// Convenience function to race all providers for a postal code
///
/// Uses default settings: first-wins mode, the public provider endpoints,
/// and a 1 second deadline.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let result = cepr::lookup("06550000").await?;
/// for report in &result.reports {
///     println!("API: {}", report.url);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`LookupError::Config`] for an invalid postal code and
/// [`LookupError::Client`] if the HTTP client cannot be built. Attempt
/// failures do not surface here; they live in the returned reports.
pub async fn lookup(cep: &str) -> Result<RaceResult, LookupError> {
    let config = LookupConfig::builder()
        .cep(cep)
        .build()
        .map_err(LookupError::Config)?;
    lookup_with_config(config).await
}

/// Convenience function to run a lookup race with custom configuration
///
/// # Errors
///
/// Returns [`LookupError::Client`] if the HTTP client cannot be built.
pub async fn lookup_with_config(config: LookupConfig) -> Result<RaceResult, LookupError> {
    Ok(LookupRace::new(config)?.run().await)
}
