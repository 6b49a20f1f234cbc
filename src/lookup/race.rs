//! The lookup race coordinator
//!
//! Launches one attempt per provider against a shared deadline and decides
//! which outcomes become the result. All attempts start immediately; the
//! deadline governs them from the outside, and cancellation is by drop, so
//! no request keeps running once the race is over.

use crate::lookup::{AttemptReport, LookupConfig, LookupError, RaceMode, RaceResult};
use crate::providers::{fetch_address, Provider};
use futures::stream::{FuturesUnordered, StreamExt};
use std::time::Instant;

/// Coordinates one lookup race across all providers
///
/// The coordinator owns an explicitly constructed HTTP client; tests inject
/// their own via [`LookupRace::with_client`].
///
/// # Examples
///
/// ```no_run
/// use cepr::{LookupConfig, LookupRace};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LookupConfig::builder().cep("06550000").build()?;
/// let result = LookupRace::new(config)?.run().await;
///
/// for report in &result.reports {
///     println!("{}: {:?}", report.provider, report.outcome);
/// }
/// # Ok(())
/// # }
/// ```
pub struct LookupRace {
    config: LookupConfig,
    client: reqwest::Client,
}

impl LookupRace {
    /// Create a coordinator with a fresh HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Client`] if the client cannot be constructed.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Create a coordinator with an injected HTTP client
    pub fn with_client(config: LookupConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// The configuration this coordinator runs with
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Run the race to completion or deadline
    ///
    /// In first-wins mode the first attempt to produce ANY outcome, success
    /// or failure, becomes the sole report; the losing attempt is dropped,
    /// which aborts its in-flight request. In both-report mode every attempt
    /// that completes before the deadline contributes a report.
    ///
    /// When the deadline fires first, every still-running attempt is dropped
    /// and the result carries `deadline_exceeded` with whatever reports were
    /// already in hand (none, in first-wins mode).
    pub async fn run(&self) -> RaceResult {
        let started = Instant::now();
        let deadline = self.config.overall_timeout;

        let (reports, deadline_exceeded) = match self.config.mode {
            RaceMode::FirstWins => {
                let winner = tokio::time::timeout(deadline, async {
                    tokio::select! {
                        report = self.attempt(Provider::ApiCep) => report,
                        report = self.attempt(Provider::ViaCep) => report,
                    }
                })
                .await;

                match winner {
                    Ok(report) => (vec![report], false),
                    Err(_) => (Vec::new(), true),
                }
            }
            RaceMode::BothReport => {
                let mut attempts = FuturesUnordered::new();
                for provider in Provider::all() {
                    attempts.push(self.attempt(*provider));
                }

                let mut reports = Vec::with_capacity(attempts.len());
                let drained = tokio::time::timeout(deadline, async {
                    while let Some(report) = attempts.next().await {
                        reports.push(report);
                    }
                })
                .await;

                (reports, drained.is_err())
            }
        };

        if self.config.verbose && deadline_exceeded {
            eprintln!(
                "lookup deadline of {}ms exceeded with {} report(s) in hand",
                deadline.as_millis(),
                reports.len()
            );
        }

        RaceResult {
            reports,
            deadline_exceeded,
            total_duration: started.elapsed(),
        }
    }

    /// Run a single provider attempt, recovering every failure into the report
    async fn attempt(&self, provider: Provider) -> AttemptReport {
        let url = provider.request_url(self.config.base_url(provider), &self.config.cep);
        let started = Instant::now();

        let outcome =
            fetch_address(&self.client, provider, &url, self.config.strict_status).await;

        let elapsed = started.elapsed();
        if self.config.verbose {
            match &outcome {
                Ok(_) => eprintln!("{}: answered in {}ms", provider, elapsed.as_millis()),
                Err(e) => eprintln!("{}: failed after {}ms: {}", provider, elapsed.as_millis(), e),
            }
        }

        AttemptReport {
            provider,
            url,
            outcome,
            elapsed,
        }
    }
}
