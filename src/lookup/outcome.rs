//! Result types for lookup operations

use crate::lookup::LookupError;
use crate::providers::{AddressRecord, Provider};
use std::time::Duration;

/// The outcome of a single provider attempt
///
/// Created once per attempt and consumed exactly once by presentation;
/// failures here are attempt-local and never abort the sibling attempt.
pub type LookupOutcome = Result<AddressRecord, LookupError>;

/// Report produced by one provider attempt
#[derive(Debug)]
pub struct AttemptReport {
    /// Provider that was queried
    pub provider: Provider,
    /// Exact URL that was queried
    pub url: String,
    /// Decoded record, or the failure that ended the attempt
    pub outcome: LookupOutcome,
    /// Time from launch to completion of this attempt
    pub elapsed: Duration,
}

impl AttemptReport {
    /// Whether the attempt produced a decoded address
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of a whole lookup race
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let result = cepr::lookup("06550000").await?;
///
/// if let Some(address) = result.address() {
///     println!("{}", serde_json::to_string(address)?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RaceResult {
    /// Reports produced before the deadline: exactly one in first-wins mode,
    /// up to one per provider in both-report mode
    pub reports: Vec<AttemptReport>,
    /// Whether the shared deadline fired before all attempts completed
    pub deadline_exceeded: bool,
    /// Total wall-clock time of the race
    pub total_duration: Duration,
}

impl RaceResult {
    /// Whether any attempt produced a report, success or failure
    pub fn produced_output(&self) -> bool {
        !self.reports.is_empty()
    }

    /// The first successfully decoded address, if any
    pub fn address(&self) -> Option<&AddressRecord> {
        self.reports.iter().find_map(|r| r.outcome.as_ref().ok())
    }

    /// Number of attempts that produced a decoded address
    pub fn success_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ViaCepAddress;

    fn success_report() -> AttemptReport {
        AttemptReport {
            provider: Provider::ViaCep,
            url: "http://viacep.com.br/ws/06233030/json".to_string(),
            outcome: Ok(AddressRecord::ViaCep(ViaCepAddress {
                cep: "06233-030".to_string(),
                uf: "SP".to_string(),
                ..ViaCepAddress::default()
            })),
            elapsed: Duration::from_millis(42),
        }
    }

    fn failure_report() -> AttemptReport {
        AttemptReport {
            provider: Provider::ApiCep,
            url: "https://cdn.apicep.com/file/apicep/06550-000.json".to_string(),
            outcome: Err(LookupError::Transport("connection refused".to_string())),
            elapsed: Duration::from_millis(7),
        }
    }

    #[test]
    fn test_report_success_flag() {
        assert!(success_report().is_success());
        assert!(!failure_report().is_success());
    }

    #[test]
    fn test_empty_result_produced_no_output() {
        let result = RaceResult {
            reports: Vec::new(),
            deadline_exceeded: true,
            total_duration: Duration::from_millis(1000),
        };
        assert!(!result.produced_output());
        assert!(result.address().is_none());
        assert_eq!(result.success_count(), 0);
    }

    #[test]
    fn test_address_skips_failures() {
        let result = RaceResult {
            reports: vec![failure_report(), success_report()],
            deadline_exceeded: false,
            total_duration: Duration::from_millis(50),
        };
        assert!(result.produced_output());
        assert_eq!(result.success_count(), 1);

        let address = result.address().unwrap();
        assert_eq!(address.provider(), Provider::ViaCep);
    }
}
