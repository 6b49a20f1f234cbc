//! cepr - concurrent Brazilian postal code (CEP) lookup
//!
//! This library races multiple public CEP providers under a shared deadline
//! and reports the first answer, or every answer, depending on the chosen
//! race mode.

pub mod cep;
pub mod lookup;
pub mod providers;

// Re-export core types for library users
pub use cep::{ParseCepError, PostalCode};
pub use lookup::{
    lookup, lookup_with_config, AttemptReport, LookupConfig, LookupConfigBuilder, LookupError,
    LookupOutcome, LookupRace, RaceMode, RaceResult, DEFAULT_OVERALL_TIMEOUT_MS,
};
pub use providers::{AddressRecord, ApiCepAddress, Provider, ViaCepAddress};
