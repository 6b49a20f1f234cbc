//! CEP lookup race
//!
//! One attempt per provider runs under a shared deadline; the coordinator
//! decides which outcomes become the result. Two termination semantics are
//! offered: first-wins (the first outcome, success or failure, ends the
//! whole operation) and both-report (each attempt reports independently).

pub mod api;
pub mod config;
pub mod error;
pub mod outcome;
pub mod race;

pub use api::{lookup, lookup_with_config};
pub use config::{LookupConfig, LookupConfigBuilder, RaceMode, DEFAULT_OVERALL_TIMEOUT_MS};
pub use error::LookupError;
pub use outcome::{AttemptReport, LookupOutcome, RaceResult};
pub use race::LookupRace;
