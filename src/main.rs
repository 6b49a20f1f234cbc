//! cepr - concurrent CEP lookup racing multiple providers.
//!
//! This is the command-line interface for the cepr library.

#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use cepr::{AddressRecord, LookupConfig, RaceMode, RaceResult, DEFAULT_OVERALL_TIMEOUT_MS};
use clap::Parser;
use std::time::Duration;

/// Get the version string for cepr
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the lookup tool.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Concurrent Brazilian postal code (CEP) lookup", long_about = None)]
struct Args {
    /// 8-digit postal code to resolve, digits only (e.g. 06550000)
    cep: String,

    /// Race semantics: stop at the first outcome, or report every provider
    #[clap(long, value_enum, default_value_t = ModeArg::FirstWins)]
    mode: ModeArg,

    /// Overall deadline shared by all attempts, in milliseconds
    #[clap(long, default_value_t = DEFAULT_OVERALL_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Base URL for the apicep provider
    #[clap(long)]
    apicep_url: Option<String>,

    /// Base URL for the viacep provider
    #[clap(long)]
    viacep_url: Option<String>,

    /// Treat non-2xx provider statuses as failures instead of parsing the body
    #[clap(long)]
    strict_status: bool,

    /// Output results in JSON format
    #[clap(long)]
    json: bool,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    FirstWins,
    BothReport,
}

impl ModeArg {
    fn to_race_mode(self) -> RaceMode {
        match self {
            ModeArg::FirstWins => RaceMode::FirstWins,
            ModeArg::BothReport => RaceMode::BothReport,
        }
    }
}

/// JSON output structure for a single attempt
#[derive(Debug, serde::Serialize)]
struct JsonAttempt {
    provider: String,
    url: String,
    address: Option<AddressRecord>,
    error: Option<String>,
    elapsed_ms: u128,
}

/// JSON output structure for the entire lookup result
#[derive(Debug, serde::Serialize)]
struct JsonOutput {
    version: String,
    cep: String,
    mode: RaceMode,
    deadline_exceeded: bool,
    total_ms: u128,
    attempts: Vec<JsonAttempt>,
}

fn main() {
    // Quick check for help/version before starting async runtime
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        // Clap will handle this
        let _ = Args::parse();
        return;
    }
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-V") {
        println!("cepr {}", get_version());
        return;
    }

    // Create single-threaded tokio runtime for lower overhead
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    let result = runtime.block_on(async_main());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if args.timeout_ms == 0 {
        eprintln!("Error: timeout-ms must be greater than 0");
        std::process::exit(1);
    }

    let mode = args.mode.to_race_mode();

    let mut builder = LookupConfig::builder()
        .cep(&args.cep)
        .mode(mode)
        .overall_timeout(Duration::from_millis(args.timeout_ms))
        .strict_status(args.strict_status)
        .verbose(args.verbose);

    if let Some(url) = &args.apicep_url {
        builder = builder.apicep_base_url(url);
    }
    if let Some(url) = &args.viacep_url {
        builder = builder.viacep_base_url(url);
    }

    let config = match builder.build() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.verbose && !args.json {
        eprintln!(
            "cepr resolving {} with a {}ms deadline",
            config.cep, args.timeout_ms
        );
    }

    let result = cepr::lookup_with_config(config).await?;

    // Display results
    if args.json {
        display_json_results(&args.cep, mode, &result)?;
    } else {
        display_text_results(&result);
        if !result.produced_output() {
            eprintln!(
                "Error: deadline exceeded after {}ms with no provider response",
                args.timeout_ms
            );
        }
    }

    if !result.produced_output() {
        std::process::exit(1);
    }

    std::process::exit(0);
}

/// Display reports in the classic two-line-per-attempt text format
fn display_text_results(result: &RaceResult) {
    for report in &result.reports {
        println!("API: {}", report.url);
        match &report.outcome {
            Ok(address) => match serde_json::to_string(address) {
                Ok(json) => println!("Resultado: {}", json),
                Err(e) => eprintln!("Error: failed to serialize result: {}", e),
            },
            Err(e) => eprintln!("{}: {}", report.provider, e),
        }
    }
}

/// Display results in JSON format
fn display_json_results(cep: &str, mode: RaceMode, result: &RaceResult) -> Result<()> {
    let attempts = result
        .reports
        .iter()
        .map(|report| JsonAttempt {
            provider: report.provider.name().to_string(),
            url: report.url.clone(),
            address: report.outcome.as_ref().ok().cloned(),
            error: report.outcome.as_ref().err().map(|e| e.to_string()),
            elapsed_ms: report.elapsed.as_millis(),
        })
        .collect();

    let json_output = JsonOutput {
        version: get_version().to_string(),
        cep: cep.to_string(),
        mode,
        deadline_exceeded: result.deadline_exceeded,
        total_ms: result.total_duration.as_millis(),
        attempts,
    };

    println!("{}", serde_json::to_string_pretty(&json_output)?);
    Ok(())
}
