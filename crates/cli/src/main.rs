//! # cost-anomaly
//!
//! Command-line interface for the cost anomaly detector.

use anomaly::{
    AnomalyDetector, AnomalyVerdict, DetectRequest, DetectorConfig, ThresholdAnomalyDetector,
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_MIN_HISTORY, DEFAULT_MULTIPLIER,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;

type CliResult<T> = std::result::Result<T, String>;

/// Comma-separated costs; an empty string is an empty history.
#[derive(Debug, Clone, PartialEq)]
struct CostHistory(Vec<f64>);

impl FromStr for CostHistory {
    type Err = String;

    fn from_str(s: &str) -> CliResult<Self> {
        if s.trim().is_empty() {
            return Ok(Self(Vec::new()));
        }
        s.split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("invalid cost '{}': {}", v.trim(), e))
            })
            .collect::<CliResult<Vec<f64>>>()
            .map(Self)
    }
}

#[derive(Parser)]
#[command(name = "cost-anomaly")]
#[command(about = "Flag a cost that is far above its history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge one cost against a history of past costs
    Detect {
        /// Request file in the `/detect` body shape ({"historicalCosts": [...], "currentCost": n})
        #[arg(short, long, conflicts_with_all = ["history", "current"])]
        input: Option<PathBuf>,

        /// Comma-separated historical costs ('' for none)
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        history: Option<CostHistory>,

        /// Cost to evaluate
        #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
        current: Option<f64>,

        /// Standard deviations above the mean before a cost is flagged
        #[arg(short, long, default_value_t = DEFAULT_MULTIPLIER)]
        multiplier: f64,

        /// Minimum number of historical costs needed for a verdict
        #[arg(long, default_value_t = DEFAULT_MIN_HISTORY)]
        min_history: usize,

        /// Currency symbol used in alert messages
        #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
        currency_symbol: String,

        /// Include mean, standard deviation and threshold in the output
        #[arg(short, long)]
        verbose: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options of the `detect` subcommand
struct DetectArgs {
    input: Option<PathBuf>,
    history: Option<CostHistory>,
    current: Option<f64>,
    config: DetectorConfig,
    verbose: bool,
    output: Option<PathBuf>,
}

/// Load a request document from a JSON file
fn load_request(path: &PathBuf) -> CliResult<DetectRequest> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;
    DetectRequest::from_json(json).map_err(|e| e.to_string())
}

/// Build the request from either a file or the inline flags
fn resolve_request(
    input: Option<&PathBuf>,
    history: Option<CostHistory>,
    current: Option<f64>,
) -> CliResult<DetectRequest> {
    if let Some(path) = input {
        return load_request(path);
    }
    match (history, current) {
        (Some(CostHistory(history)), Some(current)) => Ok(DetectRequest::new(history, current)),
        _ => Err("Provide --input, or both --history and --current".to_string()),
    }
}

/// Write the verdict to file or stdout
fn write_verdict(verdict: &AnomalyVerdict, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, verdict)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Verdict written to {:?}", path);
    } else {
        let json = serde_json::to_string_pretty(verdict)
            .map_err(|e| format!("Failed to serialize verdict: {}", e))?;
        println!("{}", json);
    }

    Ok(())
}

/// Evaluate a request with the given configuration
fn evaluate(
    config: DetectorConfig,
    request: &DetectRequest,
    verbose: bool,
) -> CliResult<AnomalyVerdict> {
    let detector = ThresholdAnomalyDetector::from_config(config).map_err(|e| e.to_string())?;
    let verdict = detector.evaluate(&request.historical_costs, request.current_cost);
    Ok(if verbose { verdict } else { verdict.without_stats() })
}

/// Run detect command
fn run_detect(args: DetectArgs) -> CliResult<()> {
    let request = resolve_request(args.input.as_ref(), args.history, args.current)?;
    tracing::debug!(
        history_len = request.historical_costs.len(),
        current_cost = request.current_cost,
        "evaluating"
    );

    if request.historical_costs.len() < args.config.min_history {
        tracing::warn!(
            "only {} historical costs, need {} for a verdict",
            request.historical_costs.len(),
            args.config.min_history
        );
    }

    let verdict = evaluate(args.config, &request, args.verbose)?;
    write_verdict(&verdict, args.output.as_ref())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect {
            input,
            history,
            current,
            multiplier,
            min_history,
            currency_symbol,
            verbose,
            output,
        } => run_detect(DetectArgs {
            input,
            history,
            current,
            config: DetectorConfig::new(multiplier, min_history)
                .with_currency_symbol(currency_symbol),
            verbose,
            output,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
