//! Conjoint Sherpa command-line interface.
//!
//! Usage:
//!   conjoint-sherpa setup-dir <QUESTION> [--base DIR]
//!   conjoint-sherpa generate-design <SPEC> [-o FILE] [--iterations N]
//!   conjoint-sherpa analyze <RESULTS_CSV> <DESIGN_SPEC> [--output-dir DIR]
//!   conjoint-sherpa market-sim <UTILITIES_JSON> <PROFILES_JSON>
//!
//! Results go to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use conjoint_sherpa::adapters::{CsvResultsParser, FileArtifactStore, MarkdownReportRenderer};
use conjoint_sherpa::application::{
    AnalyzeResultsCommand, AnalyzeResultsHandler, GenerateDesignCommand, GenerateDesignHandler,
    SetupProjectCommand, SetupProjectHandler, SimulateMarketHandler, SimulateMarketQuery,
};
use conjoint_sherpa::config::{AppConfig, LogFormat, LoggingConfig};
use conjoint_sherpa::ports::ArtifactStore;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser)]
#[command(name = "conjoint-sherpa")]
#[command(version, about = "Design and analyze choice-based conjoint studies")]
struct Cli {
    /// Log filter directive (overrides config; RUST_LOG overrides both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a dated project directory for a research question
    SetupDir {
        /// Research question text
        question: String,

        /// Base directory
        #[arg(long, default_value = ".")]
        base: PathBuf,
    },
    /// Generate balanced choice sets from a design spec
    GenerateDesign {
        /// Design spec (JSON or YAML)
        spec_file: PathBuf,

        /// Output JSON path (default from config: conjoint_choice_sets.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random restarts per version (default from config: 1000)
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Estimate utilities and importance from survey results
    Analyze {
        /// Results CSV
        results_csv: PathBuf,

        /// Design spec or choice-sets document
        design_spec: PathBuf,

        /// Directory for output files (default from config: .)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Predict choice shares with a logit model
    MarketSim {
        /// utilities.json from the analyze step
        utilities_file: PathBuf,

        /// JSON array of product profiles
        profiles_file: PathBuf,
    },
}

// ============================================================================
// Logging
// ============================================================================

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run(command: Commands, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn ArtifactStore> = Arc::new(FileArtifactStore::new());
    let renderer = Arc::new(MarkdownReportRenderer::new());

    match command {
        Commands::SetupDir { question, base } => {
            let result = SetupProjectHandler::new(store).handle(SetupProjectCommand {
                question,
                base_dir: base,
                date: None,
            })?;
            println!("{}", result.directory.name());
            println!("{}", result.status.as_str());
        }
        Commands::GenerateDesign {
            spec_file,
            output,
            iterations,
        } => {
            let result = GenerateDesignHandler::new(store).handle(GenerateDesignCommand {
                spec_path: spec_file,
                output_path: output.unwrap_or_else(|| config.output.choice_sets_file.clone()),
                iterations: iterations.unwrap_or(config.search.iterations),
            })?;
            let doc = &result.document;
            println!(
                "Generated {} design versions, {} tasks each, {} profiles per task",
                doc.n_versions, doc.tasks_per_version, doc.profiles_per_task
            );
            println!("Total unique profiles: {}", doc.total_profiles);
            println!("Output: {}", result.output_path.display());
            for version in &doc.versions {
                println!(
                    "  Version {}: balance_score={}",
                    version.version, version.balance_score
                );
            }
        }
        Commands::Analyze {
            results_csv,
            design_spec,
            output_dir,
        } => {
            let handler =
                AnalyzeResultsHandler::new(store, Arc::new(CsvResultsParser::new()), renderer);
            let result = handler.handle(AnalyzeResultsCommand {
                results_path: results_csv,
                design_spec_path: design_spec,
                output_dir: output_dir.unwrap_or_else(|| config.output.analysis_dir.clone()),
            })?;
            println!(
                "Analysis complete: {} observations",
                result.summary.n_observations
            );
            println!("Output files:");
            for path in &result.written {
                println!("  {}", path.display());
            }
        }
        Commands::MarketSim {
            utilities_file,
            profiles_file,
        } => {
            let result = SimulateMarketHandler::new(store, renderer).handle(SimulateMarketQuery {
                utilities_path: utilities_file,
                profiles_path: profiles_file,
            })?;
            print!("{}", result.table);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    apply_overrides(&mut config, &cli);
    if let Err(e) = config.validate() {
        eprintln!("ERROR: Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
