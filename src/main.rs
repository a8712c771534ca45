use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use neonrvv::{
    harness::{
        self, correctness, performance,
        report::{self, Header},
        tables, BackendKind, HarnessConfig, ReportFormat, CATALOG,
    },
    Result,
};

#[derive(Parser)]
#[command(
    name = "neonrvv",
    version,
    about = "Run, time and cross-check NEON translation units on the RVV backend"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with harness settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<ReportFormat>,

    /// Seed for the random cases
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Timed repetitions per case
    #[arg(short, long, global = true)]
    iterations: Option<usize>,

    /// Untimed repetitions per case before timing
    #[arg(long, global = true)]
    warmup: Option<usize>,

    /// Seeded random cases appended to the documented table
    #[arg(short, long, global = true)]
    random_cases: Option<usize>,

    /// Backend to run on (defaults to the one selected at build time)
    #[arg(short, long, global = true)]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the translation units and their signatures
    List,
    /// Print per-lane results of the named operations
    Run {
        #[arg(required = true)]
        operations: Vec<String>,
    },
    /// Time load + unit + store for the named operations
    Bench {
        #[arg(required = true)]
        operations: Vec<String>,
    },
    /// Compare the RVV backend with the reference lane by lane (all operations by default)
    Compare { operations: Vec<String> },
    /// Show the build configuration
    Info,
}

impl Cli {
    fn harness_config(&self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if let Some(random_cases) = self.random_cases {
            config.random_cases = random_cases;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Prints the report and tells whether every check passed.
fn execute(cli: &Cli) -> Result<bool> {
    let mut config = cli.harness_config()?;
    let backend = cli.backend.unwrap_or_else(BackendKind::active);
    let header = Header::now(backend);
    debug!(?config, %backend, "harness configured");

    let (output, passed) = match &cli.command {
        Command::List => {
            let ops: Vec<_> = CATALOG.iter().collect();
            (report::render_list(&header, &ops, config.format)?, true)
        }
        Command::Run { operations } => {
            let runs = harness::select(operations)?
                .into_iter()
                .map(|op| {
                    correctness::run(op, backend, &tables::cases(op, config.random_cases, config.seed))
                })
                .collect::<Result<Vec<_>>>()?;
            (report::render_runs(&header, &runs, config.format)?, true)
        }
        Command::Bench { operations } => {
            let benches = harness::select(operations)?
                .into_iter()
                .map(|op| {
                    performance::bench(
                        op,
                        backend,
                        &tables::cases(op, config.random_cases, config.seed),
                        config.iterations,
                        config.warmup,
                    )
                })
                .collect::<Result<Vec<_>>>()?;
            (report::render_benches(&header, &benches, config.format)?, true)
        }
        Command::Compare { operations } => {
            if !operations.is_empty() {
                config.operations = operations.clone();
            }
            let ops = harness::select(&config.operations)?;
            let comparisons = correctness::compare_all(&ops, &config)?;
            let passed = comparisons.iter().all(correctness::Comparison::passed);
            (report::render_comparisons(&header, &comparisons, config.format)?, passed)
        }
        Command::Info => (report::render_info(&header, CATALOG.len(), config.format)?, true),
    };

    println!("{output}");
    Ok(passed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("backends disagree");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
