//! `u-procsim`: compare CPU scheduling algorithms on one process set.
//!
//! Logs go to stderr; results go to stdout.
//!
//! Environment variables:
//! - RUST_LOG: log filter (default derived from `-v`)
//! - PROCSIM_TRACE_JSON: emit JSON log lines when `1` or `true`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_procsim::config::SimulationConfig;
use u_procsim::report::{render_chart, render_metrics_table, render_results, render_timeline};
use u_procsim::scheduler::{Admission, AlgorithmKind};
use u_procsim::simulation::{load_processes, Simulation, SimulationReport};
use u_procsim::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Per-process results, metrics table and bar chart
    Text,
    /// The full report as JSON
    Json,
}

/// Simulate FCFS, SJF, SRTF, round robin and priority scheduling on one process set
#[derive(Parser, Debug)]
#[command(name = "u-procsim", version, about, long_about = None)]
struct Args {
    /// Number of processes to generate
    #[arg(short = 'n', long)]
    processes: Option<usize>,

    /// Round-robin time quantum in ticks
    #[arg(short, long, allow_hyphen_values = true)]
    quantum: Option<i64>,

    /// Seed for reproducible process generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with the process set (skips generation)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Algorithm to run (repeatable): fcfs, sjf, srtf, rr, priority, priority-preemptive
    #[arg(short, long = "algorithm")]
    algorithms: Vec<AlgorithmKind>,

    /// Round-robin admission: gated or queue-order
    #[arg(long)]
    rr_admission: Option<Admission>,

    /// Run algorithms on parallel threads
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the execution timeline of every algorithm
    #[arg(long)]
    timeline: bool,

    /// Skip the bar chart
    #[arg(long)]
    no_chart: bool,

    /// Length of the longest chart bar
    #[arg(long, default_value_t = 40)]
    chart_width: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let use_json = std::env::var("PROCSIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(count) = args.processes {
        config = config.with_process_count(count);
    }
    if let Some(quantum) = args.quantum {
        config = config.with_time_quantum(quantum);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if !args.algorithms.is_empty() {
        config = config.with_algorithms(args.algorithms.clone());
    }
    if let Some(admission) = args.rr_admission {
        config = config.with_admission(admission);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let simulation = Simulation::new(build_config(args)?)?;
    info!(config = ?simulation.config(), "configured");

    let report = match &args.input {
        Some(path) => simulation.run(&load_processes(path)?)?,
        None => simulation.run_generated()?,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report, args)),
    }
    Ok(())
}

fn render_text(report: &SimulationReport, args: &Args) -> String {
    let mut out = String::new();
    let seed = report
        .seed
        .map_or_else(|| "n/a".to_string(), |s| s.to_string());
    out.push_str(&format!(
        "Processes: {} | Quantum: {} | Seed: {seed}\n",
        report.input.len(),
        report.time_quantum
    ));

    for run in &report.runs {
        out.push('\n');
        out.push_str(&render_results(run));
    }

    out.push('\n');
    out.push_str(&render_metrics_table(report));

    if !args.no_chart {
        out.push('\n');
        out.push_str(&render_chart(report, args.chart_width));
    }

    if args.timeline {
        out.push('\n');
        for run in &report.runs {
            out.push_str(&render_timeline(run));
        }
    }
    out
}
