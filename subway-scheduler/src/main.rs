use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use subway_scheduler::planner::PlannerConfig;
use subway_scheduler::solve::{load_request, solve};
use tracing_subscriber::EnvFilter;

/// Pick the highest-scoring set of subway tasks and the cheapest round trip
#[derive(Parser, Debug)]
#[command(name = "subway-scheduler", version, about, long_about = None)]
struct Args {
    /// Request JSON file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Reject requests with more tasks than this
    #[arg(long, env = "SUBWAY_MAX_TASKS")]
    max_tasks: Option<usize>,

    /// Reject requests referencing more distinct stations than this
    #[arg(long, env = "SUBWAY_MAX_STATIONS")]
    max_stations: Option<usize>,
}

impl Args {
    /// File to read, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| p.as_os_str() != "-")
    }

    fn config(&self) -> PlannerConfig {
        PlannerConfig::new(self.max_tasks, self.max_stations)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the response.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_scheduler=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = args.config();
    let response = match load_request(args.input_path()).and_then(|r| solve(&r, &config)) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to encode response: {e}");
            ExitCode::FAILURE
        }
    }
}
