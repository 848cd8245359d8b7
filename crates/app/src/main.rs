//! Probe - Main Entry Point
//!
//! Loads a suite file, runs it against live HTTP endpoints, and shows the
//! status of every test in the terminal while it runs.
//!
//! Exit codes: 0 when every test passed, 1 when any test failed, 2 when the
//! suite could not be loaded or run.

mod config;

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use probe_application::{RunReport, TestEngine};
use probe_infrastructure::{ReqwestTransport, TerminalDisplay, load_suite, spawn_renderer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const USAGE: &str = "usage: probe <suite.json|suite.yaml>";

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();

    // Logs go to stderr so they never interleave with the status display
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&config, &path).await {
        Ok(report) if report.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(error) => {
            tracing::error!(%error, path = %path, "run aborted");
            eprintln!("probe: {error}");
            ExitCode::from(2)
        }
    }
}

async fn run(config: &AppConfig, path: &str) -> Result<RunReport, Box<dyn Error>> {
    let suite = load_suite(path).await?;
    tracing::info!(
        suite = %suite.name,
        tests = suite.len(),
        "Starting Probe v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport = Arc::new(ReqwestTransport::with_user_agent(&config.user_agent)?);
    let display = if config.plain {
        TerminalDisplay::plain()
    } else {
        TerminalDisplay::stdout()
    };

    let (sink, renderer) = spawn_renderer(display);
    let engine = TestEngine::new(transport, sink);
    let result = engine.run_suite(&suite).await;

    // Closing the sink lets the renderer draw the final snapshot and exit
    drop(engine);
    renderer.await?;

    Ok(result?)
}
