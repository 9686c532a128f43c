//! Command-line entry point
//!
//! `create-http-task <PROJECT_ID> <LOCATION> <QUEUE> <URL>` creates one task
//! and prints `Created Task {name}`.

use crate::tracing_utils::trace_error_chain;
use crate::{CloudTasksClient, SubmitterConfig, TaskName, TaskQueueClient, TaskSubmitter};
use clap::Parser;
use std::env;
use std::io::Write;

/// Create a Cloud Tasks task that dispatches an HTTP GET to a URL
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "create-http-task", version, about)]
pub struct SubmitArgs {
    /// Google Cloud project ID
    pub project_id: String,

    /// Queue location, e.g. us-central1
    pub location: String,

    /// Queue name
    pub queue: String,

    /// URL the task will GET when dispatched
    pub url: String,
}

/// Initialize stderr logging from `LOG_LEVEL` (default `warn`)
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    // A subscriber may already be installed when embedded in another program
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Submit with an already-built client and write the result line to `out`
pub async fn run_with_client<C, W>(
    args: &SubmitArgs,
    client: &C,
    out: &mut W,
) -> Result<TaskName, Box<dyn std::error::Error>>
where
    C: TaskQueueClient + ?Sized,
    W: Write,
{
    let name = TaskSubmitter::new(client)
        .submit(&args.project_id, &args.location, &args.queue, &args.url)
        .await?;

    writeln!(out, "Created Task {}", name)?;

    Ok(name)
}

/// Submit using configuration loaded from files and the environment
pub async fn run_with_config(
    args: SubmitArgs,
    config: SubmitterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(config = ?config, "Loaded configuration");

    let client = CloudTasksClient::from_config(&config)?;
    let stdout = std::io::stdout();
    run_with_client(&args, &client, &mut stdout.lock()).await?;

    Ok(())
}

/// Line written to stderr when a run fails
pub fn failure_message(error: &dyn std::error::Error) -> String {
    format!("Error: {}", error)
}

/// Parse process arguments, load configuration and submit
///
/// # Example
///
/// ```rust,no_run
/// use cloud_task_submitter::cli::{failure_message, run};
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = run().await {
///         eprintln!("{}", failure_message(&*e));
///         std::process::exit(1);
///     }
/// }
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Exits with status 2 and a usage message before anything else happens
    let args = SubmitArgs::parse();

    init_logging();

    let result = match SubmitterConfig::load() {
        Ok(config) => run_with_config(args, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = &result {
        trace_error_chain(&**e);
    }

    result
}
