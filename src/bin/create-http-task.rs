//! Create an HTTP GET task on a Cloud Tasks queue
//!
//! Usage: `create-http-task <PROJECT_ID> <LOCATION> <QUEUE> <URL>`
//!
//! Credentials come from `GOOGLE_OAUTH_ACCESS_TOKEN` or a `cloud-tasks.toml`
//! / `cloud-tasks.yaml` file, e.g. `GOOGLE_OAUTH_ACCESS_TOKEN=$(gcloud auth print-access-token)`.

use cloud_task_submitter::cli::{failure_message, run};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", failure_message(&*e));
        std::process::exit(1);
    }
}
