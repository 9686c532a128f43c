//! # Cloud Task Submitter
//!
//! Creates a single Google Cloud Tasks task that dispatches an HTTP GET to a
//! URL, and reports the name the service assigned to it.
//!
//! ## Features
//!
//! - **Queue resource names** built from project, location and queue
//! - **Cloud Tasks v2 REST client** with explicit credentials
//! - **Pluggable client trait** for substituting the remote service in tests
//! - **File and environment configuration** (optional)
//! - **Structured tracing** of each submission (optional)
//! - **Command-line binary** `create-http-task` (optional)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloud_task_submitter::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudTasksClient::new(
//!         "https://cloudtasks.googleapis.com",
//!         Credentials::access_token(std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")?),
//!         None,
//!     )?;
//!
//!     let name = TaskSubmitter::new(&client)
//!         .submit("my-project", "us-central1", "my-queue", "https://example.com/handler")
//!         .await?;
//!
//!     println!("Created Task {}", name);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
pub mod config;
pub mod error;
pub mod queue;
pub mod submitter;
pub mod task;

#[cfg(feature = "tracing")]
pub mod tracing_utils;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;

pub use client::*;
pub use config::*;
pub use error::*;
pub use queue::*;
pub use submitter::*;
pub use task::*;

pub mod prelude;
