//! Convenience re-exports for common types and traits
//!
//! Import everything needed to submit a task with
//! `use cloud_task_submitter::prelude::*;`

pub use crate::{
    CloudTasksClient, CreateTaskRequest, Credentials, HttpMethod, HttpRequest, QueueName, Task,
    TaskName, TaskQueueClient, TaskSubmitError, TaskSubmitter,
};

// Configuration types
pub use crate::{ConfigBuilder, CredentialsConfig, EndpointConfig, SubmitterConfig};

// Async trait for custom client implementations
pub use async_trait::async_trait;

#[cfg(feature = "tracing")]
pub use crate::tracing_utils::{trace_error_chain, trace_submission_event, SubmissionEvent};
