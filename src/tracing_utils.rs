//! Structured tracing for task submission
//!
//! Events are emitted with stable field names so submissions can be
//! followed in aggregated logs.

use crate::{QueueName, TaskName};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events in the life of a single submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// The request is about to be sent
    Submitting {
        parent: String,
        http_method: String,
        url: String,
    },
    /// The service created the task
    Created {
        parent: String,
        task_name: String,
        duration_ms: u64,
    },
    /// The submission failed
    Rejected {
        parent: String,
        error: String,
        duration_ms: u64,
    },
}

impl SubmissionEvent {
    pub fn created(parent: &QueueName, task_name: &TaskName, duration: Duration) -> Self {
        SubmissionEvent::Created {
            parent: parent.path(),
            task_name: task_name.to_string(),
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn rejected(parent: &QueueName, error: &dyn std::error::Error, duration: Duration) -> Self {
        SubmissionEvent::Rejected {
            parent: parent.path(),
            error: error.to_string(),
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Trace a submission event with structured logging
pub fn trace_submission_event(event: &SubmissionEvent) {
    match event {
        SubmissionEvent::Submitting {
            parent,
            http_method,
            url,
        } => {
            tracing::info!(
                parent = %parent,
                http_method = %http_method,
                url = %url,
                event = "submitting",
                "Submitting task"
            );
        }
        SubmissionEvent::Created {
            parent,
            task_name,
            duration_ms,
        } => {
            tracing::info!(
                parent = %parent,
                task_name = %task_name,
                duration_ms = duration_ms,
                event = "created",
                "Task created"
            );
        }
        // The caller reports the failure itself; this is context only
        SubmissionEvent::Rejected {
            parent,
            error,
            duration_ms,
        } => {
            tracing::warn!(
                parent = %parent,
                error = %error,
                duration_ms = duration_ms,
                event = "rejected",
                "Task submission failed"
            );
        }
    }
}

/// Trace the source chain of an error at debug level
pub fn trace_error_chain(error: &dyn std::error::Error) {
    let mut source = error.source();
    let mut depth = 1;
    while let Some(err) = source {
        tracing::debug!(error_depth = depth, error = %err, "Error chain");
        source = err.source();
        depth += 1;
    }
}
