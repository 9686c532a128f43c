use crate::{HttpRequest, QueueName, TaskName, TaskQueueClient, TaskSubmitError};

#[cfg(feature = "tracing")]
use crate::tracing_utils::{trace_submission_event, SubmissionEvent};
#[cfg(feature = "tracing")]
use std::time::Instant;

/// Submits a single HTTP GET task to a queue
pub struct TaskSubmitter<'a, C: TaskQueueClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: TaskQueueClient + ?Sized> TaskSubmitter<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Create a task on `projects/{project_id}/locations/{location}/queues/{queue}`
    /// that the service will dispatch as `GET url`.
    ///
    /// Nothing is validated locally. Every call creates a new task.
    pub async fn submit(
        &self,
        project_id: &str,
        location: &str,
        queue: &str,
        url: &str,
    ) -> Result<TaskName, TaskSubmitError> {
        let parent = QueueName::new(project_id, location, queue);
        let http_request = HttpRequest::get(url);

        #[cfg(feature = "tracing")]
        let started = {
            trace_submission_event(&SubmissionEvent::Submitting {
                parent: parent.path(),
                http_method: http_request.http_method.as_str().to_string(),
                url: http_request.url.clone(),
            });
            Instant::now()
        };

        let result = self.client.create_task(&parent, http_request).await;

        #[cfg(feature = "tracing")]
        {
            let elapsed = started.elapsed();
            match &result {
                Ok(name) => trace_submission_event(&SubmissionEvent::created(&parent, name, elapsed)),
                Err(e) => trace_submission_event(&SubmissionEvent::rejected(&parent, e, elapsed)),
            }
        }

        result
    }
}
