use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified reference to a Cloud Tasks queue.
///
/// The components are taken as given. Nothing is checked locally; the
/// service rejects malformed names when the task is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueName {
    pub project_id: String,
    pub location: String,
    pub queue: String,
}

impl QueueName {
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        queue: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            queue: queue.into(),
        }
    }

    /// Resource path in the form `projects/{project}/locations/{location}/queues/{queue}`
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/locations/{}/queues/{}",
            self.project_id, self.location, self.queue
        )
    }
}

/// Service-assigned resource name of a created task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_path_format() {
        let queue = QueueName::new("my-project", "us-central1", "my-queue");
        assert_eq!(
            queue.path(),
            "projects/my-project/locations/us-central1/queues/my-queue"
        );
    }

    #[test]
    fn test_queue_path_components_are_not_validated() {
        let cases = vec![
            ("p", "l", "q", "projects/p/locations/l/queues/q"),
            ("", "", "", "projects//locations//queues/"),
            ("Bad Project", "nowhere", "q/1", "projects/Bad Project/locations/nowhere/queues/q/1"),
        ];

        for (project, location, queue, expected) in cases {
            let name = QueueName::new(project, location, queue);
            assert_eq!(name.path(), expected);
            assert_eq!(name.to_string(), expected);
        }
    }

    #[test]
    fn test_task_name_display() {
        let name = TaskName::new("projects/p/locations/l/queues/q/tasks/123");
        assert_eq!(name.as_str(), "projects/p/locations/l/queues/q/tasks/123");
        assert_eq!(format!("{}", name), "projects/p/locations/l/queues/q/tasks/123");
    }

    #[test]
    fn test_task_name_is_transparent_in_json() {
        let name: TaskName = serde_json::from_str("\"projects/p/locations/l/queues/q/tasks/1\"")
            .expect("Failed to deserialize task name");
        assert_eq!(name.into_inner(), "projects/p/locations/l/queues/q/tasks/1");
    }
}
