//! Wire types for the Cloud Tasks v2 `tasks.create` call

use crate::{QueueName, TaskName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP method the service uses when it dispatches a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    #[default]
    Get,
    Head,
    Put,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

/// Dispatch descriptor: what the service invokes when the task runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    pub url: String,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            http_method: HttpMethod::Get,
            url: url.into(),
        }
    }
}

/// How much of a task the service returns in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskView {
    ViewUnspecified,
    Basic,
    Full,
}

/// A Cloud Tasks task.
///
/// `name` is assigned by the service on creation. The remaining output
/// fields are only populated in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<TaskName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_request: Option<HttpRequest>,

    #[serde(default, skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    pub schedule_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    pub dispatch_count: Option<u32>,

    #[serde(default, skip_serializing)]
    pub response_count: Option<u32>,

    #[serde(default, skip_serializing)]
    pub view: Option<TaskView>,
}

impl Task {
    pub fn http(http_request: HttpRequest) -> Self {
        Self {
            name: None,
            http_request: Some(http_request),
            create_time: None,
            schedule_time: None,
            dispatch_count: None,
            response_count: None,
            view: None,
        }
    }
}

/// Task-creation request. The parent travels in the URL path, the task in the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    #[serde(skip)]
    pub parent: QueueName,
    pub task: Task,
}

impl CreateTaskRequest {
    pub fn new(parent: QueueName, http_request: HttpRequest) -> Self {
        Self {
            parent,
            task: Task::http(http_request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_descriptor_keeps_url() {
        let urls = vec![
            "https://example.com/handler",
            "http://localhost:8080/a?b=c&d=e#frag",
            "not a url at all",
            "",
        ];

        for url in urls {
            let request = HttpRequest::get(url);
            assert_eq!(request.http_method, HttpMethod::Get);
            assert_eq!(request.url, url);
        }
    }

    #[test]
    fn test_create_task_request_body() {
        let request = CreateTaskRequest::new(
            QueueName::new("p", "l", "q"),
            HttpRequest::get("https://example.com/task"),
        );

        let body = serde_json::to_value(&request).expect("Failed to serialize");
        assert_eq!(
            body,
            json!({
                "task": {
                    "httpRequest": {
                        "httpMethod": "GET",
                        "url": "https://example.com/task"
                    }
                }
            })
        );
    }

    #[test]
    fn test_http_method_wire_names() {
        assert_eq!(serde_json::to_string(&HttpMethod::Get).unwrap(), "\"GET\"");
        assert_eq!(serde_json::to_string(&HttpMethod::Options).unwrap(), "\"OPTIONS\"");
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_task_response_deserialization() {
        let response = json!({
            "name": "projects/p/locations/l/queues/q/tasks/123",
            "httpRequest": {
                "httpMethod": "GET",
                "url": "https://example.com/task",
                "headers": {"User-Agent": "Google-Cloud-Tasks"}
            },
            "scheduleTime": "2024-01-01T00:00:00.123456Z",
            "createTime": "2024-01-01T00:00:00Z",
            "dispatchDeadline": "600s",
            "view": "BASIC"
        });

        let task: Task = serde_json::from_value(response).expect("Failed to deserialize");
        assert_eq!(
            task.name,
            Some(TaskName::new("projects/p/locations/l/queues/q/tasks/123"))
        );
        assert_eq!(task.view, Some(TaskView::Basic));
        assert!(task.create_time.is_some());
        assert!(task.schedule_time.is_some());
        assert_eq!(task.dispatch_count, None);
    }
}
