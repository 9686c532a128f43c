//! Remote task-queue boundary
//!
//! [`TaskQueueClient`] is the single operation the submitter needs from the
//! service. [`CloudTasksClient`] implements it against the Cloud Tasks v2
//! REST API.

use crate::{
    CreateTaskRequest, HttpRequest, QueueName, SubmitterConfig, Task, TaskName, TaskSubmitError,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Creates tasks on a remote queue
#[async_trait]
pub trait TaskQueueClient: Send + Sync {
    /// Create one task under `parent` and return the name the service assigned
    async fn create_task(
        &self,
        parent: &QueueName,
        http_request: HttpRequest,
    ) -> Result<TaskName, TaskSubmitError>;
}

/// Explicit credentials for the Cloud Tasks API
#[derive(Clone)]
pub enum Credentials {
    /// OAuth2 access token sent as `Authorization: Bearer <token>`
    AccessToken(String),
}

impl Credentials {
    pub fn access_token(token: impl Into<String>) -> Self {
        Credentials::AccessToken(token.into())
    }

    /// Build credentials from configuration; fails when no token is configured
    pub fn from_config(config: &SubmitterConfig) -> Result<Self, TaskSubmitError> {
        match config.credentials.access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(Self::access_token(token)),
            _ => Err(TaskSubmitError::Authentication(
                "No access token configured; set GOOGLE_OAUTH_ACCESS_TOKEN or credentials.access_token"
                    .to_string(),
            )),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
        }
    }
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Cloud Tasks v2 REST client
#[derive(Debug, Clone)]
pub struct CloudTasksClient {
    http: reqwest::Client,
    endpoint: String,
    base_url: reqwest::Url,
    credentials: Credentials,
}

impl CloudTasksClient {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
        timeout: Option<Duration>,
    ) -> Result<Self, TaskSubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let base_url = reqwest::Url::parse(&endpoint).map_err(|e| {
            TaskSubmitError::Configuration(format!("Invalid endpoint URL '{}': {}", endpoint, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TaskSubmitError::Configuration(format!(
                "Endpoint URL '{}' cannot carry a path",
                endpoint
            )));
        }

        Ok(Self {
            http,
            endpoint,
            base_url,
            credentials,
        })
    }

    /// Build a client from validated configuration
    pub fn from_config(config: &SubmitterConfig) -> Result<Self, TaskSubmitError> {
        config.validate()?;
        let credentials = Credentials::from_config(config)?;
        Self::new(
            config.endpoint.url.clone(),
            credentials,
            config.endpoint.timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `{endpoint}/v2/projects/{p}/locations/{l}/queues/{q}/tasks`, each
    /// queue component percent-encoded as a single path segment
    fn tasks_url(&self, parent: &QueueName) -> reqwest::Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `new` rejects
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "v2",
                "projects",
                parent.project_id.as_str(),
                "locations",
                parent.location.as_str(),
                "queues",
                parent.queue.as_str(),
                "tasks",
            ]);
        }
        url
    }

    /// Send a full task-creation request and return the created task
    pub async fn send_create_task(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<Task, TaskSubmitError> {
        let url = self.tasks_url(&request.parent);

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "Sending CreateTask request");

        let builder = match &self.credentials {
            Credentials::AccessToken(token) => self.http.post(url).bearer_auth(token),
        };
        let response = builder.json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn api_error(http_status: u16, body: &str) -> TaskSubmitError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => TaskSubmitError::Api {
            code: envelope.error.code.unwrap_or(http_status),
            status: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => TaskSubmitError::Api {
            code: http_status,
            status: "UNKNOWN".to_string(),
            message: body.trim().to_string(),
        },
    }
}

#[async_trait]
impl TaskQueueClient for CloudTasksClient {
    async fn create_task(
        &self,
        parent: &QueueName,
        http_request: HttpRequest,
    ) -> Result<TaskName, TaskSubmitError> {
        let request = CreateTaskRequest::new(parent.clone(), http_request);
        let task = self.send_create_task(&request).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            create_time = ?task.create_time,
            schedule_time = ?task.schedule_time,
            dispatch_count = ?task.dispatch_count,
            view = ?task.view,
            "CreateTask response"
        );

        task.name.ok_or_else(|| TaskSubmitError::Api {
            code: 200,
            status: "UNKNOWN".to_string(),
            message: "Response did not include a task name".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigBuilder;

    #[test]
    fn test_tasks_url() {
        let client = CloudTasksClient::new(
            "https://cloudtasks.googleapis.com/",
            Credentials::access_token("t"),
            None,
        )
        .expect("Failed to build client");

        assert_eq!(
            client.tasks_url(&QueueName::new("p", "l", "q")).as_str(),
            "https://cloudtasks.googleapis.com/v2/projects/p/locations/l/queues/q/tasks"
        );
    }

    #[test]
    fn test_tasks_url_encodes_queue_components() {
        let client = CloudTasksClient::new(
            "http://127.0.0.1:8123",
            Credentials::access_token("t"),
            None,
        )
        .expect("Failed to build client");

        let url = client.tasks_url(&QueueName::new("my project", "l#1", "q?x"));

        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(
            url.path(),
            "/v2/projects/my%20project/locations/l%231/queues/q%3Fx/tasks"
        );

        let url = client.tasks_url(&QueueName::new("p", "l", "a/b"));
        assert_eq!(url.path(), "/v2/projects/p/locations/l/queues/a%2Fb/tasks");
    }

    #[test]
    fn test_tasks_url_keeps_endpoint_path_prefix() {
        let client = CloudTasksClient::new(
            "http://127.0.0.1:8123/proxy/",
            Credentials::access_token("t"),
            None,
        )
        .expect("Failed to build client");

        assert_eq!(
            client.tasks_url(&QueueName::new("p", "l", "q")).path(),
            "/proxy/v2/projects/p/locations/l/queues/q/tasks"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_configuration_error() {
        let result = CloudTasksClient::new("not a url", Credentials::access_token("t"), None);
        assert!(matches!(result, Err(TaskSubmitError::Configuration(_))));
    }

    #[test]
    fn test_credentials_require_token() {
        let config = ConfigBuilder::new()
            .endpoint("https://cloudtasks.googleapis.com")
            .build();

        let result = CloudTasksClient::from_config(&config);
        assert!(matches!(result, Err(TaskSubmitError::Authentication(_))));

        let config = ConfigBuilder::new()
            .endpoint("https://cloudtasks.googleapis.com")
            .access_token("")
            .build();
        assert!(Credentials::from_config(&config).is_err());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::access_token("ya29.secret");
        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("ya29"));
    }

    #[test]
    fn test_api_error_from_envelope() {
        let body = r#"{"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}"#;

        let error = api_error(404, body);
        assert_eq!(error.api_status(), Some("NOT_FOUND"));
        assert!(error.to_string().contains("Requested entity was not found."));
    }

    #[test]
    fn test_api_error_from_plain_body() {
        let error = api_error(502, "Bad Gateway\n");
        match error {
            TaskSubmitError::Api {
                code,
                status,
                message,
            } => {
                assert_eq!(code, 502);
                assert_eq!(status, "UNKNOWN");
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("Unexpected error: {}", other),
        }
    }
}
