use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Column, Task, TaskDraft};

use crate::traits::{DescriptionGenerator, TaskService};
use crate::types::{GenerateDescriptionRequest, GenerateDescriptionResponse, MoveTaskRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP/JSON implementation of the task service contract.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTaskService {
    pub fn new(base_url: impl Into<String>) -> TaskboardResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TaskboardError::Internal(format!("http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TaskboardResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TaskboardError::Service {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }
}

fn connection_error(e: reqwest::Error) -> TaskboardError {
    TaskboardError::Connection(e.to_string())
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn fetch_columns(&self, board_id: &str) -> TaskboardResult<Vec<Column>> {
        tracing::debug!("GET columns for board {}", board_id);
        let response = self
            .http
            .get(self.url(&format!("/boards/{board_id}/columns")))
            .send()
            .await
            .map_err(connection_error)?;
        Self::decode(response).await
    }

    async fn fetch_archive(&self) -> TaskboardResult<BTreeMap<String, Vec<Task>>> {
        let response = self
            .http
            .get(self.url("/tasks/archive"))
            .send()
            .await
            .map_err(connection_error)?;
        Self::decode(response).await
    }

    async fn create_task(&self, column_id: &str, draft: &TaskDraft) -> TaskboardResult<Task> {
        tracing::debug!("POST new task {:?} to column {}", draft.title, column_id);
        let response = self
            .http
            .post(self.url(&format!("/columns/{column_id}/tasks")))
            .json(draft)
            .send()
            .await
            .map_err(connection_error)?;
        Self::decode(response).await
    }

    async fn move_task(&self, task_id: &str, column_id: &str) -> TaskboardResult<Task> {
        tracing::debug!("PATCH task {} to column {}", task_id, column_id);
        let body = MoveTaskRequest {
            column_id: column_id.to_string(),
        };
        let response = self
            .http
            .patch(self.url(&format!("/tasks/{task_id}/move")))
            .json(&body)
            .send()
            .await
            .map_err(connection_error)?;
        Self::decode(response).await
    }
}

#[async_trait]
impl DescriptionGenerator for HttpTaskService {
    async fn generate<'a>(
        &self,
        title: &str,
        context: Option<&'a str>,
    ) -> TaskboardResult<String> {
        let body = GenerateDescriptionRequest {
            title: title.to_string(),
            context: context.map(str::to_string),
        };
        let response = self
            .http
            .post(self.url("/ai/generate-description"))
            .json(&body)
            .send()
            .await
            .map_err(connection_error)?;
        let decoded: GenerateDescriptionResponse = Self::decode(response).await?;
        Ok(decoded.description)
    }
}
