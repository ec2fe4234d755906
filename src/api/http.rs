use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::model::task::{NewTask, Task, TaskUpdate};

use super::{ApiError, TodoApi};

/// Blocking HTTP implementation of [`TodoApi`].
///
/// No timeouts are configured beyond the transport's defaults and no call
/// is ever retried; every failure is terminal for that one attempt.
pub struct HttpClient {
    base_url: String,
    http: Client,
}

impl HttpClient {
    /// `base_url` is the service root, e.g. `http://localhost:8080`;
    /// the `/api/todos` prefix is appended here.
    pub fn new(base_url: impl Into<String>) -> HttpClient {
        HttpClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/todos/{}", self.base_url, id)
    }

    /// Map a delivered response to success or `ApiError::Status`.
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status { status })
        }
    }
}

impl TodoApi for HttpClient {
    fn list(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url();
        debug!(%url, "GET todos");
        let response = Self::check(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    fn get(&self, id: i64) -> Result<Option<Task>, ApiError> {
        let url = self.item_url(id);
        debug!(%url, "GET todo");
        let response = self.http.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response)?;
        Ok(Some(response.json()?))
    }

    fn create(&self, new: &NewTask) -> Result<(), ApiError> {
        let url = self.collection_url();
        debug!(%url, title = %new.title, "POST todo");
        Self::check(self.http.post(&url).json(new).send()?)?;
        Ok(())
    }

    fn update(&self, id: i64, update: &TaskUpdate) -> Result<(), ApiError> {
        let url = self.item_url(id);
        debug!(%url, "PUT todo");
        Self::check(self.http.put(&url).json(update).send()?)?;
        Ok(())
    }

    fn toggle(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/toggle", self.item_url(id));
        debug!(%url, "PATCH toggle");
        Self::check(self.http.patch(&url).send()?)?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.item_url(id);
        debug!(%url, "DELETE todo");
        Self::check(self.http.delete(&url).send()?)?;
        Ok(())
    }
}
