mod http;

pub use http::HttpClient;

use crate::model::task::{NewTask, Task, TaskUpdate};

/// Error type for service calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (or the body failed to decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
}

/// The network seam of the client.
///
/// The controller is generic over this trait so the core logic can be
/// driven by a fake in tests; [`HttpClient`] is the real implementation.
pub trait TodoApi {
    /// Fetch the full task collection, in server order.
    fn list(&self) -> Result<Vec<Task>, ApiError>;

    /// Fetch a single task. A 404 is `Ok(None)`, not an error.
    fn get(&self, id: i64) -> Result<Option<Task>, ApiError>;

    /// Create a task. The response body is ignored; any 2xx is success.
    fn create(&self, new: &NewTask) -> Result<(), ApiError>;

    /// Replace a task's fields.
    fn update(&self, id: i64, update: &TaskUpdate) -> Result<(), ApiError>;

    /// Flip a task's completed flag server-side.
    fn toggle(&self, id: i64) -> Result<(), ApiError>;

    /// Delete a task.
    fn delete(&self, id: i64) -> Result<(), ApiError>;
}
