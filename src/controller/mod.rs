//! Request controllers
//!
//! A [`Controller`] answers one [`Request`] with one [`Response`]. Extra
//! behavior is layered on by wrapping a controller in another controller,
//! see [`TelemetryDecorator`].

mod telemetry;
mod user;

pub use telemetry::TelemetryDecorator;
pub use user::UserController;

use eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An HTTP-like request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub url: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Status and body returned by a controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub data: Value,
}

/// Anything that can process a request
pub trait Controller: Send + Sync {
    /// Process a single request
    ///
    /// # Errors
    /// Returns an error if the request cannot be processed at all. Client
    /// mistakes are reported through [`Response::status`] instead.
    fn process(
        &self,
        request: Request,
    ) -> impl std::future::Future<Output = Result<Response>> + Send;
}
