//! In-memory user listing controller

use super::{Controller, Request, Response};
use eyre::Result;
use serde_json::json;
use std::time::Duration;

const DEFAULT_LATENCY: Duration = Duration::from_millis(200);

/// Controller that lists a fixed set of users
///
/// `GET` returns the users with status 200; every other method gets a 400.
/// Each call waits for a simulated latency before answering.
pub struct UserController {
    latency: Duration,
}

impl UserController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated latency (default: 200ms)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for UserController {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

impl Controller for UserController {
    async fn process(&self, request: Request) -> Result<Response> {
        let response = match request.method.as_str() {
            "GET" => Response {
                status: 200,
                data: json!([
                    {"id": 1, "name": "John"},
                    {"id": 2, "name": "Bob"},
                    {"id": 3, "name": "Alice"},
                ]),
            },
            _ => Response {
                status: 400,
                data: json!({"message": "Bad request"}),
            },
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_lists_users() {
        let controller = UserController::new().with_latency(Duration::ZERO);
        let response = controller
            .process(Request::new("GET", "/users"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let users = response.data.as_array().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[2]["name"], "Alice");
    }

    #[tokio::test]
    async fn test_other_methods_are_bad_requests() {
        let controller = UserController::new().with_latency(Duration::ZERO);
        for method in ["POST", "DELETE", "get"] {
            let response = controller
                .process(Request::new(method, "/users"))
                .await
                .unwrap();
            assert_eq!(response.status, 400);
            assert_eq!(response.data["message"], "Bad request");
        }
    }
}
