//! Timing decorator for controllers

use super::{Controller, Request, Response};
use eyre::Result;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Wraps a controller and logs how long each request took
///
/// The wrapped response is returned untouched. Decorators nest, so a
/// `TelemetryDecorator<TelemetryDecorator<C>>` times both layers.
///
/// # Example
/// ```no_run
/// use keycount::controller::{Controller, Request, TelemetryDecorator, UserController};
///
/// # async fn example() -> eyre::Result<()> {
/// let controller = TelemetryDecorator::new(UserController::new());
/// let response = controller.process(Request::new("GET", "/users")).await?;
/// assert_eq!(response.status, 200);
/// # Ok(())
/// # }
/// ```
pub struct TelemetryDecorator<C> {
    inner: C,
    last_elapsed: Mutex<Option<Duration>>,
}

impl<C: Controller> TelemetryDecorator<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            last_elapsed: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Duration of the most recent request, if any completed
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed.lock().ok().and_then(|elapsed| *elapsed)
    }
}

impl<C: Controller> Controller for TelemetryDecorator<C> {
    async fn process(&self, request: Request) -> Result<Response> {
        let url = request.url.clone();
        let method = request.method.clone();

        let start = Instant::now();
        let result = self.inner.process(request).await;
        let elapsed = start.elapsed();

        log::info!("{} {} => {}ms", url, method, elapsed.as_millis());
        if let Ok(mut last) = self.last_elapsed.lock() {
            *last = Some(elapsed);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::UserController;
    use serde_json::json;

    struct EchoController;

    impl Controller for EchoController {
        async fn process(&self, request: Request) -> Result<Response> {
            Ok(Response {
                status: 201,
                data: request.data.unwrap_or_default(),
            })
        }
    }

    struct FailingController;

    impl Controller for FailingController {
        async fn process(&self, _request: Request) -> Result<Response> {
            eyre::bail!("backend down")
        }
    }

    #[tokio::test]
    async fn test_forwards_response_unchanged() {
        let decorator = TelemetryDecorator::new(EchoController);
        assert!(decorator.last_elapsed().is_none());

        let request = Request::new("PUT", "/echo").with_data(json!({"k": "v"}));
        let response = decorator.process(request).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.data, json!({"k": "v"}));
        assert!(decorator.last_elapsed().is_some());
    }

    #[tokio::test]
    async fn test_elapsed_covers_inner_latency() {
        let latency = Duration::from_millis(20);
        let decorator = TelemetryDecorator::new(UserController::new().with_latency(latency));

        let response = decorator
            .process(Request::new("GET", "/users"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(decorator.last_elapsed().unwrap() >= latency);
    }

    #[tokio::test]
    async fn test_nested_decorators() {
        let decorator = TelemetryDecorator::new(TelemetryDecorator::new(EchoController));

        let response = decorator
            .process(Request::new("GET", "/echo"))
            .await
            .unwrap();

        assert_eq!(response.data, serde_json::Value::Null);
        assert!(decorator.last_elapsed().is_some());
        assert!(decorator.inner().last_elapsed().is_some());
    }

    #[tokio::test]
    async fn test_errors_pass_through_and_are_timed() {
        let decorator = TelemetryDecorator::new(FailingController);

        let err = decorator
            .process(Request::new("GET", "/down"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "backend down");
        assert!(decorator.last_elapsed().is_some());
    }
}
