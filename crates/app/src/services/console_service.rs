//! Console service: poll the console, diagnostics and check history.

use trackerdash_domain::console::ConsoleSnapshot;

use crate::ports::DashboardApi;

/// Fetches the combined console payload.
pub struct ConsoleService<A> {
    api: A,
}

impl<A: DashboardApi> ConsoleService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch `/api/console`, or `None` if the request failed.
    ///
    /// Feed the snapshot to
    /// [`ConsoleWatermarks::apply`](trackerdash_domain::console::ConsoleWatermarks::apply)
    /// to decide what to redraw.
    pub async fn poll(&self) -> Option<ConsoleSnapshot> {
        match self.api.console().await {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, "failed to update console/diagnostics");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;
    use trackerdash_domain::console::{
        CONSOLE_LINE_LIMIT, ConsoleEntry, ConsoleWatermarks, HISTORY_CARD_LIMIT,
    };
    use trackerdash_domain::error::ApiError;

    fn logs(count: usize) -> ConsoleSnapshot {
        ConsoleSnapshot {
            console: Some(
                (0..count)
                    .map(|i| ConsoleEntry {
                        time: None,
                        time_short: Some(format!("10:00:{i:02} AM")),
                        kind: "info".to_string(),
                        msg: format!("check {i}"),
                    })
                    .collect(),
            ),
            ..ConsoleSnapshot::default()
        }
    }

    #[tokio::test]
    async fn should_skip_rerender_when_length_is_unchanged() {
        let svc = ConsoleService::new(FakeApi {
            console: Ok(logs(5)),
            ..FakeApi::default()
        });
        let mut marks = ConsoleWatermarks::default();

        let first = svc.poll().await.unwrap();
        assert!(marks
            .apply(first, CONSOLE_LINE_LIMIT, HISTORY_CARD_LIMIT)
            .terminal
            .is_some());

        let second = svc.poll().await.unwrap();
        assert!(marks
            .apply(second, CONSOLE_LINE_LIMIT, HISTORY_CARD_LIMIT)
            .terminal
            .is_none());
    }

    #[tokio::test]
    async fn should_return_none_on_transport_error() {
        let svc = ConsoleService::new(FakeApi {
            console: Err(ApiError::Transport("offline".to_string())),
            ..FakeApi::default()
        });
        assert!(svc.poll().await.is_none());
    }
}
