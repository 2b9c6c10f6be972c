//! Stats service: chart series for the selected view.

use trackerdash_domain::stats::{ChartData, ChartView};

use crate::ports::DashboardApi;

/// Loads statistics and shapes them for the bar chart.
pub struct StatsService<A> {
    api: A,
}

impl<A: DashboardApi> StatsService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Refetch `/api/stats` and build the series for `view`.
    ///
    /// Returns `None` on failure so the chart keeps its previous data.
    pub async fn load(&self, view: ChartView) -> Option<ChartData> {
        match self.api.stats().await {
            Ok(stats) => {
                let data = ChartData::from_stats(stats, view);
                tracing::debug!(view = view.label(), points = data.labels.len(), "chart data loaded");
                Some(data)
            }
            Err(err) => {
                tracing::warn!(error = %err, view = view.label(), "failed to load chart data");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi};
    use trackerdash_domain::stats::{DailyStats, HourlyStats, StatsResponse};

    fn api() -> FakeApi {
        FakeApi {
            stats: Ok(StatsResponse {
                daily: DailyStats {
                    labels: vec!["Mon".to_string()],
                    checks: vec![4],
                    new_events: vec![1],
                    emails_sent: vec![1],
                },
                hourly: HourlyStats {
                    labels: vec!["10:00".to_string(), "11:00".to_string()],
                    checks: vec![1, 2],
                    new_events: vec![0, 1],
                },
            }),
            ..FakeApi::default()
        }
    }

    #[tokio::test]
    async fn should_refetch_on_each_view_switch() {
        let svc = StatsService::new(api());

        let daily = svc.load(ChartView::Daily).await.unwrap();
        assert_eq!(daily.series[2].values, vec![1]);

        let hourly = svc.load(ChartView::Hourly).await.unwrap();
        assert_eq!(hourly.labels.len(), 2);
        assert!(hourly.series[2].values.is_empty());

        assert_eq!(svc.api.calls(), vec![Call::Stats, Call::Stats]);
    }

    #[tokio::test]
    async fn should_return_none_on_failure() {
        let svc = StatsService::new(FakeApi::default());
        assert!(svc.load(ChartView::Daily).await.is_none());
    }
}
