//! `GET /api/stats`: aggregated check statistics and chart series.

use serde::Deserialize;

use crate::preferences::Theme;

/// Per-day aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DailyStats {
    pub labels: Vec<String>,
    pub checks: Vec<u64>,
    pub new_events: Vec<u64>,
    pub emails_sent: Vec<u64>,
}

/// Per-hour aggregates. Emails are not tracked hourly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HourlyStats {
    pub labels: Vec<String>,
    pub checks: Vec<u64>,
    pub new_events: Vec<u64>,
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub daily: DailyStats,
    pub hourly: HourlyStats,
}

/// Which aggregation the chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartView {
    #[default]
    Daily,
    Hourly,
}

impl ChartView {
    pub const ALL: [Self; 2] = [Self::Daily, Self::Hourly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Hourly => "Hourly",
        }
    }
}

/// RGB colour of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One bar series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: Rgb,
    pub values: Vec<u64>,
}

/// Labels and series for one chart draw. Series order is fixed: checks,
/// new events, emails sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

const CHECKS_COLOR: Rgb = Rgb(99, 102, 241);
const NEW_EVENTS_COLOR: Rgb = Rgb(34, 197, 94);
const EMAILS_COLOR: Rgb = Rgb(245, 158, 11);

impl ChartData {
    /// Replace labels and series for `view`. The hourly view keeps the email
    /// series, empty, so the legend stays stable.
    #[must_use]
    pub fn from_stats(stats: StatsResponse, view: ChartView) -> Self {
        let (labels, checks, new_events, emails) = match view {
            ChartView::Daily => (
                stats.daily.labels,
                stats.daily.checks,
                stats.daily.new_events,
                stats.daily.emails_sent,
            ),
            ChartView::Hourly => (
                stats.hourly.labels,
                stats.hourly.checks,
                stats.hourly.new_events,
                Vec::new(),
            ),
        };
        Self {
            labels,
            series: vec![
                ChartSeries {
                    name: "Checks",
                    color: CHECKS_COLOR,
                    values: checks,
                },
                ChartSeries {
                    name: "New Events",
                    color: NEW_EVENTS_COLOR,
                    values: new_events,
                },
                ChartSeries {
                    name: "Emails Sent",
                    color: EMAILS_COLOR,
                    values: emails,
                },
            ],
        }
    }

    /// Largest value across all series, at least 1 so the axis is never empty.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

/// Axis, grid and legend colours for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub text: Rgb,
    pub grid: Rgb,
    pub background: Rgb,
}

impl ChartPalette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Rgb(0x88, 0x88, 0xa0),
                grid: Rgb(42, 42, 58),
                background: Rgb(0x12, 0x12, 0x1a),
            },
            Theme::Light => Self {
                text: Rgb(0x5a, 0x5a, 0x70),
                grid: Rgb(200, 200, 210),
                background: Rgb(0xff, 0xff, 0xff),
            },
        }
    }
}
