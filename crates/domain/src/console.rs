//! `GET /api/console`: system console lines, API diagnostics and the
//! recent check history, plus the view logic that decides what to redraw.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::time::format_bytes;

/// Default number of terminal lines rendered.
pub const CONSOLE_LINE_LIMIT: usize = 50;
/// Default number of check cards rendered.
pub const HISTORY_CARD_LIMIT: usize = 12;

/// One line of the server's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleEntry {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub time_short: Option<String>,
    /// Level such as `info`, `success`, `warning`, `error`; used as a CSS class.
    #[serde(rename = "type", default = "default_kind", deserialize_with = "kind_or_info")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
}

fn default_kind() -> String {
    "info".to_string()
}

fn kind_or_info<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|kind| !kind.is_empty())
        .unwrap_or_else(default_kind))
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ConsoleEntry {
    /// Short time if present, otherwise the full time, otherwise a placeholder.
    #[must_use]
    pub fn display_time(&self) -> &str {
        self.time_short
            .as_deref()
            .or(self.time.as_deref())
            .unwrap_or("--:--:--")
    }
}

/// Counters about the tracker's calls to the upstream event site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Diagnostics {
    pub last_response_time_ms: Option<f64>,
    pub last_status_code: Option<u16>,
    pub last_response_size: Option<u64>,
    pub last_events_count: Option<u64>,
    pub total_api_calls: Option<u64>,
    pub failed_api_calls: Option<u64>,
    pub avg_response_time_ms: Option<f64>,
    pub last_error: Option<String>,
}

/// Summary of one background check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub check_number: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_display: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_display: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_events_found: u32,
    /// Sent either as a boolean or as a count; any truthy value counts.
    #[serde(deserialize_with = "truthy")]
    pub emails_sent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub events_fetched: u32,
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    })
}

/// Body of `GET /api/console`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleSnapshot {
    /// Newest entry first.
    pub console: Option<Vec<ConsoleEntry>>,
    pub diagnostics: Option<Diagnostics>,
    /// Newest check first.
    pub check_history: Option<Vec<CheckSummary>>,
}

/// Visual severity of a diagnostic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warning,
    Error,
    Neutral,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Neutral => "",
        }
    }

    /// Response time bands: above 5 s is an error, above 2 s a warning.
    #[must_use]
    pub fn for_response_time(ms: f64) -> Self {
        if ms > 5000.0 {
            Self::Error
        } else if ms > 2000.0 {
            Self::Warning
        } else {
            Self::Good
        }
    }

    #[must_use]
    pub fn for_status_code(code: Option<u16>) -> Self {
        match code {
            Some(200) => Self::Good,
            Some(_) => Self::Error,
            None => Self::Neutral,
        }
    }

    #[must_use]
    pub fn for_failures(failed: u64) -> Self {
        if failed > 0 { Self::Error } else { Self::Good }
    }
}

/// A rendered diagnostic value and its styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCell {
    pub text: String,
    pub severity: Severity,
}

impl DiagnosticCell {
    fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Neutral)
    }
}

/// Connection badge shown in the diagnostics header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBadge {
    Connected,
    Error,
    Waiting,
}

impl ApiBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Error => "Error",
            Self::Waiting => "Waiting...",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Connected => "badge success",
            Self::Error => "badge error",
            Self::Waiting => "badge warning",
        }
    }
}

/// Display-ready diagnostics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsView {
    pub response_time: DiagnosticCell,
    pub status_code: DiagnosticCell,
    pub response_size: DiagnosticCell,
    pub events_count: DiagnosticCell,
    pub total_calls: DiagnosticCell,
    pub failed_calls: DiagnosticCell,
    pub avg_response_time: DiagnosticCell,
    pub last_error: DiagnosticCell,
    pub badge: ApiBadge,
}

fn format_ms(ms: f64) -> String {
    if ms > 0.0 {
        format!("{ms}ms")
    } else {
        "--".to_string()
    }
}

impl From<&Diagnostics> for DiagnosticsView {
    fn from(diag: &Diagnostics) -> Self {
        let response_ms = diag.last_response_time_ms.unwrap_or_default();
        let failed = diag.failed_api_calls.unwrap_or_default();
        let size = diag.last_response_size.unwrap_or_default();
        // Zero codes and blank errors mean "nothing yet".
        let status_code = diag.last_status_code.filter(|code| *code != 0);
        let last_error = diag.last_error.as_deref().filter(|err| !err.is_empty());

        let badge = if status_code == Some(200) {
            ApiBadge::Connected
        } else if last_error.is_some() {
            ApiBadge::Error
        } else {
            ApiBadge::Waiting
        };

        Self {
            response_time: DiagnosticCell::new(
                format_ms(response_ms),
                Severity::for_response_time(response_ms),
            ),
            status_code: DiagnosticCell::new(
                status_code.map_or_else(|| "--".to_string(), |code| code.to_string()),
                Severity::for_status_code(status_code),
            ),
            response_size: DiagnosticCell::plain(if size > 0 {
                format_bytes(size)
            } else {
                "--".to_string()
            }),
            events_count: DiagnosticCell::plain(
                diag.last_events_count
                    .map_or_else(|| "--".to_string(), |n| n.to_string()),
            ),
            total_calls: DiagnosticCell::plain(diag.total_api_calls.unwrap_or_default().to_string()),
            failed_calls: DiagnosticCell::new(failed.to_string(), Severity::for_failures(failed)),
            avg_response_time: DiagnosticCell::plain(format_ms(
                diag.avg_response_time_ms.unwrap_or_default(),
            )),
            last_error: match last_error {
                Some(err) => DiagnosticCell::new(err, Severity::Error),
                None => DiagnosticCell::plain("None"),
            },
            badge,
        }
    }
}

/// Result of one background check, as drawn on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    ApiError,
    NewEvents { count: u32, email_sent: bool },
    NoNewEvents,
}

impl CheckOutcome {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::ApiError => "check-card error",
            Self::NewEvents { .. } => "check-card has-new",
            Self::NoNewEvents => "check-card no-new",
        }
    }

    #[must_use]
    pub fn headline(self) -> String {
        match self {
            Self::ApiError => "API Error".to_string(),
            Self::NewEvents { count: 1, .. } => "1 New Event!".to_string(),
            Self::NewEvents { count, .. } => format!("{count} New Events!"),
            Self::NoNewEvents => "No New Events".to_string(),
        }
    }
}

impl CheckSummary {
    #[must_use]
    pub fn outcome(&self) -> CheckOutcome {
        if self.status == "error" {
            CheckOutcome::ApiError
        } else if self.new_events_found > 0 {
            CheckOutcome::NewEvents {
                count: self.new_events_found,
                email_sent: self.emails_sent,
            }
        } else {
            CheckOutcome::NoNewEvents
        }
    }
}

/// Last rendered collection length.
///
/// This only detects length changes: a same-length list with different
/// content is not redrawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderWatermark {
    last: usize,
}

impl RenderWatermark {
    /// Record `len` and report whether it differs from the previous render.
    pub fn advance(&mut self, len: usize) -> bool {
        if len == self.last {
            return false;
        }
        self.last = len;
        true
    }

    #[must_use]
    pub fn last(&self) -> usize {
        self.last
    }
}

/// What to redraw after a console poll. `None` means leave as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleUpdate {
    /// Oldest first, so the newest line sits at the bottom of the terminal.
    pub terminal: Option<Vec<ConsoleEntry>>,
    pub diagnostics: Option<DiagnosticsView>,
    /// Newest first.
    pub history: Option<Vec<CheckSummary>>,
}

/// Watermarks for the console terminal and the check history grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleWatermarks {
    pub console: RenderWatermark,
    pub history: RenderWatermark,
}

impl ConsoleWatermarks {
    /// Decide what to redraw for `snapshot`, advancing the watermarks.
    pub fn apply(
        &mut self,
        snapshot: ConsoleSnapshot,
        console_limit: usize,
        history_limit: usize,
    ) -> ConsoleUpdate {
        let terminal = snapshot
            .console
            .filter(|entries| self.console.advance(entries.len()))
            .map(|entries| {
                let mut lines: Vec<ConsoleEntry> = entries.into_iter().take(console_limit).collect();
                lines.reverse();
                lines
            });

        let history = snapshot
            .check_history
            .filter(|checks| !checks.is_empty() && self.history.advance(checks.len()))
            .map(|checks| checks.into_iter().take(history_limit).collect());

        ConsoleUpdate {
            terminal,
            diagnostics: snapshot.diagnostics.as_ref().map(DiagnosticsView::from),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(msg: &str) -> ConsoleEntry {
        ConsoleEntry {
            time: Some("2024-05-01 10:00:00".to_string()),
            time_short: None,
            kind: "info".to_string(),
            msg: msg.to_string(),
        }
    }

    fn snapshot_with_logs(count: usize) -> ConsoleSnapshot {
        ConsoleSnapshot {
            console: Some((0..count).map(|i| entry(&format!("line {i}"))).collect()),
            ..ConsoleSnapshot::default()
        }
    }

    #[test]
    fn should_skip_render_when_length_unchanged() {
        let mut marks = ConsoleWatermarks::default();
        assert!(marks.apply(snapshot_with_logs(3), 50, 12).terminal.is_some());
        assert!(marks.apply(snapshot_with_logs(3), 50, 12).terminal.is_none());
    }

    #[test]
    fn should_render_when_length_changes() {
        let mut marks = ConsoleWatermarks::default();
        marks.apply(snapshot_with_logs(3), 50, 12);
        let update = marks.apply(snapshot_with_logs(4), 50, 12);
        assert_eq!(update.terminal.map(|lines| lines.len()), Some(4));
        assert_eq!(marks.console.last(), 4);
    }

    #[test]
    fn should_skip_initial_empty_console() {
        let mut marks = ConsoleWatermarks::default();
        assert!(marks.apply(snapshot_with_logs(0), 50, 12).terminal.is_none());
    }

    #[test]
    fn should_render_newest_lines_oldest_first() {
        let mut marks = ConsoleWatermarks::default();
        let lines = marks.apply(snapshot_with_logs(60), 50, 12).terminal.unwrap();
        assert_eq!(lines.len(), 50);
        assert_eq!(lines.first().unwrap().msg, "line 49");
        assert_eq!(lines.last().unwrap().msg, "line 0");
    }

    #[test]
    fn should_limit_history_and_skip_empty() {
        let mut marks = ConsoleWatermarks::default();
        let empty = ConsoleSnapshot {
            check_history: Some(Vec::new()),
            ..ConsoleSnapshot::default()
        };
        assert!(marks.apply(empty, 50, 12).history.is_none());

        let full = ConsoleSnapshot {
            check_history: Some(
                (0..20)
                    .map(|n| CheckSummary {
                        check_number: 20 - n,
                        ..CheckSummary::default()
                    })
                    .collect(),
            ),
            ..ConsoleSnapshot::default()
        };
        let history = marks.apply(full, 50, 12).history.unwrap();
        assert_eq!(history.len(), 12);
        assert_eq!(history[0].check_number, 20);
    }

    #[test]
    fn should_always_refresh_diagnostics() {
        let mut marks = ConsoleWatermarks::default();
        let snapshot = ConsoleSnapshot {
            diagnostics: Some(Diagnostics::default()),
            ..ConsoleSnapshot::default()
        };
        assert!(marks.apply(snapshot.clone(), 50, 12).diagnostics.is_some());
        assert!(marks.apply(snapshot, 50, 12).diagnostics.is_some());
    }

    #[test]
    fn should_pick_display_time() {
        let mut line = entry("x");
        assert_eq!(line.display_time(), "2024-05-01 10:00:00");
        line.time_short = Some("10:00:00 AM".to_string());
        assert_eq!(line.display_time(), "10:00:00 AM");
        line.time = None;
        line.time_short = None;
        assert_eq!(line.display_time(), "--:--:--");
    }

    #[test]
    fn should_band_response_times() {
        assert_eq!(Severity::for_response_time(150.0), Severity::Good);
        assert_eq!(Severity::for_response_time(2500.0), Severity::Warning);
        assert_eq!(Severity::for_response_time(6000.0), Severity::Error);
    }

    #[test]
    fn should_build_diagnostics_view() {
        let diag = Diagnostics {
            last_response_time_ms: Some(320.0),
            last_status_code: Some(200),
            last_response_size: Some(2048),
            last_events_count: Some(7),
            total_api_calls: Some(40),
            failed_api_calls: Some(2),
            avg_response_time_ms: Some(410.5),
            last_error: None,
        };
        let view = DiagnosticsView::from(&diag);
        assert_eq!(view.response_time.text, "320ms");
        assert_eq!(view.response_time.severity, Severity::Good);
        assert_eq!(view.status_code.severity, Severity::Good);
        assert_eq!(view.response_size.text, "2 KB");
        assert_eq!(view.events_count.text, "7");
        assert_eq!(view.failed_calls.severity, Severity::Error);
        assert_eq!(view.avg_response_time.text, "410.5ms");
        assert_eq!(view.last_error.text, "None");
        assert_eq!(view.badge, ApiBadge::Connected);
    }

    #[test]
    fn should_show_placeholders_for_empty_diagnostics() {
        let view = DiagnosticsView::from(&Diagnostics {
            last_error: Some("timeout".to_string()),
            ..Diagnostics::default()
        });
        assert_eq!(view.response_time.text, "--");
        assert_eq!(view.status_code.text, "--");
        assert_eq!(view.status_code.severity, Severity::Neutral);
        assert_eq!(view.failed_calls.severity, Severity::Good);
        assert_eq!(view.last_error.severity, Severity::Error);
        assert_eq!(view.badge, ApiBadge::Error);
    }

    #[test]
    fn should_treat_zero_code_and_blank_error_as_unknown() {
        let view = DiagnosticsView::from(&Diagnostics {
            last_status_code: Some(0),
            last_error: Some(String::new()),
            ..Diagnostics::default()
        });
        assert_eq!(view.status_code.text, "--");
        assert_eq!(view.status_code.severity, Severity::Neutral);
        assert_eq!(view.last_error.text, "None");
        assert_eq!(view.last_error.severity, Severity::Neutral);
        assert_eq!(view.badge, ApiBadge::Waiting);
    }

    #[test]
    fn should_classify_check_cards() {
        let error = CheckSummary {
            status: "error".to_string(),
            new_events_found: 3,
            ..CheckSummary::default()
        };
        assert_eq!(error.outcome(), CheckOutcome::ApiError);

        let found: CheckSummary = serde_json::from_str(
            r#"{"check_number": 4, "status": "success", "new_events_found": 2, "emails_sent": 5}"#,
        )
        .unwrap();
        assert_eq!(
            found.outcome(),
            CheckOutcome::NewEvents {
                count: 2,
                email_sent: true
            }
        );
        assert_eq!(found.outcome().headline(), "2 New Events!");
        assert_eq!(found.outcome().css_class(), "check-card has-new");

        let quiet = CheckSummary::default();
        assert_eq!(quiet.outcome().headline(), "No New Events");
    }

    #[test]
    fn should_use_singular_headline_for_one_event() {
        let outcome = CheckOutcome::NewEvents {
            count: 1,
            email_sent: false,
        };
        assert_eq!(outcome.headline(), "1 New Event!");
    }

    #[test]
    fn should_parse_console_payload() {
        let json = r#"{
            "console": [{"time": "t", "time_short": "ts", "type": "error", "msg": "<b>boom</b>"}],
            "diagnostics": {"last_status_code": 503, "failed_api_calls": 1},
            "check_history": [{"check_number": 1, "emails_sent": false}]
        }"#;
        let snapshot: ConsoleSnapshot = serde_json::from_str(json).unwrap();
        let console = snapshot.console.unwrap();
        assert_eq!(console[0].kind, "error");
        assert_eq!(console[0].msg, "<b>boom</b>");
        assert_eq!(snapshot.diagnostics.unwrap().last_status_code, Some(503));
        assert!(!snapshot.check_history.unwrap()[0].emails_sent);
    }

    #[test]
    fn should_parse_console_payload_with_null_fields() {
        let json = r#"{
            "console": [{"time": "t", "time_short": null, "type": null, "msg": null}],
            "diagnostics": {"last_status_code": 200},
            "check_history": [{"check_number": 1, "time_display": null, "status": null,
                               "new_events_found": null, "emails_sent": null}]
        }"#;
        let snapshot: ConsoleSnapshot = serde_json::from_str(json).unwrap();
        let line = &snapshot.console.unwrap()[0];
        assert_eq!(line.kind, "info");
        assert_eq!(line.msg, "");
        assert_eq!(line.display_time(), "t");
        let check = &snapshot.check_history.unwrap()[0];
        assert_eq!(check.check_number, 1);
        assert_eq!(check.time_display, "");
        assert_eq!(check.outcome(), CheckOutcome::NoNewEvents);
        assert_eq!(snapshot.diagnostics.unwrap().last_status_code, Some(200));
    }
}
