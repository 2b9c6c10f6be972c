//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trackerdash_app::ports::DashboardApi;
use trackerdash_domain::action::{ActionResponse, encode_component};
use trackerdash_domain::console::ConsoleSnapshot;
use trackerdash_domain::error::ApiError;
use trackerdash_domain::events::LiveEventsResponse;
use trackerdash_domain::notification::NotificationCheck;
use trackerdash_domain::preferences::PreferenceUpdate;
use trackerdash_domain::reveal::{RevealRequest, RevealResponse};
use trackerdash_domain::stats::StatsResponse;
use trackerdash_domain::status::StatusResponse;

/// Same-origin client for the Status/Action API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

/// Network and decoding failures both surface as a transport error.
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// JSON error body returned by the server on non-2xx responses. Endpoints
/// disagree on the key.
#[derive(serde::Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.error));
    Err(ApiError::from_status(status, message))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = Request::get(url).send().await.map_err(transport)?;
    let resp = check_response(resp).await?;
    resp.json().await.map_err(transport)
}

async fn post(url: &str, body: &impl Serialize) -> Result<Response, ApiError> {
    let resp = Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check_response(resp).await
}

async fn post_json<T: DeserializeOwned>(url: &str, body: &impl Serialize) -> Result<T, ApiError> {
    post(url, body).await?.json().await.map_err(transport)
}

impl DashboardApi for HttpApi {
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> {
        get_json("/api/status")
    }

    fn console(&self) -> impl Future<Output = Result<ConsoleSnapshot, ApiError>> {
        get_json("/api/console")
    }

    fn stats(&self) -> impl Future<Output = Result<StatsResponse, ApiError>> {
        get_json("/api/stats")
    }

    fn live_events(&self) -> impl Future<Output = Result<LiveEventsResponse, ApiError>> {
        get_json("/api/live-events")
    }

    fn post_action(
        &self,
        endpoint: &str,
        body: Value,
    ) -> impl Future<Output = Result<ActionResponse, ApiError>> {
        let url = endpoint.to_string();
        async move { post_json(&url, &body).await }
    }

    fn reveal_email(
        &self,
        request: RevealRequest,
    ) -> impl Future<Output = Result<RevealResponse, ApiError>> {
        async move { post_json("/api/reveal-email", &request).await }
    }

    fn save_preference(
        &self,
        update: PreferenceUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> {
        async move { post("/api/theme", &update).await.map(|_| ()) }
    }

    fn notification_check(
        &self,
        since: &str,
    ) -> impl Future<Output = Result<NotificationCheck, ApiError>> {
        let url = format!("/api/notification-check?since={}", encode_component(since));
        async move { get_json(&url).await }
    }
}
