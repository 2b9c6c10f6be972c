//! Action service: submit password-gated actions and test dialogs.

use trackerdash_domain::action::{
    EMPTY_PASSWORD, Resolution, SecureAction, resolve_secure_action,
};
use trackerdash_domain::dialog::{TestDialog, resolve_test_dialog};

use crate::ports::DashboardApi;

/// Sends secure actions with the admin password and interprets the reply.
pub struct ActionService<A> {
    api: A,
}

impl<A: DashboardApi> ActionService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit `action` with `password`.
    ///
    /// An empty password is rejected locally without any request.
    pub async fn submit(&self, action: &SecureAction, password: &str) -> Resolution {
        if password.is_empty() {
            return Resolution::Retry(EMPTY_PASSWORD.to_string());
        }

        tracing::info!(endpoint = action.endpoint(), "submitting secure action");
        let reply = self
            .api
            .post_action(action.endpoint(), action.body(password))
            .await;
        if let Err(err) = &reply {
            tracing::warn!(endpoint = action.endpoint(), error = %err, "secure action failed");
        }
        resolve_secure_action(action, reply)
    }

    /// Submit one of the test dialogs. `email` is the selected recipient for
    /// the single-email test.
    pub async fn submit_test(
        &self,
        dialog: TestDialog,
        password: &str,
        email: Option<&str>,
    ) -> Resolution {
        if password.is_empty() {
            return Resolution::Retry(dialog.empty_password_message().to_string());
        }

        tracing::info!(endpoint = dialog.endpoint(), "submitting test dialog");
        let reply = self
            .api
            .post_action(dialog.endpoint(), dialog.body(password, email))
            .await;
        if let Err(err) = &reply {
            tracing::warn!(endpoint = dialog.endpoint(), error = %err, "test dialog failed");
        }
        resolve_test_dialog(dialog, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi};
    use trackerdash_domain::action::{ActionResponse, Feature, INVALID_PASSWORD, PasswordModal};
    use trackerdash_domain::error::ApiError;
    use trackerdash_domain::toast::{Toast, ToastKind};

    fn service(reply: Result<ActionResponse, ApiError>) -> ActionService<FakeApi> {
        ActionService::new(FakeApi {
            action: reply,
            ..FakeApi::default()
        })
    }

    #[tokio::test]
    async fn should_not_send_request_for_empty_password() {
        let svc = service(Ok(ActionResponse::default()));
        let mut modal = PasswordModal::default();
        modal.open(SecureAction::toggle_feature(Feature::Heartbeat));

        let action = modal.pending().cloned().unwrap();
        let resolution = svc.submit(&action, "").await;
        modal.apply(&resolution);

        assert!(svc.api.calls().is_empty());
        assert_eq!(modal.error(), Some(EMPTY_PASSWORD));
        assert!(modal.is_open());
    }

    #[tokio::test]
    async fn should_post_fields_and_password() {
        let svc = service(Ok(ActionResponse {
            success: true,
            message: None,
        }));
        let action = SecureAction::toggle_recipient("ann@example.com");

        svc.submit(&action, "s3cret").await;

        assert_eq!(
            svc.api.calls(),
            vec![Call::Action {
                endpoint: "/api/toggle-recipient/ann%40example.com".to_string(),
                body: serde_json::json!({"password": "s3cret"}),
            }]
        );
    }

    #[tokio::test]
    async fn should_keep_modal_open_on_401() {
        let svc = service(Err(ApiError::Unauthorized));
        let mut modal = PasswordModal::default();
        modal.open(SecureAction::check_now());

        let action = modal.pending().cloned().unwrap();
        let resolution = svc.submit(&action, "wrong").await;
        modal.apply(&resolution);

        assert!(modal.pending().is_some());
        assert_eq!(modal.error(), Some(INVALID_PASSWORD));
    }

    #[tokio::test]
    async fn should_close_modal_and_warn_on_429() {
        let svc = service(Err(ApiError::RateLimited));
        let mut modal = PasswordModal::default();
        modal.open(SecureAction::check_now());

        let action = modal.pending().cloned().unwrap();
        let resolution = svc.submit(&action, "pw").await;
        modal.apply(&resolution);

        assert!(modal.pending().is_none());
        let Resolution::Close { toast, .. } = resolution else {
            panic!("expected close");
        };
        assert_eq!(toast.kind, ToastKind::Warning);
    }

    #[tokio::test]
    async fn should_show_server_error_message() {
        let svc = service(Ok(ActionResponse {
            success: false,
            message: Some("Failed to send heartbeat".to_string()),
        }));
        let resolution = svc.submit(&SecureAction::send_heartbeat(), "pw").await;
        assert_eq!(
            resolution,
            Resolution::Close {
                toast: Toast::error("Failed to send heartbeat"),
                reload_after_ms: None,
            }
        );
    }

    #[tokio::test]
    async fn should_validate_test_dialog_password_locally() {
        let svc = service(Ok(ActionResponse::default()));
        let resolution = svc.submit_test(TestDialog::NewEvent, "", None).await;
        assert_eq!(
            resolution,
            Resolution::Retry("Please enter admin password".to_string())
        );
        assert!(svc.api.calls().is_empty());
    }

    #[tokio::test]
    async fn should_send_selected_email_for_single_email_test() {
        let svc = service(Ok(ActionResponse {
            success: true,
            message: Some("Test email sent to ann@example.com".to_string()),
        }));
        let resolution = svc
            .submit_test(TestDialog::SingleEmail, "pw", Some("ann@example.com"))
            .await;

        assert!(resolution.closes());
        assert_eq!(
            svc.api.calls(),
            vec![Call::Action {
                endpoint: "/api/test-single-email".to_string(),
                body: serde_json::json!({"email": "ann@example.com", "password": "pw"}),
            }]
        );
    }
}
