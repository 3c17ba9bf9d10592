//! Create account controller
//!
//! The created account, private key included, lives only in
//! [`CreateState::Created`]. Leaving the screen drops the controller and
//! with it the key; it is never fetched again.

use crate::error::ClientResult;
use crate::models::Account;
use super::text_field::TextField;

/// Fallback message when the backend gives no reason
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create account";

/// Warning shown next to the one-time private key
pub const PRIVATE_KEY_WARNING: &str =
    "Save your private key now: it will not be shown again after you leave this screen.";

/// Longest label the form accepts
pub const MAX_NAME_LEN: usize = 64;

/// Lifecycle of the create-account form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreateState {
    #[default]
    Idle,
    Submitting,
    Created(Account),
    Failed(String),
}

/// Validated request for `create_account`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub name: Option<String>,
}

/// Trim a label; blank labels are absent
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// State of the create-account screen
#[derive(Debug, Clone)]
pub struct CreateAccountController {
    pub name_input: TextField,
    state: CreateState,
}

impl Default for CreateAccountController {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateAccountController {
    pub fn new() -> Self {
        Self {
            name_input: TextField::new().max_len(MAX_NAME_LEN),
            state: CreateState::Idle,
        }
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == CreateState::Submitting
    }

    /// Start a submission
    ///
    /// Clears any previous result or error. Returns `None` while a submission
    /// is already in flight.
    pub fn submit(&mut self) -> Option<CreateRequest> {
        if self.is_submitting() {
            return None;
        }
        self.state = CreateState::Submitting;
        Some(CreateRequest {
            name: normalize_name(self.name_input.value()),
        })
    }

    /// Commit the outcome of `create_account`
    pub fn apply(&mut self, result: ClientResult<Account>) {
        self.state = match result {
            Ok(account) => CreateState::Created(account),
            Err(e) => {
                tracing::warn!(error = %e, "account creation failed");
                CreateState::Failed(e.message_or(CREATE_FAILED_MESSAGE))
            }
        };
    }

    pub fn created(&self) -> Option<&Account> {
        match &self.state {
            CreateState::Created(account) => Some(account),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CreateState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.state, CreateState::Failed(_)) {
            self.state = CreateState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::BlockchainApi;
    use crate::error::ClientError;
    use crate::models::PrivateKey;

    fn created_account() -> Account {
        Account {
            address: "0xnew".into(),
            name: None,
            private_key: Some(PrivateKey::new("0xsecret")),
        }
    }

    async fn run(controller: &mut CreateAccountController, api: &FakeApi) {
        let request = controller.submit().expect("submission should start");
        let result = api.create_account(request.name.as_deref()).await;
        controller.apply(result);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name("  Alice "), Some("Alice".to_string()));
    }

    #[tokio::test]
    async fn test_empty_name_is_sent_as_absent() {
        let api = FakeApi::new().with_created(Ok(created_account()));
        let mut controller = CreateAccountController::new();

        run(&mut controller, &api).await;

        assert_eq!(api.calls(), vec!["create_account(None)".to_string()]);
        let account = controller.created().unwrap();
        assert_eq!(account.private_key.as_ref().unwrap().expose(), "0xsecret");
    }

    #[tokio::test]
    async fn test_name_is_trimmed() {
        let api = FakeApi::new().with_created(Ok(created_account()));
        let mut controller = CreateAccountController::new();
        controller.name_input = controller.name_input.clone().content("  Bob  ");

        run(&mut controller, &api).await;

        assert_eq!(api.calls(), vec!["create_account(Some(\"Bob\"))".to_string()]);
    }

    #[tokio::test]
    async fn test_backend_message_is_surfaced() {
        let api = FakeApi::new().with_created(Err(ClientError::server(500, "node unavailable")));
        let mut controller = CreateAccountController::new();

        run(&mut controller, &api).await;

        assert_eq!(controller.error(), Some("node unavailable"));
        assert!(controller.created().is_none());
    }

    #[test]
    fn test_fallback_message() {
        let mut controller = CreateAccountController::new();
        controller.submit();
        controller.apply(Err(ClientError::Json("missing field `address`".into())));
        assert_eq!(controller.error(), Some(CREATE_FAILED_MESSAGE));

        controller.dismiss_error();
        assert_eq!(controller.state(), &CreateState::Idle);
    }

    #[test]
    fn test_no_double_submit() {
        let mut controller = CreateAccountController::new();
        assert!(controller.submit().is_some());
        assert!(controller.submit().is_none());
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let mut controller = CreateAccountController::new();
        controller.submit();
        controller.apply(Ok(created_account()));
        assert!(controller.created().is_some());

        controller.submit();
        assert!(controller.created().is_none());
        assert!(controller.is_submitting());
    }
}
