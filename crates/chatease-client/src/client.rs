//! The ChatEase client and its create-board operations.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use chatease_core::validators::{
    is_valid_board_unique_key, is_valid_email, validate_initial_status,
};
use chatease_core::{
    CreateBoardParams, CreateBoardRequest, CreateBoardResponse, InitialGuestComment,
    InitialStatus, ValidationError,
};

use crate::error::ClientError;
use crate::runtime::{NativeRuntime, RuntimeProbe};
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Production origin used unless `base_url` is overridden.
pub const DEFAULT_BASE_URL: &str = "https://chatease.jp";

const BOARD_PATH: &str = "/api/v1/board";
const API_TOKEN_HEADER: &str = "X-Chatease-API-Token";

/// Configuration for [`ChatEaseClient`].
#[derive(Clone)]
pub struct ChatEaseClientOptions {
    /// Workspace-scoped API token. Treat as a secret.
    pub api_token: String,

    /// Workspace the token is scoped to.
    pub workspace_slug: String,

    /// Overrides the production origin, e.g. for staging. Trailing slashes
    /// are stripped.
    pub base_url: Option<String>,
}

// Manual impl so the token never ends up in logs or panic output.
impl fmt::Debug for ChatEaseClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatEaseClientOptions")
            .field("api_token", &"<redacted>")
            .field("workspace_slug", &self.workspace_slug)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Async client for the ChatEase board-creation endpoint.
///
/// Holds only immutable configuration, so one instance is safe to share
/// across tasks. Each call validates locally, sends at most one POST, and
/// maps the outcome to a typed result.
pub struct ChatEaseClient {
    api_token: String,
    workspace_slug: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

// Manual impl: the transport object is not `Debug`, and the token must never
// end up in logs or panic output.
impl fmt::Debug for ChatEaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatEaseClient")
            .field("api_token", &"<redacted>")
            .field("workspace_slug", &self.workspace_slug)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ChatEaseClient {
    /// Create a client with the native runtime probe and reqwest transport.
    ///
    /// Fails fast with [`ClientError::Config`] when the environment is
    /// browser-like, when a credential is missing, or when no HTTP
    /// capability is available.
    pub fn new(options: ChatEaseClientOptions) -> Result<Self, ClientError> {
        Self::with_transport(options, &NativeRuntime, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with an explicit probe and transport.
    ///
    /// This is the seam for tests and for embedders that bring their own
    /// HTTP stack.
    pub fn with_transport(
        options: ChatEaseClientOptions,
        probe: &dyn RuntimeProbe,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ClientError> {
        if probe.is_browser_like() {
            return Err(ClientError::Config(
                "server-side use only. Do not use it in a browser-like environment \
                 (API token leak risk)"
                    .to_string(),
            ));
        }

        if options.api_token.is_empty() {
            return Err(ClientError::Config("apiToken is required".to_string()));
        }
        if options.workspace_slug.is_empty() {
            return Err(ClientError::Config("workspaceSlug is required".to_string()));
        }

        if !probe.has_http_support() {
            return Err(ClientError::Config(
                "an HTTP capability is required; upgrade to a runtime with built-in HTTP support"
                    .to_string(),
            ));
        }

        let base_url = options
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_token: options.api_token,
            workspace_slug: options.workspace_slug,
            base_url,
            transport,
        })
    }

    /// Create a board with the base parameter shape.
    pub async fn create_board(
        &self,
        params: CreateBoardParams,
    ) -> Result<CreateBoardResponse, ClientError> {
        self.create(params, None, None).await
    }

    /// Create a board that starts in `initial_status`.
    pub async fn create_board_with_status(
        &self,
        params: CreateBoardParams,
        initial_status: InitialStatus,
    ) -> Result<CreateBoardResponse, ClientError> {
        self.create(params, Some(initial_status), None).await
    }

    /// Create a board that starts in `initial_status` with a first guest
    /// comment already posted.
    pub async fn create_board_with_status_and_message(
        &self,
        params: CreateBoardParams,
        initial_status: InitialStatus,
        initial_guest_comment: InitialGuestComment,
    ) -> Result<CreateBoardResponse, ClientError> {
        self.create(params, Some(initial_status), Some(initial_guest_comment))
            .await
    }

    /// Shared validate-then-send routine behind all three operations.
    ///
    /// Validation failures return before any transport call; a single POST
    /// is issued at most once per invocation.
    async fn create(
        &self,
        params: CreateBoardParams,
        initial_status: Option<InitialStatus>,
        initial_guest_comment: Option<InitialGuestComment>,
    ) -> Result<CreateBoardResponse, ClientError> {
        Self::validate(&params, initial_status.as_ref())?;

        let body = CreateBoardRequest::new(
            self.workspace_slug.clone(),
            params,
            initial_status,
            initial_guest_comment,
        );

        let url = format!("{}{}", self.base_url, BOARD_PATH);
        debug!(url = %url, board_unique_key = %body.board_unique_key, "Creating board");

        let request = HttpRequest {
            url,
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (API_TOKEN_HEADER.to_string(), self.api_token.clone()),
            ],
            body: serde_json::to_string(&body)?,
        };

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            let mut message = format!(
                "ChatEase API error: {} {}",
                response.status, response.status_text
            );
            if !response.body.is_empty() {
                message.push_str(" - Body: ");
                message.push_str(&response.body);
            }
            return Err(ClientError::Api {
                status: response.status,
                message,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Local checks, in order: email present, email shape, board key shape,
    /// then the conditional time-limit rule when a status is supplied.
    fn validate(
        params: &CreateBoardParams,
        initial_status: Option<&InitialStatus>,
    ) -> Result<(), ValidationError> {
        if params.guest.email.is_empty() {
            return Err(ValidationError::MissingGuestEmail);
        }
        if !is_valid_email(&params.guest.email) {
            return Err(ValidationError::InvalidGuestEmail(
                params.guest.email.clone(),
            ));
        }

        if !is_valid_board_unique_key(&params.board_unique_key) {
            return Err(ValidationError::InvalidBoardUniqueKey(
                params.board_unique_key.clone(),
            ));
        }

        if let Some(status) = initial_status {
            validate_initial_status(status)?;
        }

        Ok(())
    }
}
