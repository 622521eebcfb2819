//! Request and response types for the board-creation endpoint.

use serde::{Deserialize, Serialize};

/// Lifecycle status a board can carry at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKey {
    /// Awaiting a proof/review step; due date required.
    ScheduledForProof,
    /// Awaiting a response; due date required.
    ScheduledForResponse,
    /// Awaiting completion; due date required.
    ScheduledForCompletion,
    /// Ball is in the guest's court; no due date.
    WaitingForReply,
}

impl StatusKey {
    /// Returns true for the `scheduled_for_*` variants, which require a
    /// `timeLimit` on the wire.
    pub fn is_scheduled(&self) -> bool {
        !matches!(self, Self::WaitingForReply)
    }
}

/// Initial status attached to a new board.
///
/// The `scheduled_for_*` keys require `time_limit` (a `YYYY-MM-DD` calendar
/// date); `waiting_for_reply` carries none. The constructors keep well-formed
/// construction easy, but values may also arrive through deserialization, so
/// [`crate::validators::validate_initial_status`] re-checks the rule at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialStatus {
    /// Which lifecycle status the board starts in.
    pub status_key: StatusKey,

    /// Due date in `YYYY-MM-DD` form. Required for the scheduled variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<String>,
}

impl InitialStatus {
    /// A scheduled status with its required due date.
    pub fn scheduled(status_key: StatusKey, time_limit: impl Into<String>) -> Self {
        Self {
            status_key,
            time_limit: Some(time_limit.into()),
        }
    }

    /// The `waiting_for_reply` status, which takes no due date.
    pub fn waiting_for_reply() -> Self {
        Self {
            status_key: StatusKey::WaitingForReply,
            time_limit: None,
        }
    }
}

/// The guest (external party) a board is opened for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub email: String,
}

/// First message posted to the board on the guest's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialGuestComment {
    pub content: String,
}

/// Caller-supplied parameters shared by every create-board operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardParams {
    /// Board title shown to both host and guest.
    pub title: String,

    /// Guest the board is opened for.
    pub guest: GuestInfo,

    /// Caller-supplied identity key: non-empty, whitespace-free, <= 255 chars.
    pub board_unique_key: String,

    /// Slug of an existing board this one replies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
}

/// Wire body for `POST /api/v1/board`: the caller's params merged with the
/// workspace the API token is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub workspace_slug: String,
    pub title: String,
    pub guest: GuestInfo,
    pub board_unique_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_status: Option<InitialStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_guest_comment: Option<InitialGuestComment>,
}

impl CreateBoardRequest {
    /// Merge caller params with the configured workspace slug.
    pub fn new(
        workspace_slug: impl Into<String>,
        params: CreateBoardParams,
        initial_status: Option<InitialStatus>,
        initial_guest_comment: Option<InitialGuestComment>,
    ) -> Self {
        Self {
            workspace_slug: workspace_slug.into(),
            title: params.title,
            guest: params.guest,
            board_unique_key: params.board_unique_key,
            in_reply_to: params.in_reply_to,
            initial_status,
            initial_guest_comment,
        }
    }
}

/// Identifiers and URLs the server returns for a freshly created board.
///
/// Opaque to the client; no shape validation happens beyond parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBoardResponse {
    pub slug: String,
    #[serde(rename = "hostURL")]
    pub host_url: String,
    #[serde(rename = "guestURL")]
    pub guest_url: String,
}
