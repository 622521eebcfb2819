//! ChatEase client SDK.
//!
//! This crate provides an async client for the ChatEase board-creation
//! endpoint. Parameters are validated locally before any request is sent;
//! HTTP outcomes are mapped to typed results.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatease_client::{
//!     ChatEaseClient, ChatEaseClientOptions, CreateBoardParams, GuestInfo,
//! };
//!
//! async fn open_board() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatEaseClient::new(ChatEaseClientOptions {
//!         api_token: "secret-token".to_string(),
//!         workspace_slug: "acme".to_string(),
//!         base_url: None,
//!     })?;
//!
//!     let board = client
//!         .create_board(CreateBoardParams {
//!             title: "Inquiry #1".to_string(),
//!             guest: GuestInfo {
//!                 name: "Taro".to_string(),
//!                 email: "taro@example.com".to_string(),
//!             },
//!             board_unique_key: "20260225-0001".to_string(),
//!             in_reply_to: None,
//!         })
//!         .await?;
//!
//!     println!("Guest URL: {}", board.guest_url);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod runtime;
mod transport;

// Re-export main types
pub use chatease_core::{
    CreateBoardParams, CreateBoardResponse, GuestInfo, InitialGuestComment, InitialStatus,
    StatusKey, ValidationError,
};
pub use client::{ChatEaseClient, ChatEaseClientOptions, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use runtime::{NativeRuntime, RuntimeProbe};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
