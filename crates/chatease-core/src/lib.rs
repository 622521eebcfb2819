//! ChatEase Core Domain Types
//!
//! This crate contains the request/response types and pure validators for
//! the ChatEase board-creation API, with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! The `chatease-client` crate layers the HTTP transport on top of these
//! types.

pub mod error;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use error::ValidationError;
pub use types::{
    CreateBoardParams, CreateBoardRequest, CreateBoardResponse, GuestInfo, InitialGuestComment,
    InitialStatus, StatusKey,
};
