//! Validation errors for board-creation parameters.

use thiserror::Error;

/// Local validation failures raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The guest email field was empty.
    #[error("guest.email is required")]
    MissingGuestEmail,

    /// The guest email does not look like `local@domain.tld`.
    #[error("guest.email is invalid: {0}")]
    InvalidGuestEmail(String),

    /// The board unique key is empty, contains whitespace, or is too long.
    #[error("boardUniqueKey is invalid. It must be a non-empty string without whitespace and <= 255 chars. Got: \"{0}\"")]
    InvalidBoardUniqueKey(String),

    /// A `scheduled_for_*` status was supplied without a time limit.
    #[error("initialStatus.timeLimit is required when statusKey is scheduled_for_*")]
    MissingTimeLimit,

    /// The time limit is not a real calendar date in `YYYY-MM-DD` form.
    #[error("initialStatus.timeLimit must be a valid date in YYYY-MM-DD format. Got: {0}")]
    InvalidTimeLimit(String),
}
