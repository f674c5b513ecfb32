//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomName validation error
    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("RoomName cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },
}

/// Errors related to local movement validation.
///
/// Every variant is recoverable: the session stays unchanged and the
/// Display text is what the player sees in the message log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The direction token could not be parsed
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// The current room is not present in the room map
    #[error("You are not in any known room")]
    CurrentRoomMissing,

    /// No connection joins the current room to the target coordinates
    #[error("There is no path in that direction")]
    NoPath,

    /// A connection exists but no room is known at the target coordinates
    #[error("The space ahead is unknown, you cannot enter")]
    UnknownDestination,
}
