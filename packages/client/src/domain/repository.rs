//! Session repository abstraction.
//!
//! The session is an explicitly owned state object; consumers reach it
//! only through this trait, and every call is one atomic mutation (or
//! read) under the implementation's single-writer discipline. That
//! serialization is what keeps the run-to-completion guarantees of the
//! session operations on a multi-threaded runtime.

use async_trait::async_trait;

use super::{
    error::MoveError,
    session::{RoomSnapshot, Session},
    value_object::RoomName,
};

/// Data access abstraction over the play session
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Cloned read-only view of the current session
    async fn session(&self) -> Session;

    /// Append a line to the message log
    async fn append_message(&self, text: String);

    /// Replace the session identifier
    async fn set_session_id(&self, session_id: String);

    /// Replace the player display name
    async fn set_player_name(&self, player_name: String);

    /// Set the current room, marking it visited
    async fn set_room(&self, name: RoomName);

    /// Reconcile one normalized server snapshot into the session
    async fn apply_snapshot(&self, snapshot: RoomSnapshot);

    /// Validate and commit an optimistic local move
    async fn attempt_move(&self, direction: &str) -> Result<RoomName, MoveError>;
}
