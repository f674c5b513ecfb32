//! Text-adventure game client library.
//!
//! This library mirrors a server-authoritative play session on the
//! client: it reconciles server snapshots into a local session state
//! (message log, inventory, weight budget, current room, explored map)
//! and validates optimistic player movement against the known room
//! graph before committing it.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
