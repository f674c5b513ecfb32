//! The play-session aggregate.
//!
//! `Session` is the client-side mirror of the server-authoritative game
//! state: message log, inventory, weight budget, current room and the
//! explored map. It is mutated only through the operations defined here,
//! one at a time, so every mutation runs to completion before the next
//! begins.

use serde::{Deserialize, Serialize};

use super::{
    entity::{Exit, Item, RoomMap},
    error::MoveError,
    value_object::{Direction, RoomName, Timestamp},
};

/// Weight budget a fresh session assumes until the server says otherwise
pub const DEFAULT_WEIGHT_LIMIT: f64 = 10.0;

/// Canonical, normalized form of one server snapshot.
///
/// The wire boundary folds both historical response shapes into this
/// record before reconciliation runs; missing or malformed fields have
/// already been resolved to their documented defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomSnapshot {
    /// Current room name, when the snapshot resolved one
    pub room_name: Option<RoomName>,
    /// Items lying in the current room
    pub room_items: Vec<Item>,
    /// Player inventory
    pub inventory: Vec<Item>,
    /// Current carried weight; absent means "reset to zero"
    pub current_weight: Option<f64>,
    /// Weight limit; absent means "keep the previous limit"
    pub max_weight: Option<f64>,
    /// Exit list of the current room, present only in the nested shape
    pub exits: Option<Vec<Exit>>,
}

/// Client-side view of one play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Server-issued session identifier
    pub session_id: Option<String>,
    /// Player display name, adopted from the login response
    pub player_name: Option<String>,
    /// When this client session started
    pub started_at: Timestamp,
    /// Message log shown to the player; append-only, never deduplicated
    pub messages: Vec<String>,
    /// Player inventory
    pub inventory: Vec<Item>,
    /// Items lying in the current room
    pub room_items: Vec<Item>,
    /// Current carried weight
    pub total_weight: f64,
    /// Maximum carriable weight
    pub weight_limit: f64,
    /// Name of the room the player is in
    pub room_name: Option<RoomName>,
    /// Every room the player has ever stood in, in first-visit order.
    /// Append-only; survives map replacement.
    pub visited_rooms: Vec<RoomName>,
    /// The explored neighbourhood around the current room
    pub room_map: RoomMap,
}

impl Session {
    /// Create an empty session.
    ///
    /// Everything starts blank; the first authoritative snapshot (the
    /// login response) populates it.
    pub fn new(started_at: Timestamp) -> Self {
        Self {
            session_id: None,
            player_name: None,
            started_at,
            messages: Vec::new(),
            inventory: Vec::new(),
            room_items: Vec::new(),
            total_weight: 0.0,
            weight_limit: DEFAULT_WEIGHT_LIMIT,
            room_name: None,
            visited_rooms: Vec::new(),
            room_map: RoomMap::new(),
        }
    }

    /// Append a line to the message log
    pub fn append_message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    /// Replace the session identifier
    pub fn set_session_id(&mut self, session_id: String) {
        self.session_id = Some(session_id);
    }

    /// Replace the player display name
    pub fn set_player_name(&mut self, player_name: String) {
        self.player_name = Some(player_name);
    }

    /// Set the current room.
    ///
    /// Marks the matching map room visited if it exists and records the
    /// name in the visited set if it is not there yet. Calling with the
    /// already-current name changes nothing further.
    pub fn set_room(&mut self, name: RoomName) {
        self.room_map.mark_visited(&name);
        if !self.visited_rooms.contains(&name) {
            self.visited_rooms.push(name.clone());
        }
        self.room_name = Some(name);
    }

    /// Reconcile one server snapshot into the session.
    ///
    /// Room items, inventory and current weight are replaced wholesale;
    /// the weight limit is overwritten only when the snapshot carries one.
    /// When the snapshot names a room it is committed through
    /// [`Session::set_room`], and when it also carries an exit list the
    /// map is rebuilt as a fresh neighbourhood around that room. Rooms
    /// from earlier snapshots that are not adjacent to the new centre
    /// drop off the map; the visited set keeps the exploration history.
    pub fn apply_snapshot(&mut self, snapshot: RoomSnapshot) {
        self.room_items = snapshot.room_items;
        self.inventory = snapshot.inventory;
        self.total_weight = snapshot.current_weight.unwrap_or(0.0);
        if let Some(limit) = snapshot.max_weight {
            self.weight_limit = limit;
        }
        if let Some(name) = snapshot.room_name {
            self.set_room(name);
        }
        if let Some(exits) = snapshot.exits {
            // Re-centering needs an anchor; a snapshot that carries exits
            // without ever having named a room leaves the map alone.
            if let Some(centre) = self.room_name.clone() {
                self.room_map = RoomMap::rebuild_around(centre, &exits);
            }
        }
    }

    /// Validate and commit an optimistic local move.
    ///
    /// Checks run in order: the direction must parse, the current room
    /// must be on the map, a connection must join the current and target
    /// coordinates, and a room must exist at the target. On success the
    /// target becomes the current room and an arrival message is logged;
    /// on failure the session is unchanged apart from one logged message.
    pub fn attempt_move(&mut self, direction: &str) -> Result<RoomName, MoveError> {
        let Some(dir) = Direction::parse(direction) else {
            return self.fail_move(MoveError::InvalidDirection(direction.trim().to_string()));
        };
        let Some(current) = self
            .room_name
            .as_ref()
            .and_then(|name| self.room_map.room(name))
        else {
            return self.fail_move(MoveError::CurrentRoomMissing);
        };
        let (cx, cy) = (current.x, current.y);
        let (dx, dy) = dir.offset();
        let (tx, ty) = (cx + dx, cy + dy);
        if !self.room_map.has_path((cx, cy), (tx, ty)) {
            return self.fail_move(MoveError::NoPath);
        }
        let Some(target) = self.room_map.room_at(tx, ty).map(|r| r.name.clone()) else {
            return self.fail_move(MoveError::UnknownDestination);
        };
        self.set_room(target.clone());
        self.append_message(format!("You enter {target}."));
        Ok(target)
    }

    fn fail_move(&mut self, err: MoveError) -> Result<RoomName, MoveError> {
        self.append_message(err.to_string());
        Err(err)
    }
}
