//! Server response DTOs and snapshot normalization.
//!
//! The game server has shipped two response shapes over its lifetime: a
//! legacy flat one (`roomItems`, `roomName`) and a nested one
//! (`currentRoom.{name, description, items, exits}`). Both are accepted
//! here in a single all-optional DTO and folded into the canonical
//! [`RoomSnapshot`] before any reconciliation logic runs. A field that is
//! missing, or present with the wrong type, degrades to its documented
//! default; deserializing a snapshot never fails outright.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::domain::{Direction, Exit, Item, RoomName, RoomSnapshot};

/// Accept a field of type `T`, treating a wrong-typed value like a
/// missing one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// One item as the server serializes it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDto {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub quantity: Option<u32>,
}

impl ItemDto {
    /// Build the domain item; entries without a usable name are dropped
    fn into_item(self) -> Option<Item> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(Item {
            name,
            description: self.description,
            weight: self.weight.unwrap_or(0.0),
            quantity: self.quantity.unwrap_or(1),
        })
    }
}

/// The nested room object of the newer response shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomDetailDto {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<ItemDto>>,
    /// Direction label → target room name. A BTreeMap keeps connection
    /// emission order explicit and stable across snapshots.
    #[serde(default, deserialize_with = "lenient")]
    pub exits: Option<BTreeMap<String, String>>,
}

/// Player info attached to login responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfoDto {
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
}

/// One server response, covering both historical shapes.
///
/// Field inventory follows the server's `GameResponse`; everything is
/// optional and lenient.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponseDto {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub game_over: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_info: Option<UserInfoDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_room: Option<RoomDetailDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub room_items: Option<Vec<ItemDto>>,
    #[serde(default, deserialize_with = "lenient")]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory: Option<Vec<ItemDto>>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_weight: Option<f64>,
}

impl GameResponseDto {
    /// Whether the server flagged the game as finished
    pub fn is_game_over(&self) -> bool {
        self.game_over.unwrap_or(false)
    }

    /// Normalize into the canonical snapshot record.
    ///
    /// Precedence rules: room items prefer `currentRoom.items` over the
    /// flat `roomItems`; the room name resolves through
    /// `currentRoom.name` → `currentRoom.description` → flat `roomName`,
    /// first valid value wins; exits are carried over only when the
    /// nested room object had them.
    pub fn into_snapshot(self) -> RoomSnapshot {
        let current_room = self.current_room;

        let (nested_name, nested_description, nested_items, nested_exits) = match current_room {
            Some(room) => (room.name, room.description, room.items, room.exits),
            None => (None, None, None, None),
        };

        let room_items = nested_items
            .or(self.room_items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(ItemDto::into_item)
            .collect();

        let inventory = self
            .inventory
            .unwrap_or_default()
            .into_iter()
            .filter_map(ItemDto::into_item)
            .collect();

        let room_name = [nested_name, nested_description, self.room_name]
            .into_iter()
            .flatten()
            .find_map(|name| RoomName::new(name).ok());

        let exits = nested_exits.map(|exits| {
            exits
                .into_iter()
                .filter_map(|(direction, to)| {
                    let to = RoomName::new(to).ok()?;
                    Some(Exit {
                        direction: Direction::parse(&direction),
                        to,
                    })
                })
                .collect()
        });

        RoomSnapshot {
            room_name,
            room_items,
            inventory,
            current_weight: self.current_weight,
            max_weight: self.max_weight,
            exits,
        }
    }
}
