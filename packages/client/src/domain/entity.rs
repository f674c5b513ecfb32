//! Core domain models for the game client.

use serde::{Deserialize, Serialize};

use super::value_object::{Direction, RoomName};

/// An item as the server describes it, either lying in a room or carried
/// in the player inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item name
    pub name: String,
    /// Flavour text, when the server sends one
    pub description: Option<String>,
    /// Weight of a single unit
    pub weight: f64,
    /// How many units the stack holds
    pub quantity: u32,
}

impl Item {
    /// Create a new item with a bare name, default weight and quantity
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            weight: 0.0,
            quantity: 1,
        }
    }
}

/// One entry of a room's exit list, in server order.
///
/// `direction` is None when the server sent a label the client does not
/// recognise. Such an exit still produces a connection; it just cannot be
/// placed on the grid and stays at the centre offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    /// Parsed direction label, if recognised
    pub direction: Option<Direction>,
    /// Name of the room the exit leads to
    pub to: RoomName,
}

/// A room node on the client-side map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room name, unique within the map
    pub name: RoomName,
    /// Whether the player has stood in this room. Transitions false→true
    /// only, never back.
    pub visited: bool,
    /// Grid coordinates relative to the last snapshot centre
    pub x: i64,
    pub y: i64,
    /// Exit list; empty until the player visits the room and a snapshot
    /// re-centres on it
    pub exits: Vec<Exit>,
}

/// A directed edge between two rooms, derived one-for-one from an exit
/// entry. A reverse edge exists only if the target room independently
/// lists a reciprocal exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: RoomName,
    pub to: RoomName,
}

/// The set of known rooms and the connections between them.
///
/// Rooms are unique by name (inserting an existing name replaces the
/// node); connections are an ordered sequence. Both the exits-based
/// snapshot reconstruction and the coordinate-based movement check
/// operate on this one structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomMap {
    rooms: Vec<Room>,
    connections: Vec<Connection>,
}

impl RoomMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// All known rooms, in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All connections, in emission order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up a room by name
    pub fn room(&self, name: &RoomName) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.name == name)
    }

    /// Look up a room by grid coordinates
    pub fn room_at(&self, x: i64, y: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.x == x && r.y == y)
    }

    /// Mark the named room visited, if it is on the map
    pub fn mark_visited(&mut self, name: &RoomName) {
        if let Some(room) = self.rooms.iter_mut().find(|r| &r.name == name) {
            room.visited = true;
        }
    }

    /// Insert a room, replacing any existing node with the same name
    pub fn insert_room(&mut self, room: Room) {
        if let Some(existing) = self.rooms.iter_mut().find(|r| r.name == room.name) {
            *existing = room;
        } else {
            self.rooms.push(room);
        }
    }

    /// Append a directed connection
    pub fn connect(&mut self, from: RoomName, to: RoomName) {
        self.connections.push(Connection { from, to });
    }

    /// Whether any connection, taken in either orientation, joins the two
    /// coordinate pairs.
    ///
    /// Endpoints are resolved by name through the room set, so the check
    /// holds for maps built from exit lists and for maps seeded directly
    /// with coordinates alike.
    pub fn has_path(&self, from: (i64, i64), to: (i64, i64)) -> bool {
        self.connections.iter().any(|c| {
            let (Some(f), Some(t)) = (self.room(&c.from), self.room(&c.to)) else {
                return false;
            };
            ((f.x, f.y) == from && (t.x, t.y) == to)
                || ((f.x, f.y) == to && (t.x, t.y) == from)
        })
    }

    /// Rebuild the map as a fresh neighbourhood around `centre`.
    ///
    /// The centre lands at the origin, visited, carrying the snapshot's
    /// exit list. Each exit emits a connection and, for targets not yet
    /// inserted, a frontier node at the direction's offset (unplaceable
    /// directions stay at the origin offset), unvisited and with no exits
    /// of its own. The previous map contents are discarded; exploration
    /// history lives in the session's visited-room set, not here.
    pub fn rebuild_around(centre: RoomName, exits: &[Exit]) -> Self {
        let mut map = RoomMap::new();
        map.insert_room(Room {
            name: centre.clone(),
            visited: true,
            x: 0,
            y: 0,
            exits: exits.to_vec(),
        });
        for exit in exits {
            map.connect(centre.clone(), exit.to.clone());
            if map.room(&exit.to).is_none() {
                let (x, y) = exit.direction.map(Direction::offset).unwrap_or((0, 0));
                map.insert_room(Room {
                    name: exit.to.clone(),
                    visited: false,
                    x,
                    y,
                    exits: Vec::new(),
                });
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_name(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    fn bare_room(name: &str, x: i64, y: i64) -> Room {
        Room {
            name: room_name(name),
            visited: false,
            x,
            y,
            exits: Vec::new(),
        }
    }

    #[test]
    fn test_insert_room_dedups_by_name() {
        // テスト項目: 同名の部屋を挿入すると既存ノードが置き換えられる
        // given (前提条件):
        let mut map = RoomMap::new();
        map.insert_room(bare_room("library", 0, 0));

        // when (操作): 同じ名前・別の座標で挿入する
        map.insert_room(bare_room("library", 100, 0));

        // then (期待する結果): ノードは 1 つだけで座標が更新されている
        assert_eq!(map.rooms().len(), 1);
        assert_eq!(map.room(&room_name("library")).unwrap().x, 100);
    }

    #[test]
    fn test_room_at_coordinates() {
        // テスト項目: 座標で部屋を検索できる
        // given (前提条件):
        let mut map = RoomMap::new();
        map.insert_room(bare_room("a", 0, 0));
        map.insert_room(bare_room("b", 100, 0));

        // then (期待する結果):
        assert_eq!(map.room_at(100, 0).unwrap().name, room_name("b"));
        assert!(map.room_at(0, 100).is_none());
    }

    #[test]
    fn test_has_path_either_orientation() {
        // テスト項目: 接続はどちら向きでも通路として判定される
        // given (前提条件):
        let mut map = RoomMap::new();
        map.insert_room(bare_room("a", 0, 0));
        map.insert_room(bare_room("b", 100, 0));
        map.connect(room_name("a"), room_name("b"));

        // then (期待する結果):
        assert!(map.has_path((0, 0), (100, 0)));
        assert!(map.has_path((100, 0), (0, 0)));
        assert!(!map.has_path((0, 0), (0, 100)));
    }

    #[test]
    fn test_mark_visited_only_sets_true() {
        // テスト項目: mark_visited は visited を true にするだけで戻さない
        // given (前提条件):
        let mut map = RoomMap::new();
        map.insert_room(bare_room("a", 0, 0));

        // when (操作):
        map.mark_visited(&room_name("a"));
        map.mark_visited(&room_name("a"));

        // then (期待する結果):
        assert!(map.room(&room_name("a")).unwrap().visited);
    }

    #[test]
    fn test_rebuild_around_shape() {
        // テスト項目: exits から再構築した地図の形が仕様どおりになる
        // given (前提条件): A の出口が east:B, north:C
        let exits = vec![
            Exit {
                direction: Some(Direction::East),
                to: room_name("B"),
            },
            Exit {
                direction: Some(Direction::North),
                to: room_name("C"),
            },
        ];

        // when (操作):
        let map = RoomMap::rebuild_around(room_name("A"), &exits);

        // then (期待する結果): 部屋 3 つ、接続 2 つ
        assert_eq!(map.rooms().len(), 3);
        assert_eq!(map.connections().len(), 2);

        let a = map.room(&room_name("A")).unwrap();
        assert!(a.visited);
        assert_eq!((a.x, a.y), (0, 0));
        assert_eq!(a.exits.len(), 2);

        let b = map.room(&room_name("B")).unwrap();
        assert!(!b.visited);
        assert_eq!((b.x, b.y), (100, 0));
        assert!(b.exits.is_empty());

        let c = map.room(&room_name("C")).unwrap();
        assert!(!c.visited);
        assert_eq!((c.x, c.y), (0, -100));
    }

    #[test]
    fn test_rebuild_around_unplaceable_direction() {
        // テスト項目: 認識できない方向の出口は原点オフセットに置かれ、接続は残る
        // given (前提条件):
        let exits = vec![Exit {
            direction: None,
            to: room_name("void"),
        }];

        // when (操作):
        let map = RoomMap::rebuild_around(room_name("A"), &exits);

        // then (期待する結果):
        assert_eq!(map.connections().len(), 1);
        let void = map.room(&room_name("void")).unwrap();
        assert_eq!((void.x, void.y), (0, 0));
    }

    #[test]
    fn test_rebuild_around_self_exit() {
        // テスト項目: 自分自身への出口はノードを増やさず接続だけ追加する
        // given (前提条件):
        let exits = vec![Exit {
            direction: Some(Direction::East),
            to: room_name("A"),
        }];

        // when (操作):
        let map = RoomMap::rebuild_around(room_name("A"), &exits);

        // then (期待する結果):
        assert_eq!(map.rooms().len(), 1);
        assert_eq!(map.connections().len(), 1);
    }

    #[test]
    fn test_item_named_defaults() {
        // テスト項目: Item::named はデフォルトの重さと個数を持つ
        // when (操作):
        let item = Item::named("sword");

        // then (期待する結果):
        assert_eq!(item.name, "sword");
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.quantity, 1);
        assert!(item.description.is_none());
    }
}
