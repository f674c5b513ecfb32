//! ASCII rendering of the explored map.
//!
//! Draws the room grid the way the session knows it: the current room,
//! rooms already visited, and unvisited frontier rooms seen through exit
//! lists. Rooms sit on a fixed-pitch grid, so coordinates translate
//! directly into character cells.

use crate::domain::{GRID_UNIT, RoomMap, RoomName};

const MARKER_CURRENT: char = '@';
const MARKER_VISITED: char = 'o';
const MARKER_FRONTIER: char = '?';

/// Render the map as a small grid plus a legend naming every marker.
pub fn render(map: &RoomMap, current: Option<&RoomName>) -> String {
    let rooms = map.rooms();
    if rooms.is_empty() {
        return String::from("(nothing explored yet)\n");
    }

    let min_x = rooms.iter().map(|r| r.x).min().unwrap_or(0);
    let max_x = rooms.iter().map(|r| r.x).max().unwrap_or(0);
    let min_y = rooms.iter().map(|r| r.y).min().unwrap_or(0);
    let max_y = rooms.iter().map(|r| r.y).max().unwrap_or(0);

    let cols = ((max_x - min_x) / GRID_UNIT + 1) as usize;
    let rows = ((max_y - min_y) / GRID_UNIT + 1) as usize;

    let mut grid = vec![vec![' '; cols]; rows];
    for room in rooms {
        let col = ((room.x - min_x) / GRID_UNIT) as usize;
        let row = ((room.y - min_y) / GRID_UNIT) as usize;
        grid[row][col] = marker(map, &room.name, current);
    }

    let mut out = String::new();
    for row in grid {
        for cell in row {
            out.push(' ');
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    for room in rooms {
        out.push_str(&format!(
            " {} {}\n",
            marker(map, &room.name, current),
            room.name
        ));
    }
    out
}

fn marker(map: &RoomMap, name: &RoomName, current: Option<&RoomName>) -> char {
    if current == Some(name) {
        MARKER_CURRENT
    } else if map.room(name).is_some_and(|r| r.visited) {
        MARKER_VISITED
    } else {
        MARKER_FRONTIER
    }
}
