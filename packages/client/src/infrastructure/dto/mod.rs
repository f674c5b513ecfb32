//! Data transfer objects for the server wire boundary.

pub mod snapshot;

pub use snapshot::{GameResponseDto, ItemDto, RoomDetailDto, UserInfoDto};
