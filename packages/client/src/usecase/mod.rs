//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod apply_snapshot;
pub mod move_player;

pub use apply_snapshot::ApplySnapshotUseCase;
pub use move_player::MovePlayerUseCase;
