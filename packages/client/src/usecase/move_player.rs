//! UseCase: 楽観的移動処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MovePlayerUseCase::execute() メソッド
//! - サーバ確認を待たない、既知の地図に対するローカル移動の検証と確定
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：通路の無い方向へは移動できない
//! - 失敗時にセッション状態が変わらないこと（メッセージ 1 行を除く）を保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続のある隣室への移動
//! - 異常系：通路なし・不正な方向トークン
//! - エッジケース：地図が空のままの移動試行

use std::sync::Arc;

use crate::domain::{MoveError, RoomName, SessionRepository};

/// 楽観的移動のユースケース
pub struct MovePlayerUseCase {
    /// Repository（セッション状態の単一書き込み窓口）
    repository: Arc<dyn SessionRepository>,
}

impl MovePlayerUseCase {
    /// 新しい MovePlayerUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// ローカル移動を実行
    ///
    /// 成否どちらの場合もプレイヤー向けのメッセージは既にログへ
    /// 追記されている。呼び出し側は結果を制御フローにだけ使う。
    ///
    /// # Arguments
    ///
    /// * `direction` - 入力された方向トークン
    ///
    /// # Returns
    ///
    /// * `Ok(RoomName)` - 移動先の部屋名
    /// * `Err(MoveError)` - 検証に失敗した理由
    pub async fn execute(&self, direction: &str) -> Result<RoomName, MoveError> {
        let result = self.repository.attempt_move(direction).await;
        match &result {
            Ok(room) => tracing::debug!(room = room.as_str(), "optimistic move committed"),
            Err(err) => tracing::debug!(%err, "optimistic move rejected"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoomSnapshot, Session, Timestamp};
    use crate::infrastructure::dto::GameResponseDto;
    use crate::infrastructure::repository::InMemorySessionRepository;

    fn room_name(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    async fn create_explored_repository() -> Arc<InMemorySessionRepository> {
        let repository = Arc::new(InMemorySessionRepository::new(Session::new(Timestamp::new(
            0,
        ))));
        let response: GameResponseDto = serde_json::from_str(
            r#"{"currentRoom": {"name": "A", "exits": {"east": "B", "south": "C"}}}"#,
        )
        .unwrap();
        repository.apply_snapshot(response.into_snapshot()).await;
        repository
    }

    #[tokio::test]
    async fn test_move_success_appends_arrival_message() {
        // テスト項目: 移動成功で現在地が変わり到着メッセージが残る
        // given (前提条件):
        let repository = create_explored_repository().await;
        let usecase = MovePlayerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("east").await;

        // then (期待する結果):
        assert_eq!(result, Ok(room_name("B")));
        let session = repository.session().await;
        assert_eq!(session.room_name, Some(room_name("B")));
        assert_eq!(session.messages.last().unwrap(), "You enter B.");
    }

    #[tokio::test]
    async fn test_move_without_path_fails() {
        // テスト項目: 通路の無い方向への移動は NoPath になる
        // given (前提条件):
        let repository = create_explored_repository().await;
        let usecase = MovePlayerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("west").await;

        // then (期待する結果):
        assert_eq!(result, Err(MoveError::NoPath));
        let session = repository.session().await;
        assert_eq!(session.room_name, Some(room_name("A")));
    }

    #[tokio::test]
    async fn test_move_with_invalid_token_fails() {
        // テスト項目: パースできない方向トークンは InvalidDirection になる
        // given (前提条件):
        let repository = create_explored_repository().await;
        let usecase = MovePlayerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("sideways").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(MoveError::InvalidDirection("sideways".to_string()))
        );
    }

    #[tokio::test]
    async fn test_move_on_empty_map_fails() {
        // テスト項目: 地図が空のままの移動は CurrentRoomMissing になる
        // given (前提条件): スナップショットを一度も適用していないセッション
        let repository = Arc::new(InMemorySessionRepository::new(Session::new(Timestamp::new(
            0,
        ))));
        repository
            .apply_snapshot(RoomSnapshot {
                room_name: Some(room_name("somewhere")),
                ..RoomSnapshot::default()
            })
            .await;
        let usecase = MovePlayerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("north").await;

        // then (期待する結果):
        assert_eq!(result, Err(MoveError::CurrentRoomMissing));
    }
}
