//! UseCase: サーバスナップショット適用処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ApplySnapshotUseCase::execute() メソッド
//! - サーバ応答の取り込み（メッセージ追記、セッション ID の採用、正規化、適用）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：2 つの応答形式が同じ内部状態に正規化される
//! - ログイン応答で空のセッションが正しく初期化されることを保証
//! - 欠落フィールドがドキュメント化されたデフォルトに解決されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ログイン応答・移動コマンド応答の適用
//! - 異常系：空のレスポンス（全フィールド欠落）
//! - エッジケース：セッション ID を含まない後続レスポンス

use std::sync::Arc;

use crate::domain::{Session, SessionRepository};
use crate::infrastructure::dto::GameResponseDto;

/// スナップショット適用のユースケース
pub struct ApplySnapshotUseCase {
    /// Repository（セッション状態の単一書き込み窓口）
    repository: Arc<dyn SessionRepository>,
}

impl ApplySnapshotUseCase {
    /// 新しい ApplySnapshotUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// サーバ応答をセッションへ取り込む
    ///
    /// # Arguments
    ///
    /// * `response` - サーバから受信したレスポンス DTO
    ///
    /// # Returns
    ///
    /// 適用後のセッションの読み取りビュー
    pub async fn execute(&self, response: GameResponseDto) -> Session {
        if let Some(message) = response.message.clone() {
            self.repository.append_message(message).await;
        }
        if let Some(session_id) = response.session_id.clone() {
            self.repository.set_session_id(session_id).await;
        }
        if let Some(username) = response
            .user_info
            .as_ref()
            .and_then(|info| info.username.clone())
        {
            self.repository.set_player_name(username).await;
        }

        let snapshot = response.into_snapshot();
        tracing::debug!(
            room = snapshot.room_name.as_ref().map(|n| n.as_str()),
            exits = snapshot.exits.as_ref().map(|e| e.len()),
            "applying server snapshot"
        );
        self.repository.apply_snapshot(snapshot).await;

        self.repository.session().await
    }
}
