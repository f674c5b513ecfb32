//! InMemory Session Repository 実装
//!
//! ドメイン層が定義する SessionRepository trait の具体的な実装。
//! Mutex で包んだ Session をインメモリ状態として使用します。
//!
//! サーバ応答のコールバックとユーザ入力は到着順に直列化される必要が
//! あるため（last-applied-wins）、1 回の呼び出しを 1 回のロック獲得に
//! 対応させています。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    MoveError, RoomName, RoomSnapshot, Session, SessionRepository,
};

/// インメモリ Session Repository 実装
///
/// セッションの所有権はこの構造体が持ち、利用側には trait 経由の
/// ハンドルだけを渡します（グローバルなストアは存在しない）。
pub struct InMemorySessionRepository {
    /// Session ドメインモデル
    session: Arc<Mutex<Session>>,
}

impl InMemorySessionRepository {
    /// 新しい InMemorySessionRepository を作成
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn session(&self) -> Session {
        let session = self.session.lock().await;
        session.clone()
    }

    async fn append_message(&self, text: String) {
        let mut session = self.session.lock().await;
        session.append_message(text);
    }

    async fn set_session_id(&self, session_id: String) {
        let mut session = self.session.lock().await;
        session.set_session_id(session_id);
    }

    async fn set_player_name(&self, player_name: String) {
        let mut session = self.session.lock().await;
        session.set_player_name(player_name);
    }

    async fn set_room(&self, name: RoomName) {
        let mut session = self.session.lock().await;
        session.set_room(name);
    }

    async fn apply_snapshot(&self, snapshot: RoomSnapshot) {
        let mut session = self.session.lock().await;
        session.apply_snapshot(snapshot);
    }

    async fn attempt_move(&self, direction: &str) -> Result<RoomName, MoveError> {
        let mut session = self.session.lock().await;
        session.attempt_move(direction)
    }
}
