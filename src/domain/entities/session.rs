//! # Session Entity
//!
//! カンファレンス内セッションのドメインエンティティ

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identifiable;

/// カンファレンスのセッション
///
/// IDは親カンファレンス内でのみ一意であればよい。
/// ライフサイクルは親の `Conference` に従属する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub outline: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl Session {
    /// 新しいセッションを作成
    ///
    /// # Arguments
    ///
    /// * `id` - セッションID
    /// * `title` - セッションタイトル
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            outline: None,
            start: None,
            end: None,
        }
    }
}

impl Identifiable for Session {
    fn id(&self) -> &str {
        &self.id
    }
}
