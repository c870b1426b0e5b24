//! # Conference Entity
//!
//! カンファレンス集約のドメインエンティティ
//!
//! カンファレンスは自身のセッションを所有し、永続化は集約単位で行う。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::Session;
use super::Identifiable;

/// カンファレンス（集約ルート）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub id: String,
    pub name: String,
    pub tag_line: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    sessions: Vec<Session>,
}

impl Conference {
    /// 新しいカンファレンスを作成
    ///
    /// # Arguments
    ///
    /// * `id` - カンファレンスID
    /// * `name` - カンファレンス名
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tag_line: None,
            start: None,
            end: None,
            sessions: Vec::new(),
        }
    }

    /// セッションへの参照を返す（順序は保証しない）
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// IDでセッションを検索する
    ///
    /// セッション数は小さい前提のため線形探索で十分
    pub fn find_session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == session_id)
    }

    /// IDでセッションを検索する（可変参照）
    pub fn find_session_mut(&mut self, session_id: &str) -> Option<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|session| session.id == session_id)
    }

    /// セッションを追加する
    ///
    /// # Returns
    ///
    /// 追加できた場合に `true`。同じIDのセッションが既に存在する場合は `false`
    pub fn add_session(&mut self, session: Session) -> bool {
        if self.find_session(&session.id).is_some() {
            return false;
        }
        self.sessions.push(session);
        true
    }

    /// IDでセッションを削除する
    ///
    /// # Returns
    ///
    /// 削除されたセッション
    pub fn remove_session(&mut self, session_id: &str) -> Option<Session> {
        let index = self
            .sessions
            .iter()
            .position(|session| session.id == session_id)?;
        Some(self.sessions.swap_remove(index))
    }
}

impl Identifiable for Conference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find_session() {
        let mut conference = Conference::new("c-1", "RustConf");

        assert!(conference.add_session(Session::new("s-1", "Keynote")));
        assert!(conference.add_session(Session::new("s-2", "Async in Depth")));

        assert_eq!(conference.sessions().len(), 2);
        assert_eq!(conference.find_session("s-2").unwrap().title, "Async in Depth");
        assert!(conference.find_session("s-3").is_none());
    }

    #[test]
    fn test_add_session_rejects_duplicate_id() {
        let mut conference = Conference::new("c-1", "RustConf");

        assert!(conference.add_session(Session::new("s-1", "Keynote")));
        assert!(!conference.add_session(Session::new("s-1", "Another Keynote")));

        assert_eq!(conference.sessions().len(), 1);
        assert_eq!(conference.find_session("s-1").unwrap().title, "Keynote");
    }

    #[test]
    fn test_remove_session() {
        let mut conference = Conference::new("c-1", "RustConf");
        conference.add_session(Session::new("s-1", "Keynote"));
        conference.add_session(Session::new("s-2", "Lightning Talks"));

        let removed = conference.remove_session("s-1");

        assert_eq!(removed.unwrap().id, "s-1");
        assert!(conference.find_session("s-1").is_none());
        assert_eq!(conference.sessions().len(), 1);
        assert!(conference.remove_session("s-1").is_none());
    }

    #[test]
    fn test_find_session_mut_updates_in_place() {
        let mut conference = Conference::new("c-1", "RustConf");
        conference.add_session(Session::new("s-1", "Keynote"));

        conference.find_session_mut("s-1").unwrap().title = "Closing Keynote".to_string();

        assert_eq!(conference.find_session("s-1").unwrap().title, "Closing Keynote");
    }

    #[test]
    fn test_serialization_keeps_sessions() {
        let mut conference = Conference::new("c-1", "RustConf");
        conference.add_session(Session::new("s-1", "Keynote"));

        let json = serde_json::to_string(&conference).unwrap();
        let restored: Conference = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, conference);
    }
}
