//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Conference**: カンファレンス集約（セッションを所有する）
//! - **Session**: カンファレンス内のセッション
//! - **MediaType**: メディアタイプのバリューオブジェクト

pub mod conference;
pub mod media_type;
pub mod session;

/// IDで識別されるエンティティ
///
/// リポジトリはこのIDをキーとしてエンティティを保存する
pub trait Identifiable: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}
