//! # Resource Trait
//!
//! HTTPで公開するリソースの共通インターフェース

use crate::domain::entities::media_type::MediaType;

/// カンファレンスリソースのルートパス
pub const CONFERENCE_PATH: &str = "/conference";
/// カンファレンス配下のセッションコレクションのパスセグメント
pub const SESSION_SEGMENT: &str = "session";

/// 公開リソース
///
/// ルートのリソース一覧に自身を登録するための情報を提供する
pub trait Resource: Send + Sync {
    /// リソース名（リンクのリレーション名に使う）
    fn resource_name(&self) -> &str;

    /// ベースURIからの相対パス
    fn resource_path(&self) -> &str;

    /// リソースの既定メディアタイプ
    fn resource_media_type(&self) -> &MediaType;
}
