//! # Repository Trait
//!
//! IDで引けるエンティティストアを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Identifiable;

/// エンティティリポジトリ
///
/// ストレージエンジンはキーバリューまたはドキュメントストアを想定する。
/// 競合する書き込みの直列化はリポジトリ側の責務（後勝ちでもよい）。
#[async_trait]
pub trait Repository<T: Identifiable>: Send + Sync {
    /// IDでエンティティを取得する
    ///
    /// # Returns
    ///
    /// 存在しない場合は `None`
    ///
    /// # Errors
    ///
    /// ストレージへのアクセスに失敗した場合にエラーを返す
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// エンティティを保存する（同じIDのエンティティは上書き）
    ///
    /// # Errors
    ///
    /// ストレージへの書き込みに失敗した場合にエラーを返す
    async fn store(&self, entity: &T) -> Result<()>;

    /// エンティティを削除する
    ///
    /// # Errors
    ///
    /// ストレージへの書き込みに失敗した場合にエラーを返す
    async fn remove(&self, entity: &T) -> Result<()>;
}
