//! In-Memory Repository Implementation
//!
//! Repositoryのプロセス内メモリ実装

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Identifiable;
use crate::domain::repositories::Repository;

/// メモリ上のリポジトリ
///
/// 取得時は複製を返すため、呼び出し側の変更は `store` するまで反映されない
pub struct InMemoryRepository<T: Identifiable> {
    entities: RwLock<HashMap<String, T>>,
}

impl<T: Identifiable> InMemoryRepository<T> {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// 保存されているエンティティ数
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl<T: Identifiable> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Identifiable> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.entities.read().await.get(id).cloned())
    }

    async fn store(&self, entity: &T) -> Result<()> {
        self.entities
            .write()
            .await
            .insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    async fn remove(&self, entity: &T) -> Result<()> {
        self.entities.write().await.remove(entity.id());
        Ok(())
    }
}
