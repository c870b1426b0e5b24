//! JSON File Repository Implementation
//!
//! RepositoryのJSON実装（全エンティティを1つのJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::entities::Identifiable;
use crate::domain::repositories::Repository;

/// JSONファイルベースのリポジトリ
///
/// ファイルは `{ "<id>": <entity>, ... }` 形式。ファイルへのアクセスは
/// 非同期Mutexで直列化し、同時に書き込まれることはない。
pub struct JsonFileRepository<T> {
    path: PathBuf,
    file_lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T>
where
    T: Identifiable + Serialize + DeserializeOwned,
{
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - JSONファイルのパス（存在しなければ空として扱う）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルから全エンティティを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<BTreeMap<String, T>> {
        if !path.exists() {
            debug!("No data file at {}, starting empty", path.display());
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path).context("Failed to read data file")?;
        let entities: BTreeMap<String, T> =
            serde_json::from_str(&content).context("Failed to parse data file JSON")?;

        debug!("Loaded {} entities from {}", entities.len(), path.display());
        Ok(entities)
    }

    /// ファイルに全エンティティを保存する（同期処理）
    fn save_sync(path: &Path, entities: &BTreeMap<String, T>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create data directory")?;
        }

        let json = serde_json::to_string_pretty(entities).context("Failed to serialize entities")?;
        fs::write(path, json).context("Failed to write data file")?;

        debug!("Saved {} entities to {}", entities.len(), path.display());
        Ok(())
    }

    /// 読み込み・変更・保存をブロッキングタスクで実行する
    async fn modify<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, T>) + Send + 'static,
    {
        let _guard = self.file_lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let mut entities = Self::load_sync(&path)?;
            change(&mut entities);
            Self::save_sync(&path, &entities)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Identifiable + Serialize + DeserializeOwned,
{
    async fn get(&self, id: &str) -> Result<Option<T>> {
        let _guard = self.file_lock.lock().await;
        let path = self.path.clone();
        let mut entities = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(entities.remove(id))
    }

    async fn store(&self, entity: &T) -> Result<()> {
        let entity = entity.clone();
        self.modify(move |entities| {
            entities.insert(entity.id().to_string(), entity);
        })
        .await
    }

    async fn remove(&self, entity: &T) -> Result<()> {
        let id = entity.id().to_string();
        self.modify(move |entities| {
            entities.remove(&id);
        })
        .await
    }
}
