//! Configuration
//!
//! JSONファイルからのサーバー設定の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::media_types::DEFAULT_NAMESPACE;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// ストレージ設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// プロセス内メモリ（再起動で消える）
    #[default]
    Memory,
    /// JSONファイル
    JsonFile { path: String },
}

/// サーバー設定
///
/// すべてのフィールドに既定値があり、空のJSONオブジェクトも有効な設定になる
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// LocationヘッダーとリンクのベースURI（空なら相対パス）
    #[serde(default)]
    pub base_uri: String,

    /// ベンダーメディアタイプの名前空間（`application/vnd.<ns>+xml`）
    #[serde(default = "default_media_namespace")]
    pub media_namespace: String,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_media_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはJSONのパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            base_uri: String::new(),
            media_namespace: default_media_namespace(),
            storage: StorageConfig::default(),
        }
    }
}
