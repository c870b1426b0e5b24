//! CLI Argument Parsing
//!
//! CLIの引数解析と設定ファイルとのマージ

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::adapter::config::{Config, StorageConfig};

/// カンファレンスのREST APIサーバー
#[derive(Parser, Debug, Clone)]
#[command(name = "conference-rest")]
#[command(about = "Serve conferences and their sessions over HTTP", long_about = None)]
pub struct Args {
    /// Config file path (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bind address, overrides the config file
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Persist conferences to this JSON file instead of memory
    #[arg(long)]
    pub data_file: Option<String>,
}

impl Args {
    /// 設定ファイルを読み込み、CLI引数で上書きした設定を返す
    ///
    /// # Errors
    ///
    /// 指定された設定ファイルを読み込めない場合にエラーを返す
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path);
                Config::load(path)?
            }
            None => Config::default(),
        };

        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(path) = &self.data_file {
            config.storage = StorageConfig::JsonFile { path: path.clone() };
        }

        Ok(config)
    }
}
