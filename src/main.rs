//! conference-rest - Conference REST API Server
//!
//! カンファレンスとセッションをXML/JSONで提供するHTTPサーバー

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use conference_rest::driver::{Args, ConferenceServer};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // CLI引数で上書きした設定を解決
    let config = args.resolve_config()?;

    ConferenceServer::new(config).run().await
}
