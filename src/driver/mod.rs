//! # Driver Layer (Presentation)
//!
//! CLIとHTTPサーバーの起動を提供
//!
//! ## 特徴
//!
//! - 設定を解決し、依存性注入（DI）で全てを組み立てる
//! - HTTPサーバーを起動してリクエストをAdapter層に渡す
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパースと設定の解決
//! - **server**: サーバーの組み立てと起動

pub mod cli;
pub mod server;

pub use cli::Args;
pub use server::ConferenceServer;
