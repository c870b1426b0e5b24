//! # conference-rest
//!
//! カンファレンスとそのセッションをHTTPで公開するREST APIサーバー
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、メディアタイプ、コンテントネゴシエーション（外部依存なし）
//! - **Application層**: 表現（Representation）と変換、ネストしたCRUDのユースケース
//! - **Adapter層**: HTTP（axum）、XML/JSONコーデック、ストレージ、設定
//! - **Driver層**: CLI、依存性注入、サーバーの起動

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
