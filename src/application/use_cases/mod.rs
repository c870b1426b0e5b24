//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ConferenceResource**: カンファレンスとセッションのネストしたCRUD
//! - **Resource**: 公開リソースの共通インターフェース

pub mod conference_resource;
pub mod resource;

pub use conference_resource::ConferenceResource;
pub use resource::Resource;
