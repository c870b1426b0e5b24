//! Adapter Layer
//!
//! 外部システム（HTTP, シリアライズ形式, ストレージ）との統合

pub mod codec;
pub mod config;
pub mod http;
pub mod repositories;
