//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitとConverter traitに依存（実装には依存しない）
//! - HTTPフレームワークやシリアライズ形式の詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object（メディアタイプ定義、レスポンス）
//! - **representation**: ワイヤ表現とハイパーメディアリンク
//! - **converters**: 表現とドメインオブジェクトの相互変換
//! - **use_cases**: ユースケース（ネストしたリソースのCRUD）

pub mod converters;
pub mod dto;
pub mod representation;
pub mod use_cases;
