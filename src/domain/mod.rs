//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやシリアライズ形式について何も知らない
//! - 永続化の詳細はRepository traitの背後に隠す
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Conference, Session, MediaType）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（コンテントネゴシエーション）

pub mod entities;
pub mod repositories;
pub mod services;
