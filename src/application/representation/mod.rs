//! # Representations
//!
//! ドメインオブジェクトのワイヤ表現
//!
//! - **link**: ハイパーメディアリンクとリンク可能な表現の基本形
//! - **conference**: カンファレンス・セッションの表現
//! - **index**: ルートのリソース一覧

pub mod conference;
pub mod index;
pub mod link;

pub use conference::{ConferenceRepresentation, SessionRepresentation};
pub use index::ResourceIndex;
pub use link::{
    LinkableRepresentation, Representation, RepresentationCollection, ResourceLink, UriScope,
};
