//! # Resource Index
//!
//! ルートURIで返すリソース一覧

use serde::{Deserialize, Serialize};

use super::link::ResourceLink;

/// リソース一覧
///
/// 公開されている各リソースへのリンクだけを持つ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIndex {
    #[serde(rename = "link", default)]
    pub links: Vec<ResourceLink>,
}
