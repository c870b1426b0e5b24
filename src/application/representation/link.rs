//! # Hypermedia Links
//!
//! リンク可能な表現の基本形とURIの組み立て

use serde::{Deserialize, Serialize};

/// 自身を指すリンクのリレーション名
pub const SELF_REL: &str = "self";
/// 親リソースを指すリンクのリレーション名
pub const PARENT_REL: &str = "parent";

/// ハイパーメディアリンク
///
/// 表現に付与するナビゲーション情報。同一性や検索には使わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl ResourceLink {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            media_type: None,
        }
    }

    /// メディアタイプ付きのリンクを返す
    pub fn with_media_type(mut self, media_type: impl ToString) -> Self {
        self.media_type = Some(media_type.to_string());
        self
    }
}

/// ワイヤ表現
///
/// 表現するドメイン型を型レベルで宣言する
pub trait Representation {
    type Domain;

    /// 表現するドメイン型の名前（表現の型ごとに固定）
    const DOMAIN_TYPE: &'static str;

    fn domain_type(&self) -> &'static str {
        Self::DOMAIN_TYPE
    }
}

/// リンクを持つワイヤ表現
///
/// リンクリストは構築時に空で用意され、`None` になることはない。
/// 変更はリンクの追加のみ。
pub trait LinkableRepresentation: Representation {
    fn links(&self) -> &[ResourceLink];

    fn links_mut(&mut self) -> &mut Vec<ResourceLink>;

    fn add_link(&mut self, link: ResourceLink) {
        self.links_mut().push(link);
    }

    /// リレーション名でリンクを探す
    fn link(&self, rel: &str) -> Option<&ResourceLink> {
        self.links().iter().find(|link| link.rel == rel)
    }
}

/// 表現のコレクション
///
/// 元の集合は順序を持たないため、要素の並びは保証しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentationCollection<R> {
    #[serde(rename = "item", default)]
    items: Vec<R>,
    #[serde(rename = "link", default)]
    links: Vec<ResourceLink>,
}

impl<R> RepresentationCollection<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            items,
            links: Vec::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

}

/// コレクションは要素と同じドメイン型を表す
impl<R: Representation> Representation for RepresentationCollection<R> {
    type Domain = Vec<R::Domain>;

    const DOMAIN_TYPE: &'static str = R::DOMAIN_TYPE;
}

impl<R: Representation> LinkableRepresentation for RepresentationCollection<R> {
    fn links(&self) -> &[ResourceLink] {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Vec<ResourceLink> {
        &mut self.links
    }
}

/// コレクションURIを起点にしたURIの組み立て
///
/// 例: `/conference/c-1/session` のメンバーは `/conference/c-1/session/{id}`、
/// 親は `/conference/c-1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriScope {
    collection: String,
}

impl UriScope {
    pub fn new(collection: impl Into<String>) -> Self {
        let collection: String = collection.into();
        Self {
            collection: collection.trim_end_matches('/').to_string(),
        }
    }

    /// コレクション自身のURI
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// コレクション内のメンバーのURI
    pub fn member(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }

    /// メンバー配下のサブコレクション
    pub fn nested(&self, id: &str, segment: &str) -> UriScope {
        UriScope::new(format!("{}/{}", self.member(id), segment))
    }

    /// コレクションを所有するリソースのURI
    ///
    /// ルート直下のコレクションには親がない
    pub fn parent(&self) -> Option<String> {
        let (parent, _) = self.collection.rsplit_once('/')?;
        let path = match parent.find("://") {
            Some(scheme_end) => {
                let authority_and_path = &parent[scheme_end + 3..];
                &authority_and_path[authority_and_path.find('/')?..]
            }
            None => parent,
        };
        if path.is_empty() {
            return None;
        }
        Some(parent.to_string())
    }
}
