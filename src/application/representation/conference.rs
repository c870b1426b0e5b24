//! # Conference / Session Representations
//!
//! カンファレンスとセッションのワイヤ表現。
//! フィールドはすべて省略可能で、省略されたフィールドは更新時に上書きしない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::link::{LinkableRepresentation, Representation, ResourceLink};
use crate::domain::entities::conference::Conference;
use crate::domain::entities::session::Session;

/// カンファレンスの表現
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "link", default)]
    links: Vec<ResourceLink>,
}

impl ConferenceRepresentation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Representation for ConferenceRepresentation {
    type Domain = Conference;

    const DOMAIN_TYPE: &'static str = "Conference";
}

impl LinkableRepresentation for ConferenceRepresentation {
    fn links(&self) -> &[ResourceLink] {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Vec<ResourceLink> {
        &mut self.links
    }
}

/// セッションの表現
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "link", default)]
    links: Vec<ResourceLink>,
}

impl SessionRepresentation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Representation for SessionRepresentation {
    type Domain = Session;

    const DOMAIN_TYPE: &'static str = "Session";
}

impl LinkableRepresentation for SessionRepresentation {
    fn links(&self) -> &[ResourceLink] {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Vec<ResourceLink> {
        &mut self.links
    }
}
