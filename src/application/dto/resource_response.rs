//! # Resource Response DTO
//!
//! ユースケースの結果（ステータス・Location・型付きボディ）

use crate::application::representation::{
    ConferenceRepresentation, RepresentationCollection, ResourceIndex, SessionRepresentation,
};
use crate::domain::entities::media_type::MediaType;

/// リソース操作の結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Ok,
    Created,
    NoContent,
    BadRequest,
    NotFound,
}

impl ResourceStatus {
    /// HTTPステータスコード
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::NotFound => 404,
        }
    }
}

/// レスポンスボディ
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceBody {
    Conference(ConferenceRepresentation),
    Session(SessionRepresentation),
    Sessions(RepresentationCollection<SessionRepresentation>),
    Index(ResourceIndex),
}

impl ResourceBody {
    /// XMLのルート要素名
    pub fn root_name(&self) -> &'static str {
        match self {
            Self::Conference(_) => "conference",
            Self::Session(_) => "session",
            Self::Sessions(_) => "sessions",
            Self::Index(_) => "resources",
        }
    }
}

/// リソース操作の結果
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    pub status: ResourceStatus,
    pub location: Option<String>,
    pub content_type: Option<MediaType>,
    pub body: Option<ResourceBody>,
}

impl ResourceResponse {
    fn status(status: ResourceStatus) -> Self {
        Self {
            status,
            location: None,
            content_type: None,
            body: None,
        }
    }

    /// 200 OK（ボディ付き）
    pub fn ok(content_type: MediaType, body: ResourceBody) -> Self {
        Self {
            content_type: Some(content_type),
            body: Some(body),
            ..Self::status(ResourceStatus::Ok)
        }
    }

    /// 201 Created
    pub fn created(location: String) -> Self {
        Self {
            location: Some(location),
            ..Self::status(ResourceStatus::Created)
        }
    }

    /// 204 No Content
    pub fn no_content() -> Self {
        Self::status(ResourceStatus::NoContent)
    }

    /// 400 Bad Request
    pub fn bad_request() -> Self {
        Self::status(ResourceStatus::BadRequest)
    }

    /// 404 Not Found
    pub fn not_found() -> Self {
        Self::status(ResourceStatus::NotFound)
    }

    /// Content-Typeを付与する（ボディなしのレスポンスにも型を付けられる）
    pub fn with_content_type(mut self, content_type: MediaType) -> Self {
        self.content_type = Some(content_type);
        self
    }
}
