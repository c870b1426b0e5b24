//! HTTP Handlers
//!
//! パス・ヘッダー・ボディを取り出してユースケースを呼び出す

use anyhow::anyhow;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiState};
use crate::adapter::codec::WireFormat;
use crate::application::dto::{ResourceBody, ResourceResponse, VendorMediaTypes};
use crate::application::representation::{
    ConferenceRepresentation, ResourceIndex, ResourceLink, SessionRepresentation,
};
use crate::application::use_cases::Resource;
use crate::domain::entities::conference::Conference;
use crate::domain::entities::media_type::MediaType;
use crate::domain::repositories::Repository;

type HandlerResult = Result<Response, ApiError>;

// Root

/// 公開リソースの一覧
pub async fn index<R>(State(state): State<ApiState<R>>, headers: HeaderMap) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let resources: [&dyn Resource; 1] = [&*state.conference];

    let mut index = ResourceIndex::default();
    for resource in resources {
        index.links.push(
            ResourceLink::new(
                resource.resource_name(),
                format!(
                    "{}{}",
                    state.base_uri.trim_end_matches('/'),
                    resource.resource_path()
                ),
            )
            .with_media_type(resource.resource_media_type()),
        );
    }

    let content_type = state
        .media_types
        .index_negotiator()
        .select(&accepted_media_types(&headers))
        .clone();
    render(ResourceResponse::ok(content_type, ResourceBody::Index(index)))
}

// Conference

pub async fn create_conference<R>(
    State(state): State<ApiState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let representation: ConferenceRepresentation =
        decode_body(&state.media_types, &headers, &body)?;
    render(state.conference.create_conference(&representation).await?)
}

pub async fn get_conference<R>(
    State(state): State<ApiState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let accept = accepted_media_types(&headers);
    render(state.conference.get_conference(&id, &accept).await?)
}

pub async fn update_conference<R>(
    State(state): State<ApiState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let representation: ConferenceRepresentation =
        decode_body(&state.media_types, &headers, &body)?;
    render(state.conference.update_conference(&id, &representation).await?)
}

pub async fn delete_conference<R>(
    State(state): State<ApiState<R>>,
    Path(id): Path<String>,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    render(state.conference.delete_conference(&id).await?)
}

// Session

pub async fn list_sessions<R>(
    State(state): State<ApiState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let accept = accepted_media_types(&headers);
    render(state.conference.list_sessions(&id, &accept).await?)
}

pub async fn create_session<R>(
    State(state): State<ApiState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let representation: SessionRepresentation = decode_body(&state.media_types, &headers, &body)?;
    render(state.conference.create_session(&id, &representation).await?)
}

pub async fn get_session<R>(
    State(state): State<ApiState<R>>,
    Path((id, session_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let accept = accepted_media_types(&headers);
    render(state.conference.get_session(&id, &session_id, &accept).await?)
}

pub async fn update_session<R>(
    State(state): State<ApiState<R>>,
    Path((id, session_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    let representation: SessionRepresentation = decode_body(&state.media_types, &headers, &body)?;
    render(
        state
            .conference
            .update_session(&id, &session_id, &representation)
            .await?,
    )
}

pub async fn delete_session<R>(
    State(state): State<ApiState<R>>,
    Path((id, session_id)): Path<(String, String)>,
) -> HandlerResult
where
    R: Repository<Conference> + 'static,
{
    render(state.conference.delete_session(&id, &session_id).await?)
}

// Internal Helpers

/// `Accept` ヘッダー（複数行を含む）を宣言順にパースする
///
/// ヘッダーがない場合は空になり、既定のメディアタイプが選ばれる
fn accepted_media_types(headers: &HeaderMap) -> Vec<MediaType> {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(MediaType::parse_accept)
        .collect()
}

/// `Content-Type` に応じてリクエストボディをデコードする
fn decode_body<T: DeserializeOwned>(
    media_types: &VendorMediaTypes,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<T, ApiError> {
    let raw = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let content_type = raw
        .parse::<MediaType>()
        .ok()
        .filter(|content_type| media_types.accepts_body(content_type))
        .ok_or_else(|| ApiError::UnsupportedMediaType(raw.to_string()))?;
    let format = WireFormat::of(&content_type)
        .ok_or_else(|| ApiError::UnsupportedMediaType(raw.to_string()))?;

    format.decode(body).map_err(ApiError::MalformedBody)
}

/// ユースケースの結果をHTTPレスポンスに変換する
fn render(response: ResourceResponse) -> HandlerResult {
    let status = StatusCode::from_u16(response.status.code())
        .map_err(|e| ApiError::Internal(anyhow!("Invalid status code: {}", e)))?;
    let mut builder = axum::http::Response::builder().status(status);
    if let Some(location) = &response.location {
        builder = builder.header(header::LOCATION, location.as_str());
    }
    if let Some(content_type) = &response.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type.to_string());
    }

    let body = match (&response.body, &response.content_type) {
        (Some(body), Some(content_type)) => {
            let format = WireFormat::of(content_type)
                .ok_or_else(|| anyhow!("No codec for media type {}", content_type))?;
            Body::from(format.encode_body(body).map_err(ApiError::Encoding)?)
        }
        _ => Body::empty(),
    };

    builder
        .body(body)
        .map_err(|e| ApiError::Internal(anyhow!("Failed to build response: {}", e)))
}
