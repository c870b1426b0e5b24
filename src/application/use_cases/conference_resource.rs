//! # Conference Resource Use Case
//!
//! カンファレンスとセッションのネストしたCRUD
//!
//! ## ステータスコードの規約
//!
//! - 親カンファレンスが見つからない: 400（カンファレンス自身の取得・削除は404）
//! - セッションが見つからない: 取得は404、更新・削除は400
//! - 表現の変換に失敗: 400
//!
//! セッションの変更は常に親カンファレンスを集約単位で保存し直す。

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use super::resource::{Resource, CONFERENCE_PATH, SESSION_SEGMENT};
use crate::application::converters::RepresentationConverter;
use crate::application::dto::{ResourceBody, ResourceResponse, VendorMediaTypes};
use crate::application::representation::{
    ConferenceRepresentation, SessionRepresentation, UriScope,
};
use crate::domain::entities::conference::Conference;
use crate::domain::entities::media_type::MediaType;
use crate::domain::entities::session::Session;
use crate::domain::repositories::Repository;
use crate::domain::services::ContentNegotiator;

/// カンファレンスリソース
///
/// リポジトリとコンバーターを組み合わせてリクエストを処理する。
/// 自身はロックやキャッシュを持たず、各リクエストは独立して処理される。
pub struct ConferenceResource<R, C, S>
where
    R: Repository<Conference>,
    C: RepresentationConverter<ConferenceRepresentation, Conference>,
    S: RepresentationConverter<SessionRepresentation, Session>,
{
    repository: Arc<R>,
    conference_converter: Arc<C>,
    session_converter: Arc<S>,
    conferences: UriScope,
    conference_negotiator: ContentNegotiator,
    session_negotiator: ContentNegotiator,
}

impl<R, C, S> ConferenceResource<R, C, S>
where
    R: Repository<Conference>,
    C: RepresentationConverter<ConferenceRepresentation, Conference>,
    S: RepresentationConverter<SessionRepresentation, Session>,
{
    /// 新しいリソースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - カンファレンスリポジトリ
    /// * `conference_converter` - カンファレンスコンバーター
    /// * `session_converter` - セッションコンバーター
    /// * `media_types` - レスポンスに使うメディアタイプ一式
    /// * `base_uri` - Locationとリンクの前に付けるベースURI（空なら相対パス）
    pub fn new(
        repository: Arc<R>,
        conference_converter: Arc<C>,
        session_converter: Arc<S>,
        media_types: &VendorMediaTypes,
        base_uri: &str,
    ) -> Self {
        Self {
            repository,
            conference_converter,
            session_converter,
            conferences: UriScope::new(format!(
                "{}{}",
                base_uri.trim_end_matches('/'),
                CONFERENCE_PATH
            )),
            conference_negotiator: media_types.conference_negotiator(),
            session_negotiator: media_types.session_negotiator(),
        }
    }

    // Conference

    /// カンファレンスを作成する
    ///
    /// # Returns
    ///
    /// 201（Location付き）、変換に失敗した場合は400
    ///
    /// # Errors
    ///
    /// リポジトリへの保存に失敗した場合にエラーを返す
    pub async fn create_conference(
        &self,
        representation: &ConferenceRepresentation,
    ) -> Result<ResourceResponse> {
        let conference = match self.conference_converter.to(representation) {
            Ok(conference) => conference,
            Err(e) => {
                warn!("Rejected conference representation: {}", e);
                return Ok(ResourceResponse::bad_request());
            }
        };

        self.repository
            .store(&conference)
            .await
            .context("Failed to store conference")?;
        info!("Created conference {}", conference.id);

        Ok(ResourceResponse::created(
            self.conferences.member(&conference.id),
        ))
    }

    /// カンファレンスを削除する（存在しない場合は404）
    pub async fn delete_conference(&self, id: &str) -> Result<ResourceResponse> {
        let Some(conference) = self.find_conference(id).await? else {
            return Ok(ResourceResponse::not_found());
        };

        self.repository
            .remove(&conference)
            .await
            .context("Failed to remove conference")?;
        info!("Deleted conference {}", id);

        Ok(ResourceResponse::no_content())
    }

    /// カンファレンスを取得する
    ///
    /// 存在しない場合の404にはカンファレンスの既定メディアタイプを付ける
    pub async fn get_conference(
        &self,
        id: &str,
        accept: &[MediaType],
    ) -> Result<ResourceResponse> {
        let Some(conference) = self.find_conference(id).await? else {
            return Ok(ResourceResponse::not_found()
                .with_content_type(self.conference_negotiator.default_type().clone()));
        };

        let representation = self.conference_converter.from(&self.conferences, &conference);
        Ok(ResourceResponse::ok(
            self.conference_negotiator.select(accept).clone(),
            ResourceBody::Conference(representation),
        ))
    }

    /// カンファレンスを更新する（存在しない場合は400）
    pub async fn update_conference(
        &self,
        id: &str,
        representation: &ConferenceRepresentation,
    ) -> Result<ResourceResponse> {
        let Some(mut conference) = self.find_conference(id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        if let Err(e) = self
            .conference_converter
            .update(representation, &mut conference)
        {
            warn!("Rejected update of conference {}: {}", id, e);
            return Ok(ResourceResponse::bad_request());
        }

        self.repository
            .store(&conference)
            .await
            .context("Failed to store conference")?;
        info!("Updated conference {}", id);

        Ok(ResourceResponse::no_content())
    }

    // Session

    /// セッション一覧を取得する（カンファレンスが存在しない場合は400）
    pub async fn list_sessions(
        &self,
        conference_id: &str,
        accept: &[MediaType],
    ) -> Result<ResourceResponse> {
        let Some(conference) = self.find_conference(conference_id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        let collection = self
            .session_converter
            .from_collection(&self.sessions_of(conference_id), conference.sessions());
        Ok(ResourceResponse::ok(
            self.session_negotiator.select(accept).clone(),
            ResourceBody::Sessions(collection),
        ))
    }

    /// セッションを作成してカンファレンスに追加する
    ///
    /// # Returns
    ///
    /// 201（Location付き）。カンファレンスが存在しない、変換に失敗した、
    /// または同じIDのセッションが既にある場合は400
    pub async fn create_session(
        &self,
        conference_id: &str,
        representation: &SessionRepresentation,
    ) -> Result<ResourceResponse> {
        let Some(mut conference) = self.find_conference(conference_id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        let session = match self.session_converter.to(representation) {
            Ok(session) => session,
            Err(e) => {
                warn!("Rejected session representation: {}", e);
                return Ok(ResourceResponse::bad_request());
            }
        };

        let location = self.sessions_of(&conference.id).member(&session.id);
        let session_id = session.id.clone();
        if !conference.add_session(session) {
            warn!(
                "Session {} already exists in conference {}",
                session_id, conference_id
            );
            return Ok(ResourceResponse::bad_request());
        }

        self.repository
            .store(&conference)
            .await
            .context("Failed to store conference")?;
        info!("Created session {} in conference {}", session_id, conference_id);

        Ok(ResourceResponse::created(location))
    }

    /// セッションを削除する（カンファレンスまたはセッションが存在しない場合は400）
    pub async fn delete_session(
        &self,
        conference_id: &str,
        session_id: &str,
    ) -> Result<ResourceResponse> {
        let Some(mut conference) = self.find_conference(conference_id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        if conference.remove_session(session_id).is_none() {
            debug!("Session {} not found in conference {}", session_id, conference_id);
            return Ok(ResourceResponse::bad_request());
        }

        self.repository
            .store(&conference)
            .await
            .context("Failed to store conference")?;
        info!("Deleted session {} from conference {}", session_id, conference_id);

        Ok(ResourceResponse::no_content())
    }

    /// セッションを更新する（カンファレンスまたはセッションが存在しない場合は400）
    pub async fn update_session(
        &self,
        conference_id: &str,
        session_id: &str,
        representation: &SessionRepresentation,
    ) -> Result<ResourceResponse> {
        let Some(mut conference) = self.find_conference(conference_id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        let Some(session) = conference.find_session_mut(session_id) else {
            debug!("Session {} not found in conference {}", session_id, conference_id);
            return Ok(ResourceResponse::bad_request());
        };

        if let Err(e) = self.session_converter.update(representation, session) {
            warn!("Rejected update of session {}: {}", session_id, e);
            return Ok(ResourceResponse::bad_request());
        }

        self.repository
            .store(&conference)
            .await
            .context("Failed to store conference")?;
        info!("Updated session {} in conference {}", session_id, conference_id);

        Ok(ResourceResponse::no_content())
    }

    /// セッションを取得する
    ///
    /// カンファレンスが存在しない場合は400、セッションが存在しない場合は404
    pub async fn get_session(
        &self,
        conference_id: &str,
        session_id: &str,
        accept: &[MediaType],
    ) -> Result<ResourceResponse> {
        let Some(conference) = self.find_conference(conference_id).await? else {
            return Ok(ResourceResponse::bad_request());
        };

        match conference.find_session(session_id) {
            Some(session) => {
                let representation = self
                    .session_converter
                    .from(&self.sessions_of(conference_id), session);
                Ok(ResourceResponse::ok(
                    self.session_negotiator.select(accept).clone(),
                    ResourceBody::Session(representation),
                ))
            }
            None => Ok(ResourceResponse::not_found()),
        }
    }

    // Internal Helpers

    async fn find_conference(&self, id: &str) -> Result<Option<Conference>> {
        let conference = self
            .repository
            .get(id)
            .await
            .with_context(|| format!("Failed to load conference {}", id))?;
        if conference.is_none() {
            debug!("Conference {} not found", id);
        }
        Ok(conference)
    }

    fn sessions_of(&self, conference_id: &str) -> UriScope {
        self.conferences.nested(conference_id, SESSION_SEGMENT)
    }
}

impl<R, C, S> Resource for ConferenceResource<R, C, S>
where
    R: Repository<Conference>,
    C: RepresentationConverter<ConferenceRepresentation, Conference>,
    S: RepresentationConverter<SessionRepresentation, Session>,
{
    fn resource_name(&self) -> &str {
        "conference"
    }

    fn resource_path(&self) -> &str {
        CONFERENCE_PATH
    }

    fn resource_media_type(&self) -> &MediaType {
        self.conference_negotiator.default_type()
    }
}
