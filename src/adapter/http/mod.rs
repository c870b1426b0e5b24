//! HTTP Adapter
//!
//! axumのルーターとハンドラー。リクエストをユースケースの呼び出しに変換し、
//! 結果をネゴシエーション済みのメディアタイプでエンコードして返す。

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::application::converters::{ConferenceConverter, SessionConverter};
use crate::application::dto::VendorMediaTypes;
use crate::application::use_cases::ConferenceResource;
use crate::domain::entities::conference::Conference;
use crate::domain::repositories::Repository;

pub use error::ApiError;

/// HTTPで公開するカンファレンスリソース
pub type HttpConferenceResource<R> = ConferenceResource<R, ConferenceConverter, SessionConverter>;

/// ルーターの共有状態
pub struct ApiState<R: Repository<Conference>> {
    pub conference: Arc<HttpConferenceResource<R>>,
    pub media_types: VendorMediaTypes,
    pub base_uri: String,
}

impl<R: Repository<Conference>> ApiState<R> {
    pub fn new(
        conference: Arc<HttpConferenceResource<R>>,
        media_types: VendorMediaTypes,
        base_uri: impl Into<String>,
    ) -> Self {
        Self {
            conference,
            media_types,
            base_uri: base_uri.into(),
        }
    }
}

impl<R: Repository<Conference>> Clone for ApiState<R> {
    fn clone(&self) -> Self {
        Self {
            conference: Arc::clone(&self.conference),
            media_types: self.media_types.clone(),
            base_uri: self.base_uri.clone(),
        }
    }
}

/// ルーターを作成する
///
/// ルートはサーバーのルートに固定される。ベースURIは生成するURIにのみ使う。
pub fn create_router<R>(state: ApiState<R>) -> Router
where
    R: Repository<Conference> + 'static,
{
    Router::new()
        .route("/", get(handlers::index::<R>))
        .route("/conference", post(handlers::create_conference::<R>))
        .route(
            "/conference/:id",
            get(handlers::get_conference::<R>)
                .put(handlers::update_conference::<R>)
                .delete(handlers::delete_conference::<R>),
        )
        .route(
            "/conference/:id/session",
            get(handlers::list_sessions::<R>).post(handlers::create_session::<R>),
        )
        .route(
            "/conference/:id/session/:session_id",
            get(handlers::get_session::<R>)
                .put(handlers::update_session::<R>)
                .delete(handlers::delete_session::<R>),
        )
        .with_state(state)
}
