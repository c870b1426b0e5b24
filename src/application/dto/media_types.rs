//! # Vendor Media Types
//!
//! `application/vnd.<ns>+xml` / `application/vnd.<ns>+json` 系のメディアタイプ定義

use crate::domain::entities::media_type::MediaType;
use crate::domain::services::ContentNegotiator;

/// 既定のベンダー名前空間
pub const DEFAULT_NAMESPACE: &str = "ced";

const TYPE_PARAMETER: &str = "type";
const CONFERENCE_TYPE: &str = "conference";
const SESSION_TYPE: &str = "session";

/// ベンダーメディアタイプ一式
///
/// ベースタイプ（リクエストボディ用）と、カンファレンス・セッションそれぞれの
/// XML（デフォルト）/ JSON（代替）の組を保持する
#[derive(Debug, Clone)]
pub struct VendorMediaTypes {
    pub base_xml: MediaType,
    pub base_json: MediaType,
    pub conference_xml: MediaType,
    pub conference_json: MediaType,
    pub session_xml: MediaType,
    pub session_json: MediaType,
}

impl VendorMediaTypes {
    /// 名前空間からメディアタイプ一式を作成
    ///
    /// # Arguments
    ///
    /// * `namespace` - ベンダー名前空間（例: "ced" → `application/vnd.ced+xml`）
    pub fn new(namespace: &str) -> Self {
        let base_xml = MediaType::new("application", &format!("vnd.{}+xml", namespace));
        let base_json = MediaType::new("application", &format!("vnd.{}+json", namespace));

        Self {
            conference_xml: base_xml.clone().with_parameter(TYPE_PARAMETER, CONFERENCE_TYPE),
            conference_json: base_json.clone().with_parameter(TYPE_PARAMETER, CONFERENCE_TYPE),
            session_xml: base_xml.clone().with_parameter(TYPE_PARAMETER, SESSION_TYPE),
            session_json: base_json.clone().with_parameter(TYPE_PARAMETER, SESSION_TYPE),
            base_xml,
            base_json,
        }
    }

    /// カンファレンス表現用のネゴシエーター
    pub fn conference_negotiator(&self) -> ContentNegotiator {
        ContentNegotiator::new(self.conference_xml.clone(), self.conference_json.clone())
    }

    /// セッション表現用のネゴシエーター
    pub fn session_negotiator(&self) -> ContentNegotiator {
        ContentNegotiator::new(self.session_xml.clone(), self.session_json.clone())
    }

    /// ルート（リソース一覧）用のネゴシエーター
    pub fn index_negotiator(&self) -> ContentNegotiator {
        ContentNegotiator::new(self.base_xml.clone(), self.base_json.clone())
    }

    /// リクエストボディとして受け付けるメディアタイプかどうか
    ///
    /// ベースのXMLまたはJSONベンダータイプと互換であれば受け付ける。
    /// ワイルドカードは具体的なボディの型を示さないため拒否する。
    pub fn accepts_body(&self, content_type: &MediaType) -> bool {
        if content_type.is_wildcard_type() || content_type.is_wildcard_subtype() {
            return false;
        }
        content_type.is_compatible(&self.base_xml) || content_type.is_compatible(&self.base_json)
    }
}

impl Default for VendorMediaTypes {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
