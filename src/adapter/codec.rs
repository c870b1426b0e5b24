//! Wire Codecs
//!
//! メディアタイプに応じたXML/JSONのエンコード・デコード

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::application::dto::ResourceBody;
use crate::domain::entities::media_type::MediaType;

/// コーデックエラー
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML serialization error: {0}")]
    XmlSerialize(#[from] quick_xml::SeError),
    #[error("XML deserialization error: {0}")]
    XmlDeserialize(#[from] quick_xml::DeError),
    #[error("XML body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// ワイヤフォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Xml,
    Json,
}

impl WireFormat {
    /// サブタイプ（`xml`, `json` または `+xml`, `+json` サフィックス）から判定する
    pub fn of(media_type: &MediaType) -> Option<Self> {
        let sub_type = media_type.sub_type();
        if sub_type == "xml" || sub_type.ends_with("+xml") {
            Some(Self::Xml)
        } else if sub_type == "json" || sub_type.ends_with("+json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// 値をエンコードする
    ///
    /// # Arguments
    ///
    /// * `root` - XMLのルート要素名（JSONでは使わない）
    /// * `value` - エンコードする値
    pub fn encode<T: Serialize>(&self, root: &str, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Json => Ok(serde_json::to_vec(value)?),
            Self::Xml => Ok(quick_xml::se::to_string_with_root(root, value)?.into_bytes()),
        }
    }

    /// 値をデコードする
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Xml => {
                let text = std::str::from_utf8(bytes)?;
                Ok(quick_xml::de::from_str(text)?)
            }
        }
    }

    /// レスポンスボディをエンコードする
    pub fn encode_body(&self, body: &ResourceBody) -> Result<Vec<u8>, CodecError> {
        let root = body.root_name();
        match body {
            ResourceBody::Conference(representation) => self.encode(root, representation),
            ResourceBody::Session(representation) => self.encode(root, representation),
            ResourceBody::Sessions(collection) => self.encode(root, collection),
            ResourceBody::Index(index) => self.encode(root, index),
        }
    }
}
