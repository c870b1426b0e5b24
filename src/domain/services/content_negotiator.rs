//! # Content Negotiator
//!
//! レスポンスのメディアタイプ選択

use log::debug;

use crate::domain::entities::media_type::MediaType;

/// コンテントネゴシエーター
///
/// デフォルトと代替の2択から、クライアントが受け入れ可能なメディアタイプを選ぶ
#[derive(Debug, Clone)]
pub struct ContentNegotiator {
    default_type: MediaType,
    alternative_type: MediaType,
}

impl ContentNegotiator {
    /// 新しいネゴシエーターを作成
    ///
    /// # Arguments
    ///
    /// * `default_type` - 互換な要素がない場合に使うメディアタイプ
    /// * `alternative_type` - 互換な要素がある場合に使うメディアタイプ
    pub fn new(default_type: MediaType, alternative_type: MediaType) -> Self {
        Self {
            default_type,
            alternative_type,
        }
    }

    pub fn default_type(&self) -> &MediaType {
        &self.default_type
    }

    pub fn alternative_type(&self) -> &MediaType {
        &self.alternative_type
    }

    /// レスポンスのメディアタイプを選択する
    ///
    /// クライアントの宣言順に走査し、代替タイプと互換な要素が1つでもあれば
    /// 代替タイプを返す。q値による重み付けは行わない。
    ///
    /// # Arguments
    ///
    /// * `acceptable` - `Accept` ヘッダーから得たメディアタイプ（宣言順）
    pub fn select(&self, acceptable: &[MediaType]) -> &MediaType {
        match acceptable
            .iter()
            .find(|media_type| media_type.is_compatible(&self.alternative_type))
        {
            Some(matched) => {
                debug!("Accept entry {} selects {}", matched, self.alternative_type);
                &self.alternative_type
            }
            None => &self.default_type,
        }
    }
}
