//! # Representation Converters
//!
//! ワイヤ表現とドメインオブジェクトの双方向変換
//!
//! - **ConferenceConverter**: `ConferenceRepresentation` ⇔ `Conference`
//! - **SessionConverter**: `SessionRepresentation` ⇔ `Session`

pub mod conference_converter;
pub mod session_converter;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::application::representation::link::{PARENT_REL, SELF_REL};
use crate::application::representation::{
    LinkableRepresentation, Representation, RepresentationCollection, ResourceLink, UriScope,
};

pub use conference_converter::ConferenceConverter;
pub use session_converter::SessionConverter;

/// 変換エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("start {start} is after end {end}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// 表現とドメインオブジェクトのコンバーター
///
/// `update` 以外は副作用を持たない
pub trait RepresentationConverter<R, D>: Send + Sync
where
    R: LinkableRepresentation + Representation<Domain = D>,
{
    /// 表現から新しいドメインオブジェクトを作成する
    ///
    /// # Errors
    ///
    /// IDや期間が不正な場合にエラーを返す
    fn to(&self, representation: &R) -> Result<D, ConversionError>;

    /// ドメインオブジェクトからリンク付きの表現を作成する
    ///
    /// # Arguments
    ///
    /// * `scope` - ドメインオブジェクトが属するコレクションのURI
    /// * `domain` - 変換元
    fn from(&self, scope: &UriScope, domain: &D) -> R;

    /// コレクション表現を作成する
    ///
    /// 要素の順序は保証しない
    fn from_collection(&self, scope: &UriScope, domains: &[D]) -> RepresentationCollection<R> {
        let items = domains
            .iter()
            .map(|domain| self.from(scope, domain))
            .collect();

        let mut collection = RepresentationCollection::new(items);
        collection.add_link(ResourceLink::new(SELF_REL, scope.collection()));
        if let Some(parent) = scope.parent() {
            collection.add_link(ResourceLink::new(PARENT_REL, parent));
        }
        collection
    }

    /// 表現に含まれるフィールドだけでドメインオブジェクトを上書きする
    ///
    /// IDは変更しない。エラーの場合、ドメインオブジェクトは変更されない。
    ///
    /// # Errors
    ///
    /// 更新後の期間が不正な場合にエラーを返す
    fn update(&self, representation: &R, domain: &mut D) -> Result<(), ConversionError>;
}

/// 表現のIDを検証し、なければ新しいIDを採番する
pub(crate) fn resolve_id(id: Option<&str>) -> Result<String, ConversionError> {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        None => Ok(Uuid::new_v4().to_string()),
        Some(id) if is_valid_identifier(id) => Ok(id.to_string()),
        Some(id) => Err(ConversionError::InvalidIdentifier(id.to_string())),
    }
}

/// IDはそのままパスセグメントと `Location` ヘッダーに使う
///
/// ルーターはパスをパーセントデコードしてから照合するため `%` も禁止する。
/// `.` と `..` はパスの正規化で消えるセグメントなので使えない。
fn is_valid_identifier(id: &str) -> bool {
    if id == "." || id == ".." {
        return false;
    }
    !id.chars().any(|c| {
        matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
    })
}

/// 開始と終了がともにある場合、開始が終了より後であってはならない
pub(crate) fn validate_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ConversionError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err(ConversionError::InvalidTimeRange { start, end })
        }
        _ => Ok(()),
    }
}
