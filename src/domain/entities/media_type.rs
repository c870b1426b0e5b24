//! # MediaType Value Object
//!
//! `type/subtype; key=value` 形式のメディアタイプ

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const WILDCARD: &str = "*";

/// メディアタイプのパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaTypeError {
    #[error("media type is empty")]
    Empty,
    #[error("media type `{0}` has no subtype")]
    MissingSubtype(String),
    #[error("invalid media type parameter `{0}`")]
    InvalidParameter(String),
}

/// メディアタイプ
///
/// タイプとサブタイプは小文字に正規化して保持する。パラメータは宣言順を保つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    main_type: String,
    sub_type: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    /// パラメータなしのメディアタイプを作成
    pub fn new(main_type: &str, sub_type: &str) -> Self {
        Self {
            main_type: main_type.trim().to_ascii_lowercase(),
            sub_type: sub_type.trim().to_ascii_lowercase(),
            parameters: Vec::new(),
        }
    }

    /// パラメータを追加したメディアタイプを返す
    pub fn with_parameter(mut self, key: &str, value: &str) -> Self {
        self.parameters
            .push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
        self
    }

    pub fn main_type(&self) -> &str {
        &self.main_type
    }

    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// パラメータ値を取得する
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_wildcard_type(&self) -> bool {
        self.main_type == WILDCARD
    }

    pub fn is_wildcard_subtype(&self) -> bool {
        self.sub_type == WILDCARD
    }

    /// 互換性判定
    ///
    /// どちらかのタイプがワイルドカード、タイプが等しくどちらかのサブタイプが
    /// ワイルドカード、またはタイプとサブタイプが等しい場合に互換とみなす。
    /// パラメータは比較しない。
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        if self.is_wildcard_type() || other.is_wildcard_type() {
            return true;
        }
        if self.main_type != other.main_type {
            return false;
        }
        self.is_wildcard_subtype() || other.is_wildcard_subtype() || self.sub_type == other.sub_type
    }

    /// `Accept` ヘッダーをパースする
    ///
    /// 宣言順を保ち、q値による並べ替えは行わない。パースできない要素は読み飛ばす。
    pub fn parse_accept(header: &str) -> Vec<MediaType> {
        header
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| match entry.parse::<MediaType>() {
                Ok(media_type) => Some(media_type),
                Err(e) => {
                    log::warn!("Skipping unparsable Accept entry `{}`: {}", entry.trim(), e);
                    None
                }
            })
            .collect()
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split(';');
        let essence = segments.next().unwrap_or_default().trim();
        if essence.is_empty() {
            return Err(MediaTypeError::Empty);
        }

        let (main_type, sub_type) = essence
            .split_once('/')
            .filter(|(main, sub)| !main.trim().is_empty() && !sub.trim().is_empty())
            .ok_or_else(|| MediaTypeError::MissingSubtype(essence.to_string()))?;

        let mut media_type = MediaType::new(main_type, sub_type);
        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let (key, value) = segment
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| MediaTypeError::InvalidParameter(segment.to_string()))?;
            media_type = media_type.with_parameter(key, value.trim().trim_matches('"'));
        }

        Ok(media_type)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main_type, self.sub_type)?;
        for (key, value) in &self.parameters {
            write!(f, "; {}={}", key, value)?;
        }
        Ok(())
    }
}
