//! # Conference Converter
//!
//! `ConferenceRepresentation` ⇔ `Conference`

use super::{resolve_id, validate_range, ConversionError, RepresentationConverter};
use crate::application::dto::VendorMediaTypes;
use crate::application::representation::link::SELF_REL;
use crate::application::representation::{
    ConferenceRepresentation, LinkableRepresentation, ResourceLink, UriScope,
};
use crate::application::use_cases::resource::SESSION_SEGMENT;
use crate::domain::entities::conference::Conference;

/// カンファレンスのセッション一覧を指すリンクのリレーション名
pub const SESSION_REL: &str = "session";

/// カンファレンスコンバーター
///
/// セッションは含めない（セッション一覧へのリンクのみ付与する）
#[derive(Debug, Clone, Default)]
pub struct ConferenceConverter {
    media_types: VendorMediaTypes,
}

impl ConferenceConverter {
    pub fn new(media_types: VendorMediaTypes) -> Self {
        Self { media_types }
    }
}

impl RepresentationConverter<ConferenceRepresentation, Conference> for ConferenceConverter {
    fn to(&self, representation: &ConferenceRepresentation) -> Result<Conference, ConversionError> {
        let id = resolve_id(representation.id.as_deref())?;
        validate_range(representation.start, representation.end)?;

        let mut conference = Conference::new(id, representation.name.clone().unwrap_or_default());
        conference.tag_line = representation.tag_line.clone();
        conference.start = representation.start;
        conference.end = representation.end;
        Ok(conference)
    }

    fn from(&self, scope: &UriScope, conference: &Conference) -> ConferenceRepresentation {
        let mut representation = ConferenceRepresentation::new();
        representation.id = Some(conference.id.clone());
        representation.name = Some(conference.name.clone());
        representation.tag_line = conference.tag_line.clone();
        representation.start = conference.start;
        representation.end = conference.end;

        representation.add_link(
            ResourceLink::new(SELF_REL, scope.member(&conference.id))
                .with_media_type(&self.media_types.conference_xml),
        );
        representation.add_link(
            ResourceLink::new(
                SESSION_REL,
                scope.nested(&conference.id, SESSION_SEGMENT).collection(),
            )
            .with_media_type(&self.media_types.session_xml),
        );
        representation
    }

    fn update(
        &self,
        representation: &ConferenceRepresentation,
        conference: &mut Conference,
    ) -> Result<(), ConversionError> {
        validate_range(
            representation.start.or(conference.start),
            representation.end.or(conference.end),
        )?;

        if let Some(name) = &representation.name {
            conference.name = name.clone();
        }
        if let Some(tag_line) = &representation.tag_line {
            conference.tag_line = Some(tag_line.clone());
        }
        if let Some(start) = representation.start {
            conference.start = Some(start);
        }
        if let Some(end) = representation.end {
            conference.end = Some(end);
        }
        Ok(())
    }
}
