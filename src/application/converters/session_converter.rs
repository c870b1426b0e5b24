//! # Session Converter
//!
//! `SessionRepresentation` ⇔ `Session`

use super::{resolve_id, validate_range, ConversionError, RepresentationConverter};
use crate::application::dto::VendorMediaTypes;
use crate::application::representation::link::{PARENT_REL, SELF_REL};
use crate::application::representation::{
    LinkableRepresentation, ResourceLink, SessionRepresentation, UriScope,
};
use crate::domain::entities::session::Session;

/// セッションコンバーター
#[derive(Debug, Clone, Default)]
pub struct SessionConverter {
    media_types: VendorMediaTypes,
}

impl SessionConverter {
    pub fn new(media_types: VendorMediaTypes) -> Self {
        Self { media_types }
    }
}

impl RepresentationConverter<SessionRepresentation, Session> for SessionConverter {
    fn to(&self, representation: &SessionRepresentation) -> Result<Session, ConversionError> {
        let id = resolve_id(representation.id.as_deref())?;
        validate_range(representation.start, representation.end)?;

        let mut session = Session::new(id, representation.title.clone().unwrap_or_default());
        session.outline = representation.outline.clone();
        session.start = representation.start;
        session.end = representation.end;
        Ok(session)
    }

    fn from(&self, scope: &UriScope, session: &Session) -> SessionRepresentation {
        let mut representation = SessionRepresentation::new();
        representation.id = Some(session.id.clone());
        representation.title = Some(session.title.clone());
        representation.outline = session.outline.clone();
        representation.start = session.start;
        representation.end = session.end;

        representation.add_link(
            ResourceLink::new(SELF_REL, scope.member(&session.id))
                .with_media_type(&self.media_types.session_xml),
        );
        if let Some(parent) = scope.parent() {
            representation.add_link(
                ResourceLink::new(PARENT_REL, parent)
                    .with_media_type(&self.media_types.conference_xml),
            );
        }
        representation
    }

    fn update(
        &self,
        representation: &SessionRepresentation,
        session: &mut Session,
    ) -> Result<(), ConversionError> {
        validate_range(
            representation.start.or(session.start),
            representation.end.or(session.end),
        )?;

        if let Some(title) = &representation.title {
            session.title = title.clone();
        }
        if let Some(outline) = &representation.outline {
            session.outline = Some(outline.clone());
        }
        if let Some(start) = representation.start {
            session.start = Some(start);
        }
        if let Some(end) = representation.end {
            session.end = Some(end);
        }
        Ok(())
    }
}
