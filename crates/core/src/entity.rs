//! Entity trait: identity + audit fields shared by every business entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::{Field, Presence};
use crate::id::PubId;
use crate::schema::FieldDescriptor;

/// Entity marker + minimal interface.
///
/// Concrete entities embed [`EntityFields`] rather than inheriting from a base
/// type; this trait exposes that embedded record.
pub trait Entity {
    fn entity_fields(&self) -> &EntityFields;

    fn pub_id(&self) -> Option<PubId> {
        self.entity_fields().pub_id.value().copied()
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.entity_fields().last_updated.value().copied()
    }
}

/// Coarse classification of what an entity represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ontology {
    #[serde(rename = "TANGIBLE GOOD")]
    TangibleGood,
    #[serde(rename = "DIGITAL GOOD")]
    DigitalGood,
}

/// Generic identity/audit record merged into each concrete entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFields {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub pub_id: Field<PubId>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_updated: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ontology: Field<Ontology>,
}

impl EntityFields {
    /// Presence of one of the generic fields, by descriptor name.
    pub fn presence(&self, name: &str) -> Option<Presence> {
        match name {
            "pubId" => Some(self.pub_id.presence()),
            "lastUpdated" => Some(self.last_updated.presence()),
            "ontology" => Some(self.ontology.presence()),
            _ => None,
        }
    }
}

/// Descriptors for [`EntityFields`], appended to every entity's props model.
///
/// `pubId` and `lastUpdated` are assigned by the backend, so clients cannot
/// write them; `lastUpdated` is null until the first save.
pub fn entity_props_model() -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::scalar("pubId"),
        FieldDescriptor::scalar("lastUpdated").optional_for_complete(),
        FieldDescriptor::scalar("ontology").writable(),
    ]
}
