//! Entity models driven by a props model.
//!
//! An entity type implements [`Model`] by naming its props model and mapping
//! each descriptor name onto one of its fields. [`finalize_constructor`] checks
//! the two agree and hands back a [`Constructor`] that builds instances from
//! attribute bags while enforcing the descriptor rules.

use std::collections::HashSet;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::field::Presence;
use crate::schema::{Schema, ValueType};

/// Plain attribute bag, as received from a client or a store.
pub type Attributes = Map<String, Value>;

pub trait Model: Default + Serialize + DeserializeOwned {
    /// Collection name the entity is registered under (e.g. `"products"`).
    const RESOURCE_NAME: &'static str;

    fn props_model() -> &'static Schema;

    /// Presence of the field named by a descriptor, or `None` if the entity has
    /// no such field.
    fn presence(&self, name: &str) -> Option<Presence>;

    fn resource_name(&self) -> &'static str {
        Self::RESOURCE_NAME
    }

    /// Names of the required fields that do not hold a value, in descriptor
    /// order. Both unset and `null` count as missing.
    fn get_missing(&self) -> Vec<&'static str> {
        Self::props_model()
            .fields()
            .iter()
            .filter(|d| !d.optional_for_complete)
            .filter(|d| self.presence(d.name) != Some(Presence::Present))
            .map(|d| d.name)
            .collect()
    }

    fn is_complete(&self) -> bool {
        self.get_missing().is_empty()
    }
}

/// Validated constructor for `M`, produced by [`finalize_constructor`].
pub struct Constructor<M> {
    schema: &'static Schema,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for Constructor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Constructor<M> {}

impl<M> core::fmt::Debug for Constructor<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Constructor")
            .field("model", &core::any::type_name::<M>())
            .field("fields", &self.schema.len())
            .finish()
    }
}

/// Check `M`'s props model against the entity and return its constructor.
pub fn finalize_constructor<M: Model>() -> DomainResult<Constructor<M>> {
    let schema = M::props_model();
    let probe = M::default();
    let mut seen = HashSet::new();

    for d in schema.fields() {
        if !seen.insert(d.name) {
            return Err(DomainError::schema(format!(
                "{}: duplicate field '{}'",
                M::RESOURCE_NAME,
                d.name
            )));
        }
        if probe.presence(d.name).is_none() {
            return Err(DomainError::schema(format!(
                "{}: field '{}' is not mapped by the entity",
                M::RESOURCE_NAME,
                d.name
            )));
        }
        if d.value_type == ValueType::Array && d.model.is_none() {
            return Err(DomainError::schema(format!(
                "{}: array field '{}' has no model",
                M::RESOURCE_NAME,
                d.name
            )));
        }
    }

    tracing::debug!(
        resource = M::RESOURCE_NAME,
        fields = schema.len(),
        "finalized model constructor"
    );

    Ok(Constructor {
        schema,
        _model: PhantomData,
    })
}

impl<M: Model> Constructor<M> {
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Build an instance from an attribute bag.
    ///
    /// Keys outside the props model are rejected; absent keys stay unset.
    pub fn construct(&self, attrs: Attributes) -> DomainResult<M> {
        if let Some(key) = attrs.keys().find(|k| self.schema.get(k).is_none()) {
            tracing::debug!(resource = M::RESOURCE_NAME, field = %key, "rejected unknown field");
            return Err(DomainError::validation(format!(
                "{}: unknown field '{}'",
                M::RESOURCE_NAME,
                key
            )));
        }

        serde_json::from_value(Value::Object(attrs))
            .map_err(|e| DomainError::validation(format!("{}: {}", M::RESOURCE_NAME, e)))
    }

    /// Build an instance that is about to be created.
    ///
    /// Fields marked `unset_for_new` may be absent or `null`, nothing else.
    pub fn construct_new(&self, attrs: Attributes) -> DomainResult<M> {
        for d in self.schema.fields().iter().filter(|d| d.unset_for_new) {
            if attrs.get(d.name).is_some_and(|v| !v.is_null()) {
                tracing::debug!(resource = M::RESOURCE_NAME, field = d.name, "rejected field on create");
                return Err(DomainError::unset_for_new(d.name));
            }
        }
        self.construct(attrs)
    }

    /// Overlay `attrs` onto `current`, returning the updated instance.
    ///
    /// Only writable fields may appear in `attrs`. Per-change fields
    /// (`unset_for_new`) are not carried over from `current`.
    pub fn apply_update(&self, current: &M, attrs: Attributes) -> DomainResult<M> {
        for key in attrs.keys() {
            match self.schema.get(key) {
                None => {
                    return Err(DomainError::validation(format!(
                        "{}: unknown field '{}'",
                        M::RESOURCE_NAME,
                        key
                    )));
                }
                Some(d) if !d.writable => {
                    tracing::debug!(resource = M::RESOURCE_NAME, field = d.name, "rejected read-only field");
                    return Err(DomainError::not_writable(d.name));
                }
                Some(_) => {}
            }
        }

        let mut merged = match serde_json::to_value(current) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(DomainError::validation(format!(
                    "{}: entity did not encode as an object",
                    M::RESOURCE_NAME
                )));
            }
            Err(e) => return Err(DomainError::validation(e.to_string())),
        };
        merged.retain(|k, _| !self.schema.get(k).is_some_and(|d| d.unset_for_new));
        merged.extend(attrs);

        self.construct(merged)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::field::Field;
    use crate::schema::FieldDescriptor;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Widget {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        id: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        note: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        parts: Field<Vec<String>>,
    }

    static WIDGET_PROPS: LazyLock<Schema> = LazyLock::new(|| {
        Schema::from_iter([
            FieldDescriptor::scalar("id"),
            FieldDescriptor::scalar("name").writable(),
            FieldDescriptor::scalar("note")
                .writable()
                .unset_for_new()
                .optional_for_complete(),
            FieldDescriptor::array_of("parts", "Part").writable(),
        ])
    });

    impl Model for Widget {
        const RESOURCE_NAME: &'static str = "widgets";

        fn props_model() -> &'static Schema {
            &WIDGET_PROPS
        }

        fn presence(&self, name: &str) -> Option<Presence> {
            match name {
                "id" => Some(self.id.presence()),
                "name" => Some(self.name.presence()),
                "note" => Some(self.note.presence()),
                "parts" => Some(self.parts.presence()),
                _ => None,
            }
        }
    }

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn widgets() -> Constructor<Widget> {
        finalize_constructor::<Widget>().unwrap()
    }

    #[test]
    fn missing_lists_required_fields_in_order() {
        let w = widgets().construct(attrs(json!({"parts": null}))).unwrap();
        assert_eq!(w.get_missing(), vec!["id", "name", "parts"]);
        assert!(!w.is_complete());
    }

    #[test]
    fn empty_list_counts_as_present() {
        let w = widgets()
            .construct(attrs(json!({"id": "w1", "name": "Sprocket", "parts": []})))
            .unwrap();
        assert!(w.is_complete());
        assert_eq!(w.resource_name(), "widgets");
    }

    #[test]
    fn construct_rejects_unknown_fields() {
        let err = widgets()
            .construct(attrs(json!({"colour": "red"})))
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("colour")),
            _ => panic!("Expected Validation error for unknown field"),
        }
    }

    #[test]
    fn construct_rejects_wrong_types() {
        let err = widgets().construct(attrs(json!({"name": 7}))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn construct_new_rejects_unset_for_new_values() {
        let err = widgets()
            .construct_new(attrs(json!({"name": "Sprocket", "note": "first"})))
            .unwrap_err();
        assert_eq!(err, DomainError::unset_for_new("note"));
    }

    #[test]
    fn construct_new_accepts_null_unset_for_new() {
        let w = widgets()
            .construct_new(attrs(json!({"name": "Sprocket", "note": null})))
            .unwrap();
        assert_eq!(w.note, Field::Null);
    }

    #[test]
    fn apply_update_overlays_writable_fields() {
        let ctor = widgets();
        let current = ctor
            .construct(attrs(json!({"id": "w1", "name": "Sprocket", "parts": ["a"]})))
            .unwrap();
        let updated = ctor
            .apply_update(&current, attrs(json!({"name": "Gear", "note": "renamed"})))
            .unwrap();
        assert_eq!(updated.id.as_deref(), Some("w1"));
        assert_eq!(updated.name.as_deref(), Some("Gear"));
        assert_eq!(updated.note.as_deref(), Some("renamed"));
        assert_eq!(updated.parts, Field::Value(vec!["a".to_string()]));
    }

    #[test]
    fn apply_update_drops_previous_change_note() {
        let ctor = widgets();
        let current = ctor
            .construct(attrs(json!({"id": "w1", "note": "old"})))
            .unwrap();
        let updated = ctor
            .apply_update(&current, attrs(json!({"name": "Gear"})))
            .unwrap();
        assert!(updated.note.is_unset());
    }

    #[test]
    fn apply_update_rejects_read_only_fields() {
        let ctor = widgets();
        let current = Widget::default();
        let err = ctor
            .apply_update(&current, attrs(json!({"id": "w2"})))
            .unwrap_err();
        assert_eq!(err, DomainError::not_writable("id"));
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Drifted {
        name: Field<String>,
    }

    static DRIFTED_PROPS: LazyLock<Schema> = LazyLock::new(|| {
        Schema::from_iter([
            FieldDescriptor::scalar("name"),
            FieldDescriptor::scalar("gone"),
        ])
    });

    impl Model for Drifted {
        const RESOURCE_NAME: &'static str = "drifted";

        fn props_model() -> &'static Schema {
            &DRIFTED_PROPS
        }

        fn presence(&self, name: &str) -> Option<Presence> {
            (name == "name").then(|| self.name.presence())
        }
    }

    #[test]
    fn finalize_rejects_unmapped_descriptor() {
        let err = finalize_constructor::<Drifted>().unwrap_err();
        match err {
            DomainError::Schema(msg) => assert!(msg.contains("'gone'")),
            _ => panic!("Expected Schema error"),
        }
    }
}
