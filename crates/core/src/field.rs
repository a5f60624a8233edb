//! Tri-state attribute values.
//!
//! Attribute bags coming from clients distinguish between a key that is absent,
//! a key explicitly set to `null`, and a key carrying a value. `Field<T>` keeps
//! that distinction through (de)serialization so the completeness check and the
//! create/update rules can see it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_object::ValueObject;

/// What a field currently holds, independent of its type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Presence {
    Unset,
    Null,
    Present,
}

/// A single entity attribute.
///
/// Use with `#[serde(default, skip_serializing_if = "Field::is_unset")]` so an
/// absent key decodes to `Unset` and is omitted again on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn presence(&self) -> Presence {
        match self {
            Field::Unset => Presence::Unset,
            Field::Null => Presence::Null,
            Field::Value(_) => Presence::Present,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Field::Value(value);
    }
}

impl Field<String> {
    /// Borrow the string value, if any.
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

/// List-valued attributes hold value objects, compared by value.
impl<T: ValueObject> Field<Vec<T>> {
    /// The items, empty when the field is unset or null.
    pub fn items(&self) -> &[T] {
        self.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Add `item` unless an equal one is already listed. An unset or null
    /// field becomes a one-item list. Returns whether the item was added.
    pub fn insert_unique(&mut self, item: T) -> bool {
        match self {
            Field::Value(items) if items.contains(&item) => false,
            Field::Value(items) => {
                items.push(item);
                true
            }
            Field::Unset | Field::Null => {
                *self = Field::Value(vec![item]);
                true
            }
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => serializer.serialize_some(v),
            Field::Unset | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; absence is handled by `default`.
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str);

    impl ValueObject for Tag {}

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Bag {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
    }

    #[test]
    fn absent_key_decodes_to_unset() {
        let bag: Bag = serde_json::from_str("{}").unwrap();
        assert_eq!(bag.name.presence(), Presence::Unset);
    }

    #[test]
    fn null_decodes_to_null() {
        let bag: Bag = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(bag.name, Field::Null);
    }

    #[test]
    fn value_decodes_to_value() {
        let bag: Bag = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(bag.name.as_deref(), Some("foo"));
        assert!(bag.name.is_present());
    }

    #[test]
    fn unset_is_skipped_but_null_is_kept_on_serialize() {
        let unset = serde_json::to_string(&Bag::default()).unwrap();
        assert_eq!(unset, "{}");

        let null = serde_json::to_string(&Bag { name: Field::Null }).unwrap();
        assert_eq!(null, r#"{"name":null}"#);
    }

    #[test]
    fn items_of_unset_or_null_list_are_empty() {
        assert!(Field::<Vec<Tag>>::Unset.items().is_empty());
        assert!(Field::<Vec<Tag>>::Null.items().is_empty());
        assert_eq!(Field::Value(vec![Tag("a")]).items(), &[Tag("a")]);
    }

    #[test]
    fn insert_unique_skips_equal_items() {
        let mut tags: Field<Vec<Tag>> = Field::Null;
        assert!(tags.insert_unique(Tag("a")));
        assert!(tags.insert_unique(Tag("b")));
        assert!(!tags.insert_unique(Tag("a")));
        assert_eq!(tags.items(), &[Tag("a"), Tag("b")]);
    }

    #[test]
    fn insert_into_unset_list_makes_it_present() {
        let mut tags: Field<Vec<Tag>> = Field::Unset;
        assert!(!tags.is_present());
        tags.insert_unique(Tag("a"));
        assert!(tags.is_present());
    }
}
