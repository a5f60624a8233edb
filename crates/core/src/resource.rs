//! Resource configuration: an entity type plus its list/query settings.

use core::cmp::Ordering;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};
use crate::model::{Constructor, Model};

/// Comparator used to order a list of entities.
pub type SortFn<M> = fn(&M, &M) -> Ordering;

/// A user-selectable sort order.
pub struct SortOption<M> {
    pub label: String,
    /// Stable key clients pass back (e.g. `"displayName-asc"`).
    pub value: String,
    pub func: SortFn<M>,
}

impl<M> SortOption<M> {
    pub fn new(label: impl Into<String>, value: impl Into<String>, func: SortFn<M>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            func,
        }
    }
}

impl<M> Clone for SortOption<M> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            value: self.value.clone(),
            func: self.func,
        }
    }
}

impl<M> core::fmt::Debug for SortOption<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortOption")
            .field("label", &self.label)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Inputs for [`ResourceConf::new`].
#[derive(Debug)]
pub struct ResourceOptions<M> {
    pub model: Constructor<M>,
    pub sort_options: Vec<SortOption<M>>,
    pub sort_default: String,
}

/// Everything the registry needs to know about one resource.
///
/// Construction does not validate; [`ResourceConf::validate`] runs when the
/// conf is registered.
#[derive(Debug)]
pub struct ResourceConf<M> {
    item_name: String,
    model: Constructor<M>,
    sort_options: Vec<SortOption<M>>,
    sort_map: HashMap<String, SortFn<M>>,
    sort_default: String,
}

impl<M: Model> ResourceConf<M> {
    pub fn new(item_name: impl Into<String>, options: ResourceOptions<M>) -> Self {
        let sort_map = options
            .sort_options
            .iter()
            .map(|o| (o.value.clone(), o.func))
            .collect();

        Self {
            item_name: item_name.into(),
            model: options.model,
            sort_options: options.sort_options,
            sort_map,
            sort_default: options.sort_default,
        }
    }

    /// Singular name of one item (e.g. `"product"`).
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Collection name, taken from the model (e.g. `"products"`).
    pub fn resource_name(&self) -> &'static str {
        M::RESOURCE_NAME
    }

    pub fn model(&self) -> &Constructor<M> {
        &self.model
    }

    pub fn sort_options(&self) -> &[SortOption<M>] {
        &self.sort_options
    }

    pub fn sort_map(&self) -> &HashMap<String, SortFn<M>> {
        &self.sort_map
    }

    pub fn sort_default(&self) -> &str {
        &self.sort_default
    }

    pub fn sort_func(&self, key: &str) -> Option<SortFn<M>> {
        self.sort_map.get(key).copied()
    }

    /// Sort `items` by the option named `key`, or by the default option.
    pub fn sort(&self, items: &mut [M], key: Option<&str>) -> DomainResult<()> {
        let key = key.unwrap_or(&self.sort_default);
        let func = self.sort_func(key).ok_or_else(|| {
            DomainError::not_found(format!("{}: sort option '{}'", M::RESOURCE_NAME, key))
        })?;
        items.sort_by(func);
        Ok(())
    }

    /// Option keys must be unique and the default must be one of them.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for o in &self.sort_options {
            if !seen.insert(o.value.as_str()) {
                return Err(DomainError::conflict(format!(
                    "{}: duplicate sort option '{}'",
                    M::RESOURCE_NAME,
                    o.value
                )));
            }
        }
        if !self.sort_map.contains_key(&self.sort_default) {
            return Err(DomainError::validation(format!(
                "{}: default sort '{}' is not a sort option",
                M::RESOURCE_NAME,
                self.sort_default
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::field::{Field, Presence};
    use crate::model::finalize_constructor;
    use crate::schema::{FieldDescriptor, Schema};

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
    }

    static TAG_PROPS: LazyLock<Schema> =
        LazyLock::new(|| Schema::from_iter([FieldDescriptor::scalar("name").writable()]));

    impl Model for Tag {
        const RESOURCE_NAME: &'static str = "tags";

        fn props_model() -> &'static Schema {
            &TAG_PROPS
        }

        fn presence(&self, name: &str) -> Option<Presence> {
            (name == "name").then(|| self.name.presence())
        }
    }

    fn tag(name: &str) -> Tag {
        Tag {
            name: Field::Value(name.to_string()),
        }
    }

    fn by_name(a: &Tag, b: &Tag) -> Ordering {
        a.name.as_deref().cmp(&b.name.as_deref())
    }

    fn conf(options: Vec<SortOption<Tag>>, default: &str) -> ResourceConf<Tag> {
        ResourceConf::new(
            "tag",
            ResourceOptions {
                model: finalize_constructor::<Tag>().unwrap(),
                sort_options: options,
                sort_default: default.to_string(),
            },
        )
    }

    #[test]
    fn sort_map_indexes_options_by_value() {
        let c = conf(vec![SortOption::new("Name", "name-asc", by_name)], "name-asc");
        assert_eq!(c.item_name(), "tag");
        assert_eq!(c.resource_name(), "tags");
        assert!(c.sort_func("name-asc").is_some());
        assert!(c.sort_func("name-desc").is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn sort_uses_default_when_no_key_given() {
        let c = conf(vec![SortOption::new("Name", "name-asc", by_name)], "name-asc");
        let mut items = vec![tag("b"), tag("a")];
        c.sort(&mut items, None).unwrap();
        assert_eq!(items, vec![tag("a"), tag("b")]);
    }

    #[test]
    fn sort_rejects_unknown_key() {
        let c = conf(vec![SortOption::new("Name", "name-asc", by_name)], "name-asc");
        let err = c.sort(&mut [], Some("size-asc")).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn validate_rejects_unknown_default() {
        let c = conf(vec![SortOption::new("Name", "name-asc", by_name)], "name-desc");
        assert!(matches!(c.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let c = conf(
            vec![
                SortOption::new("Name", "name-asc", by_name),
                SortOption::new("Name again", "name-asc", by_name),
            ],
            "name-asc",
        );
        assert!(matches!(c.validate(), Err(DomainError::Conflict(_))));
    }
}
