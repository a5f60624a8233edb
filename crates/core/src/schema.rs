//! Field descriptors ("props models").
//!
//! A props model is an ordered list of descriptors telling the constructor how
//! to treat each attribute: whether clients may write it, whether it holds a
//! single value or a list of nested entities, and how it takes part in the
//! create and completeness rules.

/// Shape of the value a descriptor describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueType {
    Scalar,
    Array,
}

/// Metadata for a single attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub writable: bool,
    pub value_type: ValueType,
    /// Name of the nested entity type for `Array` fields.
    pub model: Option<&'static str>,
    /// Must not carry a value when the entity is created.
    pub unset_for_new: bool,
    /// Ignored by the completeness check.
    pub optional_for_complete: bool,
}

impl FieldDescriptor {
    /// Read-only scalar, required for completeness.
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            writable: false,
            value_type: ValueType::Scalar,
            model: None,
            unset_for_new: false,
            optional_for_complete: false,
        }
    }

    /// List of nested `model` entities.
    pub const fn array_of(name: &'static str, model: &'static str) -> Self {
        Self {
            value_type: ValueType::Array,
            model: Some(model),
            ..Self::scalar(name)
        }
    }

    pub const fn writable(self) -> Self {
        Self {
            writable: true,
            ..self
        }
    }

    pub const fn unset_for_new(self) -> Self {
        Self {
            unset_for_new: true,
            ..self
        }
    }

    pub const fn optional_for_complete(self) -> Self {
        Self {
            optional_for_complete: true,
            ..self
        }
    }
}

/// Ordered set of descriptors for one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldDescriptor) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn extend(&mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
