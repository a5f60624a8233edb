//! `catalyst-core` — the modeling layer every resource crate builds on.
//!
//! Entities declare an ordered props model (field descriptors), map each
//! descriptor onto a typed field and get construction, update rules and
//! completeness checking from [`finalize_constructor`]. A [`ResourceConf`]
//! pairs an entity with its sort options for the [`ResourceRegistry`].
//!
//! Everything here is pure and synchronous; nothing touches IO.

pub mod address;
pub mod collate;
pub mod entity;
pub mod error;
pub mod field;
pub mod id;
pub mod model;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod value_object;

pub use address::{ADDRESS_MODEL, Address};
pub use collate::locale_compare;
pub use entity::{Entity, EntityFields, Ontology, entity_props_model};
pub use error::{DomainError, DomainResult};
pub use field::{Field, Presence};
pub use id::PubId;
pub use model::{Attributes, Constructor, Model, finalize_constructor};
pub use registry::{RegisteredResource, ResourceRegistry};
pub use resource::{ResourceConf, ResourceOptions, SortFn, SortOption};
pub use schema::{FieldDescriptor, Schema, ValueType};
pub use value_object::ValueObject;
