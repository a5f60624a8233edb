//! Central lookup of registered resources.
//!
//! The registry is an ordinary value owned by the application: it is built
//! during startup, filled by each resource crate's `register` function and then
//! checked once with [`ResourceRegistry::verify_setup`].

use core::any::Any;
use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};
use crate::model::Model;
use crate::resource::ResourceConf;

/// Type-erased view of a [`ResourceConf`].
pub trait RegisteredResource: Any + Send + Sync + core::fmt::Debug {
    fn item_name(&self) -> &str;
    fn resource_name(&self) -> &'static str;
    fn sort_keys(&self) -> Vec<&str>;
    fn sort_default(&self) -> &str;
    fn validate(&self) -> DomainResult<()>;
    fn as_any(&self) -> &dyn Any;
}

impl<M> RegisteredResource for ResourceConf<M>
where
    M: Model + core::fmt::Debug + 'static,
{
    fn item_name(&self) -> &str {
        ResourceConf::item_name(self)
    }

    fn resource_name(&self) -> &'static str {
        M::RESOURCE_NAME
    }

    fn sort_keys(&self) -> Vec<&str> {
        self.sort_options().iter().map(|o| o.value.as_str()).collect()
    }

    fn sort_default(&self) -> &str {
        ResourceConf::sort_default(self)
    }

    fn validate(&self) -> DomainResult<()> {
        ResourceConf::validate(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Resources keyed by collection name (e.g. `"products"`).
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<&'static str, Box<dyn RegisteredResource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a resource. A collection name can be registered once.
    pub fn register<M>(&mut self, conf: ResourceConf<M>) -> DomainResult<()>
    where
        M: Model + core::fmt::Debug + 'static,
    {
        self.insert(Box::new(conf))
    }

    /// Replace the whole registry. Nothing changes if any entry is rejected.
    pub fn set_resources(
        &mut self,
        resources: impl IntoIterator<Item = Box<dyn RegisteredResource>>,
    ) -> DomainResult<()> {
        let mut next = ResourceRegistry::new();
        for r in resources {
            next.insert(r)?;
        }
        *self = next;
        Ok(())
    }

    fn insert(&mut self, resource: Box<dyn RegisteredResource>) -> DomainResult<()> {
        resource.validate()?;

        let name = resource.resource_name();
        if self.resources.contains_key(name) {
            return Err(DomainError::conflict(format!(
                "resource '{name}' is already registered"
            )));
        }

        tracing::info!(
            resource = name,
            item = resource.item_name(),
            sort_default = resource.sort_default(),
            sort_options = resource.sort_keys().len(),
            "registered resource"
        );
        self.resources.insert(name, resource);
        Ok(())
    }

    pub fn get(&self, resource_name: &str) -> Option<&dyn RegisteredResource> {
        self.resources.get(resource_name).map(|r| r.as_ref())
    }

    /// Typed access; `None` if the name is unknown or registered for another model.
    pub fn get_typed<M: Model + 'static>(&self, resource_name: &str) -> Option<&ResourceConf<M>> {
        self.get(resource_name)?
            .as_any()
            .downcast_ref::<ResourceConf<M>>()
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Startup check: at least one resource, and every resource still valid.
    pub fn verify_setup(&self) -> DomainResult<()> {
        if self.resources.is_empty() {
            tracing::warn!("no resources registered");
            return Err(DomainError::not_found("no resources registered"));
        }
        for r in self.resources.values() {
            r.validate()?;
        }
        tracing::info!(resources = self.resources.len(), "resource setup verified");
        Ok(())
    }
}
