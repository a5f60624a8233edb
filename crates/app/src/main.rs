use anyhow::Context;

use catalyst_core::ResourceRegistry;

/// Register every resource this application serves.
fn build_registry() -> anyhow::Result<ResourceRegistry> {
    let mut registry = ResourceRegistry::new();
    catalyst_products::register(&mut registry).context("failed to register products")?;
    registry
        .verify_setup()
        .context("resource setup verification failed")?;
    Ok(registry)
}

fn main() -> anyhow::Result<()> {
    catalyst_observability::init();

    let registry = build_registry()?;
    for name in registry.resource_names() {
        if let Some(resource) = registry.get(name) {
            tracing::info!(
                resource = name,
                item = resource.item_name(),
                sort_options = ?resource.sort_keys(),
                sort_default = resource.sort_default(),
                "resource ready"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_products() {
        let registry = build_registry().unwrap();
        assert_eq!(registry.resource_names().collect::<Vec<_>>(), vec!["products"]);
    }
}
