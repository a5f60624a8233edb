//! Product resource configuration and registration.

use core::cmp::Ordering;

use catalyst_core::{
    DomainResult, ResourceConf, ResourceOptions, ResourceRegistry, SortOption, locale_compare,
};

use crate::product::Product;

pub const PRODUCT_ITEM_NAME: &str = "product";
pub const SORT_DISPLAY_NAME_ASC: &str = "displayName-asc";
pub const SORT_DISPLAY_NAME_DESC: &str = "displayName-desc";

// Products without a display name sort as the empty string.
fn display_name_key(p: &Product) -> &str {
    p.display_name().unwrap_or_default()
}

pub fn display_name_asc(a: &Product, b: &Product) -> Ordering {
    locale_compare(display_name_key(a), display_name_key(b))
}

pub fn display_name_desc(a: &Product, b: &Product) -> Ordering {
    display_name_asc(a, b).reverse()
}

/// Resource configuration for products: sortable by display name, ascending by
/// default.
pub fn product_resource_conf() -> DomainResult<ResourceConf<Product>> {
    Ok(ResourceConf::new(
        PRODUCT_ITEM_NAME,
        ResourceOptions {
            model: Product::constructor()?,
            sort_options: vec![
                SortOption::new("Display name (asc)", SORT_DISPLAY_NAME_ASC, display_name_asc),
                SortOption::new("Display name (desc)", SORT_DISPLAY_NAME_DESC, display_name_desc),
            ],
            sort_default: SORT_DISPLAY_NAME_ASC.to_string(),
        },
    ))
}

/// Register the products resource. Call once from application startup.
pub fn register(registry: &mut ResourceRegistry) -> DomainResult<()> {
    registry.register(product_resource_conf()?)
}
