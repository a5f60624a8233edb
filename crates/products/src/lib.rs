//! Products resource.
//!
//! Declares the Product entity (its props model and typed fields) and the
//! resource configuration the application registers at startup. Construction,
//! completeness and registry behaviour come from `catalyst-core`.

pub mod product;
pub mod resource;

pub use product::{Product, filter_by_term, product_props_model};
pub use resource::{
    PRODUCT_ITEM_NAME, SORT_DISPLAY_NAME_ASC, SORT_DISPLAY_NAME_DESC, display_name_asc,
    display_name_desc, product_resource_conf, register,
};
