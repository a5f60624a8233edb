use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use catalyst_core::{
    ADDRESS_MODEL, Address, Attributes, Constructor, DomainResult, Entity, EntityFields, Field,
    FieldDescriptor, Model, Ontology, Presence, Schema, entity_props_model, finalize_constructor,
};

/// Product-specific scalar attributes, in declaration order.
///
/// Only `displayName` is required for completeness.
const PRODUCT_SCALARS: [&str; 8] = [
    "displayName",
    "summary",
    "supportPhone",
    "supportEmail",
    "homepage",
    "logoURL",
    "repoURL",
    "issuesURL",
];

static PRODUCT_PROPS: LazyLock<Schema> = LazyLock::new(|| {
    let mut schema: Schema = PRODUCT_SCALARS
        .into_iter()
        .map(|name| {
            let d = FieldDescriptor::scalar(name).writable();
            if name == "displayName" {
                d
            } else {
                d.optional_for_complete()
            }
        })
        .collect();

    schema
        .extend(entity_props_model())
        .push(FieldDescriptor::array_of("addresses", ADDRESS_MODEL).writable())
        .push(
            FieldDescriptor::scalar("changeDesc")
                .writable()
                .unset_for_new()
                .optional_for_complete(),
        );
    schema
});

/// The Product props model: product scalars, the generic entity fields,
/// `addresses`, then `changeDesc`.
pub fn product_props_model() -> &'static Schema {
    &PRODUCT_PROPS
}

/// A product or service offered by an organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    display_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    summary: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    support_phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    support_email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    homepage: Field<String>,
    #[serde(rename = "logoURL", default, skip_serializing_if = "Field::is_unset")]
    logo_url: Field<String>,
    #[serde(rename = "repoURL", default, skip_serializing_if = "Field::is_unset")]
    repo_url: Field<String>,
    #[serde(rename = "issuesURL", default, skip_serializing_if = "Field::is_unset")]
    issues_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    addresses: Field<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    change_desc: Field<String>,
}

impl Model for Product {
    const RESOURCE_NAME: &'static str = "products";

    fn props_model() -> &'static Schema {
        product_props_model()
    }

    fn presence(&self, name: &str) -> Option<Presence> {
        let field = match name {
            "displayName" => &self.display_name,
            "summary" => &self.summary,
            "supportPhone" => &self.support_phone,
            "supportEmail" => &self.support_email,
            "homepage" => &self.homepage,
            "logoURL" => &self.logo_url,
            "repoURL" => &self.repo_url,
            "issuesURL" => &self.issues_url,
            "changeDesc" => &self.change_desc,
            "addresses" => return Some(self.addresses.presence()),
            _ => return self.entity.presence(name),
        };
        Some(field.presence())
    }
}

impl Entity for Product {
    fn entity_fields(&self) -> &EntityFields {
        &self.entity
    }
}

fn phone_out_formatter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{3})([0-9]{3})([0-9]{4})$").expect("valid phone regex"))
}

impl Product {
    pub fn constructor() -> DomainResult<Constructor<Product>> {
        finalize_constructor::<Product>()
    }

    /// Build a product from an attribute bag (e.g. a decoded request body).
    pub fn from_attributes(attrs: Attributes) -> DomainResult<Self> {
        Self::constructor()?.construct(attrs)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn support_phone(&self) -> Option<&str> {
        self.support_phone.as_deref()
    }

    pub fn support_email(&self) -> Option<&str> {
        self.support_email.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    pub fn issues_url(&self) -> Option<&str> {
        self.issues_url.as_deref()
    }

    pub fn ontology(&self) -> Option<Ontology> {
        self.entity.ontology.value().copied()
    }

    pub fn addresses(&self) -> Option<&[Address]> {
        self.addresses.value().map(Vec::as_slice)
    }

    pub fn change_desc(&self) -> Option<&str> {
        self.change_desc.as_deref()
    }

    pub fn set_display_name(&mut self, val: impl Into<String>) {
        self.display_name.set(val.into());
    }

    pub fn set_summary(&mut self, val: impl Into<String>) {
        self.summary.set(val.into());
    }

    pub fn set_support_phone(&mut self, val: impl Into<String>) {
        self.support_phone.set(val.into());
    }

    pub fn set_support_email(&mut self, val: impl Into<String>) {
        self.support_email.set(val.into());
    }

    pub fn set_homepage(&mut self, val: impl Into<String>) {
        self.homepage.set(val.into());
    }

    pub fn set_logo_url(&mut self, val: impl Into<String>) {
        self.logo_url.set(val.into());
    }

    pub fn set_repo_url(&mut self, val: impl Into<String>) {
        self.repo_url.set(val.into());
    }

    pub fn set_issues_url(&mut self, val: impl Into<String>) {
        self.issues_url.set(val.into());
    }

    pub fn set_ontology(&mut self, val: Ontology) {
        self.entity.ontology.set(val);
    }

    pub fn set_addresses(&mut self, val: Vec<Address>) {
        self.addresses.set(val);
    }

    /// Add an address unless an identical one is already on file. Returns
    /// whether the list changed.
    pub fn add_address(&mut self, address: Address) -> bool {
        self.addresses.insert_unique(address)
    }

    /// Normalize values for output: a bare ten-digit support phone becomes
    /// `ddd-ddd-dddd`.
    pub fn format_out(&mut self) {
        if let Field::Value(phone) = &mut self.support_phone {
            let formatted = phone_out_formatter().replace(phone.as_str(), "$1-$2-$3");
            *phone = formatted.into_owned();
        }
    }

    /// General search predicate: `term` appears in the display name or the
    /// summary, ignoring case. An empty term matches everything.
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        [self.display_name(), self.summary()]
            .into_iter()
            .flatten()
            .any(|s| s.to_lowercase().contains(&term))
    }
}

/// Products matching [`Product::matches_term`], in their original order.
pub fn filter_by_term<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches_term(term)).collect()
}
