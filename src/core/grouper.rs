use crate::domain::model::{GroupedCatalog, GroupedProduct, RawProduct};
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// The group a product belongs to: its category verbatim, or
/// [`UNCATEGORIZED`] when the category is absent or blank.
pub fn category_key(category: Option<&str>) -> &str {
    match category {
        Some(name) if !name.trim().is_empty() => name,
        _ => UNCATEGORIZED,
    }
}

pub fn group_by_category(products: Vec<RawProduct>) -> GroupedCatalog {
    tracing::info!("Grouping products by category...");

    let mut groups: BTreeMap<String, Vec<GroupedProduct>> = BTreeMap::new();
    for product in products {
        let key = category_key(product.category.as_deref()).to_string();
        groups
            .entry(key)
            .or_default()
            .push(GroupedProduct::from(product));
    }

    // sort_by is stable: equal prices keep their input order.
    for items in groups.values_mut() {
        items.sort_by(|a, b| a.price.total_cmp(&b.price));
    }

    GroupedCatalog::new(groups)
}
