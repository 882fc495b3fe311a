use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A price exactly as the API sent it; `5` stays `5` and `109.95` stays `109.95`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }

    /// Numeric order, independent of how the number was written.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

impl Default for Price {
    fn default() -> Self {
        Price(Number::from(0))
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price(Number::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedProduct {
    pub id: i64,
    pub title: Option<String>,
    pub price: Price,
}

impl From<RawProduct> for GroupedProduct {
    fn from(product: RawProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
        }
    }
}

/// Category name to products, each list ascending by price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedCatalog(BTreeMap<String, Vec<GroupedProduct>>);

impl GroupedCatalog {
    pub fn new(groups: BTreeMap<String, Vec<GroupedProduct>>) -> Self {
        Self(groups)
    }

    pub fn get(&self, category: &str) -> Option<&[GroupedProduct]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GroupedProduct])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    /// Number of products across every category.
    pub fn product_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Decodes a catalog response body, matching field names case-insensitively.
pub fn parse_catalog(body: &str) -> Result<Vec<RawProduct>> {
    let items: Vec<Map<String, Value>> =
        serde_json::from_str(body).map_err(EtlError::ParseError)?;

    items
        .into_iter()
        .map(|item| {
            let normalized: Map<String, Value> = item
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            serde_json::from_value(Value::Object(normalized)).map_err(EtlError::ParseError)
        })
        .collect()
}
