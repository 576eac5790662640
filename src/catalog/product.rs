//! Product Model
//!
//! Wire shape of the remote product records. Products are read-only here:
//! they are decoded, cached and forwarded, never modified.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// == Product ==
/// A catalog product as returned by the remote API.
///
/// Technical attributes the data layer does not interpret (cpu, ram, os,
/// battery, ...) are kept in `attributes` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    /// Null, empty or absent means out of stock
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ProductOptions>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Returns true when the product carries a usable price.
    pub fn is_in_stock(&self) -> bool {
        self.price
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }

    /// Brand and model joined for display.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }

    /// Selectable storage variants (empty when the record has none).
    pub fn storages(&self) -> &[ProductOption] {
        self.options
            .as_ref()
            .map(|o| o.storages.as_slice())
            .unwrap_or(&[])
    }

    /// Selectable color variants (empty when the record has none).
    pub fn colors(&self) -> &[ProductOption] {
        self.options
            .as_ref()
            .map(|o| o.colors.as_slice())
            .unwrap_or(&[])
    }

    /// Variant codes to preselect: a dimension with exactly one option is
    /// chosen automatically, otherwise the caller must pick.
    pub fn default_selection(&self) -> (Option<&str>, Option<&str>) {
        fn sole(options: &[ProductOption]) -> Option<&str> {
            match options {
                [only] => Some(only.code.as_str()),
                _ => None,
            }
        }

        (sole(self.colors()), sole(self.storages()))
    }
}

// == Product Options ==
/// Variant dimensions a product can be ordered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOptions {
    #[serde(default)]
    pub storages: Vec<ProductOption>,
    #[serde(default)]
    pub colors: Vec<ProductOption>,
}

/// One selectable variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    pub name: String,
}

// == Lenient Decoding ==
// The remote API is inconsistent about quoting identifiers and prices.

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string, number or null, found {}",
            other
        ))),
    }
}
