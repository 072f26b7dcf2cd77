//! # Product Types
//!
//! Product catalog types for the storefront.
//! The catalog is compiled in from `config/products.toml`.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../../../config/products.toml");

/// Store currency (ISO 4217)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    INR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
        }
    }

    /// Format a whole-unit amount for display (e.g., "₹2999")
    pub fn format(&self, amount: u64) -> String {
        format!("{}{}", self.symbol(), amount)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Price in whole rupees
    pub price: u64,

    /// Image URL
    pub image: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Price formatted in the store currency
    pub fn display_price(&self) -> String {
        Currency::default().format(self.price)
    }
}

/// Static product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// The catalog shipped with the storefront
    pub fn builtin() -> StoreResult<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from a TOML document
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        let catalog: Self =
            toml::from_str(toml_str).map_err(|e| StoreError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check ids are unique, names are present and prices are positive
    pub fn validate(&self) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(StoreError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(StoreError::InvalidCatalog(format!(
                    "product {} has no name",
                    product.id
                )));
            }
            if product.price == 0 {
                return Err(StoreError::InvalidCatalog(format!(
                    "product {} must have a positive price",
                    product.id
                )));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
