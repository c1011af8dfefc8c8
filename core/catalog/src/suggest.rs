//! FILENAME: core/catalog/src/suggest.rs
//! PURPOSE: Data entry helpers for the product form.
//! CONTEXT: The form offers the makes, models and variants already in the
//! catalog as suggestions, and restricts positions by category.

use serde::{Deserialize, Serialize};

use crate::record::ProductRecord;

/// Distinct existing values, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSuggestions {
    pub makes: Vec<String>,
    pub models: Vec<String>,
    pub variants: Vec<String>,
}

impl CatalogSuggestions {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let mut suggestions = CatalogSuggestions::default();
        for record in records {
            suggestions.makes.push(record.make.clone());
            suggestions.models.push(record.model.clone());
            suggestions.variants.push(record.variant.clone());
        }
        for list in [
            &mut suggestions.makes,
            &mut suggestions.models,
            &mut suggestions.variants,
        ] {
            list.retain(|v| !v.trim().is_empty());
            list.sort();
            list.dedup();
        }
        suggestions
    }
}

/// Product categories the catalog sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    ShockAbsorber,
    CoilSpring,
}

impl ProductCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::ShockAbsorber => "Shock Absorber",
            ProductCategory::CoilSpring => "Coil Spring",
        }
    }

    pub fn from_label(label: &str) -> Option<ProductCategory> {
        match label.trim() {
            "Shock Absorber" => Some(ProductCategory::ShockAbsorber),
            "Coil Spring" => Some(ProductCategory::CoilSpring),
            _ => None,
        }
    }

    /// Positions a product of this category can be sold for.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            ProductCategory::ShockAbsorber => &["Front (2 pcs)", "Rear (2 pcs)", "Full Set (4 pcs)"],
            ProductCategory::CoilSpring => &["Carset (4 pcs)"],
        }
    }

    /// Position preselected when the category is chosen.
    pub fn default_position(self) -> &'static str {
        self.positions()[0]
    }
}

impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::ShockAbsorber
    }
}
