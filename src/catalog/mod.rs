//! Immutable lookup tables: categories, pain points and pre-written concepts.
//!
//! The built-in tables are embedded JSON parsed once at startup; a custom catalog file
//! uses the same shape.

pub mod model;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::Variant;
use crate::foundation::error::{SparkError, SparkResult};

pub use model::{Intensity, PainPoint, ProductConcept};

const CLASSIC_JSON: &str = include_str!("../../data/classic.json");
const PRO_JSON: &str = include_str!("../../data/pro.json");
const CONCEPTS_JSON: &str = include_str!("../../data/concepts.json");

/// Placeholder substituted with the category name in fallback pain points.
pub const CATEGORY_PLACEHOLDER: &str = "{category}";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Ordered category labels. Order matters for seeded draws.
    pub categories: Vec<String>,
    #[serde(default)]
    pub pain_points: BTreeMap<String, Vec<PainPoint>>,
    /// Returned for categories without their own pain points.
    pub fallback_pain_points: Vec<PainPoint>,
    #[serde(default)]
    pub concepts: BTreeMap<String, Vec<ProductConcept>>,
    /// Concept table used when a category has none of its own.
    #[serde(default = "default_concept_category")]
    pub default_concept_category: String,
}

fn default_concept_category() -> String {
    "gardening tools".to_string()
}

impl Catalog {
    /// Built-in tables for `variant`, sharing one concept table.
    pub fn builtin(variant: Variant) -> SparkResult<Self> {
        let src = match variant {
            Variant::Classic => CLASSIC_JSON,
            Variant::Pro => PRO_JSON,
        };
        let mut catalog: Catalog = serde_json::from_str(src)
            .map_err(|e| SparkError::serde(format!("builtin {variant} catalog: {e}")))?;
        catalog.concepts = serde_json::from_str(CONCEPTS_JSON)
            .map_err(|e| SparkError::serde(format!("builtin concept table: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(s: &str) -> SparkResult<Self> {
        let catalog: Catalog =
            serde_json::from_str(s).map_err(|e| SparkError::serde(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> SparkResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> SparkResult<()> {
        if self.categories.is_empty() {
            return Err(SparkError::validation("catalog must list at least one category"));
        }
        if let Some(c) = self.categories.iter().find(|c| c.trim().is_empty()) {
            return Err(SparkError::validation(format!(
                "catalog category labels must be non-empty (got '{c}')"
            )));
        }
        if self.fallback_pain_points.is_empty() {
            return Err(SparkError::validation(
                "catalog fallback_pain_points must be non-empty",
            ));
        }
        for (category, pains) in &self.pain_points {
            if pains.is_empty() {
                return Err(SparkError::validation(format!(
                    "pain point list for '{category}' must be non-empty"
                )));
            }
        }
        for (category, concepts) in &self.concepts {
            if concepts.is_empty() {
                return Err(SparkError::validation(format!(
                    "concept list for '{category}' must be non-empty"
                )));
            }
        }
        if !self.concepts.is_empty() && !self.concepts.contains_key(&self.default_concept_category)
        {
            return Err(SparkError::validation(format!(
                "default_concept_category '{}' has no concepts",
                self.default_concept_category
            )));
        }
        Ok(())
    }

    /// Pain points registered for exactly `category`.
    pub fn pain_points_for(&self, category: &str) -> Option<&[PainPoint]> {
        self.pain_points.get(category).map(Vec::as_slice)
    }

    /// The generic list with the category name substituted.
    pub fn fallback_for(&self, category: &str) -> Vec<PainPoint> {
        self.fallback_pain_points
            .iter()
            .map(|p| PainPoint {
                text: p.text.replace(CATEGORY_PLACEHOLDER, category),
                ..p.clone()
            })
            .collect()
    }

    pub fn concepts_for(&self, category: &str) -> Option<&[ProductConcept]> {
        self.concepts.get(category).map(Vec::as_slice)
    }

    pub fn default_concepts(&self) -> Option<&[ProductConcept]> {
        self.concepts_for(&self.default_concept_category)
    }

    /// Every concept in the table, in category order.
    pub fn all_concepts(&self) -> impl Iterator<Item = &ProductConcept> {
        self.concepts.values().flatten()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
