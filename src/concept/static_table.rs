use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, PainPoint, ProductConcept};

/// How a static concept was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticMatch {
    /// `pain_solved` equals the selected pain text.
    Exact,
    /// Random pick from the category's own table; `pain_solved` may differ.
    SameCategory,
    /// The category has no table; random pick from the default category.
    DefaultCategory,
}

#[derive(Clone, Copy, Debug)]
pub struct StaticConcept<'a> {
    pub concept: &'a ProductConcept,
    pub matched: StaticMatch,
}

/// Two-tier lookup: exact pain match, else a random concept.
///
/// `None` only when the catalog carries no concept table for the category nor for
/// its default category.
pub fn resolve_static<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    category: &str,
    pain: &PainPoint,
    rng: &mut R,
) -> Option<StaticConcept<'a>> {
    let (table, miss) = match catalog.concepts_for(category) {
        Some(table) => (table, StaticMatch::SameCategory),
        None => (catalog.default_concepts()?, StaticMatch::DefaultCategory),
    };

    if let Some(concept) = table.iter().find(|c| c.pain_solved == pain.text) {
        return Some(StaticConcept {
            concept,
            matched: StaticMatch::Exact,
        });
    }

    table.choose(rng).map(|concept| StaticConcept {
        concept,
        matched: miss,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/concept/static_table.rs"]
mod tests;
