//! Concept sources: static table, text-generation API, local remix.

pub mod anthropic;
pub mod parse;
pub mod prompt;
pub mod remix;
pub mod static_table;

use crate::catalog::{PainPoint, ProductConcept};
use crate::foundation::error::GenerationError;

/// Name of the placeholder concept used whenever generation fails.
pub const DEMO_PRODUCT_NAME: &str = "DemoProduct";

/// A pluggable text-generation capability.
///
/// Implementations send `prompt` somewhere and turn the reply into a concept. They do
/// not retry; the caller substitutes [`demo_concept`] on any error.
pub trait ConceptGenerator {
    fn generate(&self, prompt: &str) -> Result<ProductConcept, GenerationError>;
}

impl<F> ConceptGenerator for F
where
    F: Fn(&str) -> Result<ProductConcept, GenerationError>,
{
    fn generate(&self, prompt: &str) -> Result<ProductConcept, GenerationError> {
        self(prompt)
    }
}

/// Fixed placeholder so the pipeline always completes.
pub fn demo_concept(selected_pains: &[PainPoint]) -> ProductConcept {
    ProductConcept {
        name: DEMO_PRODUCT_NAME.to_string(),
        tagline: "This is a demo - set your API key!".to_string(),
        pain_solved: selected_pains
            .first()
            .map(|p| p.text.clone())
            .unwrap_or_else(|| "Demo pain point".to_string()),
        description: "Set your ANTHROPIC_API_KEY environment variable to generate real \
                      product concepts with Claude AI."
            .to_string(),
        features: vec![
            "AI-powered ideation".to_string(),
            "Real pain points".to_string(),
            "Beautiful visuals".to_string(),
            "Daily inspiration".to_string(),
        ],
        price_point: "$0 - It's a demo".to_string(),
        vibe: "Demo meets placeholder".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/concept/mod.rs"]
mod tests;
