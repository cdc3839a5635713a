use crate::catalog::PainPoint;

/// Keys the model is told to return, in order.
pub const CONCEPT_FIELDS: [&str; 7] = [
    "name",
    "tagline",
    "pain_solved",
    "description",
    "features",
    "price_point",
    "vibe",
];

/// Prompt asking for exactly one concept object for `category`.
pub fn build_prompt(category: &str, pains: &[PainPoint]) -> String {
    let pain_lines = pains
        .iter()
        .map(|p| {
            if p.source.is_empty() {
                format!("- {}", p.text)
            } else {
                format!("- {} (Source: {})", p.text, p.source)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a brilliant consumer product designer. Generate ONE novel product concept for the "{category}" category.

REAL PAIN POINTS from consumers (from Reddit, Amazon reviews, forums):
{pain_lines}

Create a product that solves one or more of these pain points in an innovative way.

RESPOND WITH ONLY VALID JSON in this exact format:
{{
    "name": "ProductName",
    "tagline": "A compelling 5-8 word tagline",
    "pain_solved": "The specific pain point this addresses",
    "description": "2-3 sentence description of the product and how it works",
    "features": ["Feature 1", "Feature 2", "Feature 3", "Feature 4"],
    "price_point": "$XX or $XX-$XX range",
    "vibe": "X meets Y aesthetic comparison"
}}

REQUIREMENTS:
- Name should be memorable, 1-2 words, brandable (examples: TerraGlide, CloudCore, PawPod)
- Tagline should be punchy and benefit-focused
- Description should be specific about HOW it solves the problem
- Features should be concrete and differentiating
- Price should be realistic for the category
- Vibe should reference known brands/aesthetics for instant understanding (e.g., "Apple meets IKEA")

BE CREATIVE. Don't just describe existing products. Invent something NEW that would make someone say "why doesn't this exist?!"

Respond with ONLY the JSON, no other text or markdown."#
    )
}

#[cfg(test)]
#[path = "../../tests/unit/concept/prompt.rs"]
mod tests;
