//! Locally synthesized concepts recombined from the static table.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, PainPoint, ProductConcept};

const NAME_PREFIXES: &[&str] = &[
    "Nova", "Flux", "Pulse", "Zen", "Arc", "Core", "Wave", "Loop", "Sync", "Glide",
];
const NAME_SUFFIXES: &[&str] = &[
    "Pro", "One", "Max", "Air", "Flow", "Hub", "Mate", "Pad", "Ring", "Box",
];

pub const REMIX_ADJECTIVES: &[&str] = &[
    "Smart",
    "Sleek",
    "Effortless",
    "Modular",
    "Compact",
    "Adaptive",
    "Minimal",
    "Sustainable",
    "Quiet",
    "Rugged",
];

pub const REMIX_FEATURES: &[&str] = &[
    "USB-C rechargeable",
    "Made from recycled materials",
    "Folds flat for storage",
    "Dishwasher safe parts",
    "One-touch setup",
    "Works without an app",
    "Lifetime warranty",
    "Magnetic modular mounts",
];

pub const REMIX_VIBES: &[&str] = &[
    "Apple meets IKEA",
    "Muji meets Dyson",
    "Patagonia meets Nest",
    "Braun meets Bose",
    "Herman Miller meets Fitbit",
    "Yeti meets Lego",
];

const MAX_FEATURES: usize = 4;

/// Recombine a random concept from the whole table into a new one for `category`.
///
/// Returns `None` only when the catalog carries no concepts at all.
pub fn remix_concept<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: &str,
    pains: &[PainPoint],
    rng: &mut R,
) -> Option<ProductConcept> {
    let all: Vec<&ProductConcept> = catalog.all_concepts().collect();
    let base = *all.choose(rng)?;

    let pain_solved = pains
        .choose(rng)
        .map(|p| p.text.clone())
        .unwrap_or_else(|| format!("Common frustrations with {category}"));

    let first_word = category.split(' ').next().unwrap_or(category);
    let category_word = capitalize(first_word);
    let name = match rng.gen_range(0..3) {
        0 => format!("{}{category_word}", pick(NAME_PREFIXES, rng)),
        1 => format!("{category_word}{}", pick(NAME_SUFFIXES, rng)),
        _ => format!("{}{}", pick(NAME_PREFIXES, rng), pick(NAME_SUFFIXES, rng)),
    };

    let tagline = match rng.gen_range(0..5) {
        0 => format!("{} {category} for modern life", pick(REMIX_ADJECTIVES, rng)),
        1 => format!("The {first_word} that thinks ahead"),
        2 => format!("Finally, {category} done right"),
        3 => format!("{}. Intuitive. Essential.", pick(REMIX_ADJECTIVES, rng)),
        _ => {
            let verb = if category.contains("tool") { "work" } else { "live" };
            format!("Reimagining how you {verb}")
        }
    };

    let adjective = pick(REMIX_ADJECTIVES, rng).to_lowercase();
    let description = format!(
        "A {adjective} approach to {category} that solves real problems. We've combined \
         cutting-edge technology with thoughtful design to create something that just \
         works. No learning curve, no compromises."
    );

    let mut features: Vec<String> = Vec::with_capacity(MAX_FEATURES);
    let borrowed = base.features.choose_multiple(rng, 2.min(base.features.len()));
    let fresh = REMIX_FEATURES.choose_multiple(rng, 2).map(|f| f.to_string());
    for f in borrowed.cloned().chain(fresh) {
        if features.len() < MAX_FEATURES && !features.contains(&f) {
            features.push(f);
        }
    }

    Some(ProductConcept {
        name,
        tagline,
        pain_solved,
        description,
        features,
        price_point: format!("${}", rng.gen_range(29..179)),
        vibe: pick(REMIX_VIBES, rng).to_string(),
    })
}

fn pick<'a, R: Rng + ?Sized>(list: &[&'a str], rng: &mut R) -> &'a str {
    list.choose(rng).copied().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/concept/remix.rs"]
mod tests;
