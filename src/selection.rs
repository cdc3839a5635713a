//! Category and pain-point selection.

use std::borrow::Cow;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Intensity, PainPoint};

/// Uniform draw from the catalog's category list. `None` only for an empty list.
pub fn select_category<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Option<&'a str> {
    catalog.categories.choose(rng).map(String::as_str)
}

/// Exact-match lookup, generic fallback on miss. Never empty for a validated catalog.
pub fn get_pain_points<'a>(catalog: &'a Catalog, category: &str) -> Cow<'a, [PainPoint]> {
    match catalog.pain_points_for(category) {
        Some(pains) => Cow::Borrowed(pains),
        None => Cow::Owned(catalog.fallback_for(category)),
    }
}

/// Uniform pick among the high-intensity items, or among all items if none is high.
pub fn pick_primary_pain<'a, R: Rng + ?Sized>(
    pains: &'a [PainPoint],
    rng: &mut R,
) -> Option<&'a PainPoint> {
    let high: Vec<&PainPoint> = pains
        .iter()
        .filter(|p| p.intensity == Intensity::High)
        .collect();
    if high.is_empty() {
        pains.choose(rng)
    } else {
        high.choose(rng).copied()
    }
}

/// Up to `n` distinct pain points, in random order.
pub fn sample_pain_points<R: Rng + ?Sized>(
    pains: &[PainPoint],
    n: usize,
    rng: &mut R,
) -> Vec<PainPoint> {
    pains
        .choose_multiple(rng, n.min(pains.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/selection.rs"]
mod tests;
