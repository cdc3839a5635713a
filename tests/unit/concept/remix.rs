use super::*;
use crate::config::Variant;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn classic() -> Catalog {
    Catalog::builtin(Variant::Classic).unwrap()
}

#[test]
fn remix_is_well_formed_across_seeds() {
    let catalog = classic();
    let pains = catalog.pain_points_for("pet products").unwrap().to_vec();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = remix_concept(&catalog, "pet products", &pains, &mut rng).unwrap();

        assert!(!c.name.is_empty());
        assert!(!c.tagline.is_empty());
        assert!(pains.iter().any(|p| p.text == c.pain_solved));
        assert!(c.description.contains("approach to pet products"));
        assert!(c.features.len() <= 4 && c.features.len() >= 2);
        let mut dedup = c.features.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), c.features.len());

        let price: u32 = c.price_point.trim_start_matches('$').parse().unwrap();
        assert!((29..=178).contains(&price), "{price}");
        assert!(REMIX_VIBES.contains(&c.vibe.as_str()));
    }
}

#[test]
fn empty_pain_list_uses_generic_frustration() {
    let catalog = classic();
    let mut rng = StdRng::seed_from_u64(3);
    let c = remix_concept(&catalog, "shoe care", &[], &mut rng).unwrap();
    assert_eq!(c.pain_solved, "Common frustrations with shoe care");
}

#[test]
fn same_seed_same_remix() {
    let catalog = classic();
    let a = remix_concept(&catalog, "home gym", &[], &mut StdRng::seed_from_u64(11));
    let b = remix_concept(&catalog, "home gym", &[], &mut StdRng::seed_from_u64(11));
    assert_eq!(a, b);
}

#[test]
fn catalog_without_concepts_cannot_remix() {
    let catalog =
        Catalog::from_json_str(r#"{"categories": ["a"], "fallback_pain_points": ["x"]}"#).unwrap();
    assert!(remix_concept(&catalog, "a", &[], &mut StdRng::seed_from_u64(0)).is_none());
}

#[test]
fn capitalize_touches_only_first_char() {
    assert_eq!(capitalize("kitchen"), "Kitchen");
    assert_eq!(capitalize("eBike"), "EBike");
    assert_eq!(capitalize(""), "");
}
