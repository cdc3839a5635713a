use super::*;

#[test]
fn builtin_catalogs_load_and_validate() {
    let classic = Catalog::builtin(Variant::Classic).unwrap();
    assert_eq!(classic.categories.len(), 30);
    assert_eq!(classic.fallback_pain_points.len(), 3);

    let pro = Catalog::builtin(Variant::Pro).unwrap();
    assert_eq!(pro.categories.len(), 41);
    assert_eq!(pro.fallback_pain_points.len(), 4);

    assert_eq!(classic.concepts, pro.concepts);
    assert_eq!(classic.all_concepts().count(), 15);
}

#[test]
fn every_static_concept_solves_a_listed_pain() {
    let classic = Catalog::builtin(Variant::Classic).unwrap();
    for (category, concepts) in &classic.concepts {
        let pains = classic.pain_points_for(category).unwrap();
        for concept in concepts {
            assert!(
                pains.iter().any(|p| p.text == concept.pain_solved),
                "{} in {category}",
                concept.name
            );
        }
    }
}

#[test]
fn fallback_substitutes_category() {
    let pro = Catalog::builtin(Variant::Pro).unwrap();
    let pains = pro.fallback_for("shoe care");
    assert_eq!(
        pains[0].text,
        "Products in shoe care are overpriced for the quality"
    );
    assert!(pains.iter().all(|p| !p.text.contains(CATEGORY_PLACEHOLDER)));
}

#[test]
fn validate_rejects_empty_tables() {
    let err = Catalog::from_json_str(r#"{"categories": [], "fallback_pain_points": ["x"]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("at least one category"));

    let err = Catalog::from_json_str(r#"{"categories": ["a"], "fallback_pain_points": []}"#)
        .unwrap_err();
    assert!(err.to_string().contains("fallback_pain_points"));

    let err = Catalog::from_json_str(
        r#"{"categories": ["a"], "fallback_pain_points": ["x"], "pain_points": {"a": []}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn validate_requires_default_concepts_when_table_present() {
    let err = Catalog::from_json_str(
        r#"{
            "categories": ["a"],
            "fallback_pain_points": ["x"],
            "concepts": {"a": [{"name": "A"}]},
            "default_concept_category": "b"
        }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("default_concept_category"));

    let ok = Catalog::from_json_str(r#"{"categories": ["a"], "fallback_pain_points": ["x"]}"#)
        .unwrap();
    assert!(ok.default_concepts().is_none());
    assert_eq!(ok.default_concept_category, "gardening tools");
}

#[test]
fn from_path_reports_missing_file() {
    let err = Catalog::from_path(Path::new("target/definitely/missing.json")).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
