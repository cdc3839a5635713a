use super::*;

#[test]
fn prompt_embeds_category_and_pains() {
    let pains = vec![
        PainPoint::new("Hoses kink"),
        PainPoint::new("Tools rust").with_source("Reddit"),
    ];
    let prompt = build_prompt("gardening tools", &pains);
    assert!(prompt.contains(r#"for the "gardening tools" category"#));
    assert!(prompt.contains("- Hoses kink\n"));
    assert!(prompt.contains("- Tools rust (Source: Reddit)"));
}

#[test]
fn prompt_names_every_concept_field() {
    let prompt = build_prompt("pet products", &[]);
    for field in CONCEPT_FIELDS {
        assert!(prompt.contains(&format!("\"{field}\":")), "{field}");
    }
    assert!(prompt.contains("ONLY the JSON"));
}
