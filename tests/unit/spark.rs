use super::*;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

type GenResult = Result<ProductConcept, GenerationError>;

fn scratch_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("onespark-unit")
        .join(name)
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 2)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

fn engine(variant: Variant, out: &str) -> SparkEngine {
    let config = SparkConfig {
        output_dir: Some(scratch_dir(out)),
        ..SparkConfig::for_variant(variant)
    };
    SparkEngine::from_config(config)
        .unwrap()
        .with_fonts(FontSet::none())
}

#[test]
fn classic_static_run_writes_card_without_sidecar() {
    let engine = engine(Variant::Classic, "spark_classic");
    let pain = PainPoint::new("Alarm clocks are jarring and stressful");
    let rec = engine
        .run_with_pain("sleep products", &pain, &mut StdRng::seed_from_u64(1), now())
        .unwrap();

    assert_eq!(rec.concept.name, "DriftBand");
    assert_eq!(rec.concept_source, ConceptSource::Static);
    assert_eq!(rec.card_path.file_name().unwrap(), "spark_driftband.png");
    assert!(rec.card_path.is_file());
    assert!(!persist::sidecar_path(&rec.card_path).exists());
    assert!(rec.generated_at.is_none());
}

#[test]
fn generator_sees_the_prompt_and_pro_writes_sidecar() {
    let seen = Rc::new(RefCell::new(String::new()));
    let seen_in = Rc::clone(&seen);
    let engine = engine(Variant::Pro, "spark_pro").with_generator(move |prompt: &str| -> GenResult {
        *seen_in.borrow_mut() = prompt.to_string();
        Ok(ProductConcept {
            name: "Hose Halo".to_string(),
            pain_solved: "Not one of the selected pains".to_string(),
            ..ProductConcept::default()
        })
    });

    let rec = engine
        .run_for_category("gardening tools", &mut StdRng::seed_from_u64(2), now())
        .unwrap();

    assert!(seen.borrow().contains(r#""gardening tools""#));
    assert_eq!(rec.concept.name, "Hose Halo");
    assert_eq!(
        rec.card_path.file_name().unwrap(),
        "spark_hose_halo_20251202_091500.png"
    );
    assert_eq!(rec.pain_points.len(), PROMPT_PAIN_POINTS);
    assert_eq!(rec.pain_point.source, "concept");
    assert_eq!(rec.generated_at.as_deref(), Some("2025-12-02T09:15:00.000000"));

    let sidecar = persist::read_sidecar(&persist::sidecar_path(&rec.card_path)).unwrap();
    assert_eq!(sidecar.concept, rec.concept);
    assert_eq!(sidecar.category, "gardening tools");
    assert_eq!(sidecar.card_path, rec.card_path.display().to_string());
}

#[test]
fn selected_pain_is_reused_when_concept_names_it() {
    let engine = engine(Variant::Pro, "spark_pro_match").with_generator(|prompt: &str| -> GenResult {
        let line = prompt
            .lines()
            .find(|l| l.starts_with("- "))
            .unwrap_or("- none");
        let text = line.trim_start_matches("- ");
        let text = text.split(" (Source:").next().unwrap_or(text);
        Ok(ProductConcept {
            pain_solved: text.to_string(),
            ..ProductConcept::default()
        })
    });
    let rec = engine
        .run_for_category("pet products", &mut StdRng::seed_from_u64(4), now())
        .unwrap();
    assert!(rec.pain_points.contains(&rec.pain_point));
}

#[test]
fn failing_generator_falls_back_to_demo() {
    let engine = engine(Variant::Pro, "spark_pro_fail").with_generator(|_: &str| -> GenResult {
        Err(GenerationError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        })
    });
    let rec = engine.run(&mut StdRng::seed_from_u64(3), now()).unwrap();
    assert_eq!(rec.concept.name, "DemoProduct");
    assert!(rec.card_path.is_file());
    assert_eq!(rec.concept.pain_solved, rec.pain_points[0].text);
}

#[test]
fn missing_key_without_generator_is_demo() {
    let mut engine = engine(Variant::Pro, "spark_pro_nokey");
    engine.config.api.api_key = None;
    let rec = engine
        .run_for_category("zzz-unknown", &mut StdRng::seed_from_u64(5), now())
        .unwrap();
    assert_eq!(rec.concept.name, "DemoProduct");
    assert!(
        rec.pain_points
            .iter()
            .all(|p| !p.text.contains(crate::catalog::CATEGORY_PLACEHOLDER))
    );
}

#[test]
fn remix_source_runs_offline() {
    let config = SparkConfig {
        output_dir: Some(scratch_dir("spark_remix")),
        source: Some(ConceptSource::Remix),
        ..SparkConfig::for_variant(Variant::Classic)
    };
    let engine = SparkEngine::from_config(config)
        .unwrap()
        .with_fonts(FontSet::none());
    let rec = engine
        .run_for_category("home gym", &mut StdRng::seed_from_u64(8), now())
        .unwrap();
    assert_eq!(rec.concept_source, ConceptSource::Remix);
    assert_ne!(rec.concept.name, "DemoProduct");
    assert!(rec.card_path.is_file());
}

#[test]
fn unwritable_output_dir_is_an_error() {
    let config = SparkConfig {
        output_dir: Some(PathBuf::from("/proc/onespark-cannot-create")),
        ..SparkConfig::for_variant(Variant::Classic)
    };
    let engine = SparkEngine::from_config(config)
        .unwrap()
        .with_fonts(FontSet::none());
    assert!(engine.run(&mut StdRng::seed_from_u64(0), now()).is_err());
}

#[test]
fn generate_concept_reports_generation_errors() {
    let engine = engine(Variant::Pro, "spark_strict");
    let pains = [PainPoint::new("Hoses kink")];
    let err = engine.generate_concept("gardening tools", &pains).unwrap_err();
    assert!(matches!(
        err,
        SparkError::Generation(GenerationError::MissingCredentials)
    ));

    let engine = engine.with_generator(|_: &str| -> GenResult {
        Err(GenerationError::MalformedReply("empty reply".to_string()))
    });
    let err = engine.generate_concept("gardening tools", &pains).unwrap_err();
    assert!(matches!(
        err,
        SparkError::Generation(GenerationError::MalformedReply(_))
    ));
}
