use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("onespark-unit")
        .join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_fonts_without_system_fallback_yield_empty_set() {
    let cfg = FontConfig {
        dirs: vec![PathBuf::from("/definitely/not/a/font/dir")],
        system_fallback: false,
        ..FontConfig::default()
    };
    let set = FontSet::probe(&cfg);
    assert_eq!(set.source(), FontSource::None);
    assert!(set.is_empty());
    assert!(set.face(FontRole::Bold).is_none());
}

#[test]
fn named_faces_are_found_across_dirs() {
    let a = scratch_dir("fonts_a");
    let b = scratch_dir("fonts_b");
    std::fs::write(a.join("Bold.ttf"), b"bold-bytes").unwrap();
    std::fs::write(b.join("Regular.ttf"), b"regular-bytes").unwrap();

    let cfg = FontConfig {
        dirs: vec![a, b],
        bold_file: "Bold.ttf".to_string(),
        regular_file: "Regular.ttf".to_string(),
        system_fallback: false,
    };
    let set = FontSet::probe(&cfg);
    assert_eq!(set.source(), FontSource::Named);
    assert_eq!(set.face(FontRole::Bold).unwrap().bytes(), b"bold-bytes");
    assert_eq!(set.face(FontRole::Regular).unwrap().bytes(), b"regular-bytes");
}

#[test]
fn half_found_named_pair_does_not_count() {
    let a = scratch_dir("fonts_half");
    std::fs::write(a.join("OnlyBold.ttf"), b"x").unwrap();
    let cfg = FontConfig {
        dirs: vec![a],
        bold_file: "OnlyBold.ttf".to_string(),
        regular_file: "Missing.ttf".to_string(),
        system_fallback: false,
    };
    assert_eq!(FontSet::probe(&cfg).source(), FontSource::None);
}

#[test]
fn single_face_serves_every_role() {
    let set = FontSet::single(FontFace::from_bytes(vec![1, 2, 3], 0));
    assert_eq!(set.source(), FontSource::SystemDefault);
    assert_eq!(
        set.face(FontRole::Bold).unwrap(),
        set.face(FontRole::Regular).unwrap()
    );
}
