use super::*;

#[test]
fn canvas_rejects_zero_and_oversize() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(1080, 1350).unwrap();
    assert_eq!((c.w(), c.h()), (1080.0, 1350.0));
}

#[test]
fn hex_unpacks_channels() {
    assert_eq!(Rgba8::hex(0xe94560), Rgba8::rgb(0xe9, 0x45, 0x60));
    assert_eq!(Rgba8::hex(0x000000).a, 255);
}

#[test]
fn lerp_hits_endpoints_and_truncates() {
    let top = Rgba8::rgb(15, 15, 35);
    let bottom = Rgba8::rgb(26, 26, 62);
    assert_eq!(top.lerp(bottom, 0.0), top);
    assert_eq!(top.lerp(bottom, 1.0), bottom);
    // 15 + 11 * 0.5 = 20.5 -> 20
    assert_eq!(top.lerp(bottom, 0.5).r, 20);
}
