use super::*;

#[test]
fn four_petals_per_generation() {
    let params = FlowerParams::default();
    let petals = generate(Point::ORIGIN, &params).unwrap();
    assert_eq!(petals.len(), params.lengths.len() * 4);
    assert!(petals.iter().filter(|p| p.generation == 0).count() == 4);
}

#[test]
fn first_generation_halves_meet_at_center() {
    let petals = generate(Point::ORIGIN, &FlowerParams::default()).unwrap();
    let first: Vec<&Petal> = petals.iter().filter(|p| p.generation == 0).collect();
    // Each guide line of length 2 is split into halves of length 1 that share the center.
    for p in &first {
        let len = (p.end - p.start).hypot();
        assert!((len - 1.0).abs() < 1e-12);
        let touches_center = p.start.distance(Point::ORIGIN) < 1e-12
            || p.end.distance(Point::ORIGIN) < 1e-12;
        assert!(touches_center);
    }
}

#[test]
fn control_points_mirror_across_the_half_line() {
    let petals = generate(Point::new(3.0, -1.0), &FlowerParams::default()).unwrap();
    for p in petals.iter().take(8) {
        let mid = p.start.midpoint(p.end);
        let a = p.ctrl_a - mid;
        let b = p.ctrl_b - mid;
        assert!((a + b).hypot() < 1e-9);
        let len = (p.end - p.start).hypot();
        assert!((a.hypot() - 0.4 * len).abs() < 1e-9);
    }
}

#[test]
fn arcs_share_endpoints_and_outline_closes() {
    let petals = generate(Point::ORIGIN, &FlowerParams::default()).unwrap();
    let p = petals[5];
    let (a, b) = p.sample_arcs(40);
    assert_eq!(a.len(), 40);
    assert!(a[0].distance(p.start) < 1e-12 && a[39].distance(p.end) < 1e-12);
    assert!(b[0].distance(p.start) < 1e-12 && b[39].distance(p.end) < 1e-12);
    assert_eq!(p.outline().elements().len(), 4);
}

#[test]
fn zero_length_generation_is_skipped() {
    let params = FlowerParams {
        lengths: vec![0.0, 2.0],
        ..FlowerParams::default()
    };
    let petals = generate(Point::ORIGIN, &params).unwrap();
    assert_eq!(petals.len(), 4);
    assert!(petals.iter().all(|p| p.generation == 1));
}

#[test]
fn invalid_layouts_fail_fast() {
    let params = FlowerParams {
        angle_patterns: vec![],
        ..FlowerParams::default()
    };
    assert!(generate(Point::ORIGIN, &params).is_err());

    let params = FlowerParams {
        lengths: vec![2.0, -1.0],
        ..FlowerParams::default()
    };
    assert!(generate(Point::ORIGIN, &params).is_err());
}
