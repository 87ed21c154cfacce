use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = LoomRng::new(42);
    let mut b = LoomRng::new(42);
    for _ in 0..16 {
        assert_eq!(a.unit(), b.unit());
        assert_eq!(a.normal(0.5), b.normal(0.5));
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = LoomRng::new(1);
    let mut b = LoomRng::new(2);
    let xs: Vec<f64> = (0..8).map(|_| a.unit()).collect();
    let ys: Vec<f64> = (0..8).map(|_| b.unit()).collect();
    assert_ne!(xs, ys);
}

#[test]
fn uniform_respects_bounds() {
    let mut r = LoomRng::new(7);
    for _ in 0..1000 {
        let v = r.uniform(5.0, 35.0);
        assert!((5.0..35.0).contains(&v));
    }
    assert_eq!(r.uniform(3.0, 3.0), 3.0);
}

#[test]
fn zero_scale_normal_is_exactly_zero() {
    let mut r = LoomRng::new(7);
    assert_eq!(r.normal(0.0), 0.0);
    assert_eq!(r.normal(-1.0), 0.0);
}
