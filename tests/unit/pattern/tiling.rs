use super::*;

const PINK: Rgba8 = Rgba8::opaque(255, 192, 203);

fn pattern(depth: u32, shrink: f64) -> CirclePattern {
    generate(Point::ORIGIN, 2.0, PINK, 0.2, depth, shrink).unwrap()
}

#[test]
fn node_count_is_geometric_sum() {
    for depth in 0..=4u32 {
        let p = pattern(depth, 0.7);
        let expected: usize = (0..=depth).map(|d| 4usize.pow(d)).sum();
        assert_eq!(p.node_count(), expected);
        assert_eq!(p.max_depth_reached(), depth);
    }
}

#[test]
fn first_generation_children_touch_the_inscribed_square() {
    let p = pattern(2, 0.7);
    let half_side = 2.0 * std::f64::consts::SQRT_2 / 2.0;
    let child_r = 2.0 * 0.7;
    let off = half_side + child_r;

    let kids = &p.root.children;
    assert_eq!(kids.len(), 4);
    assert_eq!(kids[0].center, Point::new(-off, 0.0));
    assert_eq!(kids[1].center, Point::new(off, 0.0));
    assert_eq!(kids[2].center, Point::new(0.0, -off));
    assert_eq!(kids[3].center, Point::new(0.0, off));
    assert!((kids[0].center.x + 2.814_213_562_373_095).abs() < 1e-12);
    for k in kids {
        assert_eq!(k.radius, child_r);
        assert_eq!(k.depth, 1);
    }
}

#[test]
fn pre_order_puts_parent_first() {
    let p = pattern(2, 0.7);
    let order: Vec<u32> = p.nodes().map(|n| n.depth).collect();
    assert_eq!(order[0], 0);
    assert_eq!(&order[1..7], &[1, 2, 2, 2, 2, 1]);
}

#[test]
fn growing_fraction_is_not_special_cased() {
    let p = pattern(2, 1.2);
    let deepest = p.nodes().find(|n| n.depth == 2).unwrap();
    assert!((deepest.radius - 2.0 * 1.2 * 1.2).abs() < 1e-12);
}

#[test]
fn invalid_parameters_fail_fast() {
    assert!(generate(Point::ORIGIN, -1.0, PINK, 0.2, 2, 0.7).is_err());
    assert!(generate(Point::ORIGIN, 1.0, PINK, 1.5, 2, 0.7).is_err());
    assert!(generate(Point::ORIGIN, 1.0, PINK, 0.2, MAX_TILING_DEPTH + 1, 0.7).is_err());
    assert!(generate(Point::ORIGIN, 1.0, PINK, 0.2, 2, f64::INFINITY).is_err());
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(pattern(3, 0.85), pattern(3, 0.85));
}
