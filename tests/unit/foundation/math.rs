use super::*;

#[test]
fn linspace_includes_both_endpoints() {
    let v: Vec<f64> = linspace(-0.18, 0.18, 3).collect();
    assert_eq!(v, vec![-0.18, 0.0, 0.18]);
    let v: Vec<f64> = linspace(0.0, 1.0, 5).collect();
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn linspace_small_counts() {
    assert_eq!(linspace(2.0, 9.0, 1).collect::<Vec<_>>(), vec![2.0]);
    assert!(linspace(2.0, 9.0, 0).next().is_none());
}

#[test]
fn frame_progress_endpoints() {
    assert_eq!(frame_progress(0, 10), 0.0);
    assert_eq!(frame_progress(9, 10), 1.0);
    assert_eq!(frame_progress(0, 1), 1.0);
}

#[test]
fn lerp_point_midpoint() {
    let p = lerp_point(Point::new(0.0, 2.0), Point::new(4.0, -2.0), 0.5);
    assert_eq!(p, Point::new(2.0, 0.0));
}
