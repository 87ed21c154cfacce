use super::*;

#[test]
fn zero_length_segment_repeats_one_point() {
    let seg = [Segment::new(3.0, 4.0, 3.0, 4.0)];
    let pts = sample(&seg, 10, 0.0, 1);
    assert_eq!(pts.len(), 10);
    assert!(pts.iter().all(|&p| p == Point::new(3.0, 4.0)));

    // Thickness cannot apply without a normal; still the repeated point.
    let pts = sample(&seg, 10, 0.5, 3);
    assert_eq!(pts.len(), 10);
    assert!(pts.iter().all(|&p| p == Point::new(3.0, 4.0)));
}

#[test]
fn centerline_includes_both_endpoints() {
    let seg = [Segment::new(0.0, 0.0, 4.0, 0.0)];
    let pts = sample(&seg, 5, 0.0, 3);
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(4.0, 0.0),
        ]
    );
}

#[test]
fn rails_spread_symmetrically_along_the_normal() {
    let seg = [Segment::new(0.0, 0.0, 4.0, 0.0)];
    let pts = sample(&seg, 5, 0.18, 3);
    assert_eq!(pts.len(), 15);

    // Horizontal stroke: normal is +y, rails at -0.18, 0, +0.18.
    let ys: Vec<f64> = pts.chunks(5).map(|rail| rail[0].y).collect();
    assert_eq!(ys, vec![-0.18, 0.0, 0.18]);
    for rail in pts.chunks(5) {
        assert!(rail.iter().all(|p| p.y == rail[0].y));
    }
}

#[test]
fn single_rail_ignores_thickness() {
    let seg = [Segment::new(0.0, 0.0, 0.0, 2.0)];
    assert_eq!(sample(&seg, 3, 0.4, 1).len(), 3);
}

#[test]
fn unit_normal_is_perpendicular() {
    let seg = Segment::new(1.0, 1.0, 4.0, 5.0);
    let n = seg.unit_normal().unwrap();
    let d = seg.end - seg.start;
    assert!((n.hypot() - 1.0).abs() < 1e-12);
    assert!(n.dot(d).abs() < 1e-12);
    assert_eq!(seg.length(), 5.0);
}

#[test]
fn word_skeleton_samples_fit_inside_padding() {
    let pts = sample(&word_skeleton(), 60, 0.18, 3);
    assert_eq!(pts.len(), word_skeleton().len() * 60 * 3);

    let fit = UnitFit::default();
    let unit = fit_to_unit(&pts, fit);
    assert_eq!(unit.len(), pts.len());
    for p in &unit {
        assert!(p.x >= fit.pad_x - 1e-12 && p.x <= 1.0 - fit.pad_x + 1e-12);
        assert!(p.y >= fit.pad_y - 1e-12 && p.y <= 1.0 - fit.pad_y + 1e-12);
    }
    let min_x = unit.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    assert!((min_x - fit.pad_x).abs() < 1e-12);
}

#[test]
fn flat_axis_maps_to_center() {
    let pts = [Point::new(0.0, 2.0), Point::new(10.0, 2.0)];
    let unit = fit_to_unit(&pts, UnitFit::default());
    assert!(unit.iter().all(|p| (p.y - 0.5).abs() < 1e-12));
    assert!(fit_to_unit(&[], UnitFit::default()).is_empty());
}
