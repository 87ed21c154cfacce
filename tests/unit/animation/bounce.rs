use super::*;
use crate::foundation::core::Vec2;

#[test]
fn air_steps_exclude_endpoints() {
    let poses = bounce(0.0, 6.0, 9.0, 14, false).unwrap();
    assert_eq!(poses.len(), 14);
    for p in &poses {
        assert!(p.position.x > 0.0 && p.position.x < 6.0);
        assert!(p.position.y > 0.0 && p.position.y <= 9.0);
    }
}

#[test]
fn apex_is_round_and_low_frames_stretch() {
    // Odd air_steps puts one sample exactly at t = 0.5.
    let poses = bounce(0.0, 6.0, 9.0, 3, false).unwrap();
    let apex = &poses[1];
    assert_eq!(apex.position.x, 3.0);
    assert_eq!(apex.position.y, 9.0);
    assert_eq!(apex.scale(), Vec2::new(1.0, 1.0));

    let low = &poses[0];
    assert!(low.scale().y > 1.0);
    assert!(low.scale().x < 1.0);
    assert!((low.scale().x * low.scale().y - 1.0).abs() < 1e-12);
}

#[test]
fn zero_peak_never_divides_by_zero() {
    let poses = bounce(0.0, 1.0, 0.0, 5, false).unwrap();
    for p in &poses {
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.scale().y, 1.0 + STRETCH_STRENGTH);
        assert!(p.scale().x.is_finite());
    }
}

#[test]
fn negative_peak_is_rejected() {
    assert!(bounce(0.0, 1.0, -1.0, 5, true).is_err());
    assert!(bounce(0.0, 1.0, f64::NAN, 5, true).is_err());
}

#[test]
fn squash_goes_deeper_then_recovers() {
    let poses = bounce(0.0, 6.0, 9.0, 4, true).unwrap();
    let impact = &poses[4..];
    assert_eq!(impact.len(), 3);
    for p in impact {
        assert_eq!(p.position.x, 6.0);
        assert_eq!(p.position.y, 0.0);
    }
    let sy: Vec<f64> = impact.iter().map(|p| p.scale().y).collect();
    assert!(sy[1] < sy[0]);
    assert!(sy[2] > sy[1]);
    assert!(sy[2] < 1.0);
}

#[test]
fn chain_concatenates_in_order() {
    let chain = default_chain();
    let poses = bounce_chain(&chain, 14, true).unwrap();
    assert_eq!(poses.len(), 3 * (14 + 3));

    let xs: Vec<f64> = poses.iter().map(|p| p.position.x).collect();
    assert!(xs.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(poses.last().unwrap().position.x, 18.0);

    let again = bounce_chain(&chain, 14, true).unwrap();
    assert_eq!(poses, again);
}
