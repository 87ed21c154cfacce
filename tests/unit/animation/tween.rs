use super::*;
use crate::animation::pose::{SCALE_X, SCALE_Y};
use crate::foundation::core::Point;

fn pair() -> [Pose; 2] {
    [
        Pose::scaled(0.0, 0.0, 1.0, 1.0),
        Pose::scaled(10.0, -4.0, 1.4, 0.6),
    ]
}

#[test]
fn output_length_matches_formula() {
    let keys = pair();
    assert_eq!(tween(&keys, 4).unwrap().len(), 6);

    let keys = classic_key_poses();
    let out = tween(&keys, 4).unwrap();
    assert_eq!(out.len(), 1 + (keys.len() - 1) * 5);
}

#[test]
fn key_poses_are_emitted_verbatim() {
    let keys = pair();
    let out = tween(&keys, 4).unwrap();
    assert_eq!(out[0], keys[0]);
    assert_eq!(out[5], keys[1]);
}

#[test]
fn odd_step_count_hits_exact_midpoint() {
    let keys = pair();
    let out = tween(&keys, 3).unwrap();
    // p0, t=0.25, t=0.5, t=0.75, p1
    assert_eq!(out[2].position, Point::new(5.0, -2.0));
    assert!((out[2].param(SCALE_X).unwrap() - 1.2).abs() < 1e-12);
    assert!((out[2].param(SCALE_Y).unwrap() - 0.8).abs() < 1e-12);
}

#[test]
fn in_betweens_are_eased_not_linear() {
    let keys = pair();
    let out = tween(&keys, 4).unwrap();
    // t = 0.2 -> smoothstep = 0.104
    assert!((out[1].position.x - 1.04).abs() < 1e-12);
    assert!(out[1].position.x < 2.0);
}

#[test]
fn empty_and_single_inputs() {
    assert!(tween(&[], 4).unwrap().is_empty());
    let one = [Pose::at(1.0, 2.0)];
    assert_eq!(tween(&one, 4).unwrap(), one.to_vec());
}

#[test]
fn zero_steps_returns_keys() {
    let keys = pair();
    assert_eq!(tween(&keys, 0).unwrap(), keys.to_vec());
}

#[test]
fn mismatched_shape_params_fail_fast() {
    let keys = [Pose::scaled(0.0, 0.0, 1.0, 1.0), Pose::at(1.0, 1.0).with(SCALE_X, 2.0)];
    let err = tween(&keys, 2).unwrap_err();
    assert!(err.to_string().contains("'sy'"));
}

#[test]
fn repeated_runs_are_identical() {
    let keys = classic_key_poses();
    assert_eq!(tween(&keys, 4).unwrap(), tween(&keys, 4).unwrap());
}
