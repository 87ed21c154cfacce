use crate::animation::ease::smoothstep;
use crate::animation::pose::Pose;
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::{lerp, lerp_point};

/// Expand key poses into an eased in-between sequence.
///
/// The first key pose is emitted once; every following key pose is preceded by
/// `steps_between` poses at `t = step / (steps_between + 1)`, eased with smoothstep on every
/// scalar field. Output length is `1 + (n - 1) * (steps_between + 1)`; no keys yields no poses.
///
/// Both poses of a pair must carry the same shape parameter names.
#[tracing::instrument(skip(key_poses), fields(keys = key_poses.len()))]
pub fn tween(key_poses: &[Pose], steps_between: usize) -> LoomResult<Vec<Pose>> {
    let Some(first) = key_poses.first() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(1 + (key_poses.len() - 1) * (steps_between + 1));
    out.push(first.clone());

    for (i, pair) in key_poses.windows(2).enumerate() {
        let (p0, p1) = (&pair[0], &pair[1]);
        check_same_params(p0, p1, i)?;

        for step in 1..=steps_between {
            let t = step as f64 / (steps_between + 1) as f64;
            out.push(interpolate(p0, p1, smoothstep(t)));
        }
        out.push(p1.clone());
    }

    tracing::debug!(poses = out.len(), "tweened key poses");
    Ok(out)
}

fn interpolate(p0: &Pose, p1: &Pose, te: f64) -> Pose {
    let mut pose = Pose {
        position: lerp_point(p0.position, p1.position, te),
        shape: p0.shape.clone(),
    };
    for (key, v) in pose.shape.iter_mut() {
        // Keys were checked to match.
        if let Some(&end) = p1.shape.get(key) {
            *v = lerp(*v, end, te);
        }
    }
    pose
}

fn check_same_params(p0: &Pose, p1: &Pose, pair: usize) -> LoomResult<()> {
    let missing = p0
        .shape
        .keys()
        .find(|k| !p1.shape.contains_key(*k))
        .or_else(|| p1.shape.keys().find(|k| !p0.shape.contains_key(*k)));
    if let Some(key) = missing {
        return Err(LoomError::validation(format!(
            "key poses {pair} and {} disagree on shape parameter '{key}'",
            pair + 1
        )));
    }
    Ok(())
}

/// The hand-placed key poses of the classic three-bounce layout on an 18x9 grid.
///
/// Circles have unit scales, falling/rising frames stretch vertically and ground contacts squash
/// horizontally.
pub fn classic_key_poses() -> Vec<Pose> {
    let circle = |x, y| Pose::scaled(x, y, 1.0, 1.0);
    let big_circle = |x, y| Pose::scaled(x, y, 1.2, 1.2);
    let v_stretch = |x, y| Pose::scaled(x, y, 0.8, 1.2);
    let h_squash = |x, y| Pose::scaled(x, y, 1.4, 0.6);

    vec![
        circle(1.0, 9.0),
        circle(2.0, 8.0),
        circle(3.0, 7.0),
        v_stretch(5.0, 3.0),
        h_squash(6.0, 0.0),
        v_stretch(7.0, 3.0),
        circle(8.0, 5.0),
        circle(9.0, 6.0),
        circle(10.0, 5.0),
        big_circle(11.0, 3.0),
        h_squash(12.0, 0.0),
        v_stretch(12.0, 3.0),
        circle(14.0, 4.0),
        circle(15.0, 5.0),
        circle(16.0, 4.0),
        big_circle(17.0, 2.0),
        h_squash(18.0, 0.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
