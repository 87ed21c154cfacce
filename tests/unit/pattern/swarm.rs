use super::*;

fn line_targets(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(0.1 + 0.8 * i as f64 / (n - 1) as f64, 0.5))
        .collect()
}

#[test]
fn one_entity_per_target_per_frame() {
    let swarm = animate(&line_targets(50), 12, 42).unwrap();
    assert_eq!(swarm.particles.len(), 50);
    assert_eq!(swarm.frames.len(), 12);
    for (i, f) in swarm.frames.iter().enumerate() {
        assert_eq!(f.index, FrameIndex(i as u64));
        assert_eq!(f.entities.len(), 50);
    }
}

#[test]
fn first_frame_starts_at_random_starts() {
    let swarm = animate(&line_targets(30), 10, 3).unwrap();
    for (e, p) in swarm.frames[0].entities.iter().zip(&swarm.particles) {
        // Noise at t=0 has scale `jitter`; starts sit in the unit square.
        assert!(e.position.distance(p.start) < 0.008 * 8.0);
    }
}

#[test]
fn last_frame_is_clean() {
    let swarm = animate(&line_targets(30), 10, 3).unwrap();
    let last = swarm.frames.last().unwrap();
    for (e, p) in last.entities.iter().zip(&swarm.particles) {
        let expected = Point::new(p.target.x.clamp(0.0, 1.0), p.target.y.clamp(0.0, 1.0));
        assert!(e.position.distance(expected) < 1e-12);
    }
}

#[test]
fn positions_stay_in_unit_square() {
    let targets = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.5, 1.0)];
    let swarm = animate(&targets, 20, 9).unwrap();
    for f in &swarm.frames {
        for e in &f.entities {
            assert!((0.0..=1.0).contains(&e.position.x));
            assert!((0.0..=1.0).contains(&e.position.y));
        }
    }
}

#[test]
fn same_seed_is_reproducible_and_seeds_differ() {
    let targets = line_targets(40);
    let a = animate(&targets, 8, 42).unwrap();
    let b = animate(&targets, 8, 42).unwrap();
    assert_eq!(a, b);
    let c = animate(&targets, 8, 43).unwrap();
    assert_ne!(a.particles, c.particles);
}

#[test]
fn center_particles_are_bigger_than_edge_particles_on_average() {
    let n = 400;
    let mut targets = vec![Point::new(0.5, 0.5); n];
    targets.extend(vec![Point::new(0.02, 0.5); n]);
    let swarm = animate(&targets, 1, 11).unwrap();

    let mean = |ps: &[Particle]| ps.iter().map(|p| p.size).sum::<f64>() / ps.len() as f64;
    let center = mean(&swarm.particles[..n]);
    let edge = mean(&swarm.particles[n..]);
    assert!(center > edge);

    let brightness = |ps: &[Particle]| {
        ps.iter()
            .map(|p| u32::from(p.color.r) + u32::from(p.color.g) + u32::from(p.color.b))
            .sum::<u32>()
    };
    assert!(brightness(&swarm.particles[..n]) > brightness(&swarm.particles[n..]));
}

#[test]
fn styles_are_fixed_across_frames() {
    let swarm = animate(&line_targets(20), 6, 5).unwrap();
    for f in &swarm.frames {
        for (e, p) in f.entities.iter().zip(&swarm.particles) {
            assert_eq!(e.color, p.color);
            assert_eq!(e.size, p.size);
        }
    }
}

#[test]
fn zero_frames_is_invalid() {
    assert!(animate(&line_targets(5), 0, 1).is_err());
}
