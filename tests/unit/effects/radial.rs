use super::*;

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

fn canvas() -> Canvas {
    Canvas::new(21, 21).unwrap()
}

fn sun(color: Rgba8) -> RadialCenter {
    RadialCenter {
        position: Point::new(10.0, 10.0),
        color,
        max_radius: 5.0,
    }
}

#[test]
fn center_pixel_takes_exact_color() {
    let grid = compose(canvas(), &[sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    assert_eq!(grid.get(10, 10), [255, 0, 0]);
}

#[test]
fn neighbours_get_half_blend() {
    let grid = compose(canvas(), &[sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    assert_eq!(grid.get(11, 10), [127, 0, 0]);
    assert_eq!(grid.get(11, 11), [127, 0, 0]);
}

#[test]
fn gradient_fades_with_distance() {
    let grid = compose(canvas(), &[sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    let at3 = grid.get(13, 10)[0];
    let at4 = grid.get(14, 10)[0];
    assert!((50..=51).contains(&at3), "{at3}");
    assert!(at4 < at3);
    assert!(at4 > 0);
}

#[test]
fn pixels_beyond_radius_keep_background() {
    let grid = compose(canvas(), &[sun(RED)], 1.0, Rgba8::WHITE).unwrap();
    assert_eq!(grid.get(16, 10), [255, 255, 255]);
    assert_eq!(grid.get(0, 0), [255, 255, 255]);
}

#[test]
fn zero_growth_is_plain_background() {
    let grid = compose(canvas(), &[sun(RED)], 0.0, Rgba8::WHITE).unwrap();
    assert!(grid.data.iter().all(|&b| b == 255));
}

#[test]
fn partial_growth_limits_reach() {
    let grid = compose(canvas(), &[sun(RED)], 0.5, Rgba8::BLACK).unwrap();
    // current radius 2.5; gradient still uses max_radius
    assert_eq!(grid.get(10, 10), [255, 0, 0]);
    assert_ne!(grid.get(12, 10), [0, 0, 0]);
    assert_eq!(grid.get(13, 10), [0, 0, 0]);
}

#[test]
fn overlapping_centers_depend_on_order() {
    let ab = compose(canvas(), &[sun(RED), sun(BLUE)], 1.0, Rgba8::BLACK).unwrap();
    let ba = compose(canvas(), &[sun(BLUE), sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    assert_eq!(ab.get(10, 10), [0, 0, 255]);
    assert_eq!(ba.get(10, 10), [255, 0, 0]);
    assert_ne!(ab.get(11, 10), ba.get(11, 10));
}

#[test]
fn rejects_bad_growth_and_radius() {
    assert!(compose(canvas(), &[sun(RED)], 1.5, Rgba8::BLACK).is_err());
    assert!(compose(canvas(), &[sun(RED)], -0.1, Rgba8::BLACK).is_err());
    let mut bad = sun(RED);
    bad.max_radius = -1.0;
    assert!(compose(canvas(), &[bad], 1.0, Rgba8::BLACK).is_err());
}

#[test]
fn to_frame_is_opaque_rgba() {
    let grid = compose(canvas(), &[sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    let frame = grid.to_frame();
    assert_eq!(frame.data.len(), 21 * 21 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    let i = (10 * 21 + 10) * 4;
    assert_eq!(&frame.data[i..i + 4], &[255, 0, 0, 255]);
}

#[test]
fn growth_frames_end_fully_grown() {
    let frames = growth_frames(canvas(), &[sun(RED)], 5, Ease::Linear, Rgba8::BLACK).unwrap();
    assert_eq!(frames.len(), 5);
    assert!(frames[0].data.iter().all(|&b| b == 0));
    let full = compose(canvas(), &[sun(RED)], 1.0, Rgba8::BLACK).unwrap();
    assert_eq!(frames[4], full);
    assert!(growth_frames(canvas(), &[sun(RED)], 0, Ease::Linear, Rgba8::BLACK).is_err());
}

#[test]
fn scatter_is_deterministic_and_in_bounds() {
    let c = Canvas::new(200, 100).unwrap();
    let a = scatter_centers(c, 12, 5.0, 20.0, RED, 9).unwrap();
    let b = scatter_centers(c, 12, 5.0, 20.0, RED, 9).unwrap();
    assert_eq!(a, b);
    for s in &a {
        assert!((20.0..=180.0).contains(&s.position.x));
        assert!((20.0..=80.0).contains(&s.position.y));
        assert!((5.0..=20.0).contains(&s.max_radius));
    }
}

#[test]
fn scatter_on_tiny_canvas_uses_whole_area() {
    let c = Canvas::new(10, 10).unwrap();
    let centers = scatter_centers(c, 8, 1.0, 30.0, RED, 1).unwrap();
    assert!(centers.iter().all(|s| c.rect().contains(s.position)));
}

#[test]
fn scatter_with_large_radius_crowds_the_middle() {
    let c = Canvas::new(800, 800).unwrap();
    let centers = scatter_centers(c, 20, 100.0, 550.0, RED, 42).unwrap();
    for s in &centers {
        assert!((250.0..=550.0).contains(&s.position.x));
        assert!((250.0..=550.0).contains(&s.position.y));
    }
    assert!(scatter_centers(c, 1, 10.0, 5.0, RED, 0).is_err());
}

#[test]
fn growth_schedule_is_eased() {
    let g = growth_schedule(3, Ease::Smoothstep);
    assert_eq!(g, vec![0.0, 0.5, 1.0]);
    assert_eq!(growth_schedule(1, Ease::Smoothstep), vec![1.0]);
}
