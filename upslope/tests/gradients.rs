//! Integration test cross-checking analytic gradients against finite
//! differences
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::IntoEnumIterator;
use upslope::{Scene, SceneConfig, Surface};

/// Central-difference approximation of the gradient
fn numeric_grad(s: Surface, x: f64, y: f64, h: f64) -> (f64, f64) {
    (
        (s.value(x + h, y) - s.value(x - h, y)) / (2.0 * h),
        (s.value(x, y + h) - s.value(x, y - h)) / (2.0 * h),
    )
}

#[test]
fn analytic_gradients_match_finite_differences() {
    const H: f64 = 1e-4;
    const EPSILON: f64 = 1e-4;

    let mut rng = StdRng::seed_from_u64(0);
    for s in Surface::iter() {
        for _ in 0..100 {
            let x = rng.gen_range(-10.0..=10.0);
            let y = rng.gen_range(-10.0..=10.0);
            let g = s.grad(x, y);
            let (dx, dy) = numeric_grad(s, x, y, H);
            assert!(
                (g.x - dx).abs() < EPSILON,
                "∂/∂x mismatch for {s} at ({x}, {y}): \
                 analytic {}, numeric {dx}",
                g.x
            );
            assert!(
                (g.y - dy).abs() < EPSILON,
                "∂/∂y mismatch for {s} at ({x}, {y}): \
                 analytic {}, numeric {dy}",
                g.y
            );
        }
    }
}

#[test]
fn scenes_rebuild_identically() {
    let config = SceneConfig::default();
    let a = Scene::build("Bowl", 0.5, 0.5, &config).unwrap();
    let b = Scene::build("Bowl", 0.5, 0.5, &config).unwrap();
    assert_eq!(a.point, b.point);
    assert_eq!(a.field.zs(), b.field.zs());
}
