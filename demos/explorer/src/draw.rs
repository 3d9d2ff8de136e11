//! Painter's-algorithm rendering of the surface scene
use crate::camera::Camera;
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke};
use nalgebra::{Point3, Vector3};
use upslope::Scene;

/// World-unit length of the ascent arrow per unit of gradient magnitude
const ARROW_SCALE: f64 = 0.5;

/// Gradients shorter than this draw no arrow at all
const ARROW_EPSILON: f64 = 1e-9;

/// Marker radius in screen points
const MARKER_RADIUS: f32 = 6.0;

/// Anchor colors for the Viridis color scale
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Draws the full scene into `rect`
///
/// The height field is normalized into a viewing cube, rotated by the camera,
/// then painted back to front one grid cell at a time.  The marker and the
/// ascent arrow are painted last so they always sit on top of the surface.
pub fn paint(
    painter: &egui::Painter,
    rect: Rect,
    scene: &Scene,
    camera: &Camera,
) {
    let field = &scene.field;
    let n = field.resolution();
    let domain = field.domain();

    let cx = domain.center().x;
    let cy = domain.center().y;
    let half_x = (domain.width() / 2.0).max(1e-12);
    let half_y = (domain.height() / 2.0).max(1e-12);
    let (z_lo, z_hi) = field.z_bounds();
    let z_mid = (z_lo + z_hi) / 2.0;
    let z_half = ((z_hi - z_lo) / 2.0).max(1e-12);

    let rot = camera.rotation();
    let px = 0.35 * rect.width().min(rect.height()) * camera.scale();
    let center = rect.center();

    let project = |p: Point3<f64>| -> (Pos2, f32) {
        let q = Vector3::new(
            ((p.x - cx) / half_x) as f32,
            ((p.y - cy) / half_y) as f32,
            ((p.z - z_mid) / z_half) as f32,
        );
        let q = rot * q;
        (Pos2::new(center.x + px * q.x, center.y - px * q.y), q.z)
    };

    // Project every grid vertex once
    let mut verts = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            verts.push(project(field.vertex(i, j)));
        }
    }
    let at = |i: usize, j: usize| verts[i * n + j];

    // Sort cells far to near so that closer cells paint over farther ones
    let mut quads = Vec::with_capacity((n - 1) * (n - 1));
    for i in 0..(n - 1) {
        for j in 0..(n - 1) {
            let corners =
                [at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)];
            let depth = corners.iter().map(|c| c.1).sum::<f32>() / 4.0;
            quads.push((depth, i, j, corners));
        }
    }
    quads.sort_by(|a, b| a.0.total_cmp(&b.0));

    let light = Vector3::new(0.4_f32, -0.3, 0.8).normalize();
    for (_, i, j, corners) in quads {
        let z = (field.zs()[(i, j)]
            + field.zs()[(i + 1, j)]
            + field.zs()[(i + 1, j + 1)]
            + field.zs()[(i, j + 1)])
            / 4.0;
        let t = ((z - z_lo) / (z_hi - z_lo).max(1e-12)) as f32;
        let base = viridis(t);

        // Lambert shading from the analytic surface normal at the cell center
        let x_mid = (field.xs()[(i, j)] + field.xs()[(i + 1, j)]) / 2.0;
        let y_mid = (field.ys()[(i, j)] + field.ys()[(i, j + 1)]) / 2.0;
        let g = scene.surface.grad(x_mid, y_mid);
        let normal = Vector3::new(-g.x as f32, -g.y as f32, 1.0).normalize();
        let accum =
            (0.55 + light.dot(&normal).max(0.0) * 0.45).clamp(0.0, 1.0);

        let fill = Color32::from_rgb(
            (base[0] as f32 * accum) as u8,
            (base[1] as f32 * accum) as u8,
            (base[2] as f32 * accum) as u8,
        );
        let points = corners.iter().map(|c| c.0).collect::<Vec<_>>();
        painter.add(egui::Shape::convex_polygon(points, fill, Stroke::NONE));
    }

    let p = &scene.point;
    let (marker, _) = project(p.position());

    // The arrow stays in the horizontal plane through the point; its tip
    // keeps the same height as its base
    if p.magnitude() > ARROW_EPSILON {
        let dir = p.ascent_direction() * ARROW_SCALE;
        let tip = Point3::new(p.x + dir.x, p.y + dir.y, p.z + dir.z);
        let (tip, _) = project(tip);
        painter.arrow(marker, tip - marker, Stroke::new(3.0, Color32::RED));
    }
    painter.circle_filled(marker, MARKER_RADIUS, Color32::RED);
}

/// Looks up `t` in `[0, 1]` on the Viridis color scale
fn viridis(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f32;
    let i = (t as usize).min(VIRIDIS.len() - 2);
    let f = t - i as f32;
    let a = VIRIDIS[i];
    let b = VIRIDIS[i + 1];
    std::array::from_fn(|k| {
        (a[k] as f32 + (b[k] as f32 - a[k] as f32) * f).round() as u8
    })
}
