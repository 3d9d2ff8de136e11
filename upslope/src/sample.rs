//! Point evaluation and grid sampling
//!
//! This module turns a [`Surface`] plus a query point and a sampling region
//! into plain data: a fully evaluated [`PointSample`] and a [`HeightField`]
//! covering the region.  Nothing here knows about rendering; the output is
//! suitable for any display layer (and for unit tests, which need no display
//! at all).
use crate::{Error, Surface};
use nalgebra::{DMatrix, Point3, Vector2, Vector3};

/// Rectangular sampling region in the `xy`-plane
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    /// Lower bound along `x`
    pub x_min: f64,
    /// Upper bound along `x`
    pub x_max: f64,
    /// Lower bound along `y`
    pub y_min: f64,
    /// Upper bound along `y`
    pub y_max: f64,
}

impl Domain {
    /// Builds a domain from explicit bounds
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Domain {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Builds the square domain `[-half, half]²` centered at the origin
    pub fn square(half: f64) -> Self {
        Self::new(-half, half, -half, half)
    }

    /// Center of the domain
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Extent along `x`
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along `y`
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns `true` if every bound is finite
    pub fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for Domain {
    /// By default, the domain is the `[-2.5, 2.5]` square
    fn default() -> Self {
        Self::square(2.5)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A point on a surface with its full evaluation attached
///
/// Everything in here is derived from `(surface, x, y)`; samples are meant to
/// be recomputed on every input change and never cached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointSample {
    /// Query position along `x`
    pub x: f64,
    /// Query position along `y`
    pub y: f64,
    /// Surface height at the query position
    pub z: f64,
    /// Analytic gradient at the query position
    pub grad: Vector2<f64>,
}

impl PointSample {
    /// Evaluates `surface` at `(x, y)`
    ///
    /// Fails with [`Error::NonFinitePoint`] if either coordinate is NaN or
    /// infinite, so NaN can never leak into scene data where a renderer has
    /// no way to interpret it.
    pub fn new(surface: Surface, x: f64, y: f64) -> Result<Self, Error> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::NonFinitePoint(x, y));
        }
        Ok(PointSample {
            x,
            y,
            z: surface.value(x, y),
            grad: surface.grad(x, y),
        })
    }

    /// Steepness of the surface at this point, `‖∇f‖₂`
    pub fn magnitude(&self) -> f64 {
        self.grad.norm()
    }

    /// Direction of steepest ascent, projected onto the horizontal plane
    ///
    /// The vertical component is always zero: the indicator shows the
    /// `xy`-plane gradient, not the 3D tangent to the surface.  Gradients of
    /// a two-variable function live in the input plane, and that is what the
    /// arrow illustrates.
    pub fn ascent_direction(&self) -> Vector3<f64> {
        Vector3::new(self.grad.x, self.grad.y, 0.0)
    }

    /// Position of this sample in 3D space
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A surface sampled over a rectangular domain
///
/// The three matrices share the same `resolution × resolution` shape.  Row
/// index varies `x` and column index varies `y`, so
/// `zs[(i, j)] == surface.value(xs[(i, j)], ys[(i, j)])` for every cell.
#[derive(Clone, Debug)]
pub struct HeightField {
    domain: Domain,
    xs: DMatrix<f64>,
    ys: DMatrix<f64>,
    zs: DMatrix<f64>,
}

impl HeightField {
    /// Samples `surface` on an evenly spaced grid over `domain`
    ///
    /// Both endpoints of each axis are included: samples step by
    /// `(max − min) / (resolution − 1)` and the final sample lands exactly
    /// on the upper bound.  Fails with [`Error::BadResolution`] when
    /// `resolution < 2` and with [`Error::NonFiniteDomain`] when a bound is
    /// NaN or infinite.
    pub fn sample(
        surface: Surface,
        domain: Domain,
        resolution: usize,
    ) -> Result<Self, Error> {
        if resolution < 2 {
            return Err(Error::BadResolution(resolution));
        }
        if !domain.is_finite() {
            return Err(Error::NonFiniteDomain(domain));
        }
        let xs_axis = linspace(domain.x_min, domain.x_max, resolution);
        let ys_axis = linspace(domain.y_min, domain.y_max, resolution);
        let xs = DMatrix::from_fn(resolution, resolution, |i, _| xs_axis[i]);
        let ys = DMatrix::from_fn(resolution, resolution, |_, j| ys_axis[j]);
        let zs = DMatrix::from_fn(resolution, resolution, |i, j| {
            surface.value(xs_axis[i], ys_axis[j])
        });
        Ok(HeightField {
            domain,
            xs,
            ys,
            zs,
        })
    }

    /// Number of samples along each axis
    pub fn resolution(&self) -> usize {
        self.zs.nrows()
    }

    /// Domain this field was sampled over
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Matrix of `x` coordinates
    pub fn xs(&self) -> &DMatrix<f64> {
        &self.xs
    }

    /// Matrix of `y` coordinates
    pub fn ys(&self) -> &DMatrix<f64> {
        &self.ys
    }

    /// Matrix of sampled heights
    pub fn zs(&self) -> &DMatrix<f64> {
        &self.zs
    }

    /// Grid vertex `(x, y, z)` at the given row and column
    pub fn vertex(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(self.xs[(i, j)], self.ys[(i, j)], self.zs[(i, j)])
    }

    /// Smallest and largest sampled height
    pub fn z_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &z in self.zs.iter() {
            lo = lo.min(z);
            hi = hi.max(z);
        }
        (lo, hi)
    }
}

/// `n` evenly spaced samples spanning `[lo, hi]`, endpoints included
///
/// The last sample is pinned to `hi` so that accumulated rounding cannot
/// shift the far edge of the grid.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn bowl_point_sample() {
        let p = PointSample::new(Surface::Bowl, 1.0, 1.0).unwrap();
        assert_eq!(p.z, 2.0);
        assert_eq!(p.grad, Vector2::new(2.0, 2.0));
        assert_abs_diff_eq!(p.magnitude(), 2.828, epsilon = 1e-3);
    }

    #[test]
    fn mountains_point_sample() {
        let p = PointSample::new(Surface::Mountains, 0.0, 0.0).unwrap();
        assert_eq!(p.z, 0.0);
        assert_eq!(p.grad, Vector2::new(1.0, 0.0));
        assert_eq!(p.magnitude(), 1.0);
    }

    #[test]
    fn point_evaluation_is_idempotent() {
        for s in Surface::iter() {
            let a = PointSample::new(s, 0.7, -1.3).unwrap();
            let b = PointSample::new(s, 0.7, -1.3).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn non_finite_points_are_rejected() {
        for (x, y) in [
            (f64::NAN, 0.5),
            (0.5, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                PointSample::new(Surface::Bowl, x, y),
                Err(Error::NonFinitePoint(..))
            ));
        }
    }

    #[test]
    fn ascent_direction_is_flat() {
        let p = PointSample::new(Surface::Mountains, 0.8, -0.4).unwrap();
        let v = p.ascent_direction();
        assert_eq!(v.z, 0.0);
        assert_eq!(Vector2::new(v.x, v.y), p.grad);
    }

    #[test]
    fn grid_shape_matches_resolution() {
        let f =
            HeightField::sample(Surface::Bowl, Domain::default(), 7).unwrap();
        for m in [f.xs(), f.ys(), f.zs()] {
            assert_eq!(m.nrows(), 7);
            assert_eq!(m.ncols(), 7);
        }
        assert_eq!(f.resolution(), 7);
    }

    #[test]
    fn grid_heights_match_the_surface() {
        for s in Surface::iter() {
            let f = HeightField::sample(s, Domain::default(), 9).unwrap();
            for i in 0..9 {
                for j in 0..9 {
                    assert_eq!(
                        f.zs()[(i, j)],
                        s.value(f.xs()[(i, j)], f.ys()[(i, j)])
                    );
                }
            }
        }
    }

    #[test]
    fn resolution_two_is_the_four_corners() {
        let f =
            HeightField::sample(Surface::Bowl, Domain::default(), 2).unwrap();
        assert_eq!((f.xs()[(0, 0)], f.ys()[(0, 0)]), (-2.5, -2.5));
        assert_eq!((f.xs()[(1, 0)], f.ys()[(1, 0)]), (2.5, -2.5));
        assert_eq!((f.xs()[(0, 1)], f.ys()[(0, 1)]), (-2.5, 2.5));
        assert_eq!((f.xs()[(1, 1)], f.ys()[(1, 1)]), (2.5, 2.5));
    }

    #[test]
    fn last_sample_lands_on_the_bound() {
        // Stepping by (0.9 - 0.3) / 6 from 0.3 accumulates rounding error
        // and overshoots 0.9; only the pinned final sample is exact
        let d = Domain::new(0.3, 0.9, 0.3, 0.9);
        let f = HeightField::sample(Surface::Bowl, d, 7).unwrap();
        assert_eq!(f.xs()[(6, 0)], 0.9);
        assert_eq!(f.ys()[(0, 6)], 0.9);

        let step = (0.9 - 0.3) / 6.0;
        assert_ne!(0.3 + step * 6.0, 0.9);
    }

    #[test]
    fn tiny_resolutions_are_rejected() {
        for r in [0, 1] {
            assert!(matches!(
                HeightField::sample(Surface::Bowl, Domain::default(), r),
                Err(Error::BadResolution(_))
            ));
        }
    }

    #[test]
    fn non_finite_domains_are_rejected() {
        let d = Domain::new(f64::NAN, 2.5, -2.5, 2.5);
        assert!(matches!(
            HeightField::sample(Surface::Bowl, d, 10),
            Err(Error::NonFiniteDomain(_))
        ));
    }

    #[test]
    fn z_bounds_cover_the_samples() {
        let f = HeightField::sample(Surface::Mountains, Domain::default(), 50)
            .unwrap();
        let (lo, hi) = f.z_bounds();
        assert!(lo <= hi);
        assert!(f.zs().iter().all(|&z| (lo..=hi).contains(&z)));
        // sin·cos stays within ±1
        assert!(lo >= -1.0 && hi <= 1.0);
    }
}
