//! Registry of built-in surface functions
//!
//! A [`Surface`] is a closed-form scalar field `f(x, y)` paired with its
//! hand-derived analytic gradient.  The set is a closed enumeration: the UI
//! layer iterates it to populate a selector, and [`Surface::resolve`] maps a
//! selector string back to a variant with a strict lookup.
use crate::Error;
use nalgebra::Vector2;

/// One of the built-in two-variable scalar surfaces
///
/// Each variant pairs a `value` function with its exact analytic partial
/// derivatives.  The pairing is an invariant of the registry; it is checked
/// against central finite differences in this crate's tests rather than
/// enforced structurally.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Surface {
    /// Paraboloid `z = x² + y²`, the simplest bowl
    Bowl,
    /// Periodic ridges and valleys, `z = sin(x)·cos(y)`
    Mountains,
}

impl Surface {
    /// Looks up a surface by its registered name
    ///
    /// The lookup is strict: anything other than an exact registered name
    /// fails with [`Error::UnknownSurface`].  There is no fallback variant.
    ///
    /// ```
    /// use upslope::Surface;
    ///
    /// assert_eq!(Surface::resolve("Bowl")?, Surface::Bowl);
    /// assert!(Surface::resolve("Volcano").is_err());
    /// # Ok::<(), upslope::Error>(())
    /// ```
    pub fn resolve(name: &str) -> Result<Self, Error> {
        name.parse()
            .map_err(|_| Error::UnknownSurface(name.to_owned()))
    }

    /// Evaluates the surface height at the given position
    pub fn value(&self, x: f64, y: f64) -> f64 {
        match self {
            Surface::Bowl => x * x + y * y,
            Surface::Mountains => x.sin() * y.cos(),
        }
    }

    /// Evaluates the analytic gradient `(∂f/∂x, ∂f/∂y)` at the given position
    pub fn grad(&self, x: f64, y: f64) -> Vector2<f64> {
        match self {
            Surface::Bowl => Vector2::new(2.0 * x, 2.0 * y),
            Surface::Mountains => {
                Vector2::new(x.cos() * y.cos(), -x.sin() * y.sin())
            }
        }
    }

    /// Registered name, as accepted by [`Surface::resolve`]
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Closed-form formula, for display alongside the name
    pub fn formula(&self) -> &'static str {
        match self {
            Surface::Bowl => "z = x² + y²",
            Surface::Mountains => "z = sin(x)·cos(y)",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
