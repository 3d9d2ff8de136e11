//! Scene assembly
//!
//! A [`Scene`] bundles everything a display layer needs to draw one frame of
//! the explorer: the selected surface, the evaluated query point, and the
//! sampled height field.  Building a scene is pure computation; callers are
//! expected to rebuild on every input change rather than mutate in place.
use crate::{Domain, Error, HeightField, PointSample, Surface};

/// Default number of samples along each grid axis
pub const DEFAULT_RESOLUTION: usize = 50;

/// Settings for scene construction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Region of the `xy`-plane covered by the height field
    pub domain: Domain,
    /// Number of samples along each grid axis
    pub resolution: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            domain: Domain::default(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Complete data for one frame of the explorer
#[derive(Clone, Debug)]
pub struct Scene {
    /// Surface on display
    pub surface: Surface,
    /// Evaluated query point
    pub point: PointSample,
    /// Sampled height field
    pub field: HeightField,
}

impl Scene {
    /// Builds a scene for `surface` with the query point at `(x, y)`
    pub fn new(
        surface: Surface,
        x: f64,
        y: f64,
        config: &SceneConfig,
    ) -> Result<Self, Error> {
        let point = PointSample::new(surface, x, y)?;
        let field =
            HeightField::sample(surface, config.domain, config.resolution)?;
        Ok(Scene {
            surface,
            point,
            field,
        })
    }

    /// Builds a scene from a surface name, as selected in a UI
    ///
    /// The name must match exactly; see [`Surface::resolve`].
    pub fn build(
        selector: &str,
        x: f64,
        y: f64,
        config: &SceneConfig,
    ) -> Result<Self, Error> {
        let surface = Surface::resolve(selector)?;
        Self::new(surface, x, y, config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_matches_the_explorer() {
        let c = SceneConfig::default();
        assert_eq!(c.resolution, 50);
        assert_eq!(c.domain, Domain::square(2.5));
    }

    #[test]
    fn scene_carries_consistent_data() {
        let c = SceneConfig::default();
        let s = Scene::new(Surface::Bowl, 1.0, 1.0, &c).unwrap();
        assert_eq!(s.point.z, 2.0);
        assert_eq!(s.field.resolution(), 50);
        assert_eq!(s.field.domain(), c.domain);
        assert_eq!(s.point.z, s.surface.value(s.point.x, s.point.y));
    }

    #[test]
    fn build_accepts_exact_names() {
        let c = SceneConfig::default();
        let s = Scene::build("Mountains", 0.0, 0.0, &c).unwrap();
        assert_eq!(s.surface, Surface::Mountains);
        assert_eq!(s.point.grad.x, 1.0);
    }

    #[test]
    fn build_rejects_unknown_names() {
        let c = SceneConfig::default();
        assert!(matches!(
            Scene::build("Volcano", 0.0, 0.0, &c),
            Err(Error::UnknownSurface(_))
        ));
    }

    #[test]
    fn bad_inputs_surface_as_errors() {
        let mut c = SceneConfig::default();
        assert!(matches!(
            Scene::new(Surface::Bowl, f64::NAN, 0.0, &c),
            Err(Error::NonFinitePoint(..))
        ));
        c.resolution = 1;
        assert!(matches!(
            Scene::new(Surface::Bowl, 0.0, 0.0, &c),
            Err(Error::BadResolution(1))
        ));
    }
}
