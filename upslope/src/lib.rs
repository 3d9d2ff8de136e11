//! Upslope is a small library for building gradient-explorer scenes: pick a
//! two-variable surface, evaluate it (and its analytic gradient) at a query
//! point, and sample it on a grid, all as plain data ready for a display
//! layer to draw.
//!
//! ```
//! use upslope::{Scene, SceneConfig, Surface};
//!
//! let scene = Scene::new(Surface::Bowl, 1.0, 1.0, &SceneConfig::default())?;
//! assert_eq!(scene.point.z, 2.0);
//! assert_eq!(scene.field.resolution(), 50);
//! # Ok::<(), upslope::Error>(())
//! ```
//!
//! The crate is deliberately synchronous and stateless: every input change
//! produces a fresh [`Scene`], which keeps the data layer trivial to test
//! and leaves presentation concerns entirely to the caller.
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod sample;
pub mod scene;
pub mod surface;

pub use sample::{Domain, HeightField, PointSample};
pub use scene::{Scene, SceneConfig};
pub use surface::Surface;
