//! Module containing the universal error type for this crate
use crate::sample::Domain;
use thiserror::Error;

/// Universal error type for scene construction
///
/// Every variant is a local input-validation failure: a call either returns a
/// complete result or fails with one of these before producing anything.
#[derive(Error, Debug)]
pub enum Error {
    /// Selector does not name a registered surface
    #[error("unknown surface {0:?}")]
    UnknownSurface(String),

    /// Query point has a NaN or infinite coordinate
    #[error("point ({0}, {1}) is not finite")]
    NonFinitePoint(f64, f64),

    /// Sampling domain has a NaN or infinite bound
    #[error("domain {0:?} has non-finite bounds")]
    NonFiniteDomain(Domain),

    /// Grid resolution is too small to span a domain
    #[error("bad resolution {0}; must be at least 2")]
    BadResolution(usize),
}
