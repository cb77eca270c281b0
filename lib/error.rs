//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check_len<S, A>(a: &nd::ArrayBase<S, nd::Ix1>, n: usize)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let na = a.len();
        (na == n).then_some(()).ok_or(Self(na, n))
    }
}

/// Returned from [`Grid`][crate::grid::Grid] and
/// [`TimeAxis`][crate::grid::TimeAxis] constructors when a discretization
/// parameter is degenerate.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when a non-positive space step is encountered.
    #[error("space steps must be greater than 0; got {0}")]
    BadDx(f64),

    /// Returned when a non-positive time step is encountered.
    #[error("time steps must be greater than 0; got {0}")]
    BadDt(f64),

    /// Returned when a spatial range has non-positive extent.
    #[error("spatial ranges must have positive extent; got ({0}, {1})")]
    BadXRange(f64, f64),

    /// Returned when a temporal range has non-positive extent.
    #[error("temporal ranges must have positive extent; got ({0}, {1})")]
    BadTRange(f64, f64),

    /// Returned when a range/step combination yields fewer spatial points
    /// than the widest difference stencil spans.
    #[error("spatial grids must comprise at least 5 points; got {0}")]
    TooFewPoints(usize),

    /// Returned when a range/step combination yields fewer than 2 time steps.
    #[error("time axes must comprise at least 2 steps; got {0}")]
    TooFewSteps(usize),
}

impl GridError {
    pub(crate) fn check_dx(dx: f64) -> Result<(), Self> {
        (dx > 0.0).then_some(()).ok_or(Self::BadDx(dx))
    }

    pub(crate) fn check_dt(dt: f64) -> Result<(), Self> {
        (dt > 0.0).then_some(()).ok_or(Self::BadDt(dt))
    }

    pub(crate) fn check_xrange(xrange: (f64, f64)) -> Result<(), Self> {
        (xrange.1 > xrange.0).then_some(())
            .ok_or(Self::BadXRange(xrange.0, xrange.1))
    }

    pub(crate) fn check_trange(trange: (f64, f64)) -> Result<(), Self> {
        (trange.1 > trange.0).then_some(())
            .ok_or(Self::BadTRange(trange.0, trange.1))
    }

    pub(crate) fn check_nx(nx: usize) -> Result<(), Self> {
        (nx >= 5).then_some(()).ok_or(Self::TooFewPoints(nx))
    }

    pub(crate) fn check_nt(nt: usize) -> Result<(), Self> {
        (nt >= 2).then_some(()).ok_or(Self::TooFewSteps(nt))
    }
}

/// Returned from time-evolution constructors and accessors.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Returned when a time row index lies outside the evolved field.
    #[error("time row index out of bounds; got {0} for a field of {1} rows")]
    BadRow(usize, usize),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl EvolveError {
    pub(crate) fn check_row(i: usize, nt: usize) -> Result<(), Self> {
        (i < nt).then_some(()).ok_or(Self::BadRow(i, nt))
    }
}
