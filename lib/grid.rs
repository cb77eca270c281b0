//! Immutable spatial and temporal discretizations shared by the
//! finite-difference operators and the time integrator.

use ndarray as nd;
use crate::error::GridError;

pub type GridResult<T> = Result<T, GridError>;

/// Uniform discretization of a bounded one-dimensional spatial domain.
///
/// Arrays borrowed from this type are guaranteed to be uniformly spaced and
/// strictly increasing over the domain bounds.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // nominal grid spacing
    dx: f64,
    // domain bounds
    xrange: (f64, f64),
    // array size
    nx: usize,
}

impl Grid {
    /// Create a new `Grid` covering `xrange` with nominal spacing `dx`.
    ///
    /// The point count is fixed as `round((xrange.1 - xrange.0) / dx)` and
    /// the coordinate array is generated linspace-style (start, inclusive
    /// end, length) over `xrange`, so the realized spacing of the array
    /// differs slightly from `dx` in general; `dx` itself remains the
    /// spacing used by difference stencils over the grid.
    pub fn new(dx: f64, xrange: (f64, f64)) -> GridResult<Self> {
        GridError::check_dx(dx)?;
        GridError::check_xrange(xrange)?;
        let nx = ((xrange.1 - xrange.0) / dx).round() as usize;
        GridError::check_nx(nx)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(xrange.0, xrange.1, nx);
        Ok(Self { x, dx, xrange, nx })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the nominal grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the domain bounds.
    pub fn get_range(&self) -> (f64, f64) { self.xrange }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.nx }
}

/// Uniform discretization of a bounded integration time window.
///
/// Row `i` of an evolved field corresponds to the `i`-th element of the
/// coordinate array borrowed from this type.
#[derive(Clone, Debug)]
pub struct TimeAxis {
    // coordinate array
    t: nd::Array1<f64>,
    // nominal step size
    dt: f64,
    // window bounds
    trange: (f64, f64),
    // array size
    nt: usize,
}

impl TimeAxis {
    /// Create a new `TimeAxis` covering `trange` with nominal step `dt`.
    ///
    /// The step count is fixed as `round((trange.1 - trange.0) / dt)`, with
    /// the coordinate array generated linspace-style over `trange`; `dt`
    /// itself remains the step size used by the time integrator.
    pub fn new(dt: f64, trange: (f64, f64)) -> GridResult<Self> {
        GridError::check_dt(dt)?;
        GridError::check_trange(trange)?;
        let nt = ((trange.1 - trange.0) / dt).round() as usize;
        GridError::check_nt(nt)?;
        let t: nd::Array1<f64> = nd::Array1::linspace(trange.0, trange.1, nt);
        Ok(Self { t, dt, trange, nt })
    }

    /// Get a reference to the coordinate array.
    pub fn get_t(&self) -> &nd::Array1<f64> { &self.t }

    /// Get the nominal step size.
    pub fn get_dt(&self) -> f64 { self.dt }

    /// Get the window bounds.
    pub fn get_range(&self) -> (f64, f64) { self.trange }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.nt }
}
