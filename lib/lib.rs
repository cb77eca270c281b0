#![allow(dead_code)]

//! Provides functions and higher-level constructs for automated solution of
//! the one-dimensional, time-dependent Schrödinger equation on a bounded
//! domain via finite-difference spatial discretization and fourth-order
//! Runge-Kutta time stepping on the split real/imaginary field.
//!
//! Provides implementations for the following numerical routines:
//! - Spatial:
//!     - 3-point central second-derivative stencil (second order)
//!     - 5-point central second-derivative stencil (fourth order, 3-point
//!       fallback adjacent to the endpoints)
//!     - One-sided 4-point endpoint extrapolation (non-Dirichlet fallback)
//! - Temporal:
//!     - Classical four-stage Runge-Kutta over the full pre-allocated field,
//!       with Dirichlet endpoint pinning after every step
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod deriv;
pub mod evolve;
pub mod utils;

pub mod docs;

pub(crate) const DEF_DX: f64 = 0.02;
pub(crate) const DEF_DT: f64 = 1e-4;
pub(crate) const DEF_XRANGE: (f64, f64) = (0.0, 1.0);
pub(crate) const DEF_TRANGE: (f64, f64) = (0.0, 1.0);

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
