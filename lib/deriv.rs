//! Finite-difference approximations to the second spatial derivative of a
//! field sampled over a uniform grid.
//!
//! All stencils divide by `dx²` on the way out; no normalization or amplitude
//! correction is applied. See [`docs`][crate::docs] for derivations and
//! truncation-error orders.

use std::{
    f64::consts::SQRT_2,
    ops::{ Div, Mul, Neg },
};
use ndarray as nd;
use num_traits::Num;
use crate::Arr1;

/// Interior difference-stencil selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// 3-point central difference; truncation error `O(dx²)`.
    #[default]
    Second,
    /// 5-point central difference; truncation error `O(dx⁴)`, falling back
    /// to the 3-point formula at the two points adjacent to the endpoints.
    ///
    /// The fallback rows apply a different formula than the rest of the
    /// interior, so smooth pinned modes leak into grid-scale ones there and
    /// the time stepping amplifies the leakage on every step; see the
    /// stability discussion in [`docs`][crate::docs] before selecting this
    /// stencil for a Dirichlet evolution.
    Fourth,
}

impl Order {
    /// Return `true` if `self` is `Second`.
    pub fn is_second(&self) -> bool { matches!(self, Self::Second) }

    /// Return `true` if `self` is `Fourth`.
    pub fn is_fourth(&self) -> bool { matches!(self, Self::Fourth) }

    /// Return the largest `dt / dx²` ratio for which classical four-stage
    /// Runge-Kutta integration of the free-particle Schrödinger equation
    /// remains stable when paired with this stencil (see
    /// [`docs`][crate::docs] for the derivation).
    pub fn stability_bound(&self) -> f64 {
        match self {
            Self::Second => SQRT_2,
            Self::Fourth => 0.75 * SQRT_2,
        }
    }
}

/// Compute the second spatial derivative of `psi`, sampled over a uniform
/// grid with spacing `dx`.
///
/// The interior scheme is selected by `order`. With `dirichlet = true` the
/// derivative is fixed to zero at the two endpoints (the endpoint values are
/// taken to be held constant; see
/// [`Evolution`][crate::evolve::Evolution] for the pinning of the values
/// themselves); otherwise a one-sided four-point extrapolation estimates the
/// endpoint derivatives, which is numerically unstable under time evolution
/// and provided only as a fallback.
///
/// See also [`second_derivative_into`].
///
/// *Panics if `psi` has length less than 5*.
pub fn second_derivative<S, A>(
    dx: f64,
    psi: &Arr1<S>,
    order: Order,
    dirichlet: bool,
) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Num + Neg<Output = A> + Mul<f64, Output = A> + Div<f64, Output = A>
        + Copy,
{
    let mut df: nd::Array1<A> = nd::Array1::zeros(psi.len());
    second_derivative_into(dx, psi, order, dirichlet, &mut df);
    df
}

/// Like [`second_derivative`], but write the result into `df` instead of
/// allocating a new array.
///
/// *Panics if `psi` has length less than 5 or `df` has length unequal to that
/// of `psi`*.
pub fn second_derivative_into<S, T, A>(
    dx: f64,
    psi: &Arr1<S>,
    order: Order,
    dirichlet: bool,
    df: &mut Arr1<T>,
)
where
    S: nd::Data<Elem = A>,
    T: nd::DataMut<Elem = A>,
    A: Num + Neg<Output = A> + Mul<f64, Output = A> + Div<f64, Output = A>
        + Copy,
{
    let n = psi.len();
    match order {
        Order::Second => {
            nd::Zip::from(df.slice_mut(nd::s![1..n - 1]))
                .and(psi.windows(3))
                .for_each(|d, w| { *d = w[0] - w[1] * 2.0 + w[2]; });
        },
        Order::Fourth => {
            nd::Zip::from(df.slice_mut(nd::s![2..n - 2]))
                .and(psi.windows(5))
                .for_each(|d, w| {
                    *d = (
                        -w[0] + w[1] * 16.0 - w[2] * 30.0 + w[3] * 16.0
                        - w[4]
                    ) / 12.0;
                });
            df[1] = psi[0] - psi[1] * 2.0 + psi[2];
            df[n - 2] = psi[n - 3] - psi[n - 2] * 2.0 + psi[n - 1];
        },
    }
    if dirichlet {
        df[0] = A::zero();
        df[n - 1] = A::zero();
    } else {
        df[0] = -psi[0] + psi[1] * 4.0 - psi[2] * 5.0 + psi[3] * 2.0;
        df[n - 1]
            = -psi[n - 1] + psi[n - 2] * 4.0 - psi[n - 3] * 5.0
            + psi[n - 4] * 2.0;
    }
    let dx2 = dx.powi(2);
    df.map_inplace(|d| { *d = *d / dx2; });
}
