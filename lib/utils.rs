//! Miscellaneous tools.

use std::ops::Mul;
use ndarray::{ self as nd, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::Num;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: f64) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Mul<f64, Output = A> + Copy,
{
    let n: usize = y.len();
    (y[0] + y.slice(nd::s![1..n - 1]).sum() * 2.0 + y[n - 1]) * (dx / 2.0)
}

/// Calculate the norm of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    let n: usize = q.len();
    (dx / 2.0) * (
        q[0].norm_sqr()
        + 2.0 * q.iter().skip(1).take(n - 2).map(|qk| qk.norm_sqr())
            .sum::<f64>()
        + q[n - 1].norm_sqr()
    )
}

/// Calculate the norm of a wavefunction represented as split real and
/// imaginary parts.
///
/// *Panics if either array has length less than 2*.
pub fn wf_norm_split<S, T>(
    re: &nd::ArrayBase<S, Ix1>,
    im: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n: usize = re.len().min(im.len());
    (dx / 2.0) * (
        re[0].powi(2) + im[0].powi(2)
        + 2.0 * re.iter().zip(im).skip(1).take(n - 2)
            .map(|(rk, ik)| rk.powi(2) + ik.powi(2))
            .sum::<f64>()
        + re[n - 1].powi(2) + im[n - 1].powi(2)
    )
}

/// Calculate the inner product of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> C64
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    let n: usize = q.len().min(p.len());
    (
        q[0].conj() * p[0]
        + q.iter().zip(p).skip(1).take(n - 2)
            .map(|(qk, pk)| qk.conj() * *pk)
            .sum::<C64>() * 2.0
        + q[n - 1].conj() * p[n - 1]
    ) * (dx / 2.0)
}

/// Renormalize a wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
where S: nd::DataMut<Elem = C64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}
