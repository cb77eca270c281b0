use std::f64::consts::PI;
use approx::assert_abs_diff_eq;
use ndarray as nd;
use num_complex::Complex64 as C64;
use wavegrid::utils::{
    trapz, wf_dot, wf_norm, wf_norm_split, wf_normalized, wf_renormalize,
};

#[test]
fn trapezoid_rule_is_exact_on_linear_functions() {
    let dx = 0.01;
    let y: nd::Array1<f64>
        = nd::Array1::linspace(0.0, 1.0, 101).mapv(|x| 3.0 * x - 1.0);
    // ∫ (3x - 1) dx over [0, 1] is 1/2
    assert_abs_diff_eq!(trapz(&y, dx), 0.5, epsilon = 1e-12);
}

#[test]
fn complex_norm_matches_split_norm() {
    let dx = 0.02;
    let x = nd::Array1::linspace(0.0, 1.0, 51);
    let q: nd::Array1<C64>
        = x.mapv(|xk| C64::new((PI * xk).sin(), (2.0 * PI * xk).cos()));
    let re = q.mapv(|qk| qk.re);
    let im = q.mapv(|qk| qk.im);
    assert_abs_diff_eq!(
        wf_norm(&q, dx),
        wf_norm_split(&re, &im, dx),
        epsilon = 1e-12,
    );
}

#[test]
fn normalization_produces_unit_norm() {
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 201);
    let dx = x[1] - x[0];
    let raw: nd::Array1<C64>
        = x.mapv(|xk| C64::from((-((xk - 0.5) / 0.1).powi(2)).exp()));
    let q = wf_normalized(&raw, dx);
    assert_abs_diff_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-12);
    let mut r = raw.clone();
    wf_renormalize(&mut r, dx);
    assert_abs_diff_eq!(wf_norm(&r, dx), 1.0, epsilon = 1e-12);
    // in-place and by-value normalization agree
    for (qk, rk) in q.iter().zip(r.iter()) {
        assert_abs_diff_eq!(qk.re, rk.re, epsilon = 1e-15);
        assert_abs_diff_eq!(qk.im, rk.im, epsilon = 1e-15);
    }
}

#[test]
fn inner_product_is_conjugate_symmetric_and_real_on_diagonal() {
    let x = nd::Array1::linspace(0.0, 1.0, 101);
    let dx = x[1] - x[0];
    let q: nd::Array1<C64>
        = x.mapv(|xk| C64::new((PI * xk).sin(), 0.3 * (3.0 * PI * xk).sin()));
    let p: nd::Array1<C64>
        = x.mapv(|xk| C64::new((2.0 * PI * xk).cos(), -0.1 * xk));
    let qp = wf_dot(&q, &p, dx);
    let pq = wf_dot(&p, &q, dx);
    assert_abs_diff_eq!(qp.re, pq.re, epsilon = 1e-12);
    assert_abs_diff_eq!(qp.im, -pq.im, epsilon = 1e-12);
    let qq = wf_dot(&q, &q, dx);
    assert_abs_diff_eq!(qq.im, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(qq.re, wf_norm(&q, dx), epsilon = 1e-12);
}
