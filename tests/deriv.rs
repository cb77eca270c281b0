use std::f64::consts::PI;
use approx::assert_abs_diff_eq;
use ndarray as nd;
use wavegrid::deriv::{ second_derivative, Order };

// uniformly spaced samples of f over [0, 1] with spacing exactly `dx`
fn sample<F: FnMut(f64) -> f64>(dx: f64, f: F) -> nd::Array1<f64> {
    let n = (1.0 / dx).round() as usize + 1;
    nd::Array1::linspace(0.0, 1.0, n).mapv(f)
}

#[test]
fn constant_field_has_zero_derivative() {
    let psi: nd::Array1<f64> = nd::Array1::from_elem(21, 3.7);
    for order in [Order::Second, Order::Fourth] {
        let df: nd::Array1<f64> = second_derivative(0.1, &psi, order, true);
        for &d in df.iter() {
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn quadratic_profile_reproduces_its_second_derivative() {
    let dx = 0.02;
    let psi = sample(dx, |x| x.powi(2));
    let n = psi.len();
    for order in [Order::Second, Order::Fourth] {
        let df: nd::Array1<f64> = second_derivative(dx, &psi, order, true);
        // central differences of any width are exact on quadratics
        for &d in df.slice(nd::s![1..n - 1]).iter() {
            assert_abs_diff_eq!(d, 2.0, epsilon = 1e-8);
        }
        assert_eq!(df[0], 0.0);
        assert_eq!(df[n - 1], 0.0);
    }
}

#[test]
fn fourth_order_falls_back_to_three_point_next_to_endpoints() {
    let dx = 0.05;
    let psi = sample(dx, |x| (3.0 * PI * x).sin() + 0.25 * x);
    let n = psi.len();
    let d2: nd::Array1<f64> = second_derivative(dx, &psi, Order::Second, true);
    let d4: nd::Array1<f64> = second_derivative(dx, &psi, Order::Fourth, true);
    assert_eq!(d4[1], d2[1]);
    assert_eq!(d4[n - 2], d2[n - 2]);
    // the wider stencil differs in the deep interior
    assert!((d4[n / 2] - d2[n / 2]).abs() > 0.0);
}

#[test]
fn one_sided_endpoints_match_extrapolation_formula() {
    let dx = 0.05;
    let psi = sample(dx, |x| (2.0 * PI * x).cos());
    let n = psi.len();
    for order in [Order::Second, Order::Fourth] {
        let df: nd::Array1<f64> = second_derivative(dx, &psi, order, false);
        let left
            = (-psi[0] + psi[1] * 4.0 - psi[2] * 5.0 + psi[3] * 2.0)
            / dx.powi(2);
        let right
            = (-psi[n - 1] + psi[n - 2] * 4.0 - psi[n - 3] * 5.0
                + psi[n - 4] * 2.0)
            / dx.powi(2);
        assert_abs_diff_eq!(df[0], left, epsilon = 1e-12);
        assert_abs_diff_eq!(df[n - 1], right, epsilon = 1e-12);
    }
}

#[test]
fn halving_dx_scales_error_by_stencil_order() {
    // f = sin(2πx) has f'' = -4π² sin(2πx)
    let max_err = |dx: f64, order: Order| -> f64 {
        let psi = sample(dx, |x| (2.0 * PI * x).sin());
        let df: nd::Array1<f64> = second_derivative(dx, &psi, order, true);
        let n = psi.len();
        let x = nd::Array1::linspace(0.0, 1.0, n);
        // skip the endpoint and fallback indices
        df.slice(nd::s![2..n - 2]).iter()
            .zip(x.slice(nd::s![2..n - 2]))
            .map(|(&d, &xk)| {
                let exact = -4.0 * PI.powi(2) * (2.0 * PI * xk).sin();
                (d - exact).abs()
            })
            .fold(0.0_f64, f64::max)
    };
    let ratio2 = max_err(0.02, Order::Second) / max_err(0.01, Order::Second);
    assert!(
        (3.4..4.6).contains(&ratio2),
        "3-point error should drop ~4x per dx halving; got {}",
        ratio2,
    );
    let ratio4 = max_err(0.02, Order::Fourth) / max_err(0.01, Order::Fourth);
    assert!(
        (12.0..20.0).contains(&ratio4),
        "5-point error should drop ~16x per dx halving; got {}",
        ratio4,
    );
}

#[test]
fn stability_bounds_are_ordered() {
    assert!(Order::default().is_second());
    assert!(Order::Fourth.is_fourth());
    assert!(Order::Second.stability_bound() > Order::Fourth.stability_bound());
    assert!(Order::Fourth.stability_bound() > 1.0);
}
