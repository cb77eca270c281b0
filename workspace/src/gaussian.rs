use std::path::PathBuf;
use lib::{ dump_npy, ensure_outdir };
use ndarray as nd;
use num_complex::Complex64 as C64;
use wavegrid::{
    evolve::{ Config, Evolution },
    utils,
};

const CENTER: f64 = 0.3; // wavepacket center
const WIDTH: f64 = 0.1; // wavepacket 1/e half-width

fn main() -> anyhow::Result<()> {
    let config = Config {
        dt: 1e-5,
        trange: (0.0, 0.2),
        ..Config::default()
    };
    let mut ev = Evolution::new(config, |x| {
        let raw: nd::Array1<C64>
            = x.mapv(|xk| C64::from((-((xk - CENTER) / WIDTH).powi(2)).exp()));
        utils::wf_normalized(&raw, x[1] - x[0])
    })?;
    ev.solve();

    let x = ev.get_x();
    let dx = x[1] - x[0];
    let nt = ev.get_times().len();
    let q0 = ev.psi(0)?;
    let mut survival: nd::Array1<f64> = nd::Array1::zeros(nt);
    for (i, sk) in survival.iter_mut().enumerate() {
        let qi = ev.psi(i)?;
        *sk = utils::wf_dot(&q0, &qi, dx).norm_sqr();
    }

    let prob: nd::Array2<f64>
        = ev.get_real() * ev.get_real() + ev.get_imag() * ev.get_imag();

    let outdir = PathBuf::from("output");
    ensure_outdir(&outdir)?;
    dump_npy(&outdir, "gaussian_x", ev.get_x())?;
    dump_npy(&outdir, "gaussian_t", ev.get_t())?;
    dump_npy(&outdir, "gaussian_real", ev.get_real())?;
    dump_npy(&outdir, "gaussian_imag", ev.get_imag())?;
    dump_npy(&outdir, "gaussian_prob", &prob)?;
    dump_npy(&outdir, "gaussian_survival", &survival)?;
    Ok(())
}
