use std::{ f64::consts::PI, path::PathBuf };
use lib::{ dump_npy, ensure_outdir };
use ndarray as nd;
use num_complex::Complex64 as C64;
use wavegrid::{
    evolve::{ Config, Evolution },
    utils,
};

const AMP: f64 = 0.5; // initial mode amplitude
const MODE: f64 = 5.0; // half-wavelengths across the domain

fn main() -> anyhow::Result<()> {
    let config = Config {
        dt: 5e-6,
        trange: (0.0, 0.2),
        ..Config::default()
    };
    let mut ev = Evolution::new(config, |x| {
        x.mapv(|xk| C64::from(AMP * (MODE * PI * xk).sin()))
    })?;
    ev.solve();

    let x = ev.get_x();
    let dx = x[1] - x[0];
    let i_end = ev.get_times().len() - 1;
    let n0 = utils::wf_norm_split(&ev.real(0)?, &ev.imag(0)?, dx);
    let n_end = utils::wf_norm_split(&ev.real(i_end)?, &ev.imag(i_end)?, dx);
    println!("norm drift: {:+.3e}", (n_end - n0) / n0);

    let prob: nd::Array2<f64>
        = ev.get_real() * ev.get_real() + ev.get_imag() * ev.get_imag();

    let outdir = PathBuf::from("output");
    ensure_outdir(&outdir)?;
    dump_npy(&outdir, "sine_x", ev.get_x())?;
    dump_npy(&outdir, "sine_t", ev.get_t())?;
    dump_npy(&outdir, "sine_real", ev.get_real())?;
    dump_npy(&outdir, "sine_imag", ev.get_imag())?;
    dump_npy(&outdir, "sine_prob", &prob)?;
    Ok(())
}
