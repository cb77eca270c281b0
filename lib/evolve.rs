//! Time evolution of a wavefunction held as split real and imaginary fields
//! over a pre-allocated time-by-space array pair.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.
//!
//! ```
//! use std::f64::consts::PI;
//! use num_complex::Complex64 as C64;
//! use wavegrid::evolve::{ Config, Evolution };
//!
//! let config = Config { trange: (0.0, 0.01), ..Config::default() };
//! let mut ev = Evolution::new(config, |x| {
//!     x.mapv(|xk| C64::from(0.5 * (5.0 * PI * xk).sin()))
//! }).unwrap();
//! ev.solve();
//! let p = ev.probability(ev.get_times().len() - 1).unwrap();
//! assert!(p.iter().all(|pk| pk.is_finite()));
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    deriv::{ second_derivative_into, Order },
    error::{ EvolveError, LengthError },
    grid::{ Grid, TimeAxis },
    DEF_DX,
    DEF_DT,
    DEF_XRANGE,
    DEF_TRANGE,
};

pub type EvolveResult<T> = Result<T, EvolveError>;

/// Fixed complex endpoint values `(left, right)` applied to every time row.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boundaries(pub C64, pub C64);

impl From<(C64, C64)> for Boundaries {
    fn from(bb: (C64, C64)) -> Self { Self(bb.0, bb.1) }
}

/// Construction parameters for [`Evolution`].
///
/// All fields have defaults via [`Default`]; use struct-update syntax to
/// override a subset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Nominal space step (default: `0.02`).
    pub dx: f64,
    /// Nominal time step (default: `1e-4`).
    pub dt: f64,
    /// Spatial domain bounds (default: `(0, 1)`).
    pub xrange: (f64, f64),
    /// Integration time window (default: `(0, 1)`).
    pub trange: (f64, f64),
    /// Fixed endpoint values (default: both zero).
    pub boundaries: Boundaries,
    /// Interior difference stencil (default: [`Order::Second`]).
    pub order: Order,
    /// With `true`, endpoint derivatives are fixed to zero to match the
    /// pinned endpoint values; with `false`, they are estimated by an
    /// unstable one-sided extrapolation instead (default: `true`).
    pub dirichlet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dx: DEF_DX,
            dt: DEF_DT,
            xrange: DEF_XRANGE,
            trange: DEF_TRANGE,
            boundaries: Boundaries::default(),
            order: Order::default(),
            dirichlet: true,
        }
    }
}

impl Config {
    /// Return the `dt / dx²` ratio governing the stability of the
    /// integration (see [`Order::stability_bound`]).
    pub fn stability_ratio(&self) -> f64 { self.dt / self.dx.powi(2) }
}

/// Time evolution of the split wavefunction field, advanced row by row.
///
/// The two field arrays have shape `(nt, nx)`, with row `i` sampling the
/// wavefunction over the spatial grid at the `i`-th time coordinate. Row 0
/// is populated at construction from a caller-supplied initial-condition
/// function; rows `1..nt` are populated in order by [`step`][Self::step] (or
/// all at once by [`solve`][Self::solve]) and never revisited. The endpoint
/// values of every populated row are overwritten with the configured
/// boundary values as soon as the row is written.
#[derive(Clone, Debug)]
pub struct Evolution {
    // spatial discretization
    grid: Grid,
    // temporal discretization
    times: TimeAxis,
    // fixed endpoint values
    boundaries: Boundaries,
    // interior stencil
    order: Order,
    // endpoint-derivative mode
    dirichlet: bool,
    // field arrays, shape (nt, nx)
    real: nd::Array2<f64>,
    imag: nd::Array2<f64>,
    // stage arenas, shape (4, nx)
    kreal: nd::Array2<f64>,
    kimag: nd::Array2<f64>,
    // stage-input scratch row
    stage: nd::Array1<f64>,
    // index of the most recently written row
    cursor: usize,
}

impl Evolution {
    /// Create a new `Evolution` with row 0 populated from `initial` and its
    /// endpoint values pinned.
    ///
    /// `initial` is called with the grid coordinate array and must return an
    /// array of the same length. Degenerate discretization parameters and
    /// length mismatches are rejected before the field arrays are allocated.
    pub fn new<F>(config: Config, initial: F) -> EvolveResult<Self>
    where F: FnOnce(&nd::Array1<f64>) -> nd::Array1<C64>
    {
        let grid = Grid::new(config.dx, config.xrange)?;
        let times = TimeAxis::new(config.dt, config.trange)?;
        if !config.dirichlet {
            println!(
                "evolve::Evolution::new: WARNING: one-sided endpoint \
                derivatives are numerically unstable"
            );
        }
        let ratio = config.stability_ratio();
        let bound = config.order.stability_bound();
        if ratio > bound {
            println!(
                "evolve::Evolution::new: WARNING: dt/dx² = {:.3e} exceeds \
                the stability bound {:.3e}",
                ratio, bound,
            );
        }
        let q0: nd::Array1<C64> = initial(grid.get_x());
        LengthError::check_len(&q0, grid.len())?;
        let (nt, nx) = (times.len(), grid.len());
        let mut real: nd::Array2<f64> = nd::Array2::zeros((nt, nx));
        let mut imag: nd::Array2<f64> = nd::Array2::zeros((nt, nx));
        real.row_mut(0).assign(&q0.mapv(|q| q.re));
        imag.row_mut(0).assign(&q0.mapv(|q| q.im));
        let kreal: nd::Array2<f64> = nd::Array2::zeros((4, nx));
        let kimag: nd::Array2<f64> = nd::Array2::zeros((4, nx));
        let stage: nd::Array1<f64> = nd::Array1::zeros(nx);
        let mut ev
            = Self {
                grid,
                times,
                boundaries: config.boundaries,
                order: config.order,
                dirichlet: config.dirichlet,
                real,
                imag,
                kreal,
                kimag,
                stage,
                cursor: 0,
            };
        ev.pin_row(0);
        Ok(ev)
    }

    /// Get a reference to the spatial discretization.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the temporal discretization.
    pub fn get_times(&self) -> &TimeAxis { &self.times }

    /// Get a reference to the spatial coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { self.grid.get_x() }

    /// Get a reference to the time coordinate array.
    pub fn get_t(&self) -> &nd::Array1<f64> { self.times.get_t() }

    /// Get the fixed endpoint values.
    pub fn get_boundaries(&self) -> Boundaries { self.boundaries }

    /// Get the interior difference stencil.
    pub fn get_order(&self) -> Order { self.order }

    /// Return `true` if endpoint derivatives are fixed to zero.
    pub fn is_dirichlet(&self) -> bool { self.dirichlet }

    /// Get a reference to the real part of the field.
    pub fn get_real(&self) -> &nd::Array2<f64> { &self.real }

    /// Get a reference to the imaginary part of the field.
    pub fn get_imag(&self) -> &nd::Array2<f64> { &self.imag }

    /// Get the index of the most recently written row.
    pub fn current_row(&self) -> usize { self.cursor }

    /// Return `true` if every row of the field has been written.
    pub fn is_complete(&self) -> bool {
        self.cursor + 1 >= self.times.len()
    }

    /// Return a view of the real part of the field at time row `i`.
    pub fn real(&self, i: usize) -> EvolveResult<nd::ArrayView1<f64>> {
        EvolveError::check_row(i, self.times.len())?;
        Ok(self.real.row(i))
    }

    /// Return a view of the imaginary part of the field at time row `i`.
    pub fn imag(&self, i: usize) -> EvolveResult<nd::ArrayView1<f64>> {
        EvolveError::check_row(i, self.times.len())?;
        Ok(self.imag.row(i))
    }

    /// Assemble the complex-valued wavefunction at time row `i`.
    pub fn psi(&self, i: usize) -> EvolveResult<nd::Array1<C64>> {
        EvolveError::check_row(i, self.times.len())?;
        let q: nd::Array1<C64>
            = nd::Zip::from(self.real.row(i)).and(self.imag.row(i))
            .map_collect(|&re, &im| C64::new(re, im));
        Ok(q)
    }

    /// Compute the probability density `real² + imag²` at time row `i`.
    pub fn probability(&self, i: usize) -> EvolveResult<nd::Array1<f64>> {
        EvolveError::check_row(i, self.times.len())?;
        let p: nd::Array1<f64>
            = nd::Zip::from(self.real.row(i)).and(self.imag.row(i))
            .map_collect(|&re, &im| re.powi(2) + im.powi(2));
        Ok(p)
    }

    // overwrite the endpoint values of row `i` with the configured
    // boundaries
    fn pin_row(&mut self, i: usize) {
        let nx = self.grid.len();
        self.real[[i, 0]] = self.boundaries.0.re;
        self.imag[[i, 0]] = self.boundaries.0.im;
        self.real[[i, nx - 1]] = self.boundaries.1.re;
        self.imag[[i, nx - 1]] = self.boundaries.1.im;
    }

    // advance the field from row `i` to row `i + 1`; endpoint pinning of the
    // new row is the caller's responsibility
    //
    // each branch's stage inputs offset the branch's own previous stage
    // vector, matching the recurrence
    //   k_re[s] = -1/2 D(im + c_s dt k_re[s-1])
    //   k_im[s] = +1/2 D(re + c_s dt k_im[s-1])
    fn advance(&mut self, i: usize) {
        // stage-input offsets relative to dt -- classical RK4
        const STAGE: [f64; 4] = [0.0, 0.5, 0.5, 1.0];

        let dx = self.grid.get_dx();
        let dt = self.times.get_dt();
        let mut kr = self.kreal.row_mut(0);
        second_derivative_into(
            dx, &self.imag.row(i), self.order, self.dirichlet, &mut kr);
        kr.map_inplace(|k| { *k *= -0.5; });
        let mut ki = self.kimag.row_mut(0);
        second_derivative_into(
            dx, &self.real.row(i), self.order, self.dirichlet, &mut ki);
        ki.map_inplace(|k| { *k *= 0.5; });
        for s in 1..4 {
            let c = STAGE[s] * dt;
            nd::Zip::from(&mut self.stage)
                .and(self.imag.row(i))
                .and(self.kreal.row(s - 1))
                .for_each(|b, &q, &k| { *b = q + c * k; });
            let mut kr = self.kreal.row_mut(s);
            second_derivative_into(
                dx, &self.stage, self.order, self.dirichlet, &mut kr);
            kr.map_inplace(|k| { *k *= -0.5; });
            nd::Zip::from(&mut self.stage)
                .and(self.real.row(i))
                .and(self.kimag.row(s - 1))
                .for_each(|b, &q, &k| { *b = q + c * k; });
            let mut ki = self.kimag.row_mut(s);
            second_derivative_into(
                dx, &self.stage, self.order, self.dirichlet, &mut ki);
            ki.map_inplace(|k| { *k *= 0.5; });
        }
        let (prev, mut next)
            = self.real.multi_slice_mut((nd::s![i, ..], nd::s![i + 1, ..]));
        nd::Zip::from(&mut next).and(&prev)
            .and(self.kreal.row(0)).and(self.kreal.row(1))
            .and(self.kreal.row(2)).and(self.kreal.row(3))
            .for_each(|qn, &q, &k1, &k2, &k3, &k4| {
                *qn = q + dt / 6.0 * (k1 + 2.0 * (k2 + k3) + k4);
            });
        let (prev, mut next)
            = self.imag.multi_slice_mut((nd::s![i, ..], nd::s![i + 1, ..]));
        nd::Zip::from(&mut next).and(&prev)
            .and(self.kimag.row(0)).and(self.kimag.row(1))
            .and(self.kimag.row(2)).and(self.kimag.row(3))
            .for_each(|qn, &q, &k1, &k2, &k3, &k4| {
                *qn = q + dt / 6.0 * (k1 + 2.0 * (k2 + k3) + k4);
            });
    }

    /// Advance the field by one time step, pin the endpoint values of the
    /// freshly written row, and return `true` if unwritten rows remain.
    ///
    /// Does nothing if the field is already complete.
    pub fn step(&mut self) -> bool {
        if self.is_complete() { return false; }
        let i = self.cursor;
        self.advance(i);
        self.cursor = i + 1;
        self.pin_row(i + 1);
        !self.is_complete()
    }

    /// Run [`step`][Self::step] until every row of the field is written.
    pub fn solve(&mut self) {
        while self.step() {}
    }
}
