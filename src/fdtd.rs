pub mod components;

mod fdtd_solver;

pub use fdtd_solver::{FdtdSolver, FdtdSolverDescriptor};

use crate::Error;

/// Speed of light in free space [m / s].
pub const C0: f64 = 3e8;
/// Permittivity of free space [F / m].
pub const EPS0: f64 = 8.854e-12;
/// Courant number of the scheme, `c0 * delta_t / delta_x`.
pub const COURANT_NUMBER: f64 = 0.5;

/// The time step [s] for a cell of size `delta_x` [m] at the scheme's Courant number.
#[inline]
pub fn time_step(delta_x: f64) -> f64 {
    // 2 * C0 is exactly 6e8
    delta_x / (2.0 * C0)
}

/// Generates the excitation added to `Ex` at the injection node.
pub trait Source {
    /// The excitation for the 1-based time step `t`.
    fn excitation(&self, t: usize) -> f64;

    /// The cell size [m] the source's time base is derived from, if it has one.
    fn cell_size(&self) -> Option<f64> {
        None
    }
}

impl<F> Source for F where F: Fn(usize) -> f64 {
    #[inline]
    fn excitation(&self, t: usize) -> f64 {
        self(t)
    }
}

/// Describes the material filling the grid through its `Ex` update coefficients.
pub trait Medium {
    fn coefficients(&self, npoints: usize) -> Result<Coefficients, Error>;

    /// The cell size [m] the coefficients are derived from, if they depend on one.
    fn cell_size(&self) -> Option<f64> {
        None
    }
}

/// Fails unless `found` is absent or equal to `expected`.
pub(crate) fn check_cell_size(
    component: &str,
    found: Option<f64>,
    expected: f64,
) -> Result<(), Error> {
    match found {
        Some(found) if found != expected => Err(Error::CellSizeMismatch {
            component: component.to_string(),
            found,
            expected,
        }),
        _ => Ok(()),
    }
}

/// Per node coefficients of the `Ex` update,
/// `Ex[k] = ca[k] * Ex[k] + cb[k] * (Hy[k-1] - Hy[k])`.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Decay of the previous `Ex` value, unity in lossless regions.
    pub ca: ndarray::Array1<f64>,
    /// Scale of the curl term, `0.5` in vacuum.
    pub cb: ndarray::Array1<f64>,
}

impl Coefficients {
    /// Coefficients of a grid filled with vacuum.
    pub fn vacuum(npoints: usize) -> Self {
        Self {
            ca: ndarray::Array1::ones(npoints),
            cb: ndarray::Array1::from_elem(npoints, COURANT_NUMBER),
        }
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.ca.len()
    }

    /// Checks that both arrays cover `npoints` nodes.
    pub fn check_len(&self, npoints: usize) -> Result<(), Error> {
        for (array_name, array) in [("ca", &self.ca), ("cb", &self.cb)] {
            if array.len() != npoints {
                return Err(Error::BadInit {
                    array_name: array_name.to_string(),
                    input_length: array.len(),
                    expected_length: npoints,
                });
            }
        }
        Ok(())
    }

    /// A per node outline of the medium for drawing beneath the fields.
    ///
    /// Dielectric nodes map to roughly `(epsr - 1) / 3`, vacuum nodes sit at `-1.5`
    /// so they fall below the plotted field range.
    pub fn material_profile(&self) -> ndarray::Array1<f64> {
        self.cb.mapv(|cb| {
            let level = (0.5 / cb - 1.0) / 3.0;
            if level == 0.0 { -1.5 } else { level }
        })
    }
}

impl Medium for Coefficients {
    fn coefficients(&self, npoints: usize) -> Result<Coefficients, Error> {
        self.check_len(npoints)?;
        Ok(self.clone())
    }
}
