use crate::Error;
use crate::fdtd::{time_step, Coefficients, Medium, EPS0};

/// Coefficients for vacuum up to the grid midpoint and a lossy dielectric after it.
///
/// `epsr` is the relative permittivity, `sigma` the conductivity [S / m] and
/// `delta_x` the cell size [m].
pub fn dielectric(
    npoints: usize,
    epsr: f64,
    sigma: f64,
    delta_x: f64,
) -> Result<Coefficients, Error> {
    if !(epsr > 0.0) {
        return Err(Error::BadPermittivity(epsr));
    }

    let delta_t = time_step(delta_x);
    let eaf = delta_t * sigma / (2.0 * EPS0 * epsr);

    let mut coefficients = Coefficients::vacuum(npoints);
    let interface = npoints / 2;
    coefficients.ca.slice_mut(ndarray::s![interface..]).fill((1.0 - eaf) / (1.0 + eaf));
    coefficients.cb.slice_mut(ndarray::s![interface..]).fill(0.5 / (epsr * (1.0 + eaf)));

    Ok(coefficients)
}

/// Free space everywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vacuum;
impl Medium for Vacuum {
    fn coefficients(&self, npoints: usize) -> Result<Coefficients, Error> {
        Ok(Coefficients::vacuum(npoints))
    }
}

/// A lossy dielectric filling the second half of the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LossyDielectric {
    /// Relative permittivity.
    pub epsr: f64,
    /// Conductivity [S / m].
    pub sigma: f64,
    /// Cell size [m].
    pub delta_x: f64,
}
impl Default for LossyDielectric {
    fn default() -> Self {
        Self { epsr: 1.0, sigma: 0.04, delta_x: 0.01 }
    }
}
impl Medium for LossyDielectric {
    fn coefficients(&self, npoints: usize) -> Result<Coefficients, Error> {
        dielectric(npoints, self.epsr, self.sigma, self.delta_x)
    }

    fn cell_size(&self) -> Option<f64> {
        Some(self.delta_x)
    }
}
