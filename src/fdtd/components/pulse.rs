use crate::fdtd::Source;

/// A Gaussian pulse peaking at time step `t0` with width `spread` time steps.
#[inline]
pub fn gaussian(t: usize, t0: usize, spread: f64) -> f64 {
    let offset = t0 as f64 - t as f64;
    (-0.5 * (offset / spread).powi(2)).exp()
}

/// A broadband pulse source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianPulse {
    /// Time step at which the pulse is maximum.
    pub t0: usize,
    /// Width of the pulse in time steps.
    pub spread: f64,
}
impl Default for GaussianPulse {
    fn default() -> Self {
        Self { t0: 40, spread: 12.0 }
    }
}
impl Source for GaussianPulse {
    #[inline]
    fn excitation(&self, t: usize) -> f64 {
        gaussian(t, self.t0, self.spread)
    }
}
