use std::f64::consts::PI;

use crate::fdtd::{time_step, Source};

/// A sine wave of `frequency` [Hz] sampled at the time step of a `delta_x` [m] cell.
#[inline]
pub fn sinusoidal(t: usize, delta_x: f64, frequency: f64) -> f64 {
    let delta_t = time_step(delta_x);
    (2.0 * PI * frequency * delta_t * t as f64).sin()
}

/// A continuous wave source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sinusoid {
    /// The cell size [m].
    pub delta_x: f64,
    /// The frequency [Hz].
    pub frequency: f64,
}
impl Default for Sinusoid {
    fn default() -> Self {
        Self { delta_x: 0.01, frequency: 700e6 }
    }
}
impl Source for Sinusoid {
    #[inline]
    fn excitation(&self, t: usize) -> f64 {
        sinusoidal(t, self.delta_x, self.frequency)
    }

    fn cell_size(&self) -> Option<f64> {
        Some(self.delta_x)
    }
}
