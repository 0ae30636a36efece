use crate::fdtd::Source;
use crate::fdtd::components::{GaussianPulse, Sinusoid};

/// Selects one of the built in sources from configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SourceKind {
    Gaussian(GaussianPulse),
    Sinusoidal(Sinusoid),
}
impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Gaussian(GaussianPulse::default())
    }
}
impl From<GaussianPulse> for SourceKind {
    fn from(pulse: GaussianPulse) -> Self {
        SourceKind::Gaussian(pulse)
    }
}
impl From<Sinusoid> for SourceKind {
    fn from(sinusoid: Sinusoid) -> Self {
        SourceKind::Sinusoidal(sinusoid)
    }
}
impl Source for SourceKind {
    #[inline]
    fn excitation(&self, t: usize) -> f64 {
        match self {
            SourceKind::Gaussian(pulse) => pulse.excitation(t),
            SourceKind::Sinusoidal(sinusoid) => sinusoid.excitation(t),
        }
    }

    fn cell_size(&self) -> Option<f64> {
        match self {
            SourceKind::Gaussian(pulse) => pulse.cell_size(),
            SourceKind::Sinusoidal(sinusoid) => sinusoid.cell_size(),
        }
    }
}
