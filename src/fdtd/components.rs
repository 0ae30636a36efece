//! Sources, media and boundaries.

mod absorbing;
mod dielectric;
mod pulse;
mod sinusoid;
mod source_kind;

pub use absorbing::AbsorbingBoundary;
pub use dielectric::{dielectric, LossyDielectric, Vacuum};
pub use pulse::{gaussian, GaussianPulse};
pub use sinusoid::{sinusoidal, Sinusoid};
pub use source_kind::SourceKind;
