//! Continuous render parameters: state presets and the interpolator that
//! eases toward them.

pub mod interpolator;
pub mod presets;

pub use interpolator::ParameterInterpolator;
pub use presets::target_for;
