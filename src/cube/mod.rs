//! Cube piece model and the discrete controller that animates it.

pub mod controller;
pub mod error;
pub mod model;

pub use controller::CubeController;
pub use error::CubeError;
pub use model::{CubeModel, Cubie, Twist};
