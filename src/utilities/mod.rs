//! Small numeric and container helpers shared by the engines.

pub mod history;
pub mod math;

pub use history::BoundedHistory;
