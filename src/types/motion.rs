//! Motion commands emitted by the motion compiler.

use serde::{Deserialize, Serialize};

/// The rotatable frame a command applies to: the whole cube or one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionTarget {
    #[serde(rename = "global")]
    Global,
    H1,
    H2,
    H3,
    V1,
    V2,
    V3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Named easing curve; interpretation is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInOutSine,
    EaseInOutQuad,
    EaseOutCubic,
    EaseOutBounce,
}

/// A single rotation instruction for one (target, axis) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionCommand {
    pub target: MotionTarget,
    pub axis: Axis,
    /// Signed rotation magnitude.
    pub value: f64,
    /// Duration in milliseconds.
    pub duration: f64,
    pub easing: Easing,
}

impl MotionCommand {
    pub const fn new(
        target: MotionTarget,
        axis: Axis,
        value: f64,
        duration: f64,
        easing: Easing,
    ) -> Self {
        Self {
            target,
            axis,
            value,
            duration,
            easing,
        }
    }

    /// Blend key: at most one command per key survives compilation.
    pub fn key(&self) -> (MotionTarget, Axis) {
        (self.target, self.axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_names() {
        let cmd = MotionCommand::new(MotionTarget::V2, Axis::Z, 1.25, 400.0, Easing::EaseInOutQuad);
        let json = serde_json::to_value(cmd).unwrap();
        assert_eq!(json["target"], "V2");
        assert_eq!(json["axis"], "z");
        assert_eq!(json["easing"], "easeInOutQuad");

        let global = serde_json::to_value(MotionTarget::Global).unwrap();
        assert_eq!(global, "global");
    }
}
