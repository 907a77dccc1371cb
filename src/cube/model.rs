//! Minimal piece model: 26 cubies on the integer lattice `{-1, 0, 1}³`.
//!
//! Each cubie carries its home coordinate, its current coordinate and a 3×3
//! integer orientation matrix. A quarter turn multiplies both by the same
//! rotation matrix. Stickers are not modeled.

use serde::{Deserialize, Serialize};

use crate::types::Axis;

use super::error::CubeError;

pub type Coord = [i8; 3];
pub type Orientation = [[i8; 3]; 3];

const IDENTITY: Orientation = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// A validated quarter turn of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Twist {
    pub axis: Axis,
    /// Which slice along `axis`: -1, 0 or 1.
    pub layer: i8,
    /// 1 for counter-clockwise looking down the positive axis, -1 for clockwise.
    pub direction: i8,
}

impl Twist {
    pub fn new(axis: Axis, layer: i8, direction: i8) -> Result<Self, CubeError> {
        if !(-1..=1).contains(&layer) {
            return Err(CubeError::InvalidLayer(layer));
        }
        if direction != 1 && direction != -1 {
            return Err(CubeError::InvalidDirection(direction));
        }
        Ok(Self {
            axis,
            layer,
            direction,
        })
    }

    /// The twist that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            direction: -self.direction,
            ..*self
        }
    }

    fn rotation(&self) -> Orientation {
        let r = match self.axis {
            Axis::X => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            Axis::Y => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            Axis::Z => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
        };
        if self.direction > 0 {
            r
        } else {
            transpose(&r)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cubie {
    pub home: Coord,
    pub position: Coord,
    pub orientation: Orientation,
}

impl Cubie {
    fn is_home(&self) -> bool {
        self.position == self.home && self.orientation == IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeModel {
    cubies: Vec<Cubie>,
}

impl Default for CubeModel {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeModel {
    pub fn solved() -> Self {
        let mut cubies = Vec::with_capacity(26);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if (x, y, z) == (0, 0, 0) {
                        continue;
                    }
                    cubies.push(Cubie {
                        home: [x, y, z],
                        position: [x, y, z],
                        orientation: IDENTITY,
                    });
                }
            }
        }
        Self { cubies }
    }

    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    pub fn apply_twist(&mut self, twist: Twist) {
        let idx = axis_index(twist.axis);
        let r = twist.rotation();
        for cubie in self.cubies.iter_mut().filter(|c| c.position[idx] == twist.layer) {
            cubie.position = apply(&r, cubie.position);
            cubie.orientation = multiply(&r, &cubie.orientation);
        }
    }

    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(Cubie::is_home)
    }

    pub fn reset(&mut self) {
        *self = Self::solved();
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

fn apply(m: &Orientation, v: Coord) -> Coord {
    std::array::from_fn(|i| (0..3).map(|k| m[i][k] * v[k]).sum())
}

fn multiply(a: &Orientation, b: &Orientation) -> Orientation {
    std::array::from_fn(|i| std::array::from_fn(|j| (0..3).map(|k| a[i][k] * b[k][j]).sum()))
}

fn transpose(m: &Orientation) -> Orientation {
    std::array::from_fn(|i| std::array::from_fn(|j| m[j][i]))
}
