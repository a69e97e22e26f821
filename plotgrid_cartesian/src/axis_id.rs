// Copyright 2026 the PlotGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and subplot identifiers.
//!
//! An axis id is a dimension letter plus a 1-based counter, rendered `"x"`, `"x2"`,
//! `"y3"`, ... (the first axis of a dimension drops its digit). A subplot id is the
//! concatenation of its x- and y-axis ids, e.g. `"x2y3"`; that concatenation is the
//! stable key used throughout the layer tree.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

/// The dimension an axis spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisDim {
    /// A horizontal axis.
    X,
    /// A vertical axis.
    Y,
}

impl AxisDim {
    fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }
}

/// Identifier of a single axis, e.g. `x`, `x2`, `y3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId {
    /// The dimension this axis spans.
    pub dim: AxisDim,
    /// 1-based axis counter within the dimension.
    pub num: u32,
}

impl AxisId {
    /// The `num`-th x-axis (1-based).
    pub const fn x(num: u32) -> Self {
        Self {
            dim: AxisDim::X,
            num,
        }
    }

    /// The `num`-th y-axis (1-based).
    pub const fn y(num: u32) -> Self {
        Self {
            dim: AxisDim::Y,
            num,
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num <= 1 {
            write!(f, "{}", self.dim.letter())
        } else {
            write!(f, "{}{}", self.dim.letter(), self.num)
        }
    }
}

/// Identifier of one cartesian subplot: an (x-axis, y-axis) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubplotId {
    /// The subplot's x-axis.
    pub x: AxisId,
    /// The subplot's y-axis.
    pub y: AxisId,
}

impl SubplotId {
    /// Creates a subplot id from an axis pair.
    pub const fn new(x: AxisId, y: AxisId) -> Self {
        Self { x, y }
    }

    /// The concatenated string form used as the layer-tree key.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubplotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.x, self.y)
    }
}
