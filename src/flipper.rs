// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy matrix dimensional flipper
//!
//! A read-only proxy over the `EnergyMatrix` that, for horizontal
//! seams, maps the width to the original height and vice versa, as
//! well as every x to y and vice versa.
//!
//! This lets the seam graph always walk "rows" from top to bottom: a
//! horizontal seam is just a vertical seam through the flipped view.
//! Nothing is copied and nothing is mutated, so a horizontal query
//! never leaves the carver in a transposed state.

use crate::energy::EnergyMatrix;
use std::fmt;

/// Which way a seam runs.  A vertical seam has one pixel per row and
/// narrows the picture; a horizontal seam has one pixel per column and
/// shortens it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The other one.  Used to alternate directions while carving.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

/// The energy matrix as seen by a seam running in `orientation`.
///
/// In the flipped view a pixel is addressed by `(col, row)`: `row`
/// counts the steps along the seam and `col` the position across it.
/// Oriented vertices are numbered `1 + row * across + col`, with the
/// source and sink in the same slots as the matrix.
#[derive(Debug, Copy, Clone)]
pub struct Flipper<'a> {
    energy: &'a EnergyMatrix,
    orientation: Orientation,
}

impl<'a> Flipper<'a> {
    pub fn new(energy: &'a EnergyMatrix, orientation: Orientation) -> Self {
        Flipper { energy, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// How many positions a seam can choose from at each step.
    pub fn across(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.energy.width(),
            Orientation::Horizontal => self.energy.height(),
        }
    }

    /// How many steps a seam takes; also the length of the seam.
    pub fn along(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.energy.height(),
            Orientation::Horizontal => self.energy.width(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.energy.len()
    }

    pub fn source(&self) -> usize {
        self.energy.source()
    }

    pub fn sink(&self) -> usize {
        self.energy.sink()
    }

    /// The oriented (col, row) of a pixel vertex.  Unchecked: `v` must
    /// be neither the source nor the sink.
    pub fn position(&self, v: usize) -> (u32, u32) {
        let across = self.across() as usize;
        (((v - 1) % across) as u32, ((v - 1) / across) as u32)
    }

    /// The energy of oriented vertex `v`.
    pub fn energy(&self, v: usize) -> u32 {
        if v == self.source() || v == self.sink() || self.orientation == Orientation::Vertical {
            return self.energy.get(v);
        }
        let (col, row) = self.position(v);
        self.energy.get(self.energy.vertex(row, col))
    }
}
