// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An owned, row-major two-dimensional field.
//!
//! The carver keeps its private copy of the picture in one of these.
//! Removing a seam or turning the field on its side produces a fresh
//! map; nothing here is ever aliased or shared.

use crate::cq;
use crate::flipper::Orientation;
use std::ops::Index;

/// An addressable two-dimensional field of `P`, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Build a map by asking `f` for the value at every (x, y), in
    /// row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        TwoDimensionalMap { width, height, data }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer is not exactly `width * height` long.
    #[cfg(test)]
    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        cq!(
            data.len() == width as usize * height as usize,
            Some(TwoDimensionalMap { width, height, data }),
            None
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw row-major contents.
    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[P] {
        &self.data
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The same field with rows and columns swapped: the value at
    /// (x, y) moves to (y, x).  Transposing twice gives back the
    /// original map exactly.
    pub fn transposed(&self) -> Self {
        TwoDimensionalMap::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }

    /// Remove one cell per row (vertical) or per column (horizontal),
    /// closing the gap.  The seam must already have been validated
    /// against this map's dimensions.
    pub fn remove_seam(&self, seam: &[u32], orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => {
                let width = self.width as usize;
                let data = self
                    .data
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (i % width) as u32 != seam[i / width])
                    .map(|(_, p)| *p)
                    .collect();
                TwoDimensionalMap {
                    width: self.width - 1,
                    height: self.height,
                    data,
                }
            }
            // Everything at or below the seam's row slides up by one.
            Orientation::Horizontal => {
                TwoDimensionalMap::from_fn(self.width, self.height - 1, |x, y| {
                    self[(x, cq!(y < seam[x as usize], y, y + 1))]
                })
            }
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}
