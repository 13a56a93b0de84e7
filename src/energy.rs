// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Every pixel gets a scalar importance from its local color
//! gradients, the *dual gradient*:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = |Δx|²+|Δy|²
//! ```
//!
//! where Δx compares the left and right neighbors and Δy the ones
//! above and below.  Pixels on the border have no neighbor on one
//! side, and get the fixed `BORDER_ENERGY` instead, which keeps seams
//! away from the edges.
//!
//! The energies are kept in an `EnergyMatrix`, a flat vector laid out
//! the way the seam graph numbers its vertices: slot 0 is the virtual
//! source, slot W·H+1 the virtual sink, and the pixels sit in between
//! in row-major order.

use crate::cq;
use crate::errors::{Result, SeamError};
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use image::Pixel;
use itertools::iproduct;
use tracing::debug;

/// The energy of every pixel on the edge of the picture: three color
/// channels, 255² per channel, times two axes.
pub const BORDER_ENERGY: u32 = 195_075;

// Unchecked: (x, y) must lie inside the picture.
fn dual_gradient<P>(picture: &TwoDimensionalMap<P>, x: u32, y: u32) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    let (mw, mh) = (picture.width() - 1, picture.height() - 1);
    if x == 0 || y == 0 || x == mw || y == mh {
        return BORDER_ENERGY;
    }
    energy_of_pair(&picture[(x - 1, y)], &picture[(x + 1, y)])
        + energy_of_pair(&picture[(x, y - 1)], &picture[(x, y + 1)])
}

/// The energy of the pixel at (x, y).
///
/// Fails with `InvalidCoordinate` if the pixel is not inside the
/// picture.
pub fn pixel_energy<P>(picture: &TwoDimensionalMap<P>, x: u32, y: u32) -> Result<u32>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = picture.dimensions();
    if x >= width || y >= height {
        return Err(SeamError::InvalidCoordinate { x, y, width, height });
    }
    Ok(dual_gradient(picture, x, y))
}

/// The flattened energy matrix, indexed by seam-graph vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyMatrix {
    width: u32,
    height: u32,
    energy: Vec<u32>,
}

impl EnergyMatrix {
    /// Compute the energy of every pixel in the picture.
    pub fn compute<P>(picture: &TwoDimensionalMap<P>) -> Self
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = picture.dimensions();
        let mut energy = Vec::with_capacity(width as usize * height as usize + 2);
        energy.push(0);
        energy.extend(iproduct!(0..height, 0..width).map(|(y, x)| dual_gradient(picture, x, y)));
        energy.push(0);
        debug!(width, height, "computed energy matrix");
        EnergyMatrix { width, height, energy }
    }

    /// Wrap a row-major vector of pixel energies, adding the source and
    /// sink slots.  Returns `None` if the vector is the wrong size.
    pub fn from_pixels(width: u32, height: u32, pixels: &[u32]) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        let mut energy = Vec::with_capacity(pixels.len() + 2);
        energy.push(0);
        energy.extend_from_slice(pixels);
        energy.push(0);
        Some(EnergyMatrix { width, height, energy })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of vertices: W·H pixels plus the source and the sink.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Never true: the source and the sink are always present.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn sink(&self) -> usize {
        self.energy.len() - 1
    }

    /// The whole matrix, source and sink included.
    pub fn as_slice(&self) -> &[u32] {
        &self.energy
    }

    /// The energy stored for vertex `v`.
    pub fn get(&self, v: usize) -> u32 {
        self.energy[v]
    }

    /// The vertex holding pixel (x, y).  Unchecked.
    pub fn vertex(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize) + 1
    }

    /// The energy of pixel (x, y), if it is inside the matrix.
    pub fn at(&self, x: u32, y: u32) -> Option<u32> {
        cq!(
            x < self.width && y < self.height,
            Some(self.energy[self.vertex(x, y)]),
            None
        )
    }

    /// The same energies with rows and columns exchanged: the value
    /// at (x, y) moves to (y, x) and the recorded width and height
    /// swap.  The source and sink stay put.
    pub fn transposed(&self) -> Self {
        let mut energy = vec![0; self.energy.len()];
        let height = self.height as usize;
        for (x, y) in iproduct!(0..self.width, 0..self.height) {
            energy[(x as usize) * height + (y as usize) + 1] = self.energy[self.vertex(x, y)];
        }
        EnergyMatrix {
            width: self.height,
            height: self.width,
            energy,
        }
    }
}
