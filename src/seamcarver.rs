// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main struct
//!
//! `SeamCarver` owns a private copy of a picture and its energy
//! matrix, answers seam queries in either orientation, and removes
//! seams one at a time.  The energy matrix always matches the picture:
//! it is computed when the carver is built and computed again, in
//! full, after every removal.

use crate::energy::{pixel_energy, EnergyMatrix};
use crate::errors::{Result, SeamDefect, SeamError};
use crate::flipper::Orientation;
use crate::seamfinder::{find_seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};
use itertools::Itertools;
use tracing::debug;

/// Check that `seam` has `len` entries, each in `0..across`, with
/// consecutive entries no more than one apart.  Defects are reported
/// for the first offending entry.
pub fn validate_seam(seam: &[u32], len: usize, across: u32) -> std::result::Result<(), SeamDefect> {
    if seam.len() != len {
        return Err(SeamDefect::Length {
            expected: len,
            found: seam.len(),
        });
    }
    if let Some((index, value)) = seam.iter().find_position(|v| **v >= across) {
        return Err(SeamDefect::OutOfRange {
            index,
            value: *value,
            limit: across,
        });
    }
    match seam
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| a.abs_diff(**b) > 1)
    {
        Some((index, (from, to))) => Err(SeamDefect::Step {
            index,
            from: *from,
            to: *to,
        }),
        None => Ok(()),
    }
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: TwoDimensionalMap<Rgb<u8>>,
    energy: EnergyMatrix,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a private RGB copy of an image.
    pub fn new<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyPicture);
        }
        let picture = TwoDimensionalMap::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgb());
        let energy = EnergyMatrix::compute(&picture);
        debug!(width, height, "seam carver ready");
        Ok(SeamCarver { picture, energy })
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// The energy of the pixel at (x, y).
    pub fn energy(&self, x: u32, y: u32) -> Result<u32> {
        pixel_energy(&self.picture, x, y)
    }

    /// The current energy matrix, source and sink included.
    pub fn energy_matrix(&self) -> &EnergyMatrix {
        &self.energy
    }

    /// A snapshot of the picture as it stands.
    pub fn picture(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self.picture[(x, y)])
    }

    /// Remove a vertical seam (one column index per row), narrowing
    /// the picture by one pixel.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    /// Remove a horizontal seam (one row index per column), shortening
    /// the picture by one pixel.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        let (across, along) = match orientation {
            Orientation::Vertical => (self.width(), self.height()),
            Orientation::Horizontal => (self.height(), self.width()),
        };
        if across <= 1 {
            return Err(SeamError::UnshrinkableDimension(orientation));
        }
        validate_seam(seam, along as usize, across)?;

        self.picture = self.picture.remove_seam(seam, orientation);
        self.energy = EnergyMatrix::compute(&self.picture);
        debug!(
            %orientation,
            width = self.width(),
            height = self.height(),
            "removed seam"
        );
        Ok(())
    }

    // This is absurdly inefficient, as the entire energy map and seam
    // digraph is recalculated for every seam.  Only the pixels beside
    // the removed seam actually change.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating directions while both dimensions still
    /// need to shrink.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if width < new_width || height < new_height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        if new_width == 0 {
            return Err(SeamError::UnshrinkableDimension(Orientation::Vertical));
        }
        if new_height == 0 {
            return Err(SeamError::UnshrinkableDimension(Orientation::Horizontal));
        }

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<()> {
        let seam = find_seam(&self.energy, orientation);
        self.remove_seam(&seam, orientation)
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.energy.find_horizontal_seam()
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.energy.find_vertical_seam()
    }
}
