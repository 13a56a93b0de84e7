// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up: the classic
//! d(R)² + d(G)² + d(B)².

use image::Pixel;
use std::iter::zip;

/// (Pixel, Pixel) -> Energy
///
/// Takes the color channels from two 8-bit pixels, squares the
/// difference of each channel, and sums them up:
///
/// ```text
///        |Δ|² = (Δr)² + (Δg)² + (Δb)²
/// ```
///
/// Alpha, if present, is ignored.  The result is at most 3·255².
#[inline]
pub fn energy_of_pair<P>(p1: &P, p2: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    zip(p1.to_rgb().0, p2.to_rgb().0)
        .map(|(a, b)| {
            let d = u32::from(a.abs_diff(b));
            d * d
        })
        .sum()
}
