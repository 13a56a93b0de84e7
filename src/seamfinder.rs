// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::acyclicsp::AcyclicSP;
use crate::energy::EnergyMatrix;
use crate::flipper::{Flipper, Orientation};
use crate::seamgraph::SeamGraph;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a horizontal seam: one row index
    /// per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// Find the cheapest seam through an energy matrix in either
/// orientation.  Every query builds its own graph, ordering and
/// tables and throws them away afterwards.
pub fn find_seam(energy: &EnergyMatrix, orientation: Orientation) -> Vec<u32> {
    AcyclicSP::new(SeamGraph::new(Flipper::new(energy, orientation))).seam()
}

impl SeamFinder for EnergyMatrix {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        find_seam(self, Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        find_seam(self, Orientation::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_seam_of_the_transpose_is_vertical() {
        //   3 1 3 3
        //   3 3 1 3
        //   9 1 9 9
        let m = EnergyMatrix::from_pixels(4, 3, &[3, 1, 3, 3, 3, 3, 1, 3, 9, 1, 9, 9]).unwrap();
        assert_eq!(m.find_vertical_seam(), [1, 2, 1]);
        assert_eq!(m.transposed().find_horizontal_seam(), [1, 2, 1]);
        assert_eq!(m.find_horizontal_seam(), m.transposed().find_vertical_seam());
    }
}
