// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.
//!
//! Rather than cropping or scaling, a picture is narrowed (or
//! shortened) by removing the connected path of pixels, one per row
//! (or column), whose total energy is least.  The path is found as a
//! shortest path through an implicit acyclic graph over the pixels.
//!
//! ```no_run
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let image = image::open("in.png").unwrap().to_rgb8();
//! let mut carver = SeamCarver::new(&image).unwrap();
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.picture().save("out.png").unwrap();
//! ```

pub mod ternary;

pub mod errors;
pub use errors::{Result, SeamDefect, SeamError};

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelpairs;

pub mod energy;
pub use energy::{pixel_energy, EnergyMatrix, BORDER_ENERGY};

pub mod flipper;
pub use flipper::{Flipper, Orientation};

pub mod seamgraph;
pub mod topological;

pub mod acyclicsp;
pub use acyclicsp::AcyclicSP;

pub mod seamfinder;
pub use seamfinder::{find_seam, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{validate_seam, SeamCarver};
