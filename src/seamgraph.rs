// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam digraph
//!
//! Every pixel is a vertex, plus a virtual source above the first row
//! and a virtual sink below the last.  Edges only ever run from one
//! row to the next, so the graph is acyclic.  The edges are never
//! stored: each vertex's children are worked out from its number when
//! asked for.
//!
//! ```text
//!                     source
//!                  /  |  |  |  \
//!    row 0:       o   o  o  o   o
//!                 |\ /|\/|\/|\ /|
//!    row 1:       o   o  o  o   o
//!                  \  |  |  |  /
//!                      sink
//! ```

use crate::cq;
use crate::flipper::Flipper;
use std::ops::Range;

/// The children of one vertex, in ascending order.
#[derive(Debug, Clone)]
pub enum Successors {
    /// A contiguous run of vertices: the whole first row for the
    /// source, or the two or three vertices below a pixel.
    Span(Range<usize>),
    /// The sink, or nothing at all once it is taken.
    One(Option<usize>),
}

impl Iterator for Successors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Successors::Span(range) => range.next(),
            Successors::One(vertex) => vertex.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Successors::Span(range) => range.size_hint(),
            Successors::One(vertex) => {
                let n = vertex.iter().count();
                (n, Some(n))
            }
        }
    }
}

impl ExactSizeIterator for Successors {}

/// The implicit seam digraph over an oriented energy matrix.
#[derive(Debug, Copy, Clone)]
pub struct SeamGraph<'a> {
    view: Flipper<'a>,
}

impl<'a> SeamGraph<'a> {
    pub fn new(view: Flipper<'a>) -> Self {
        SeamGraph { view }
    }

    pub fn view(&self) -> &Flipper<'a> {
        &self.view
    }

    pub fn vertex_count(&self) -> usize {
        self.view.vertex_count()
    }

    pub fn source(&self) -> usize {
        self.view.source()
    }

    pub fn sink(&self) -> usize {
        self.view.sink()
    }

    /// The weight of every edge into `v`.
    pub fn weight(&self, v: usize) -> u32 {
        self.view.energy(v)
    }

    /// The children of `v`.
    pub fn successors(&self, v: usize) -> Successors {
        let across = self.view.across() as usize;
        let sink = self.sink();
        if v == self.source() {
            return Successors::Span(1..across + 1);
        }
        if v >= sink {
            return Successors::One(None);
        }
        // Bottom row.
        if v + across >= sink {
            return Successors::One(Some(sink));
        }
        if across == 1 {
            return Successors::One(Some(v + 1));
        }
        let (col, _) = self.view.position(v);
        let below = v + across;
        let left = cq!(col == 0, below, below - 1);
        let right = cq!(col as usize == across - 1, below, below + 1);
        Successors::Span(left..right + 1)
    }
}
