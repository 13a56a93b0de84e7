// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Acyclic shortest paths through the seam digraph
//!
//! Because the graph has no cycles, a single pass over the vertices in
//! topological order, relaxing every outgoing edge, settles the
//! distance to every vertex.  The weight of an edge is the energy of
//! the pixel it leads into, so the distance to the sink is the total
//! energy of the cheapest seam, and walking the back pointers from the
//! sink spells the seam out.
//!
//! When two seams cost the same, the one relaxed first wins.  Which
//! one that is depends on the traversal order and is not part of any
//! contract.

use crate::seamgraph::SeamGraph;
use crate::topological::TopologicalSort;
use tracing::trace;

/// The distance and back-pointer tables for one seam query.
#[derive(Debug)]
pub struct AcyclicSP<'a> {
    graph: SeamGraph<'a>,
    dist_to: Vec<u64>,
    edge_to: Vec<usize>,
}

impl<'a> AcyclicSP<'a> {
    /// Run the search from the graph's source.
    pub fn new(graph: SeamGraph<'a>) -> Self {
        let count = graph.vertex_count();
        let mut sp = AcyclicSP {
            graph,
            dist_to: vec![u64::MAX; count],
            edge_to: (0..count).collect(),
        };
        sp.dist_to[graph.source()] = 0;

        let topo = TopologicalSort::new(&graph);
        for v in topo.order() {
            for w in graph.successors(v) {
                sp.relax(v, w);
            }
        }
        sp
    }

    fn relax(&mut self, v: usize, w: usize) {
        let candidate = self.dist_to[v].saturating_add(u64::from(self.graph.weight(w)));
        if self.dist_to[w] > candidate {
            self.dist_to[w] = candidate;
            self.edge_to[w] = v;
        }
    }

    /// The total energy of the cheapest path from the source to `v`.
    /// `None` if `v` cannot be reached.
    pub fn distance_to(&self, v: usize) -> Option<u64> {
        self.dist_to.get(v).copied().filter(|d| *d != u64::MAX)
    }

    /// The vertex `v` was reached from.  A vertex that was never
    /// reached (and the source) points at itself.
    pub fn edge_to(&self, v: usize) -> usize {
        self.edge_to[v]
    }

    /// The total energy of the cheapest seam.
    pub fn seam_energy(&self) -> u64 {
        self.distance_to(self.graph.sink()).unwrap_or(u64::MAX)
    }

    /// The pixel vertices of the cheapest seam, from the first row to
    /// the last.
    pub fn path(&self) -> Vec<usize> {
        let (source, sink) = (self.graph.source(), self.graph.sink());
        let mut path = Vec::new();
        let mut v = self.edge_to[sink];
        while v != source && v != self.edge_to[v] {
            path.push(v);
            v = self.edge_to[v];
        }
        path.reverse();
        path
    }

    /// The cheapest seam, as one position per step: a column index per
    /// row for vertical seams, a row index per column for horizontal
    /// ones.
    pub fn seam(&self) -> Vec<u32> {
        let view = self.graph.view();
        let seam: Vec<u32> = self.path().into_iter().map(|v| view.position(v).0).collect();
        trace!(
            orientation = %view.orientation(),
            energy = self.seam_energy(),
            "found seam"
        );
        seam
    }
}
