// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Topological sort of the seam digraph
//!
//! A depth-first postorder from the source: a vertex is appended only
//! once all of its children have been.  Read backwards it is a
//! topological order.  The search keeps its own stack of (vertex,
//! remaining children) frames rather than recursing, since a
//! recursive search would go as deep as the picture has pixels.

use crate::seamgraph::{SeamGraph, Successors};

/// A postorder of every vertex reachable from the source.
#[derive(Debug)]
pub struct TopologicalSort {
    postorder: Vec<usize>,
}

impl TopologicalSort {
    pub fn new(graph: &SeamGraph) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut postorder = Vec::with_capacity(graph.vertex_count());
        let mut stack: Vec<(usize, Successors)> = Vec::new();

        let source = graph.source();
        visited[source] = true;
        stack.push((source, graph.successors(source)));

        while let Some((v, children)) = stack.last_mut() {
            match children.find(|w| !visited[*w]) {
                Some(w) => {
                    visited[w] = true;
                    stack.push((w, graph.successors(w)));
                }
                None => {
                    postorder.push(*v);
                    stack.pop();
                }
            }
        }

        TopologicalSort { postorder }
    }

    /// Vertices in the order the search finished them.
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    /// Vertices in topological order, source first.
    pub fn order(&self) -> impl Iterator<Item = usize> + '_ {
        self.postorder.iter().rev().copied()
    }
}
