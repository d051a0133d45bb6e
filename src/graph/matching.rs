// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use anyhow::Result;

use crate::errors::Error;
use crate::graph::modification::{Color, ModificationGraph, SignedEdge};
use crate::parameters::Parameters;

/// What an edge of the matching graph stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Links the red and blue copy of the given node.
    Transverse(usize),
    /// Index into the edges of the modification graph.
    Modification(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct MatchingEdge {
    a: usize,
    b: usize,
    cost: i64,
    origin: Origin,
}

/// Index of the copy of `node` with the given color.
pub fn colored_node(node: usize, color: Color) -> usize {
    match color {
        Color::Red => 2 * node,
        Color::Blue => 2 * node + 1,
    }
}

/// Modification graph node and color a matching graph node is a copy of.
pub fn original_node(colored: usize) -> (usize, Color) {
    let color = if colored % 2 == 0 {
        Color::Red
    } else {
        Color::Blue
    };
    (colored / 2, color)
}

fn key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Node-duplicated graph on which a minimum-weight perfect matching is computed.
///
/// Every node of the modification graph has a red and a blue copy joined by a transverse
/// edge, so the transverse edges alone form a perfect matching. Signed edges with finite
/// cost join the copies of their endpoints that carry their color. Forbidden edges and
/// self-loops are left out. If two signed edges land on the same pair of copies, only the
/// cheaper one (the earlier one on ties) is kept, since a matching can use at most one.
#[derive(Debug)]
pub struct MatchingGraph<'a> {
    modification: &'a ModificationGraph<'a>,
    edges: Vec<MatchingEdge>,
    index: HashMap<(usize, usize), usize>,
}

impl<'a> MatchingGraph<'a> {
    pub fn new(modification: &'a ModificationGraph<'a>, parameters: &Parameters) -> Self {
        let mut graph = MatchingGraph {
            modification,
            edges: Vec::new(),
            index: HashMap::new(),
        };

        let transverse_cost = parameters.scale(parameters.unit_cost());
        for node in 0..modification.node_count() {
            graph.insert(MatchingEdge {
                a: colored_node(node, Color::Red),
                b: colored_node(node, Color::Blue),
                cost: transverse_cost,
                origin: Origin::Transverse(node),
            });
        }

        for (i, signed) in modification.edges().iter().enumerate() {
            if signed.is_forbidden() {
                continue;
            }
            let edge = modification.genome_edge(signed);
            if edge.u() == edge.v() {
                continue;
            }
            graph.insert(MatchingEdge {
                a: colored_node(edge.u(), signed.color()),
                b: colored_node(edge.v(), signed.color()),
                cost: parameters.scale(signed.cost()),
                origin: Origin::Modification(i),
            });
        }

        debug!(
            "matching graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edges.len()
        );

        graph
    }

    fn insert(&mut self, edge: MatchingEdge) {
        let key = key(edge.a, edge.b);
        if let Some(&i) = self.index.get(&key) {
            if edge.cost < self.edges[i].cost {
                debug!(
                    "replacing parallel matching edge {:?} by cheaper {:?}",
                    self.edges[i], edge
                );
                self.edges[i] = edge;
            }
        } else {
            self.index.insert(key, self.edges.len());
            self.edges.push(edge);
        }
    }

    pub fn node_count(&self) -> usize {
        2 * self.modification.node_count()
    }

    pub fn edges(&self) -> &[MatchingEdge] {
        &self.edges
    }

    pub fn modification(&self) -> &'a ModificationGraph<'a> {
        self.modification
    }

    pub fn edge(&self, a: usize, b: usize) -> Option<&MatchingEdge> {
        self.index.get(&key(a, b)).map(|&i| &self.edges[i])
    }

    /// The signed edge a matching edge stands for, `None` for transverse edges.
    pub fn signed_edge(&self, edge: &MatchingEdge) -> Option<&'a SignedEdge> {
        match edge.origin {
            Origin::Transverse(_) => None,
            Origin::Modification(i) => Some(&self.modification.edges()[i]),
        }
    }

    /// Edge list in the form expected by the matching solvers.
    pub fn solver_edges(&self) -> Vec<(usize, usize, i64)> {
        self.edges
            .iter()
            .map(|edge| (edge.a, edge.b, edge.cost))
            .collect()
    }

    /// Look up the edges of a solver result, checking that they form a perfect matching
    /// of this graph.
    pub fn selected(&self, matching: &[(usize, usize)]) -> Result<Vec<&MatchingEdge>> {
        let mut covered = vec![false; self.node_count()];
        let mut selected = Vec::with_capacity(matching.len());

        for &(a, b) in matching {
            let edge = self
                .edge(a, b)
                .ok_or(Error::UnknownMatchingEdge { a, b })?;
            for &node in &[a, b] {
                if covered[node] {
                    return Err(Error::NodeCoveredTwice { node }.into());
                }
                covered[node] = true;
            }
            selected.push(edge);
        }

        if let Some(node) = covered.iter().position(|covered| !covered) {
            return Err(Error::NodeNotCovered { node }.into());
        }

        Ok(selected)
    }
}
