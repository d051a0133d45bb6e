// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use itertools::Itertools;

use crate::graph::genome::{EdgeKind, GenomeEdge, GenomeGraph};
use crate::parameters::Parameters;

/// Direction in which an edge of the genome graph is modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Gain: a segment is duplicated, a breakpoint is used.
    Plus,
    /// Loss: a segment is deleted.
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Sign {
    pub fn values() -> [Sign; 2] {
        [Sign::Plus, Sign::Minus]
    }
}

/// A signed copy of a genome graph edge.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SignedEdge {
    /// Index into the edges of the genome graph.
    edge: usize,
    sign: Sign,
    color: Color,
    /// Infinite if the modification is forbidden.
    cost: f64,
}

impl SignedEdge {
    pub fn is_forbidden(&self) -> bool {
        self.cost.is_infinite()
    }
}

/// Color and unscaled cost of modifying an edge of the given kind in the given direction.
pub fn color_and_cost(kind: &EdgeKind, sign: Sign, parameters: &Parameters) -> (Color, f64) {
    match (kind, sign) {
        (EdgeKind::Segment { length }, Sign::Plus) => {
            (Color::Red, *length as f64 / parameters.inc_rate())
        }
        (EdgeKind::Segment { length }, Sign::Minus) => {
            (Color::Blue, *length as f64 / parameters.dec_rate())
        }
        // Explaining an observed junction is rewarded, removing one is impossible.
        (EdgeKind::Breakpoint { .. }, Sign::Plus) => (Color::Blue, -1.0),
        (EdgeKind::Breakpoint { .. }, Sign::Minus) => (Color::Red, f64::INFINITY),
        (EdgeKind::Reference, Sign::Plus) => (Color::Blue, parameters.unit_cost()),
        (EdgeKind::Reference, Sign::Minus) => (Color::Red, parameters.unit_cost()),
    }
}

/// The genome graph with two signed, colored and costed copies of every edge.
#[derive(Debug, CopyGetters, Getters)]
pub struct ModificationGraph<'a> {
    #[getset(get_copy = "pub")]
    genome: &'a GenomeGraph,
    #[getset(get = "pub")]
    edges: Vec<SignedEdge>,
}

impl<'a> ModificationGraph<'a> {
    pub fn new(genome: &'a GenomeGraph, parameters: &Parameters) -> Self {
        let edges = genome
            .edges()
            .iter()
            .enumerate()
            .flat_map(|(i, edge)| {
                Sign::values()
                    .iter()
                    .map(|&sign| {
                        let (color, cost) = color_and_cost(edge.kind(), sign, parameters);
                        SignedEdge {
                            edge: i,
                            sign,
                            color,
                            cost,
                        }
                    })
                    .collect_vec()
            })
            .collect();

        ModificationGraph { genome, edges }
    }

    pub fn node_count(&self) -> usize {
        self.genome.node_count()
    }

    /// The genome graph edge the signed edge is a copy of.
    pub fn genome_edge(&self, edge: &SignedEdge) -> &'a GenomeEdge {
        &self.genome.edges()[edge.edge]
    }
}
