// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::breakpoints::{Breakend, Breakpoint, Strand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// An observed junction.
    Breakpoint { prediction_id: String },
    /// Joins both strands of the same locus.
    Reference,
    /// Reference sequence between two adjacent loci of a chromosome.
    Segment { length: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, new, CopyGetters, Getters)]
pub struct GenomeEdge {
    #[getset(get_copy = "pub")]
    u: usize,
    #[getset(get_copy = "pub")]
    v: usize,
    #[getset(get = "pub")]
    kind: EdgeKind,
}

/// Breakends joined by breakpoint, reference and segment edges.
///
/// Nodes are indexed in breakend order. Besides the breakends named by the breakpoints,
/// the node set contains their opposite-strand mates, which the reference and segment
/// edges of each locus need.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct GenomeGraph {
    breakends: Vec<Breakend>,
    edges: Vec<GenomeEdge>,
}

impl GenomeGraph {
    pub fn new(breakpoints: &[Breakpoint]) -> Self {
        let observed: BTreeSet<&Breakend> = breakpoints
            .iter()
            .flat_map(|bp| vec![bp.breakend_1(), bp.breakend_2()])
            .collect();

        let breakends: Vec<Breakend> = observed
            .into_iter()
            .flat_map(|breakend| vec![breakend.clone(), breakend.mate()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: BTreeMap<&Breakend, usize> = breakends
            .iter()
            .enumerate()
            .map(|(i, breakend)| (breakend, i))
            .collect();

        let mut edges = Vec::new();

        for breakpoint in breakpoints {
            if breakpoint.breakend_1() == breakpoint.breakend_2() {
                warn!(
                    "breakpoint {} joins breakend {} to itself",
                    breakpoint.prediction_id(),
                    breakpoint.breakend_1()
                );
            }
            edges.push(GenomeEdge::new(
                index[breakpoint.breakend_1()],
                index[breakpoint.breakend_2()],
                EdgeKind::Breakpoint {
                    prediction_id: breakpoint.prediction_id().to_owned(),
                },
            ));
        }

        // Loci are visited sorted by chromosome and position since the breakends are.
        let loci = breakends
            .iter()
            .map(|breakend| (breakend.chromosome(), breakend.position()))
            .dedup()
            .collect_vec();
        for (_, chrom_loci) in &loci.into_iter().group_by(|(chrom, _)| *chrom) {
            let chrom_loci = chrom_loci.collect_vec();
            let node = |(chrom, pos): (&String, u64), strand| {
                index[&Breakend::new(chrom.to_owned(), pos, strand)]
            };

            for &locus in &chrom_loci {
                edges.push(GenomeEdge::new(
                    node(locus, Strand::Plus),
                    node(locus, Strand::Minus),
                    EdgeKind::Reference,
                ));
            }

            for (&start, &end) in chrom_loci.iter().tuple_windows() {
                edges.push(GenomeEdge::new(
                    node(start, Strand::Minus),
                    node(end, Strand::Plus),
                    EdgeKind::Segment {
                        length: end.1 - start.1,
                    },
                ));
            }
        }

        GenomeGraph { breakends, edges }
    }

    pub fn node_count(&self) -> usize {
        self.breakends.len()
    }

    pub fn node(&self, breakend: &Breakend) -> Option<usize> {
        self.breakends.binary_search(breakend).ok()
    }

    pub(crate) fn count_edges<F: Fn(&EdgeKind) -> bool>(&self, predicate: F) -> usize {
        self.edges.iter().filter(|edge| predicate(edge.kind())).count()
    }
}
