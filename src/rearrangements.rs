// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::{HashMap, HashSet};
use std::io;

use anyhow::Result;
use derive_builder::Builder;
use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::unionfind::UnionFind;

use crate::breakpoints::Breakpoint;
use crate::errors::Error;
use crate::graph::genome::{EdgeKind, GenomeGraph};
use crate::graph::matching::{original_node, MatchingEdge, MatchingGraph};
use crate::graph::modification::{ModificationGraph, Sign, SignedEdge};
use crate::matching::{BlossomV, PerfectMatchingSolver};
use crate::parameters::Parameters;

/// Breakpoints that jointly explain a closed set of gains and losses of genomic material.
#[derive(Debug, Clone, PartialEq, Eq, new, CopyGetters, Getters)]
pub struct BalancedRearrangement {
    #[getset(get_copy = "pub")]
    deleted_length: u64,
    #[getset(get_copy = "pub")]
    duplicated_length: u64,
    #[getset(get = "pub")]
    prediction_ids: Vec<String>,
}

/// Map a perfect matching back onto the modification graph and collect one event per
/// connected component that uses at least two distinct breakpoints.
///
/// Selected signed edges are toggled into a graph over the original nodes: an edge
/// selected in both colors cancels out. Components are emitted in order of their
/// smallest node, prediction ids in order of their node pairs.
pub fn reconstruct(
    matching: &MatchingGraph,
    selected: &[&MatchingEdge],
) -> Result<Vec<BalancedRearrangement>> {
    let modification = matching.modification();
    let genome = modification.genome();

    let mut toggled: UnGraphMap<usize, &SignedEdge> = UnGraphMap::new();
    let mut seen = HashSet::new();
    for edge in selected {
        let signed = match matching.signed_edge(edge) {
            Some(signed) => signed,
            // transverse
            None => continue,
        };
        let (u, color) = original_node(edge.a());
        let (v, _) = original_node(edge.b());
        let (u, v) = if u < v { (u, v) } else { (v, u) };
        if !seen.insert((u, v, color)) {
            return Err(Error::RepeatedToggle { u, v }.into());
        }

        if toggled.contains_edge(u, v) {
            toggled.remove_edge(u, v);
        } else {
            toggled.add_edge(u, v, signed);
        }
    }

    let mut edges = toggled
        .all_edges()
        .map(|(u, v, &signed)| if u < v { (u, v, signed) } else { (v, u, signed) })
        .collect_vec();
    edges.sort_by_key(|&(u, v, _)| (u, v));

    let mut components = UnionFind::new(genome.node_count());
    for &(u, v, _) in &edges {
        components.union(u, v);
    }

    // Sorted edges meet each component first at its smallest node.
    let mut order = HashMap::new();
    let mut grouped: Vec<Vec<&SignedEdge>> = Vec::new();
    for &(u, _, signed) in &edges {
        let component = *order.entry(components.find(u)).or_insert_with(|| {
            grouped.push(Vec::new());
            grouped.len() - 1
        });
        grouped[component].push(signed);
    }

    let mut rearrangements = Vec::new();
    for signed_edges in grouped {
        let mut deleted_length = 0;
        let mut duplicated_length = 0;
        let mut prediction_ids = Vec::new();
        for signed in signed_edges {
            match (modification.genome_edge(signed).kind(), signed.sign()) {
                (EdgeKind::Segment { length }, Sign::Plus) => duplicated_length += *length,
                (EdgeKind::Segment { length }, Sign::Minus) => deleted_length += *length,
                (EdgeKind::Breakpoint { prediction_id }, _) => {
                    prediction_ids.push(prediction_id.clone())
                }
                (EdgeKind::Reference, _) => (),
            }
        }
        let prediction_ids = prediction_ids.into_iter().unique().collect_vec();

        if prediction_ids.len() < 2 {
            debug!(
                "skipping component with {} breakpoint(s)",
                prediction_ids.len()
            );
            continue;
        }
        debug!(
            "balanced rearrangement of {}: deleted {}, duplicated {}",
            prediction_ids.join(","),
            deleted_length,
            duplicated_length
        );
        rearrangements.push(BalancedRearrangement::new(
            deleted_length,
            duplicated_length,
            prediction_ids,
        ));
    }

    Ok(rearrangements)
}

/// Detects balanced rearrangements among breakpoints using the given cost parameters and
/// matching solver (Blossom V unless set otherwise).
#[derive(Builder, Debug)]
#[builder(pattern = "owned")]
pub struct Detector {
    #[builder(default)]
    parameters: Parameters,
    #[builder(default = "Box::new(BlossomV::default())")]
    solver: Box<dyn PerfectMatchingSolver>,
}

impl Detector {
    pub fn detect(&self, breakpoints: &[Breakpoint]) -> Result<Vec<BalancedRearrangement>> {
        self.parameters.validate()?;

        let genome = GenomeGraph::new(breakpoints);
        info!(
            "genome graph: {} breakends, {} breakpoint, {} reference and {} segment edges",
            genome.node_count(),
            genome.count_edges(|kind| matches!(kind, EdgeKind::Breakpoint { .. })),
            genome.count_edges(|kind| *kind == EdgeKind::Reference),
            genome.count_edges(|kind| matches!(kind, EdgeKind::Segment { .. })),
        );

        let modification = ModificationGraph::new(&genome, &self.parameters);
        let matching = MatchingGraph::new(&modification, &self.parameters);

        let solution = self
            .solver
            .solve(matching.node_count(), &matching.solver_edges())?;
        let selected = matching.selected(&solution)?;
        info!(
            "minimum cost perfect matching: total cost {}",
            selected.iter().map(|edge| edge.cost()).sum::<i64>()
        );

        let rearrangements = reconstruct(&matching, &selected)?;
        info!(
            "found {} balanced rearrangement(s)",
            rearrangements.len()
        );

        Ok(rearrangements)
    }
}

/// Detect balanced rearrangements among the given breakpoints.
pub fn detect_balanced_rearrangements(
    breakpoints: &[Breakpoint],
    parameters: Parameters,
    solver: Box<dyn PerfectMatchingSolver>,
) -> Result<Vec<BalancedRearrangement>> {
    DetectorBuilder::default()
        .parameters(parameters)
        .solver(solver)
        .build()?
        .detect(breakpoints)
}

#[derive(Debug, Serialize)]
struct RearrangementRecord<'a> {
    deleted_length: u64,
    duplicated_length: u64,
    prediction_ids: &'a str,
}

/// Write rearrangements as a tab separated table, one row per event, prediction ids
/// joined by commas.
pub fn write_rearrangements<W: io::Write>(
    writer: W,
    rearrangements: &[BalancedRearrangement],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    if rearrangements.is_empty() {
        writer.write_record(&["deleted_length", "duplicated_length", "prediction_ids"])?;
    }
    for rearrangement in rearrangements {
        let prediction_ids = rearrangement.prediction_ids().join(",");
        writer.serialize(RearrangementRecord {
            deleted_length: rearrangement.deleted_length(),
            duplicated_length: rearrangement.duplicated_length(),
            prediction_ids: &prediction_ids,
        })?;
    }
    writer.flush()?;
    Ok(())
}
