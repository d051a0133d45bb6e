use std::collections::HashMap;

use anyhow::{bail, Result};

use balanced_rearrangements::errors::Error;
use balanced_rearrangements::matching::PerfectMatchingSolver;

/// Exact matching for the small graphs of the scenarios below, searching all perfect
/// matchings with memoization over the set of covered nodes (one bit per node).
///
/// The lowest uncovered node is always matched next and its neighbors are tried in
/// ascending order, keeping the first optimum.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Exhaustive;

struct Search {
    adjacency: Vec<Vec<(usize, i64)>>,
    full: u64,
    // best (total cost, partner of the lowest uncovered node) per covered set
    memo: HashMap<u64, Option<(i64, usize)>>,
}

impl Search {
    fn best(&mut self, covered: u64) -> Option<i64> {
        if covered == self.full {
            return Some(0);
        }
        if let Some(entry) = self.memo.get(&covered) {
            return entry.map(|(total, _)| total);
        }

        let node = (!covered).trailing_zeros() as usize;
        let mut best: Option<(i64, usize)> = None;
        for k in 0..self.adjacency[node].len() {
            let (partner, cost) = self.adjacency[node][k];
            if covered & (1 << partner) != 0 {
                continue;
            }
            if let Some(rest) = self.best(covered | (1 << node) | (1 << partner)) {
                let total = cost + rest;
                if best.map_or(true, |(best_total, _)| total < best_total) {
                    best = Some((total, partner));
                }
            }
        }

        self.memo.insert(covered, best);
        best.map(|(total, _)| total)
    }

    fn matching(&self) -> Vec<(usize, usize)> {
        let mut matching = Vec::new();
        let mut covered = 0u64;
        while covered != self.full {
            let node = (!covered).trailing_zeros() as usize;
            let (_, partner) = self.memo[&covered].unwrap();
            matching.push((node, partner));
            covered |= (1 << node) | (1 << partner);
        }
        matching
    }
}

impl PerfectMatchingSolver for Exhaustive {
    fn solve(
        &self,
        node_count: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<Vec<(usize, usize)>> {
        if node_count % 2 != 0 {
            return Err(Error::OddNodeCount { n: node_count }.into());
        }
        assert!(node_count <= 64, "too many nodes for exhaustive matching");
        if node_count == 0 {
            return Ok(Vec::new());
        }

        let mut adjacency = vec![Vec::new(); node_count];
        for &(a, b, cost) in edges {
            adjacency[a].push((b, cost));
            adjacency[b].push((a, cost));
        }
        for neighbors in &mut adjacency {
            neighbors.sort();
        }

        let mut search = Search {
            adjacency,
            full: if node_count == 64 {
                u64::MAX
            } else {
                (1 << node_count) - 1
            },
            memo: HashMap::new(),
        };
        if search.best(0).is_none() {
            bail!("graph has no perfect matching");
        }
        Ok(search.matching())
    }
}
