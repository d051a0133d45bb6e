// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use anyhow::Result;

pub mod blossom_v;

pub use blossom_v::{BlossomV, BlossomVBuilder};

/// A minimum-weight perfect matching algorithm for general graphs.
pub trait PerfectMatchingSolver: Debug {
    /// Select edges from `edges` (given as `(a, b, cost)` over nodes `0..node_count`) such
    /// that every node is covered exactly once and the total cost is minimal.
    fn solve(&self, node_count: usize, edges: &[(usize, usize, i64)])
        -> Result<Vec<(usize, usize)>>;
}
