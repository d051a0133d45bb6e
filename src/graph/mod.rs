// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The three graphs of the rearrangement model, each derived from the previous one:
//! the genome graph over breakends, the signed and colored modification graph, and
//! the color-duplicated matching graph handed to the solver.

pub mod genome;
pub mod matching;
pub mod modification;

pub use genome::{EdgeKind, GenomeEdge, GenomeGraph};
pub use matching::{MatchingEdge, MatchingGraph, Origin};
pub use modification::{Color, ModificationGraph, Sign, SignedEdge};
