// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("breakpoint table row {row} has invalid strand '{value}', must be '+' or '-'")]
    InvalidStrand { row: usize, value: String },
    #[error("breakpoint table row {row} lacks a value for {field}")]
    MissingField { row: usize, field: String },
    #[error("invalid parameter {name}={value}: rates have to be positive and finite")]
    InvalidRate { name: String, value: f64 },
    #[error("matching graph has an odd number of nodes ({n}), no perfect matching exists")]
    OddNodeCount { n: usize },
    #[error("solver selected edge ({a}, {b}) which is not part of the matching graph")]
    UnknownMatchingEdge { a: usize, b: usize },
    #[error("solver left matching graph node {node} uncovered")]
    NodeNotCovered { node: usize },
    #[error("solver covered matching graph node {node} more than once")]
    NodeCoveredTwice { node: usize },
    #[error("node pair ({u}, {v}) was selected twice with the same color")]
    RepeatedToggle { u: usize, v: usize },
    #[error("matching solver failed: {msg}")]
    SolverFailed { msg: String },
}

pub(crate) fn solver_failed(msg: &str) -> Error {
    Error::SolverFailed {
        msg: msg.to_owned(),
    }
}
