// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate getset;

pub mod breakpoints;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod matching;
pub mod parameters;
pub mod rearrangements;

pub use crate::breakpoints::{Breakend, Breakpoint, Strand};
pub use crate::parameters::{Parameters, ParametersBuilder};
pub use crate::rearrangements::{
    detect_balanced_rearrangements, BalancedRearrangement, Detector, DetectorBuilder,
};
