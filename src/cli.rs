// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use crate::breakpoints::read_breakpoints_from_path;
use crate::matching::BlossomVBuilder;
use crate::parameters::ParametersBuilder;
use crate::rearrangements::{write_rearrangements, DetectorBuilder};

#[derive(Debug, StructOpt, Clone)]
#[structopt(
    name = "balanced-rearrangements",
    about = "Detect balanced rearrangements among structural variant breakpoints."
)]
pub enum BalancedRearrangements {
    #[structopt(
        name = "detect",
        about = "Group breakpoints into balanced rearrangements by solving a minimum-weight perfect matching on the breakend graph."
    )]
    Detect {
        #[structopt(
            parse(from_os_str),
            help = "TSV file with breakpoints (columns chromosome_1, position_1, strand_1, chromosome_2, strand_2, position_2, prediction_id)."
        )]
        breakpoints: PathBuf,
        #[structopt(
            parse(from_os_str),
            long,
            help = "TSV file that shall contain the rearrangements (if omitted, write to STDOUT)."
        )]
        output: Option<PathBuf>,
        #[structopt(
            long = "dec-rate",
            default_value = "2000",
            help = "Deleted bases per unit of cost."
        )]
        dec_rate: f64,
        #[structopt(
            long = "inc-rate",
            default_value = "500",
            help = "Duplicated bases per unit of cost."
        )]
        inc_rate: f64,
        #[structopt(
            long = "ref-cost-resolution",
            default_value = "1000",
            help = "Resolution of the cost model. Costs are multiplied by this value and rounded for the matching solver; reference edges cost its inverse."
        )]
        ref_cost_resolution: f64,
        #[structopt(
            parse(from_os_str),
            long = "blossom-v",
            default_value = "blossom5",
            help = "Path to the Blossom V executable used for the minimum-weight perfect matching."
        )]
        blossom_v: PathBuf,
        #[structopt(
            parse(from_os_str),
            long = "problems-folder",
            help = "Folder to keep the matching problems handed to Blossom V in."
        )]
        problems_folder: Option<PathBuf>,
        #[structopt(long, short, help = "Print debug information.")]
        verbose: bool,
    },
}

impl BalancedRearrangements {
    pub fn verbose(&self) -> bool {
        match self {
            BalancedRearrangements::Detect { verbose, .. } => *verbose,
        }
    }
}

pub fn run(opt: BalancedRearrangements) -> Result<()> {
    match opt {
        BalancedRearrangements::Detect {
            ref breakpoints,
            ref output,
            dec_rate,
            inc_rate,
            ref_cost_resolution,
            ref blossom_v,
            ref problems_folder,
            ..
        } => {
            let parameters = ParametersBuilder::default()
                .dec_rate(dec_rate)
                .inc_rate(inc_rate)
                .ref_cost_resolution(ref_cost_resolution)
                .build()?;
            let solver = BlossomVBuilder::default()
                .executable(blossom_v.clone())
                .problems_folder(problems_folder.clone())
                .build()?;

            let breakpoints = read_breakpoints_from_path(breakpoints)?;
            let rearrangements = DetectorBuilder::default()
                .parameters(parameters)
                .solver(Box::new(solver))
                .build()?
                .detect(&breakpoints)?;

            match output {
                Some(path) => write_rearrangements(File::create(path)?, &rearrangements)?,
                None => write_rearrangements(io::stdout(), &rearrangements)?,
            }
        }
    }
    Ok(())
}
