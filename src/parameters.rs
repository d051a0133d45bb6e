// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use derive_builder::Builder;

use crate::constants::{DEFAULT_DEC_RATE, DEFAULT_INC_RATE, DEFAULT_REF_COST_RESOLUTION};
use crate::errors::Error;

/// Tunable rates of the modification cost model.
///
/// Costs handed to the matching solver are integers: every cost is multiplied by
/// `ref_cost_resolution` and rounded to the nearest integer. Reference and transverse
/// edges cost `1 / ref_cost_resolution`, i.e. exactly one unit after scaling. Changing
/// the resolution therefore changes how segment costs are rounded against each other.
#[derive(Debug, Clone, PartialEq, CopyGetters, Builder)]
#[getset(get_copy = "pub")]
pub struct Parameters {
    /// Bases deleted per unit of cost.
    #[builder(default = "DEFAULT_DEC_RATE")]
    dec_rate: f64,
    /// Bases duplicated per unit of cost.
    #[builder(default = "DEFAULT_INC_RATE")]
    inc_rate: f64,
    #[builder(default = "DEFAULT_REF_COST_RESOLUTION")]
    ref_cost_resolution: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            dec_rate: DEFAULT_DEC_RATE,
            inc_rate: DEFAULT_INC_RATE,
            ref_cost_resolution: DEFAULT_REF_COST_RESOLUTION,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in &[
            ("dec_rate", self.dec_rate),
            ("inc_rate", self.inc_rate),
            ("ref_cost_resolution", self.ref_cost_resolution),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                return Err(Error::InvalidRate {
                    name: (*name).to_owned(),
                    value: *value,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Cost of reference and transverse edges before scaling.
    pub fn unit_cost(&self) -> f64 {
        1.0 / self.ref_cost_resolution
    }

    /// Scale a finite cost to the integer domain of the matching solver.
    pub fn scale(&self, cost: f64) -> i64 {
        (cost * self.ref_cost_resolution).round() as i64
    }
}
