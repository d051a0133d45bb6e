// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

// Deleting a base is four times cheaper than duplicating it.
pub const DEFAULT_DEC_RATE: f64 = 2000.0;
pub const DEFAULT_INC_RATE: f64 = 500.0;
pub const DEFAULT_REF_COST_RESOLUTION: f64 = 1000.0;

/// Executable name of the Blossom V solver.
pub const BLOSSOM_V_EXECUTABLE: &str = "blossom5";
