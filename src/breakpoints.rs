// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::errors::Error;

/// Side of a junction. `Plus` faces towards lower positions (the breakend closes the
/// segment to its left), `Minus` towards higher positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    pub fn opposite(self) -> Self {
        match self {
            Strand::Plus => Strand::Minus,
            Strand::Minus => Strand::Plus,
        }
    }
}

impl FromStr for Strand {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(anyhow!("invalid strand '{}', must be '+' or '-'", value)),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
        })
    }
}

/// One side of a structural variant junction. Identity is structural; the derived
/// ordering (chromosome, position, strand) is the node order of all graphs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new, Getters, CopyGetters)]
pub struct Breakend {
    #[getset(get = "pub")]
    chromosome: String,
    #[getset(get_copy = "pub")]
    position: u64,
    #[getset(get_copy = "pub")]
    strand: Strand,
}

impl Breakend {
    /// The breakend at the same locus facing the other way.
    pub fn mate(&self) -> Self {
        Breakend::new(self.chromosome.clone(), self.position, self.strand.opposite())
    }

    pub fn is_same_locus(&self, other: &Breakend) -> bool {
        self.chromosome == other.chromosome && self.position == other.position
    }
}

impl fmt::Display for Breakend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}{}", self.chromosome, self.position, self.strand)
    }
}

/// A candidate structural variant call joining two breakends.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
#[getset(get = "pub")]
pub struct Breakpoint {
    breakend_1: Breakend,
    breakend_2: Breakend,
    prediction_id: String,
}

// Columns of the breakpoint table. Everything is optional here so that incomplete rows are
// reported with their row number instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
struct BreakpointRecord {
    chromosome_1: Option<String>,
    position_1: Option<u64>,
    strand_1: Option<String>,
    chromosome_2: Option<String>,
    strand_2: Option<String>,
    position_2: Option<u64>,
    prediction_id: Option<String>,
}

fn required<T>(value: Option<T>, row: usize, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        Error::MissingField {
            row,
            field: field.to_owned(),
        }
        .into()
    })
}

fn required_str(value: Option<String>, row: usize, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField {
            row,
            field: field.to_owned(),
        }
        .into()),
    }
}

fn required_strand(value: Option<String>, row: usize, field: &str) -> Result<Strand> {
    let value = required_str(value, row, field)?;
    value
        .parse()
        .map_err(|_| Error::InvalidStrand { row, value }.into())
}

impl BreakpointRecord {
    fn into_breakpoint(self, row: usize) -> Result<Breakpoint> {
        let breakend_1 = Breakend::new(
            required_str(self.chromosome_1, row, "chromosome_1")?,
            required(self.position_1, row, "position_1")?,
            required_strand(self.strand_1, row, "strand_1")?,
        );
        let breakend_2 = Breakend::new(
            required_str(self.chromosome_2, row, "chromosome_2")?,
            required(self.position_2, row, "position_2")?,
            required_strand(self.strand_2, row, "strand_2")?,
        );
        Ok(Breakpoint::new(
            breakend_1,
            breakend_2,
            required_str(self.prediction_id, row, "prediction_id")?,
        ))
    }
}

/// Read a tab separated breakpoint table with a header line. Additional columns are ignored.
pub fn read_breakpoints<R: io::Read>(reader: R) -> Result<Vec<Breakpoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let mut breakpoints = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let record: BreakpointRecord = record?;
        breakpoints.push(record.into_breakpoint(i + 1)?);
    }
    debug!("read {} breakpoints", breakpoints.len());

    Ok(breakpoints)
}

pub fn read_breakpoints_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Breakpoint>> {
    read_breakpoints(std::fs::File::open(path)?)
}
