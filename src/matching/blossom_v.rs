// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::{self, create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use derive_builder::Builder;

use crate::constants::BLOSSOM_V_EXECUTABLE;
use crate::errors::{self, Error};
use crate::matching::PerfectMatchingSolver;

/// Adapter for the Blossom V implementation of Kolmogorov (2009), run as an external
/// process.
///
/// The graph is passed as an edge file (`N M` followed by one `a b cost` line per edge)
/// and the matching is read back from the file written via `-w` (`N N/2` followed by one
/// `a b` line per matched pair).
#[derive(Builder, Debug, Clone)]
#[builder(pattern = "owned")]
pub struct BlossomV {
    #[builder(default = "PathBuf::from(BLOSSOM_V_EXECUTABLE)")]
    executable: PathBuf,
    /// Keep a copy of each edge file in this folder.
    #[builder(default)]
    problems_folder: Option<PathBuf>,
}

impl Default for BlossomV {
    fn default() -> Self {
        BlossomV {
            executable: PathBuf::from(BLOSSOM_V_EXECUTABLE),
            problems_folder: None,
        }
    }
}

impl BlossomV {
    fn write_problem(
        &self,
        path: &Path,
        node_count: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{} {}", node_count, edges.len())?;
        for (a, b, cost) in edges {
            writeln!(writer, "{} {} {}", a, b, cost)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn keep_problem(&self, problem: &Path) -> Result<()> {
        if let Some(ref folder) = self.problems_folder {
            create_dir_all(folder)?;
            let target = tempfile::Builder::new()
                .prefix("matching-problem-")
                .suffix(".txt")
                .tempfile_in(folder)?
                .into_temp_path()
                .keep()?;
            fs::copy(problem, &target)?;
            debug!("kept matching problem in {}", target.display());
        }
        Ok(())
    }
}

pub(crate) fn parse_matching(content: &str, node_count: usize) -> Result<Vec<(usize, usize)>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| errors::solver_failed("empty matching file"))?;
    let header: Vec<usize> = header
        .split_whitespace()
        .map(|field| field.parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if header.len() != 2 || header[0] != node_count || header[1] != node_count / 2 {
        return Err(errors::solver_failed(&format!(
            "unexpected matching file header, expected '{} {}'",
            node_count,
            node_count / 2
        ))
        .into());
    }

    let mut matching = Vec::with_capacity(node_count / 2);
    for line in lines {
        let pair: Vec<usize> = line
            .split_whitespace()
            .map(|field| field.parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if pair.len() != 2 {
            return Err(errors::solver_failed(&format!("invalid matching line '{}'", line)).into());
        }
        matching.push((pair[0], pair[1]));
    }
    Ok(matching)
}

impl PerfectMatchingSolver for BlossomV {
    fn solve(
        &self,
        node_count: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<Vec<(usize, usize)>> {
        if node_count % 2 != 0 {
            return Err(Error::OddNodeCount { n: node_count }.into());
        }
        if node_count == 0 {
            return Ok(Vec::new());
        }

        let workdir = tempfile::tempdir()?;
        let problem = workdir.path().join("edges.txt");
        let solution = workdir.path().join("matching.txt");
        self.write_problem(&problem, node_count, edges)?;
        self.keep_problem(&problem)?;

        info!(
            "running {} on {} nodes and {} edges",
            self.executable.display(),
            node_count,
            edges.len()
        );
        let output = Command::new(&self.executable)
            .arg("-e")
            .arg(&problem)
            .arg("-w")
            .arg(&solution)
            .output()
            .map_err(|err| {
                errors::solver_failed(&format!(
                    "unable to run {}: {}",
                    self.executable.display(),
                    err
                ))
            })?;
        if !output.status.success() {
            return Err(errors::solver_failed(&format!(
                "{} exited with {}: {}",
                self.executable.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
            .into());
        }

        parse_matching(&fs::read_to_string(&solution)?, node_count)
    }
}

/// Write a stand-in for the Blossom V executable into `dir`. It checks the calling
/// convention and the header of the edge file, then answers with the given matching.
#[cfg(test)]
pub(crate) fn scripted_executable(
    dir: &Path,
    problem_header: &str,
    matching: &[(usize, usize)],
) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let mut answer = format!("'{} {}'", 2 * matching.len(), matching.len());
    for (a, b) in matching {
        answer.push_str(&format!(" '{} {}'", a, b));
    }
    let script = format!(
        "#!/bin/sh\n\
         [ \"$1\" = -e ] && [ \"$3\" = -w ] || exit 2\n\
         [ \"$(head -n 1 \"$2\")\" = '{}' ] || {{ echo \"unexpected problem\" >&2; exit 1; }}\n\
         printf '%s\\n' {} > \"$4\"\n",
        problem_header, answer
    );

    let path = dir.join("blossom5");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
