/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::GlobalArgs;
use crate::results::{compare_ranks, read_ranks, DEFAULT_EPS};
use crate::traits::NodeId;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "compare",
    about = "Checks that two rank files contain the same pages with the same ranks up to a tolerance.",
    long_about = None
)]
pub struct CliArgs {
    /// The first rank file.
    pub first: PathBuf,

    /// The second rank file.
    pub second: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_EPS)]
    /// The maximum difference between ranks considered equal.
    pub eps: f64,
}

fn load(path: &Path) -> Result<Vec<(NodeId, f64)>> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    read_ranks(BufReader::new(file))
        .with_context(|| format!("Could not read ranks from {}", path.display()))
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let first = load(&args.first)?;
    let second = load(&args.second)?;
    compare_ranks(&first, &second, args.eps).with_context(|| {
        format!(
            "{} and {} differ",
            args.first.display(),
            args.second.display()
        )
    })?;
    log::info!(
        "The {} ranks in {} and {} agree within {}",
        first.len(),
        args.first.display(),
        args.second.display(),
        args.eps
    );
    Ok(())
}
