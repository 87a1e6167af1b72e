/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{create_output, GlobalArgs};
use crate::graph::generators::*;
use crate::graph::Network;
use crate::ident::Identifier;
use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// The kind of synthetic network.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Kind {
    /// Every page links to a large, irregular set of pages.
    Dense,
    /// A small connected core, a few sparse links, and many dangling pages.
    Sparse,
    /// Every arc is present independently with a given probability.
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "generate",
    about = "Writes a synthetic network in text format.",
    long_about = None
)]
pub struct CliArgs {
    /// The kind of network.
    #[arg(value_enum)]
    pub kind: Kind,

    /// The number of pages.
    pub size: usize,

    #[arg(short, long)]
    /// Where to store the network (standard output if missing).
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value_t = 0.01)]
    /// The arc probability of random networks.
    pub probability: f64,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of random networks.
    pub seed: u64,

    #[arg(short, long, default_value = "sha256")]
    /// How link identifiers are computed from contents ("sha256" or
    /// "prefix:<PREFIX>").
    pub identifier: Identifier,
}

/// Generates a network of the given kind.
pub fn generate(kind: Kind, size: usize, probability: f64, seed: u64) -> Result<Network> {
    Ok(match kind {
        Kind::Dense => DenseGenerator.generate(size),
        Kind::Sparse => SparseGenerator.generate(size),
        Kind::Random => {
            ensure!(
                (0.0..=1.0).contains(&probability),
                "The arc probability must be in [0 . . 1], got {}",
                probability
            );
            RandomGenerator::new(probability, seed).generate(size)
        }
    })
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    log::info!("Generating a {:?} network with {} pages", args.kind, args.size);
    let network = generate(args.kind, args.size, args.probability, args.seed)?;
    network.write_text(create_output(args.output.as_deref())?, &args.identifier)?;
    Ok(())
}
