/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::generate::{generate, Kind};
use super::{pretty_print_elapsed, GlobalArgs, RankArgs};
use crate::prelude::*;
use anyhow::{ensure, Result};
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "bench",
    about = "Times sequential and parallel PageRank on synthetic networks.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(short, long, value_enum, default_value_t = Kind::Dense)]
    /// The kind of network.
    pub kind: Kind,

    #[arg(short, long, value_delimiter = ',', default_values_t = [100, 1000, 2000])]
    /// The numbers of pages of the networks.
    pub sizes: Vec<usize>,

    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 3, 4, 8], value_parser = super::num_threads_parser)]
    /// The numbers of threads of the parallel computations.
    pub threads: Vec<usize>,

    #[arg(long)]
    /// Skip the sequential computation.
    pub no_sequential: bool,

    #[arg(short, long, default_value_t = 0.01)]
    /// The arc probability of random networks.
    pub probability: f64,

    #[arg(long, default_value_t = 0)]
    /// The seed of random networks.
    pub seed: u64,

    #[arg(short, long, default_value = "sha256")]
    /// How page identifiers are computed from contents ("sha256" or
    /// "prefix:<PREFIX>").
    pub identifier: Identifier,

    #[clap(flatten)]
    pub rank: RankArgs,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let params = args.rank.params();
    for &size in &args.sizes {
        let network = generate(args.kind, size, args.probability, args.seed)?;
        if !args.no_sequential {
            bench(&SequentialPageRank, &network, &args.identifier, params)?;
        }
        for &num_threads in &args.threads {
            bench(
                &ParallelPageRank::new(num_threads),
                &network,
                &args.identifier,
                params,
            )?;
        }
    }
    Ok(())
}

/// Times the computation of PageRank on a network, including the
/// construction of its graph.
fn bench(
    computer: &impl RankComputer,
    network: &Network,
    identify: &impl Identify,
    params: RankParams,
) -> Result<()> {
    let start = Instant::now();
    let ranks = computer.compute_for_network(
        network,
        identify,
        params.alpha,
        params.iterations,
        params.tolerance,
    )?;
    log::info!(
        "PageRank [{} nodes, {}] took {}",
        network.num_pages(),
        computer.name(),
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );
    ensure!(
        ranks.len() == network.num_pages(),
        "Invalid result size {} for a network of {} pages",
        ranks.len(),
        network.num_pages()
    );
    Ok(())
}
