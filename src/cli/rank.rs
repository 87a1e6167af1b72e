/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{create_output, read_network, CliPolicy, GlobalArgs, NumThreadsArg, RankArgs};
use crate::prelude::*;
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{progress_logger, ProgressLog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rank",
    about = "Computes the PageRank of a network in text format.",
    long_about = None
)]
pub struct CliArgs {
    /// The network, or "-" for standard input.
    pub input: PathBuf,

    #[arg(short, long)]
    /// Where to store the ranks (standard output if missing).
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "sha256")]
    /// How page identifiers are computed from contents ("sha256" or
    /// "prefix:<PREFIX>").
    pub identifier: Identifier,

    #[arg(long, value_enum, default_value_t = CliPolicy::RoundRobin)]
    /// How nodes are assigned to threads.
    pub policy: CliPolicy,

    #[arg(long)]
    /// Decimal digits of the ranks in the output.
    pub precision: Option<usize>,

    #[clap(flatten)]
    pub rank: RankArgs,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let network = read_network(&args.input)?;
    let graph = WebGraph::from_network(&network, &args.identifier)?;
    log::info!(
        "Graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    );

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let mut ranks = compute(
        &graph,
        args.rank.params(),
        args.num_threads.num_threads,
        args.policy.into(),
        &mut pl,
    )?;

    ranks.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    write_ranks(
        create_output(args.output.as_deref())?,
        &ranks,
        args.precision,
    )?;

    Ok(())
}

/// Computes PageRank sequentially if `num_threads` is one, and in parallel
/// otherwise.
pub fn compute(
    graph: &WebGraph,
    params: RankParams,
    num_threads: usize,
    policy: Policy,
    pl: &mut impl ProgressLog,
) -> Result<Vec<(NodeId, f64)>> {
    Ok(if num_threads == 1 {
        SequentialPageRank.compute_ranks_with_logging(graph, params, pl)?
    } else {
        ParallelPageRank::new(num_threads)
            .policy(policy)
            .compute_ranks_with_logging(graph, params, pl)?
    })
}
