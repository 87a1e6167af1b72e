/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use webrank::prelude::*;

fn logger_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_text_roundtrip() -> Result<()> {
    logger_init();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dense.txt");

    let network = DenseGenerator.generate(30);
    network.write_text(BufWriter::new(File::create(&path)?), &Sha256Identifier)?;
    let loaded = Network::read_text(BufReader::new(File::open(&path)?))?;
    assert_eq!(loaded.num_pages(), network.num_pages());

    // Links are stored as identifiers, so the loaded network only works with
    // the identifier used to store it
    let graph = WebGraph::from_network(&network, &Sha256Identifier)?;
    let loaded_graph = WebGraph::from_network(&loaded, &Sha256Identifier)?;
    assert_eq!(graph.ids(), loaded_graph.ids());
    for node in 0..graph.num_nodes() {
        assert_eq!(graph.successors(node), loaded_graph.successors(node));
    }

    let ranks = SequentialPageRank.compute_ranks(&graph, 0.85, 1000, 1E-7)?;
    let loaded_ranks = ParallelPageRank::new(3).compute_ranks(&loaded_graph, 0.85, 1000, 1E-7)?;
    compare_ranks(&ranks, &loaded_ranks, 1E-6)?;
    Ok(())
}

#[test]
fn test_ranks_roundtrip() -> Result<()> {
    let network = SparseGenerator.generate(3000);
    let ranks = SequentialPageRank.compute_for_network(
        &network,
        &PrefixIdentifier::new("p"),
        0.85,
        1000,
        1E-7,
    )?;

    let mut file = tempfile::NamedTempFile::new()?;
    write_ranks(BufWriter::new(file.as_file_mut()), &ranks, None)?;
    let loaded = read_ranks(BufReader::new(File::open(file.path())?))?;
    assert_eq!(loaded, ranks);

    let mut file = tempfile::NamedTempFile::new()?;
    write_ranks(BufWriter::new(file.as_file_mut()), &ranks, Some(4))?;
    let loaded = read_ranks(BufReader::new(File::open(file.path())?))?;
    compare_ranks(&ranks, &loaded, DEFAULT_EPS)?;
    Ok(())
}

#[test]
fn test_identifiers() -> Result<()> {
    let mut network = Network::new();
    let mut a = Page::new("a");
    a.add_link_to("b");
    let mut b = Page::new("b");
    b.add_link_to("a").add_link_to("c");
    network.add_page(a).add_page(b).add_page(Page::new("c"));

    let by_prefix =
        SequentialPageRank.compute_for_network(&network, &PrefixIdentifier::new("x-"), 0.85, 100, 1E-7)?;
    let by_hash = SequentialPageRank.compute_for_network(&network, &Sha256Identifier, 0.85, 100, 1E-7)?;

    let ids = by_prefix.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["x-a", "x-b", "x-c"]);
    assert_eq!(
        by_hash[0].0.as_str(),
        "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"
    );
    // The identifier does not change the ranks
    for ((_, r0), (_, r1)) in by_prefix.iter().zip(&by_hash) {
        assert_eq!(r0, r1);
    }
    // a and c are symmetric
    assert!((by_prefix[0].1 - by_prefix[2].1).abs() < 1E-9);
    assert!(by_prefix[1].1 > by_prefix[0].1);
    Ok(())
}

#[test]
fn test_construction_errors() {
    let mut network = Network::new();
    let mut page = Page::new("a");
    page.add_link_to("missing");
    network.add_page(page);
    assert!(matches!(
        SequentialPageRank.compute_for_network(&network, &Sha256Identifier, 0.85, 100, 1E-7),
        Err(RankError::UnknownLink { .. })
    ));

    let mut network = Network::new();
    network.add_page(Page::new("same")).add_page(Page::new("same"));
    assert!(matches!(
        ParallelPageRank::new(2).compute_for_network(&network, &Sha256Identifier, 0.85, 100, 1E-7),
        Err(RankError::DuplicateNode(_))
    ));
}
