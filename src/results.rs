/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Storing, loading and comparing rank vectors.
//!
//! Rank vectors are stored as text, one `id<TAB>rank` pair per line.

use crate::traits::NodeId;
use anyhow::{anyhow, bail, ensure, Context, Result};
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// The default maximum difference between ranks considered equal.
pub const DEFAULT_EPS: f64 = 1E-3;

/// Checks that two rank vectors contain the same identifiers, and that the
/// ranks of each identifier differ by less than `eps`.
///
/// The order of pairs is irrelevant. On failure, the error describes the
/// first mismatch in identifier order.
///
/// ```
/// use webrank::prelude::*;
///
/// let a = vec![(NodeId::from("x"), 0.5), (NodeId::from("y"), 0.5)];
/// let b = vec![(NodeId::from("y"), 0.5001), (NodeId::from("x"), 0.4999)];
/// assert!(compare_ranks(&a, &b, DEFAULT_EPS).is_ok());
/// assert!(compare_ranks(&a, &b, 1E-6).is_err());
/// ```
pub fn compare_ranks(a: &[(NodeId, f64)], b: &[(NodeId, f64)], eps: f64) -> Result<()> {
    ensure!(
        a.len() == b.len(),
        "Different number of ranks: {} != {}",
        a.len(),
        b.len()
    );

    let mut a = a.iter().collect::<Vec<_>>();
    let mut b = b.iter().collect::<Vec<_>>();
    a.sort_unstable_by(|(x, _), (y, _)| x.cmp(y));
    b.sort_unstable_by(|(x, _), (y, _)| x.cmp(y));

    for (i, ((id_a, rank_a), (id_b, rank_b))) in a.iter().zip(&b).enumerate() {
        ensure!(id_a == id_b, "Different identifiers: {} != {}", id_a, id_b);
        if i > 0 && a[i - 1].0 == *id_a {
            bail!("Duplicate identifier {}", id_a);
        }
        ensure!(
            (rank_a - rank_b).abs() < eps,
            "Ranks of {} differ by more than {}: {} != {}",
            id_a,
            eps,
            rank_a,
            rank_b
        );
    }
    Ok(())
}

/// Writes a rank vector, one `id<TAB>rank` pair per line.
///
/// If `precision` is `Some`, ranks are written with that number of decimal
/// digits; otherwise, with the shortest representation that reads back to the
/// same value.
pub fn write_ranks(
    mut writer: impl Write,
    ranks: &[(NodeId, f64)],
    precision: Option<usize>,
) -> Result<()> {
    for (id, rank) in ranks {
        match precision {
            None => writeln!(writer, "{id}\t{rank}"),
            Some(precision) => writeln!(writer, "{id}\t{rank:.precision$}"),
        }
        .with_context(|| format!("Could not write the rank of {id}"))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a rank vector written by [`write_ranks`].
///
/// Empty lines are skipped; identifiers must be unique.
pub fn read_ranks(reader: impl BufRead) -> Result<Vec<(NodeId, f64)>> {
    let mut ranks = Vec::new();
    let mut seen = HashSet::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Error reading line {}", i + 1))?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let (id, rank) = line
            .split_once('\t')
            .ok_or_else(|| anyhow!("Missing tab separator at line {}", i + 1))?;
        let rank = rank
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Error parsing the rank at line {}", i + 1))?;
        let id = NodeId::from(id);
        ensure!(
            seen.insert(id.clone()),
            "Duplicate identifier {} at line {}",
            id,
            i + 1
        );
        ranks.push((id, rank));
    }
    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(pairs: &[(&str, f64)]) -> Vec<(NodeId, f64)> {
        pairs.iter().map(|&(id, r)| (NodeId::from(id), r)).collect()
    }

    #[test]
    fn test_compare_size() {
        let a = ranks(&[("a", 0.5), ("b", 0.5)]);
        let b = ranks(&[("a", 1.0)]);
        assert!(compare_ranks(&a, &b, DEFAULT_EPS).is_err());
    }

    #[test]
    fn test_compare_ids() {
        let a = ranks(&[("a", 0.5), ("b", 0.5)]);
        let b = ranks(&[("a", 0.5), ("c", 0.5)]);
        let err = compare_ranks(&a, &b, DEFAULT_EPS).unwrap_err();
        assert!(err.to_string().contains("Different identifiers"));
    }

    #[test]
    fn test_compare_duplicates() {
        let a = ranks(&[("a", 0.5), ("a", 0.5)]);
        let err = compare_ranks(&a, &a, DEFAULT_EPS).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_compare_values() {
        let a = ranks(&[("a", 0.3), ("b", 0.7)]);
        let b = ranks(&[("b", 0.7), ("a", 0.3005)]);
        assert!(compare_ranks(&a, &b, DEFAULT_EPS).is_ok());
        let b = ranks(&[("b", 0.7), ("a", 0.302)]);
        let err = compare_ranks(&a, &b, DEFAULT_EPS).unwrap_err();
        assert!(err.to_string().contains("Ranks of a"));
        assert!(compare_ranks(&[], &[], DEFAULT_EPS).is_ok());
    }

    #[test]
    fn test_write_read() -> Result<()> {
        let a = ranks(&[("x", 0.125), ("y", 1.0 / 3.0), ("z", 0.0)]);
        let mut buf = Vec::new();
        write_ranks(&mut buf, &a, None)?;
        assert_eq!(read_ranks(buf.as_slice())?, a);

        let mut buf = Vec::new();
        write_ranks(&mut buf, &a, Some(3))?;
        assert_eq!(String::from_utf8(buf)?, "x\t0.125\ny\t0.333\nz\t0.000\n");
        Ok(())
    }

    #[test]
    fn test_read_errors() {
        assert!(read_ranks("a 0.5\n".as_bytes()).is_err());
        assert!(read_ranks("a\tfoo\n".as_bytes()).is_err());
        assert!(read_ranks("a\t0.5\na\t0.5\n".as_bytes()).is_err());
        assert!(read_ranks("\na\t0.5\n\n".as_bytes()).is_ok_and(|r| r.len() == 1));
    }
}
