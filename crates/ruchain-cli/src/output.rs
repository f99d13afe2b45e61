//! # Table Output
//!
//! Writes [`ChainTables`] to disk in the layout equation assembly reads:
//! one file per column, named `{column}{N}.txt`. State-indexed and
//! transition-indexed columns are written in one call so they can never
//! drift out of step.
//!
//! Every column is newline-separated except `transTypes`, which is a
//! single space-separated line. Each file ends with one newline.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};

use ruchain_markov::ChainTables;

use crate::config::OutputFormat;

/// Render an alpha so integral values keep a decimal point (`0.0`, `1.0`).
///
/// Other values use the shortest text that parses back to the same
/// `f64` (`0.3333333333333333`), not a fixed digit count.
pub fn format_alpha(alpha: f64) -> String {
    if alpha.fract() == 0.0 {
        format!("{alpha:.1}")
    } else {
        format!("{alpha}")
    }
}

fn join<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn write_file(dir: &Path, name: String, body: String) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, format!("{body}\n"))
        .with_context(|| format!("failed to write table: {}", path.display()))?;
    Ok(path)
}

/// Write one text file per column. Returns the paths written.
pub fn write_text_tables(tables: &ChainTables, dir: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        tables.is_consistent(),
        "refusing to write ragged tables for ring size {}",
        tables.ring_size
    );
    let n = tables.ring_size;
    let alphas: Vec<String> = tables.alphas.iter().map(|a| format_alpha(*a)).collect();
    let files = [
        (format!("alphas{n}.txt"), join(&alphas, "\n")),
        (format!("m{n}.txt"), join(&tables.m, "\n")),
        (format!("n{n}.txt"), join(&tables.n, "\n")),
        (format!("iPre{n}.txt"), join(&tables.i_pre, "\n")),
        (format!("iPost{n}.txt"), join(&tables.i_post, "\n")),
        (format!("transTypes{n}.txt"), join(&tables.trans_types, " ")),
        (format!("mask_IDs{n}.txt"), tables.mask_ids.join("\n")),
    ];
    files
        .into_iter()
        .map(|(name, body)| write_file(dir, name, body))
        .collect()
}

/// Write every column into `chain{N}.json`.
pub fn write_json_tables(tables: &ChainTables, dir: &Path) -> Result<PathBuf> {
    ensure!(
        tables.is_consistent(),
        "refusing to write ragged tables for ring size {}",
        tables.ring_size
    );
    let body = serde_json::to_string_pretty(tables).context("failed to serialize tables")?;
    write_file(dir, format!("chain{}.json", tables.ring_size), body)
}

/// Write `tables` into `dir` (created if missing) in `format`.
pub fn write_tables(tables: &ChainTables, dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    match format {
        OutputFormat::Text => write_text_tables(tables, dir),
        OutputFormat::Json => write_json_tables(tables, dir).map(|p| vec![p]),
    }
}

/// Write a 0/1 membership column named `{stem}{N}_mdex{k}.txt`.
pub fn write_mask_column(
    dir: &Path,
    stem: &str,
    ring_size: usize,
    mask_index: usize,
    membership: &[bool],
) -> Result<PathBuf> {
    let values: Vec<u8> = membership.iter().map(|m| u8::from(*m)).collect();
    write_file(
        dir,
        format!("{stem}{ring_size}_mdex{mask_index}.txt"),
        join(&values, "\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruchain_markov::MarkovChain;

    fn read(dir: &Path, name: &str) -> String {
        std::fs::read_to_string(dir.join(name)).unwrap()
    }

    #[test]
    fn alpha_formatting() {
        assert_eq!(format_alpha(0.0), "0.0");
        assert_eq!(format_alpha(1.0), "1.0");
        assert_eq!(format_alpha(0.5), "0.5");
        assert_eq!(format_alpha(0.25), "0.25");
        assert_eq!(format_alpha(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_alpha(2.0 / 3.0).parse::<f64>().unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn text_tables_for_three_units() {
        let dir = tempfile::tempdir().unwrap();
        let tables = ChainTables::from(&MarkovChain::generate(3).unwrap());
        let written = write_tables(&tables, dir.path(), OutputFormat::Text).unwrap();
        assert_eq!(written.len(), 7);

        assert_eq!(read(dir.path(), "m3.txt"), "3\n2\n1\n");
        assert_eq!(read(dir.path(), "n3.txt"), "1\n2\n3\n");
        assert_eq!(read(dir.path(), "iPre3.txt"), "1\n2\n3\n");
        assert_eq!(read(dir.path(), "iPost3.txt"), "2\n3\n4\n");
        assert_eq!(read(dir.path(), "transTypes3.txt"), "1 2 3\n");
        assert_eq!(read(dir.path(), "mask_IDs3.txt"), "000\n001\n011\n111\n");

        let alphas = read(dir.path(), "alphas3.txt");
        let lines: Vec<&str> = alphas.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "0.0");
        assert_eq!(lines[3], "1.0");
    }

    #[test]
    fn json_tables_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let tables = ChainTables::from(&MarkovChain::generate(4).unwrap());
        let written = write_tables(&tables, dir.path(), OutputFormat::Json).unwrap();
        assert_eq!(written, vec![dir.path().join("chain4.json")]);
        let parsed: ChainTables = serde_json::from_str(&read(dir.path(), "chain4.json")).unwrap();
        assert_eq!(parsed, tables);
    }

    #[test]
    fn output_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let tables = ChainTables::from(&MarkovChain::generate(2).unwrap());
        write_tables(&tables, &nested, OutputFormat::Text).unwrap();
        assert!(nested.join("alphas2.txt").exists());
    }

    #[test]
    fn ragged_tables_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut tables = ChainTables::from(&MarkovChain::generate(3).unwrap());
        tables.i_post.push(9);
        assert!(write_tables(&tables, dir.path(), OutputFormat::Text).is_err());
    }

    #[test]
    fn mask_column_naming() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_mask_column(dir.path(), "matches", 3, 2, &[false, true, true]).unwrap();
        assert_eq!(path, dir.path().join("matches3_mdex2.txt"));
        assert_eq!(read(dir.path(), "matches3_mdex2.txt"), "0\n1\n1\n");
    }
}
