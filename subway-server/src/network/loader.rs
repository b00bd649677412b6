//! Plain-text network description loader.
//!
//! A description is a sequence of blocks separated by blank rows:
//!
//! ```text
//! # Objectville
//! DRY Drive
//! Weather-O-Rama, Inc.
//! Head First Theater
//!
//! Booch Line
//! DRY Drive
//! Weather-O-Rama, Inc.
//! Head First Theater
//! ```
//!
//! The first block declares every station, one per row. Each later block is
//! a line: its first row is the line name, the remaining rows are its stops
//! in travel order. Rows are trimmed and rows starting with `#` are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::LoadError;
use super::graph::NetworkGraph;

/// A block of consecutive non-blank rows, with the row number it starts at.
struct Block<'a> {
    first_row: usize,
    rows: Vec<&'a str>,
}

/// Loads [`NetworkGraph`]s from the plain-text description format.
#[derive(Debug, Clone, Default)]
pub struct NetworkLoader {
    allow_isolated: bool,
}

impl NetworkLoader {
    /// Create a loader with strict integrity checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept declared stations that no line serves.
    pub fn allow_isolated_stations(mut self, allow: bool) -> Self {
        self.allow_isolated = allow;
        self
    }

    /// Parse a description held in memory.
    pub fn parse_str(&self, source: &str) -> Result<NetworkGraph, LoadError> {
        let mut blocks = split_blocks(source).into_iter();

        let Some(station_block) = blocks.next() else {
            return Err(LoadError::Malformed {
                row: 1,
                message: "description declares no stations".to_string(),
            });
        };

        let mut builder = NetworkGraph::builder()
            .stations(&station_block.rows)
            .allow_isolated_stations(self.allow_isolated);

        for block in blocks {
            let Some((name, stops)) = block.rows.split_first() else {
                continue;
            };
            if stops.is_empty() {
                return Err(LoadError::Malformed {
                    row: block.first_row,
                    message: format!("line {name} lists no stops"),
                });
            }
            builder = builder.line(name, stops);
        }

        Ok(builder.build()?)
    }

    /// Read and parse a description from any reader.
    ///
    /// `origin` is only used to give I/O errors some context.
    pub fn load_reader<R: Read>(
        &self,
        mut reader: R,
        origin: &Path,
    ) -> Result<NetworkGraph, LoadError> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|source| LoadError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
        self.parse_str(&source)
    }

    /// Read and parse a description file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<NetworkGraph, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = self.load_reader(file, path)?;

        info!(
            path = %path.display(),
            stations = graph.stations().len(),
            lines = graph.lines().len(),
            "loaded subway network"
        );

        Ok(graph)
    }
}

/// Load a network file with the default (strict) loader.
pub fn load_network(path: impl AsRef<Path>) -> Result<NetworkGraph, LoadError> {
    NetworkLoader::new().load_file(path)
}

/// The path a description is read from when none is given.
pub fn default_network_path() -> PathBuf {
    PathBuf::from("data/ObjectvilleSubway.txt")
}

fn split_blocks(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (i, raw) in source.lines().enumerate() {
        let row = raw.trim();
        if row.starts_with('#') {
            continue;
        }
        if row.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        current
            .get_or_insert_with(|| Block {
                first_row: i + 1,
                rows: Vec::new(),
            })
            .rows
            .push(row);
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
