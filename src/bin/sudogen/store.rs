//! Staging and durable storage for exported boards.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use sudogen::Value;

/// In-memory staging area for generated boards, keyed by a run-scoped prefix
/// plus an increasing counter.
#[derive(Default)]
pub(crate) struct BoardCache {
    entries: HashMap<String, Vec<Value>>,
}

impl BoardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a flattened board under a key.
    pub fn forever(&mut self, key: String, board: Vec<Value>) {
        self.entries.insert(key, board);
    }

    /// Removes and returns a staged board.
    pub fn pull(&mut self, key: &str) -> Option<Vec<Value>> {
        self.entries.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Serialize)]
struct SolutionRow<'a> {
    board: &'a str,
}

/// Append-only durable store for solved boards, one JSON row per board.
pub(crate) struct SolutionTable {
    writer: BufWriter<File>,
}

impl SolutionTable {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }

    /// Inserts one batch of flattened board strings.
    pub fn insert(&mut self, boards: &[String]) -> Result<()> {
        for board in boards {
            serde_json::to_writer(&mut self.writer, &SolutionRow { board })?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
