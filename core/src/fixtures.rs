//! Read-only fixture lookup by scenario identifier.
//!
//! A fixture, when present, is the authoritative row set for its
//! scenario: `<dir>/<scenario_id>.jsonl` (one JSON row per line,
//! blank lines skipped) is preferred over `<dir>/<scenario_id>.json`
//! (one whole-document array). Content is returned verbatim — no
//! length or completeness checks beyond each record being parsable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SimError, SimResult};
use crate::row::Row;

pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Look up the fixture for `scenario_id`. Returns Ok(None) when
    /// no fixture file exists under either naming convention.
    pub fn load(&self, scenario_id: &str) -> SimResult<Option<Vec<Row>>> {
        let jsonl = self.dir.join(format!("{scenario_id}.jsonl"));
        if jsonl.exists() {
            return load_jsonl(&jsonl).map(Some);
        }
        let json = self.dir.join(format!("{scenario_id}.json"));
        if json.exists() {
            return load_json(&json).map(Some);
        }
        Ok(None)
    }
}

fn load_jsonl(path: &Path) -> SimResult<Vec<Row>> {
    let text = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let row = serde_json::from_str(line).map_err(|source| SimError::FixtureParse {
            path: path.display().to_string(),
            line: idx + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn load_json(path: &Path) -> SimResult<Vec<Row>> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| SimError::FixtureParse {
        path: path.display().to_string(),
        line: source.line(),
        source,
    })
}
