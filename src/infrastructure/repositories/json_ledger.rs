//! JSON Ledger Store
//!
//! Persists the registry at `<config dir>/debtbook/debts.json`:
//!
//! ```json
//! {
//!   "groups": [
//!     { "name": "Trip", "members": ["You", "Alex"], "debt_matrix": [[0.0, 20.0], [0.0, 0.0]] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Group, Ledger, Registry};
use crate::domain::ports::{LedgerStore, StoreError};
use crate::infrastructure::fs::write_atomic;

/// File name of the ledger document inside the config directory.
pub const DATA_FILE_NAME: &str = "debts.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonGroup {
    name: String,
    members: Vec<String>,
    debt_matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonDocument {
    groups: Vec<JsonGroup>,
}

pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn quarantine_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "debts".to_string());
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        self.path
            .with_file_name(format!("{}.corrupt-{}.json", stem, stamp))
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self) -> Result<Registry, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no ledger file yet");
            return Ok(Registry::new());
        }

        // Read bytes so that invalid UTF-8 is reported as corruption by the
        // decoder rather than as an access failure.
        let content = fs::read(&self.path).map_err(|e| StoreError::Access {
            message: format!("{}: {}", self.path.display(), e),
        })?;

        let registry = decode_bytes(&content, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            groups = registry.len(),
            "loaded ledger file"
        );
        Ok(registry)
    }

    fn save(&self, registry: &Registry) -> Result<(), StoreError> {
        let content = encode(registry)?;

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Access {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        lock_file.lock_exclusive().map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;

        let result = write_atomic(&self.path, content.as_bytes()).map_err(|e| StoreError::Access {
            message: format!("{}: {}", self.path.display(), e),
        });

        let _ = lock_file.unlock();

        if result.is_ok() {
            tracing::debug!(
                path = %self.path.display(),
                groups = registry.len(),
                "saved ledger file"
            );
        }
        result
    }

    fn location(&self) -> &Path {
        &self.path
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| StoreError::Quarantine {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::warn!(
            from = %self.path.display(),
            to = %target.display(),
            "moved unreadable ledger file aside"
        );
        Ok(Some(target))
    }
}

/// Serialize `registry` as the pretty-printed ledger document.
///
/// Non-finite amounts have no JSON form and are refused.
pub fn encode(registry: &Registry) -> Result<String, StoreError> {
    let document = to_json(registry);
    check_finite(&document)?;
    serde_json::to_string_pretty(&document).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}

/// Parse a ledger document. `path` is only used in error messages.
pub fn decode(content: &str, path: &Path) -> Result<Registry, StoreError> {
    decode_bytes(content.as_bytes(), path)
}

/// Parse a ledger document from raw file bytes. Invalid UTF-8 is corruption.
pub fn decode_bytes(content: &[u8], path: &Path) -> Result<Registry, StoreError> {
    let document: JsonDocument =
        serde_json::from_slice(content).map_err(|e| StoreError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    from_json(document).map_err(|message| StoreError::Corrupted {
        path: path.to_path_buf(),
        message,
    })
}

fn from_json(document: JsonDocument) -> Result<Registry, String> {
    let mut groups = Vec::with_capacity(document.groups.len());
    for (i, group) in document.groups.into_iter().enumerate() {
        if has_duplicates(&group.members) {
            tracing::warn!(group = %group.name, "ledger file has duplicate member names");
        }
        let ledger = Ledger::from_parts(group.members, group.debt_matrix)
            .map_err(|e| format!("group {} ('{}'): {}", i, group.name, e))?;
        groups.push(Group::from_parts(group.name, ledger));
    }
    Ok(Registry::from_groups(groups))
}

fn to_json(registry: &Registry) -> JsonDocument {
    JsonDocument {
        groups: registry
            .groups()
            .iter()
            .map(|g| JsonGroup {
                name: g.name.clone(),
                members: g.ledger.members().to_vec(),
                debt_matrix: g.ledger.matrix().to_vec(),
            })
            .collect(),
    }
}

fn check_finite(document: &JsonDocument) -> Result<(), StoreError> {
    for group in &document.groups {
        for (i, row) in group.debt_matrix.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(StoreError::Serialization {
                    message: format!(
                        "group '{}' entry [{}][{}] is {}, which JSON cannot represent",
                        group.name, i, j, row[j]
                    ),
                });
            }
        }
    }
    Ok(())
}

fn has_duplicates(names: &[String]) -> bool {
    names
        .iter()
        .enumerate()
        .any(|(i, name)| names[..i].contains(name))
}
