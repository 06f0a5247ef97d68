//! JSON file store for condition configuration.
//!
//! Every condition instance lives in one document:
//!
//! ```json
//! {
//!   "instances": {
//!     "front_block": { "bundles": ["1"], "negate": false }
//!   }
//! }
//! ```
//!
//! Writes go to a sibling temp file that is renamed over the original, so a
//! crash mid-write never leaves a truncated document behind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use termgate_application::{ConditionConfigStore, StoreError};
use termgate_domain::ConditionConfig;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredConditions {
    #[serde(default)]
    instances: BTreeMap<String, ConditionConfig>,
}

/// Condition configuration store backed by a single JSON file.
///
/// A missing file reads as "nothing stored". Saves are serialized through an
/// internal lock so two saves from this process never interleave.
pub struct JsonConditionConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonConditionConfigStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoredConditions, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredConditions::default());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(StoredConditions::default());
        }
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn write(&self, stored: &StoredConditions) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(stored)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ConditionConfigStore for JsonConditionConfigStore {
    fn load(&self, instance_id: &str) -> Result<Option<ConditionConfig>, StoreError> {
        Ok(self.read()?.instances.remove(instance_id))
    }

    fn save(&self, instance_id: &str, config: &ConditionConfig) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("config store lock poisoned".to_string()))?;

        let mut stored = self.read()?;
        stored.instances.insert(instance_id.to_string(), config.clone());
        self.write(&stored)?;

        debug!(instance = %instance_id, "Wrote condition configuration to {}", self.path.display());
        Ok(())
    }
}
