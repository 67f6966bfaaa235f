//! Durable JSON snapshot of the observation map.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use leasecurve_core::{Date, TenorCurve};

use crate::error::{CacheError, CacheResult};

/// Reads the full observation map from the snapshot file.
pub(crate) fn load(path: &Path) -> CacheResult<BTreeMap<Date, TenorCurve>> {
    let content = fs::read_to_string(path).map_err(|e| CacheError::load(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| CacheError::load(e.to_string()))
}

/// Writes the full observation map as one atomic replace-the-file
/// operation: the serialized map lands in a sibling temp file which is then
/// renamed over the target, so a concurrent `load` on restart never sees a
/// half-written snapshot.
pub(crate) fn persist(path: &Path, observations: &BTreeMap<Date, TenorCurve>) -> CacheResult<()> {
    let json =
        serde_json::to_vec(observations).map_err(|e| CacheError::persist(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CacheError::persist(e.to_string()))?;
        }
    }

    // The temp file must share the target's directory for the rename to be
    // atomic on the same filesystem.
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &json).map_err(|e| CacheError::persist(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| CacheError::persist(e.to_string()))?;

    Ok(())
}
