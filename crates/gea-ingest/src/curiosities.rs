//! Country curiosities lookup: a JSON object mapping country name to a
//! short descriptive text, shown next to the map.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::error::LoadError;

/// Loads the curiosities file into an ordered country → text map.
pub fn load_curiosities(path: &Path) -> Result<BTreeMap<String, String>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map: BTreeMap<String, String> =
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(countries = map.len(), path = %path.display(), "loaded curiosities");
    Ok(map)
}
