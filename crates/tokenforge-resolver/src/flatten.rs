//! Primitive flattening.

use tokenforge_core::{DocumentError, PrimitiveMap, TokenValue, PRIMITIVE_PATH_SEPARATOR};
use tracing::{debug, trace};

/// Flatten a primitive mode into slash-joined paths.
///
/// Mappings are descended into; scalars and arrays are leaves. When two leaves
/// produce the same path, the later one in document order wins.
pub fn flatten_primitives(mode: &TokenValue) -> PrimitiveMap {
    let mut primitives = PrimitiveMap::new();

    for (segments, value) in mode.leaves() {
        let path = segments.join(PRIMITIVE_PATH_SEPARATOR);
        if primitives.insert(path.as_str(), value.clone()).is_some() {
            trace!(path = %path, "duplicate primitive path overwritten");
        }
    }

    primitives
}

/// Flatten the first mode of a primitive collection.
///
/// Mode order is the document's key order; no mode is picked by name.
pub fn flatten_base_mode(
    collection_key: &str,
    collection: &TokenValue,
) -> Result<PrimitiveMap, DocumentError> {
    let modes = collection
        .as_node()
        .ok_or_else(|| DocumentError::InvalidCollection {
            collection: collection_key.to_string(),
        })?;

    let (mode, base) = modes
        .first()
        .ok_or_else(|| DocumentError::NoPrimitiveModes {
            collection: collection_key.to_string(),
        })?;

    let primitives = flatten_primitives(base);
    debug!(
        collection = collection_key,
        mode = %mode,
        count = primitives.len(),
        "flattened base primitive mode"
    );
    Ok(primitives)
}
