//! Hashing System - SHA-256 for Generated Output
//!
//! Digests let check mode compare rendered output with what is on disk.

use sha2::{Sha256, Digest};
use serde::Serialize;
use serde_json::{Value, to_string_pretty};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Canonical JSON (sorted keys, indented, trailing newline) for files kept in version control.
pub fn canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    let mut out = to_string_pretty(&sort_value(&v))?;
    out.push('\n');
    Ok(out)
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(sort_value).collect())
        }
        _ => v.clone()
    }
}

/// Digest of rendered output text.
pub fn content_hash(text: &str) -> String {
    sha256_hex(text.as_bytes())
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
