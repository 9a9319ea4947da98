use serde::ser::Serializer;
use serde::Serialize;

use crate::{Result, UuidIndex};

/// A structured view of a [`CfdiPackageReader`](crate::CfdiPackageReader).
///
/// Serializes to:
///
/// ```text
/// {
///   "source": "/path/to/package.zip",
///   "files": { "<name>": "<xml>", ... },
///   "documents": { "<uuid>": "<xml>", ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSnapshot {
    /// The path the package was opened from.
    pub source: String,

    /// Every CFDI document as `(name, content)`, in container order.
    #[serde(serialize_with = "ordered_map")]
    pub files: Vec<(String, String)>,

    /// Documents with a readable UUID.
    pub documents: UuidIndex,
}

impl PackageSnapshot {
    /// Render the snapshot as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the snapshot as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn ordered_map<S: Serializer>(
    pairs: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}
