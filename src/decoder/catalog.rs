//! Declarative codec catalog
//!
//! A [`CodecCatalog`] backed by a JSON description of decoder components.
//! Used on hosts without a queryable codec list, for diagnostics, and for
//! replaying a capability dump captured on a device.

use crate::decoder::{CodecCatalog, CodecDescriptor, TypeCapabilities};
use crate::utils::error::{DirectPlayError, IntoPlayerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog loaded from a JSON document
///
/// ```json
/// { "codecs": [ { "name": "c2.android.avc.decoder", "isEncoder": false,
///     "types": [ { "mimeType": "video/avc", "maxBitrate": 48000000,
///                  "profileLevels": [ { "profile": 8, "level": 4096 } ] } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCodecCatalog {
    pub codecs: Vec<StaticCodecEntry>,
}

/// One component in a [`StaticCodecCatalog`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticCodecEntry {
    pub name: String,

    #[serde(default)]
    pub is_encoder: bool,

    pub types: Vec<StaticTypeEntry>,
}

/// Capabilities of a component for one mime type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticTypeEntry {
    pub mime_type: String,

    #[serde(flatten)]
    pub capabilities: TypeCapabilities,
}

impl StaticCodecCatalog {
    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .config_err(&format!("Failed to read codec catalog {}", path.display()))?;
        Self::from_json_str(&contents)
    }
}

impl CodecCatalog for StaticCodecCatalog {
    fn codecs(&self) -> Vec<CodecDescriptor> {
        self.codecs
            .iter()
            .map(|entry| CodecDescriptor {
                name: entry.name.clone(),
                is_encoder: entry.is_encoder,
                supported_types: entry.types.iter().map(|t| t.mime_type.clone()).collect(),
            })
            .collect()
    }

    fn capabilities_for_type(&self, codec: &CodecDescriptor, mime_type: &str) -> Result<TypeCapabilities> {
        self.codecs
            .iter()
            .filter(|entry| entry.name == codec.name)
            .flat_map(|entry| entry.types.iter())
            .find(|t| t.mime_type == mime_type)
            .map(|t| t.capabilities.clone())
            .ok_or_else(|| {
                DirectPlayError::CapabilityQuery(format!("{} does not declare {}", codec.name, mime_type))
            })
    }
}
