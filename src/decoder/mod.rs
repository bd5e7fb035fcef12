//! Decoder capability module for directplay
//!
//! This module discovers what the local decoders can handle and normalizes
//! it into [`DecoderCapability`] records. The platform query itself sits
//! behind the [`CodecCatalog`] trait so the scan logic does not depend on a
//! particular decoder API.

pub mod capability_scanner;
pub mod catalog;
pub mod codec_table;

pub use capability_scanner::{scan, CapabilityCache};
pub use catalog::StaticCodecCatalog;

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of elementary stream a codec decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CodecKind {
    Audio,
    Video,
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            CodecKind::Audio => "Audio",
            CodecKind::Video => "Video",
        })
    }
}

/// One decodable (mime type, codec) pair and what the device supports for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoderCapability {
    /// Raw platform identifier, kept for traceability
    pub mime_type: String,

    /// Portable codec name (e.g. "h264", "aac")
    pub codec: String,

    /// Audio or video
    pub kind: CodecKind,

    /// Portable profile names
    pub profiles: BTreeSet<String>,

    /// Numeric levels (video only)
    pub levels: BTreeSet<u32>,

    /// Upper bound of the advertised bitrate range, in bits per second
    pub max_bitrate: u64,
}

impl DecoderCapability {
    /// Fold another observation of the same mime type into this one.
    ///
    /// Profiles and levels are unioned. The bitrate ceiling stays at the
    /// first-seen value.
    pub fn merge(&mut self, other: &DecoderCapability) {
        debug_assert_eq!(self.kind, other.kind);
        debug_assert_eq!(self.mime_type, other.mime_type);
        self.profiles.extend(other.profiles.iter().cloned());
        self.levels.extend(other.levels.iter().copied());
    }

    /// Highest supported level, if any positive level was recorded
    pub fn max_level(&self) -> Option<u32> {
        self.levels.iter().next_back().copied().filter(|level| *level > 0)
    }

    fn key(&self) -> (CodecKind, String) {
        (self.kind, self.mime_type.clone())
    }
}

/// Merged capability set, at most one record per (kind, mime type).
///
/// Iteration order is stable (sorted by kind, then mime type).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderCapabilities {
    entries: BTreeMap<(CodecKind, String), DecoderCapability>,
}

impl DecoderCapabilities {
    /// Create an empty capability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, merging it into an existing one with the same key
    pub fn insert(&mut self, capability: DecoderCapability) {
        match self.entries.entry(capability.key()) {
            btree_map::Entry::Occupied(mut existing) => existing.get_mut().merge(&capability),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(capability);
            }
        }
    }

    /// All records in stable order
    pub fn iter(&self) -> impl Iterator<Item = &DecoderCapability> {
        self.entries.values()
    }

    /// Records of one kind
    pub fn of_kind(&self, kind: CodecKind) -> impl Iterator<Item = &DecoderCapability> {
        self.entries.values().filter(move |c| c.kind == kind)
    }

    /// Deduplicated codec names of one kind
    pub fn codec_names(&self, kind: CodecKind) -> BTreeSet<String> {
        self.of_kind(kind).map(|c| c.codec.clone()).collect()
    }

    /// Look up the record for a mime type
    pub fn get(&self, kind: CodecKind, mime_type: &str) -> Option<&DecoderCapability> {
        self.entries.get(&(kind, mime_type.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DecoderCapability> for DecoderCapabilities {
    fn from_iter<I: IntoIterator<Item = DecoderCapability>>(iter: I) -> Self {
        let mut capabilities = DecoderCapabilities::new();
        for capability in iter {
            capabilities.insert(capability);
        }
        capabilities
    }
}

/// A decoder component as listed by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecDescriptor {
    /// Component name (e.g. "c2.android.avc.decoder")
    pub name: String,

    /// Encoders are listed alongside decoders and must be skipped
    #[serde(default)]
    pub is_encoder: bool,

    /// Mime types this component declares
    pub supported_types: Vec<String>,
}

/// A raw (profile, level) pair in platform numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLevel {
    pub profile: i32,
    pub level: i32,
}

/// Raw capabilities of one component for one mime type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCapabilities {
    /// Supported (profile, level) pairs
    #[serde(default)]
    pub profile_levels: Vec<ProfileLevel>,

    /// Upper bound of the bitrate range in bits per second
    pub max_bitrate: u64,
}

/// Platform decoder enumeration
///
/// Implementations wrap whatever the host offers for listing decoder
/// components. Queries are local and synchronous.
pub trait CodecCatalog: Send + Sync {
    /// List every codec component (decoders and encoders)
    fn codecs(&self) -> Vec<CodecDescriptor>;

    /// Query the capabilities of `codec` for one of its declared mime types
    ///
    /// # Arguments
    ///
    /// * `codec` - Component returned by [`CodecCatalog::codecs`]
    /// * `mime_type` - One of the component's `supported_types`
    ///
    /// # Returns
    ///
    /// Returns the raw capabilities, or an error if the platform query failed
    fn capabilities_for_type(&self, codec: &CodecDescriptor, mime_type: &str) -> Result<TypeCapabilities>;
}
