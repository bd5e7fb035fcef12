//! Decoder capability scanning
//!
//! Walks every decoder the platform lists, classifies each declared mime
//! type through the codec table and merges duplicate records. A failing
//! query for one decoder is logged and skipped; the scan never aborts.

use crate::decoder::codec_table::{self, classify_mime};
use crate::decoder::{CodecCatalog, CodecDescriptor, CodecKind, DecoderCapabilities, DecoderCapability, TypeCapabilities};
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Scan all decoders exposed by `catalog`
pub fn scan(catalog: &dyn CodecCatalog) -> DecoderCapabilities {
    let mut capabilities = DecoderCapabilities::new();
    let mut skipped = 0usize;

    for codec in catalog.codecs().iter().filter(|c| !c.is_encoder) {
        for mime_type in &codec.supported_types {
            let Some((kind, name)) = classify_mime(mime_type) else {
                debug!("Skipping unclassified mime type {} on {}", mime_type, codec.name);
                continue;
            };

            match catalog.capabilities_for_type(codec, mime_type) {
                Ok(raw) => capabilities.insert(normalize(codec, mime_type, kind, name, &raw)),
                Err(e) => {
                    warn!("Capability query failed for {} ({}): {}", codec.name, mime_type, e);
                    skipped += 1;
                }
            }
        }
    }

    info!(
        "Decoder scan found {} capabilities ({} video, {} audio), {} queries skipped",
        capabilities.len(),
        capabilities.of_kind(CodecKind::Video).count(),
        capabilities.of_kind(CodecKind::Audio).count(),
        skipped
    );

    capabilities
}

/// Translate one raw query result into a capability record.
///
/// Profiles and levels the codec table does not know are dropped.
fn normalize(
    codec: &CodecDescriptor,
    mime_type: &str,
    kind: CodecKind,
    name: &str,
    raw: &TypeCapabilities,
) -> DecoderCapability {
    let mut profiles = BTreeSet::new();
    let mut levels = BTreeSet::new();

    for pair in &raw.profile_levels {
        match kind {
            CodecKind::Video => {
                if let Some(profile) = codec_table::video_profile_for(name, pair.profile) {
                    profiles.insert(profile.to_string());
                }
                if let Some(level) = codec_table::video_level_for(name, pair.level) {
                    levels.insert(level);
                }
            }
            CodecKind::Audio => {
                if let Some(profile) = codec_table::audio_profile_for(name, pair.profile) {
                    profiles.insert(profile.to_string());
                }
            }
        }
    }

    debug!(
        "{} {} -> {} profiles={:?} levels={:?} max_bitrate={}",
        codec.name, mime_type, name, profiles, levels, raw.max_bitrate
    );

    DecoderCapability {
        mime_type: mime_type.to_string(),
        codec: name.to_string(),
        kind,
        profiles,
        levels,
        max_bitrate: raw.max_bitrate,
    }
}

/// Process-lifetime cache for the scan result
///
/// Decoder capabilities do not change while the process runs, so the scan
/// happens at most once. The cache is owned by the caller and handed to
/// whoever needs it.
#[derive(Debug, Default)]
pub struct CapabilityCache {
    cell: OnceCell<Arc<DecoderCapabilities>>,
}

impl CapabilityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached capabilities, scanning `catalog` on first use
    pub fn get_or_scan(&self, catalog: &dyn CodecCatalog) -> Arc<DecoderCapabilities> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(scan(catalog))))
    }

    /// Cached capabilities, if a scan already ran
    pub fn get(&self) -> Option<Arc<DecoderCapabilities>> {
        self.cell.get().cloned()
    }
}
