//! directplay
//!
//! Decoder capability negotiation and adaptive track selection for media
//! playback clients:
//!
//! - [`decoder`] scans the local decoders into a capability set,
//! - [`profile`] turns that set into the device profile sent to the server,
//! - [`player`] applies audio, subtitle and quality choices to a playing
//!   session, restarting it through the server when a change cannot be
//!   applied live.

pub mod decoder;
pub mod player;
pub mod profile;
pub mod utils;

pub use decoder::{CapabilityCache, CodecCatalog, CodecKind, DecoderCapabilities, DecoderCapability, StaticCodecCatalog};
pub use player::{PlaybackController, PlaybackSettings, TrackChange, TrackRenderer, TrackSelector};
pub use profile::{DeviceProfile, DeviceProfileBuilder};
pub use utils::error::{DirectPlayError, Result};
