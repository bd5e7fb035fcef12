//! Quality ladder
//!
//! Builds the list of streaming quality choices offered to the user for a
//! given source resolution and the current bitrate cap.

use serde::{Deserialize, Serialize};

/// One entry of the quality menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityOption {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,

    /// Bitrate cap in bits per second, 0 for automatic
    pub bitrate: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// Inputs of [`quality_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityRequest {
    pub video_width: u32,
    pub video_height: u32,
    pub current_max_bitrate: u64,
    pub automatic_enabled: bool,
    pub include_auto: bool,
}

struct Tier {
    label: &'static str,
    max_height: u32,
    bitrate: u64,
    min_width: u32,
}

const LADDER: &[Tier] = &[
    Tier { label: "4K - 120 Mbps", max_height: 2160, bitrate: 120_000_000, min_width: 3800 },
    Tier { label: "4K - 80 Mbps", max_height: 2160, bitrate: 80_000_000, min_width: 3800 },
    // Some 1080p sources report widths slightly under 1920
    Tier { label: "1080p - 60 Mbps", max_height: 1080, bitrate: 60_000_000, min_width: 1900 },
    Tier { label: "1080p - 40 Mbps", max_height: 1080, bitrate: 40_000_000, min_width: 1900 },
    Tier { label: "1080p - 20 Mbps", max_height: 1080, bitrate: 20_000_000, min_width: 1900 },
    Tier { label: "1080p - 15 Mbps", max_height: 1080, bitrate: 15_000_000, min_width: 1900 },
    Tier { label: "1080p - 10 Mbps", max_height: 1080, bitrate: 10_000_000, min_width: 1900 },
    Tier { label: "720p - 8 Mbps", max_height: 720, bitrate: 8_000_000, min_width: 1260 },
    Tier { label: "720p - 6 Mbps", max_height: 720, bitrate: 6_000_000, min_width: 1260 },
    Tier { label: "720p - 4 Mbps", max_height: 720, bitrate: 4_000_000, min_width: 1260 },
    Tier { label: "480p - 3 Mbps", max_height: 480, bitrate: 3_000_000, min_width: 620 },
    Tier { label: "480p - 1.5 Mbps", max_height: 480, bitrate: 1_500_000, min_width: 620 },
    Tier { label: "480p - 720 kbps", max_height: 480, bitrate: 720_000, min_width: 620 },
];

const TERMINAL: Tier = Tier { label: "360p - 420 kbps", max_height: 360, bitrate: 420_000, min_width: 0 };

/// Effective width used to pick tiers
///
/// Narrower-than-widescreen sources are widened to `height * (16 / 9)` in
/// integer arithmetic, so the factor truncates to 1. Unknown dimensions
/// give 0, which only the terminal tier accepts.
fn effective_width(width: u32, height: u32) -> u32 {
    if height != 0 && width / height < 16 / 9 {
        height * (16 / 9)
    } else {
        width
    }
}

/// Quality choices for a source, highest bitrate first
///
/// # Arguments
///
/// * `request` - Source dimensions and the current bitrate settings
///
/// # Returns
///
/// Returns a non-empty list. If `include_auto` is set, "Auto" comes first.
/// At most one tier is marked selected.
pub fn quality_options(request: QualityRequest) -> Vec<QualityOption> {
    let width = effective_width(request.video_width, request.video_height);

    let mut options = Vec::with_capacity(LADDER.len() + 2);
    if request.include_auto {
        options.push(QualityOption {
            label: "Auto".to_string(),
            max_height: None,
            bitrate: 0,
            selected: Some(request.automatic_enabled),
        });
    }

    let first_tier = options.len();
    options.extend(LADDER.iter().chain(std::iter::once(&TERMINAL)).filter(|t| width >= t.min_width).map(|t| {
        QualityOption {
            label: t.label.to_string(),
            max_height: Some(t.max_height),
            bitrate: t.bitrate,
            selected: None,
        }
    }));

    if request.current_max_bitrate > 0 && !request.automatic_enabled {
        let tiers = &mut options[first_tier..];
        let index = tiers
            .iter()
            .position(|o| o.bitrate > 0 && o.bitrate <= request.current_max_bitrate)
            .unwrap_or(tiers.len() - 1);
        tiers[index].selected = Some(true);
    }

    options
}

/// Bitrate of the selected option, if any
///
/// `Some(0)` means automatic.
pub fn selected_bitrate(options: &[QualityOption]) -> Option<u64> {
    options.iter().find(|o| o.selected == Some(true)).map(|o| o.bitrate)
}
