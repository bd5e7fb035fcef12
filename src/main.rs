use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::{Path, PathBuf};

use directplay::decoder::{scan, CodecKind, StaticCodecCatalog};
use directplay::player::{quality_options, QualityRequest};
use directplay::profile::tables::containers_carrying;
use directplay::profile::DeviceProfileBuilder;
use directplay::utils::{format_bitrate, Config};

/// directplay - decoder capability and device profile diagnostics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the system and user config files)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the device profile built from a codec catalog
    Profile {
        /// JSON codec catalog
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Streaming bitrate cap in bits per second
        #[arg(long, value_name = "BPS")]
        max_bitrate: Option<u64>,
    },

    /// Print the merged decoder capabilities of a codec catalog
    Capabilities {
        /// JSON codec catalog
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
    },

    /// Check whether a container and codec combination can be direct played
    Check {
        /// JSON codec catalog
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        #[arg(long)]
        container: String,

        /// Video codec; omit for audio-only media
        #[arg(long)]
        video: Option<String>,

        #[arg(long)]
        audio: Option<String>,
    },

    /// Print the quality menu for a source resolution
    Ladder {
        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,

        /// Current bitrate cap in bits per second
        #[arg(long, value_name = "BPS")]
        max_bitrate: Option<u64>,

        /// Automatic quality enabled
        #[arg(long)]
        auto: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    let log_level = if args.debug { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting directplay v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Profile { catalog, max_bitrate } => {
            let capabilities = scan_catalog(&catalog)?;
            let max_bitrate = max_bitrate.unwrap_or(config.profile.max_streaming_bitrate);
            let profile = DeviceProfileBuilder::new(config.profile.name.as_str()).build(&capabilities, max_bitrate);
            println!("{}", profile.to_json_pretty()?);
        }
        Command::Capabilities { catalog } => {
            let capabilities = scan_catalog(&catalog)?;
            for capability in capabilities.iter() {
                let detail = match capability.kind {
                    CodecKind::Video => format!(
                        "profiles [{}] max level {}",
                        capability.profiles.iter().cloned().collect::<Vec<_>>().join(", "),
                        capability.max_level().map_or_else(|| "-".to_string(), |l| l.to_string())
                    ),
                    CodecKind::Audio => format!(
                        "profiles [{}]",
                        capability.profiles.iter().cloned().collect::<Vec<_>>().join(", ")
                    ),
                };
                println!(
                    "{:<5} {:<10} {:<24} {:>10}  {}",
                    capability.kind,
                    capability.codec,
                    capability.mime_type,
                    format_bitrate(capability.max_bitrate),
                    detail
                );
            }
        }
        Command::Check { catalog, container, video, audio } => {
            let capabilities = scan_catalog(&catalog)?;
            let profile = DeviceProfileBuilder::new(config.profile.name.as_str())
                .build(&capabilities, config.profile.max_streaming_bitrate);

            if profile.supports_direct_play(&container, video.as_deref(), audio.as_deref()) {
                println!("{}: direct play", container);
            } else {
                println!("{}: not direct playable", container);
                let codecs = [(CodecKind::Video, video.as_deref()), (CodecKind::Audio, audio.as_deref())];
                for (kind, codec) in codecs {
                    let Some(codec) = codec else { continue };
                    let carriers: Vec<_> = containers_carrying(kind, codec).collect();
                    println!("  {} {} is carried by [{}]", kind, codec, carriers.join(", "));
                }
            }
        }
        Command::Ladder { width, height, max_bitrate, auto } => {
            let options = quality_options(QualityRequest {
                video_width: width,
                video_height: height,
                current_max_bitrate: max_bitrate.unwrap_or(config.profile.max_streaming_bitrate),
                automatic_enabled: auto,
                include_auto: config.playback.include_auto_quality,
            });
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}

fn scan_catalog(path: &Path) -> Result<directplay::DecoderCapabilities> {
    let catalog = StaticCodecCatalog::from_file(path)
        .with_context(|| format!("Failed to load codec catalog {}", path.display()))?;
    Ok(scan(&catalog))
}
