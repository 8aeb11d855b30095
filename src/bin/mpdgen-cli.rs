use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use mpdgen::{
    AdaptiveStream, ManifestConfig, ManifestGenerator, MediaInfo, StreamFilter, group_streams,
};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  mpdgen generate media.json --pretty\n  mpdgen generate media.json --out manifest.mpd --max-height 720 --codec avc --codec mp4a\n  mpdgen inspect media.json --json\n  mpdgen completions zsh > _mpdgen";

#[derive(Debug, Parser)]
#[command(
    name = "mpdgen",
    version,
    about = "Generate DASH manifests from adaptive stream descriptions",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional output.
    #[arg(long)]
    verbose: bool,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a manifest from a media info JSON document.
    #[command(
        about = "Generate a DASH manifest",
        after_help = "Examples:\n  mpdgen generate media.json\n  mpdgen generate media.json --out manifest.mpd --pretty --indent 4"
    )]
    Generate {
        /// Media info JSON path.
        input: PathBuf,
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Break lines and indent nested elements.
        #[arg(long)]
        pretty: bool,
        /// Spaces per nesting level in pretty mode.
        #[arg(long, default_value_t = mpdgen::DEFAULT_INDENT)]
        indent: u32,
        /// Leave out streams taller than this many pixels.
        #[arg(long)]
        max_height: Option<u32>,
        /// Keep only streams whose codec starts with this prefix (repeatable).
        #[arg(long = "codec")]
        codecs: Vec<String>,
    },

    /// Show how streams are grouped into adaptation sets.
    #[command(
        about = "Print adaptation sets",
        after_help = "Examples:\n  mpdgen inspect media.json\n  mpdgen inspect media.json --json"
    )]
    Inspect {
        /// Media info JSON path.
        input: PathBuf,
        /// Output as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default)]
struct FilterOptions {
    max_height: Option<u32>,
    codec_prefixes: Vec<String>,
}

impl FilterOptions {
    fn is_empty(&self) -> bool {
        self.max_height.is_none() && self.codec_prefixes.is_empty()
    }

    fn accepts(&self, stream: &AdaptiveStream) -> bool {
        if self.max_height.is_some_and(|max| stream.height > max) {
            return false;
        }
        if self.codec_prefixes.is_empty() {
            return true;
        }
        [stream.video_codec.as_deref(), stream.audio_codec.as_deref()]
            .into_iter()
            .flatten()
            .any(|codec| {
                self.codec_prefixes
                    .iter()
                    .any(|prefix| codec.starts_with(prefix.as_str()))
            })
    }

    fn into_filter(self, verbose: bool) -> StreamFilter {
        StreamFilter::with_state(
            self,
            |stream, options| options.accepts(stream),
            move |options| {
                if verbose {
                    eprintln!("{} {:?}", "released filter".dimmed(), options);
                }
            },
        )
    }
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            out,
            pretty,
            indent,
            max_height,
            codecs,
        } => {
            let info = MediaInfo::from_json_file(&input)?;
            if cli.global.verbose {
                eprintln!(
                    "loaded {} stream(s), duration {}s",
                    info.adaptive_streams.len(),
                    info.duration
                );
            }

            let mut generator = ManifestGenerator::with_config(
                ManifestConfig::new().with_pretty(pretty).with_indent(indent),
            );
            generator.set_media_info(Arc::new(info));

            let filter = FilterOptions {
                max_height,
                codec_prefixes: codecs,
            };
            if !filter.is_empty() {
                generator.set_filter(filter.into_filter(cli.global.verbose));
            }

            match out {
                Some(path) => {
                    ensure_writable_path(&path, cli.global.overwrite)?;
                    generator.to_file(&path)?;
                    println!("{} {}", "saved".green().bold(), path.display());
                }
                None => {
                    let manifest = generator.to_data()?;
                    if manifest.is_empty() {
                        eprintln!(
                            "{} {}",
                            "warning:".yellow().bold(),
                            "no stream qualified for the manifest".yellow()
                        );
                    } else {
                        println!("{manifest}");
                    }
                }
            }
        }
        Commands::Inspect { input, json } => {
            let info = MediaInfo::from_json_file(&input)?;
            let groups = group_streams(&info.adaptive_streams, None);

            if json {
                let payload: Vec<_> = groups
                    .iter()
                    .map(|group| {
                        json!({
                            "mime_type": group.mime_str(),
                            "codec": format!("{:?}", group.codec()),
                            "max_width": group.max_width(),
                            "max_height": group.max_height(),
                            "max_fps": group.max_fps(),
                            "par": group.par(),
                            "itags": group.streams().iter().map(|stream| stream.itag).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Duration: {}s", info.duration);
                for group in &groups {
                    let mime = group.mime_str().unwrap_or("unknown");
                    if group.mime_type().is_video() {
                        println!(
                            "{} [{:?}] max {}x{} @ {} fps, par {}",
                            mime.cyan().bold(),
                            group.codec(),
                            group.max_width(),
                            group.max_height(),
                            group.max_fps(),
                            group.par(),
                        );
                    } else {
                        println!("{} [{:?}]", mime.cyan().bold(), group.codec());
                    }
                    for stream in group.streams() {
                        println!(
                            "  {:>5}  {:<24} {} bps",
                            stream.itag,
                            stream.codecs().unwrap_or_default(),
                            stream.bitrate,
                        );
                    }
                }

                let grouped: usize = groups.iter().map(|group| group.streams().len()).sum();
                let skipped = info.adaptive_streams.len() - grouped;
                if skipped > 0 {
                    println!(
                        "{}",
                        format!("{skipped} stream(s) with unsupported mime type or codec").dimmed()
                    );
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "mpdgen", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
