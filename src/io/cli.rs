//! Command-line interface for generating and editing procedural textures
//!
//! The CLI is the parameter source for the generator registry: pattern
//! parameters arrive as `--set name=value` overrides and unresolved names
//! fall back to schema defaults.

use crate::io::codec::{load_texture, save_texture};
use crate::io::configuration::{DEFAULT_OUTPUT, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::raster::color::Color;
use crate::raster::transform;
use crate::synthesis::noise::NoiseField;
use crate::synthesis::patterns::GeneratorKind;
use crate::synthesis::registry::ResolvedParams;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "texturetk")]
#[command(
    author,
    version,
    about = "Generate procedural textures and edit raster images"
)]
/// Command-line arguments for the texture tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Texture operations exposed on the command line
#[derive(Subcommand)]
pub enum Command {
    /// Render a procedural pattern to a PNG file
    Generate {
        /// Pattern name: marble, wood, clouds, or xor
        pattern: String,

        /// Output PNG path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Parameter overrides, e.g. --set turb_power=150
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Gradient color for black pattern values (hex, e.g. 1a2b3c)
        #[arg(long, value_name = "HEX")]
        start_color: Option<String>,

        /// Gradient color for white pattern values (hex)
        #[arg(long, value_name = "HEX")]
        end_color: Option<String>,

        /// Seed for the noise lattice
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Flip a texture vertically
    FlipY {
        /// Input image path
        input: PathBuf,

        /// Output path (defaults to <input>_flipped.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rotate a texture 90 degrees clockwise
    Rotate {
        /// Input image path
        input: PathBuf,

        /// Output path (defaults to <input>_rotated.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recolor a grayscale texture along a gradient
    Recolor {
        /// Input image path
        input: PathBuf,

        /// Gradient color for black pixels (hex)
        #[arg(long, value_name = "HEX")]
        start_color: String,

        /// Gradient color for white pixels (hex)
        #[arg(long, value_name = "HEX")]
        end_color: String,

        /// Output path (defaults to <input>_recolored.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Alpha-blend a stack of same-sized textures, first at the bottom
    Composite {
        /// Input image paths, bottom layer first
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Executes one CLI command end to end: decode, operate, encode
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if parameter parsing, image I/O, or the texture
    /// operation itself fails
    pub fn run(self) -> Result<()> {
        match self.cli.command {
            Command::Generate {
                ref pattern,
                ref output,
                ref params,
                ref start_color,
                ref end_color,
                seed,
            } => generate(
                pattern,
                output,
                params,
                start_color.as_deref(),
                end_color.as_deref(),
                seed,
            ),
            Command::FlipY { ref input, ref output } => {
                let buffer = load_texture(input)?;
                let flipped = transform::flip_y(&buffer);
                save_texture(&flipped, &resolve_output(input, output.as_deref(), "_flipped"))
            }
            Command::Rotate { ref input, ref output } => {
                let buffer = load_texture(input)?;
                let rotated = transform::rotate90(&buffer);
                save_texture(&rotated, &resolve_output(input, output.as_deref(), "_rotated"))
            }
            Command::Recolor {
                ref input,
                ref start_color,
                ref end_color,
                ref output,
            } => {
                let buffer = load_texture(input)?;
                let start = start_color.parse::<Color>()?;
                let end = end_color.parse::<Color>()?;
                let recolored = transform::grayscale_to_gradient(&buffer, start, end);
                save_texture(
                    &recolored,
                    &resolve_output(input, output.as_deref(), "_recolored"),
                )
            }
            Command::Composite {
                ref inputs,
                ref output,
            } => composite(inputs, output, self.cli.quiet),
        }
    }
}

fn generate(
    pattern: &str,
    output: &Path,
    params: &[String],
    start_color: Option<&str>,
    end_color: Option<&str>,
    seed: u64,
) -> Result<()> {
    let kind = GeneratorKind::from_name(pattern).ok_or_else(|| {
        let known = GeneratorKind::ALL.map(GeneratorKind::name).join(", ");
        invalid_parameter("pattern", &pattern, &format!("expected one of: {known}"))
    })?;

    let overrides = params
        .iter()
        .map(|entry| parse_override(entry))
        .collect::<Result<Vec<_>>>()?;

    let resolved = ResolvedParams::resolve(kind.schema(), &overrides);
    let noise = NoiseField::from_seed(seed);
    let mut buffer = kind.generate(&resolved, &noise)?;

    if start_color.is_some() || end_color.is_some() {
        let start = parse_color(start_color, Color::BLACK)?;
        let end = parse_color(end_color, Color::WHITE)?;
        buffer = transform::grayscale_to_gradient(&buffer, start, end);
    }

    save_texture(&buffer, output)
}

fn composite(inputs: &[PathBuf], output: &Path, quiet: bool) -> Result<()> {
    let progress = (!quiet).then(|| ProgressManager::new(inputs.len()));

    let mut layers = Vec::with_capacity(inputs.len());
    for input in inputs {
        if let Some(pm) = &progress {
            pm.start_file(input);
        }
        layers.push(load_texture(input)?);
        if let Some(pm) = &progress {
            pm.complete_file();
        }
    }
    if let Some(pm) = &progress {
        pm.finish();
    }

    let merged = transform::composite_layers(&layers)?;
    save_texture(&merged, output)
}

fn parse_override(entry: &str) -> Result<(String, f64)> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| invalid_parameter("set", &entry, &"expected NAME=VALUE"))?;
    let value = value
        .parse::<f64>()
        .map_err(|e| invalid_parameter("set", &entry, &format!("invalid number: {e}")))?;
    Ok((name.to_string(), value))
}

fn parse_color(text: Option<&str>, default: Color) -> Result<Color> {
    text.map(str::parse::<Color>)
        .transpose()
        .map(|c| c.unwrap_or(default))
}

fn resolve_output(input: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    output.map_or_else(
        || {
            let stem = input.file_stem().unwrap_or_default();
            let file_name = format!("{}{suffix}.png", stem.to_string_lossy());
            input
                .parent()
                .map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name))
        },
        Path::to_path_buf,
    )
}
