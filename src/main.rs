/**
 * Scatter Noise CLI - Command-line interface for scatter texture generation
 */

mod generator;
mod preset;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use generator::{save_texture_to_png, ScatterConfig, ScatterGenerator};
use preset::render_presets;

/// Scatter alpha texture generation tools
#[derive(Parser)]
#[command(name = "scatter-noise")]
#[command(version = "0.1.0")]
#[command(about = "Random-scatter alpha texture generation tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scatter texture with explicit dimensions and draw count
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "scatter-noise.png")]
        output: PathBuf,

        /// Texture width in pixels
        #[arg(short = 'W', long, default_value = "256")]
        width: usize,

        /// Texture height in pixels
        #[arg(short = 'H', long, default_value = "256")]
        height: usize,

        /// Number of scatter draws
        #[arg(short, long, default_value = "16384")]
        count: usize,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u32>,

        /// Show detailed generation progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render the built-in density map presets
    Presets {
        /// Directory the preset textures are written into
        #[arg(short, long, default_value = "res/textures")]
        out_dir: PathBuf,

        /// Render only the named preset (e.g. "dog-fur")
        #[arg(long)]
        only: Option<String>,

        /// Random seed for reproducibility (offset per preset)
        #[arg(long)]
        seed: Option<u32>,

        /// Show detailed generation progress
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            width,
            height,
            count,
            seed,
            verbose,
        } => {
            // Validate inputs
            if width == 0 || height == 0 {
                anyhow::bail!("Width and height must be positive");
            }
            if width > 16_384 || height > 16_384 {
                anyhow::bail!("Width and height must be 16384 or less");
            }

            if !verbose {
                println!("Generating {}x{} scatter texture", width, height);
                println!("Scatter draws: {}", count);
                if let Some(s) = seed {
                    println!("Seed: {}", s);
                }
                println!("Output: {}", output.display());
                println!();
            }

            // Create output directory if it doesn't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create output directory")?;
            }

            // Generate the texture
            let config = ScatterConfig {
                width,
                height,
                count,
                seed,
                verbose,
            };

            let generator = ScatterGenerator::new(config)
                .context("Failed to create generator")?;
            let texture = generator.generate();

            // Save to file
            save_texture_to_png(&texture, &output)
                .context("Failed to save scatter texture")?;

            println!();
            println!(
                "Placed {} opaque pixels ({} collisions)",
                texture.opaque_pixels,
                count - texture.opaque_pixels
            );
            println!("Done!");
        }

        Commands::Presets {
            out_dir,
            only,
            seed,
            verbose,
        } => {
            // Select the presets to render
            let selected: Vec<_> = match &only {
                Some(name) => {
                    let preset = preset::find(name).with_context(|| {
                        format!(
                            "Unknown preset: {} (available: {})",
                            name,
                            preset::ALL
                                .iter()
                                .map(|p| p.name)
                                .collect::<Vec<_>>()
                                .join(", ")
                        )
                    })?;
                    vec![preset]
                }
                None => preset::ALL.to_vec(),
            };

            println!("Rendering {} preset(s) into {}", selected.len(), out_dir.display());
            for preset in &selected {
                println!(
                    "  {}: {}x{}, {} draws -> {}",
                    preset.name, preset.width, preset.height, preset.count, preset.file_name
                );
            }
            if let Some(s) = seed {
                println!("Seed: {}", s);
            }
            println!();

            std::fs::create_dir_all(&out_dir)
                .context("Failed to create output directory")?;

            render_presets(&selected, &out_dir, seed, verbose)
                .context("Failed to render presets")?;

            println!();
            println!("Done!");
        }
    }

    Ok(())
}
