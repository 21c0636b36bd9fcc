//! Scatter Noise Library
//!
//! A small Rust implementation of random-scatter alpha texture generation:
//! a fixed number of fully opaque black pixels scattered uniformly at random
//! onto a fully transparent canvas, written out as an RGBA PNG. The output
//! serves as a density map for downstream rendering.
//!
//! # Features
//!
//! - Generate scatter textures with an exact draw count
//! - Reproducible results with seeded random number generation
//! - Built-in presets matching the shipped fur and terrain density maps
//! - RGBA PNG output with an explicit 8-bit alpha channel
//!
//! # Quick Start
//!
//! ```no_run
//! use scatter_noise::{ScatterConfig, ScatterGenerator, save_texture_to_png};
//!
//! let config = ScatterConfig {
//!     width: 256,
//!     height: 256,
//!     count: 16_384,
//!     seed: Some(42),
//!     verbose: false,
//! };
//!
//! let generator = ScatterGenerator::new(config).unwrap();
//! let texture = generator.generate();
//! save_texture_to_png(&texture, "scatter.png").unwrap();
//! ```
//!
//! # Pixel Layout
//!
//! Textures are flat RGBA byte buffers in row-major order: the pixel at
//! (x, y) starts at `data[(y * width + x) * 4]`. Every pixel is either
//! fully transparent (0, 0, 0, 0) or fully opaque black (0, 0, 0, 255).
//!
//! # Post-processing
//!
//! The shipped density maps are produced by blurring these textures with an
//! external tool, stacking several blurred copies so the result weights
//! local density rather than following a single Gaussian falloff. That step
//! happens outside this crate; the generator only produces a compatible
//! input file.

#![doc(html_root_url = "https://docs.rs/scatter-noise/0.1.0")]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Scatter texture generation module
pub mod generator;
/// Built-in texture presets module
pub mod preset;

// Re-export main types for convenience
pub use generator::{
    generate_scatter_texture, save_texture_to_png, ScatterConfig, ScatterError, ScatterGenerator,
    ScatterTexture,
};
pub use preset::{find as find_preset, render_presets, TexturePreset, ALL as PRESETS};
