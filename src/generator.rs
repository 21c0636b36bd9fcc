/**
 * Random Scatter Alpha Texture Generator
 *
 * Produces RGBA density textures by scattering a fixed number of fully
 * opaque black pixels onto a fully transparent canvas. The textures act as
 * density maps (fur and terrain coverage in the shipped assets) and are
 * normally blurred and stacked by an external tool afterwards; this module
 * only produces the raw scatter input for that step.
 *
 * CANVAS LAYOUT
 * =============
 * The canvas is a flat RGBA byte buffer in row-major order: the pixel at
 * (x, y) occupies data[(y * width + x) * 4 .. (y * width + x) * 4 + 4],
 * channel order red, green, blue, alpha. Every pixel is either
 * (0, 0, 0, 0) or (0, 0, 0, 255); no intermediate values are produced.
 *
 * COLLISIONS
 * ==========
 * Scatter coordinates are drawn independently per iteration, so the same
 * pixel can be hit more than once. Re-plotting is idempotent, which means
 * the opaque pixel count after `count` draws equals `count` minus the
 * number of collisions. A count larger than the canvas area is allowed and
 * simply saturates toward full coverage.
 */

use image::{ImageBuffer, Rgba, RgbaImage};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use thiserror::Error;

/// Configuration for scatter texture generation
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    /// Width of the texture in pixels
    pub width: usize,
    /// Height of the texture in pixels
    pub height: usize,
    /// Number of scatter draws
    pub count: usize,
    /// Optional random seed for reproducible results
    pub seed: Option<u32>,
    /// Show progress indicators
    pub verbose: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            count: 16_384,
            seed: None,
            verbose: false,
        }
    }
}

/// Result of scatter texture generation
#[derive(Debug, Clone)]
pub struct ScatterTexture {
    /// Flat RGBA pixel data, row-major, 4 bytes per pixel
    pub data: Vec<u8>,
    /// Width of the generated texture
    pub width: usize,
    /// Height of the generated texture
    pub height: usize,
    /// Number of distinct pixels set opaque (`count` minus collisions)
    pub opaque_pixels: usize,
}

/// Error types for scatter texture generation
#[derive(Error, Debug)]
pub enum ScatterError {
    /// Width or height is zero
    #[error("Width and height must be positive")]
    InvalidDimensions,

    /// Failed to encode or write the output image
    #[error("Failed to save image: {0}")]
    ImageSaveError(#[from] image::ImageError),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, ScatterError>;

/**
 * Mulberry32 seeded random number generator
 * Fast, high-quality PRNG for reproducible results
 */
struct SeededRandom {
    seed: u32,
}

impl SeededRandom {
    fn new(seed: Option<u32>) -> Self {
        Self {
            seed: seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_millis() as u32
            }),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_add(0x6D2B79F5);
        let mut t = self.seed ^ (self.seed >> 15);
        t = t.wrapping_mul(1 | self.seed);
        t ^= t.wrapping_add(t.wrapping_mul(t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    /// Uniform draw from [0, bound). `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound
    }
}

/**
 * Main type for generating scatter textures
 */
pub struct ScatterGenerator {
    // Configuration
    width: usize,
    height: usize,
    count: usize,
    verbose: bool,
    random: SeededRandom,

    // Working canvas, flat RGBA
    canvas: Vec<u8>,
    opaque_pixels: usize,

    // Progress bar
    progress: Option<ProgressBar>,
}

impl ScatterGenerator {
    /// Bytes per pixel in the canvas
    const CHANNELS: usize = 4;
    /// Pixel value written by every scatter draw
    const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];
    /// Draws between progress bar updates
    const PROGRESS_CHUNK: usize = 65_536;

    /// Create a new generator with the given configuration
    pub fn new(config: ScatterConfig) -> Result<Self> {
        // Validation
        if config.width == 0 || config.height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }

        let progress = if config.verbose {
            Some(ProgressBar::new(config.count as u64))
        } else {
            None
        };

        if let Some(pb) = &progress {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>9}/{len:9} {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            count: config.count,
            verbose: config.verbose,
            random: SeededRandom::new(config.seed),
            canvas: vec![0; config.width * config.height * Self::CHANNELS],
            opaque_pixels: 0,
            progress,
        })
    }

    /**
     * Set the pixel at (x, y) to fully opaque black
     *
     * Idempotent: a pixel that is already opaque stays opaque and does not
     * count twice toward `opaque_pixels`.
     */
    fn plot(&mut self, x: usize, y: usize) {
        let idx = (y * self.width + x) * Self::CHANNELS;
        if self.canvas[idx + 3] == 0 {
            self.opaque_pixels += 1;
        }
        self.canvas[idx..idx + Self::CHANNELS].copy_from_slice(&Self::OPAQUE_BLACK);
    }

    /**
     * Generate the scatter texture
     *
     * Draws `count` coordinates uniformly at random from the canvas and
     * plots each one as an opaque black pixel. Consumes the generator; the
     * returned texture owns the canvas. The scatter loop itself cannot
     * fail once the generator is constructed.
     */
    pub fn generate(mut self) -> ScatterTexture {
        let start_time = std::time::Instant::now();

        if self.verbose {
            println!(
                "Scattering {} points onto a {}x{} canvas...",
                self.count, self.width, self.height
            );
        }

        if let Some(pb) = &self.progress {
            pb.set_message("Scattering points");
        }

        for i in 0..self.count {
            let x = self.random.next_below(self.width);
            let y = self.random.next_below(self.height);
            self.plot(x, y);

            if i % Self::PROGRESS_CHUNK == 0 {
                if let Some(pb) = &self.progress {
                    pb.set_position(i as u64);
                }
            }
        }

        if let Some(pb) = &self.progress {
            pb.set_position(self.count as u64);
            pb.finish_with_message("Scatter complete");
        }

        if self.verbose {
            let elapsed = start_time.elapsed();
            println!(
                "Placed {} opaque pixels ({} collisions) in {:.2}s",
                self.opaque_pixels,
                self.count - self.opaque_pixels,
                elapsed.as_secs_f32()
            );
        }

        ScatterTexture {
            data: self.canvas,
            width: self.width,
            height: self.height,
            opaque_pixels: self.opaque_pixels,
        }
    }
}

/**
 * Convenience function to generate a scatter texture
 */
pub fn generate_scatter_texture(
    width: usize,
    height: usize,
    count: usize,
) -> Result<ScatterTexture> {
    let config = ScatterConfig {
        width,
        height,
        count,
        ..Default::default()
    };
    let generator = ScatterGenerator::new(config)?;
    Ok(generator.generate())
}

/**
 * Save a scatter texture to an RGBA PNG file
 *
 * Overwrites any existing file at `filename`. Encoding and I/O failures
 * propagate unmodified; there is no retry.
 */
pub fn save_texture_to_png<P: AsRef<Path>>(texture: &ScatterTexture, filename: P) -> Result<()> {
    let img: RgbaImage = ImageBuffer::from_fn(texture.width as u32, texture.height as u32, |x, y| {
        let idx = (y as usize * texture.width + x as usize) * 4;
        Rgba([
            texture.data[idx],
            texture.data[idx + 1],
            texture.data[idx + 2],
            texture.data[idx + 3],
        ])
    });

    img.save(&filename)?;
    println!("Saved scatter texture to {}", filename.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_coords(texture: &ScatterTexture) -> Vec<(usize, usize)> {
        let mut coords = Vec::new();
        for y in 0..texture.height {
            for x in 0..texture.width {
                let idx = (y * texture.width + x) * 4;
                if texture.data[idx + 3] == 255 {
                    coords.push((x, y));
                }
            }
        }
        coords
    }

    #[test]
    fn test_seeded_random_deterministic() {
        let mut rng1 = SeededRandom::new(Some(42));
        let mut rng2 = SeededRandom::new(Some(42));

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_seeded_random_bound() {
        let mut rng = SeededRandom::new(Some(12345));

        // All draws should stay below the bound
        for bound in [1, 2, 7, 256, 1900] {
            for _ in 0..1000 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        // Valid config should work
        let config = ScatterConfig {
            width: 64,
            height: 64,
            count: 100,
            seed: Some(42),
            verbose: false,
        };
        assert!(ScatterGenerator::new(config).is_ok());

        // Zero width should fail
        let config = ScatterConfig {
            width: 0,
            height: 64,
            ..Default::default()
        };
        assert!(matches!(
            ScatterGenerator::new(config),
            Err(ScatterError::InvalidDimensions)
        ));

        // Zero height should fail
        let config = ScatterConfig {
            width: 64,
            height: 0,
            ..Default::default()
        };
        assert!(matches!(
            ScatterGenerator::new(config),
            Err(ScatterError::InvalidDimensions)
        ));
    }

    #[test]
    fn test_zero_count_all_transparent() {
        let config = ScatterConfig {
            width: 32,
            height: 32,
            count: 0,
            seed: Some(42),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        assert_eq!(texture.opaque_pixels, 0);
        assert!(texture.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixels_are_transparent_or_opaque_black() {
        let config = ScatterConfig {
            width: 64,
            height: 64,
            count: 1000,
            seed: Some(7),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        assert_eq!(texture.data.len(), 64 * 64 * 4);
        for pixel in texture.data.chunks_exact(4) {
            assert!(pixel == [0, 0, 0, 0] || pixel == [0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_opaque_count_bounds() {
        let config = ScatterConfig {
            width: 100,
            height: 100,
            count: 500,
            seed: Some(99),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        // At most one opaque pixel per draw, at least one for count >= 1
        assert!(texture.opaque_pixels <= 500);
        assert!(texture.opaque_pixels >= 1);

        // The reported count matches the canvas contents
        assert_eq!(opaque_coords(&texture).len(), texture.opaque_pixels);
    }

    #[test]
    fn test_duplicate_plots_collapse() {
        let config = ScatterConfig {
            width: 10,
            height: 10,
            count: 0,
            seed: Some(1),
            verbose: false,
        };

        let mut generator = ScatterGenerator::new(config).unwrap();
        for (x, y) in [(1, 1), (2, 2), (1, 1), (5, 5), (9, 9)] {
            generator.plot(x, y);
        }
        let texture = generator.generate();

        // The duplicate (1, 1) collapses to a single opaque pixel
        assert_eq!(texture.opaque_pixels, 4);
        assert_eq!(
            opaque_coords(&texture),
            vec![(1, 1), (2, 2), (5, 5), (9, 9)]
        );
    }

    #[test]
    fn test_generate_reproducible() {
        let config1 = ScatterConfig {
            width: 32,
            height: 32,
            count: 200,
            seed: Some(12345),
            verbose: false,
        };
        let config2 = config1.clone();

        let texture1 = ScatterGenerator::new(config1).unwrap().generate();
        let texture2 = ScatterGenerator::new(config2).unwrap().generate();

        // Same seed should produce identical results
        assert_eq!(texture1.data, texture2.data);
        assert_eq!(texture1.opaque_pixels, texture2.opaque_pixels);
    }

    #[test]
    fn test_generate_different_seeds() {
        let config1 = ScatterConfig {
            width: 32,
            height: 32,
            count: 200,
            seed: Some(111),
            verbose: false,
        };
        let config2 = ScatterConfig {
            seed: Some(222),
            ..config1.clone()
        };

        let texture1 = ScatterGenerator::new(config1).unwrap().generate();
        let texture2 = ScatterGenerator::new(config2).unwrap().generate();

        // Different seeds should produce different results
        assert_ne!(texture1.data, texture2.data);
    }

    #[test]
    fn test_count_exceeding_area() {
        let config = ScatterConfig {
            width: 4,
            height: 4,
            count: 1000,
            seed: Some(42),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        // Excess draws only add collisions, never an error
        assert!(texture.opaque_pixels >= 1);
        assert!(texture.opaque_pixels <= 16);
    }

    #[test]
    fn test_rectangular_texture() {
        let config = ScatterConfig {
            width: 48,
            height: 16,
            count: 100,
            seed: Some(42),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        assert_eq!(texture.width, 48);
        assert_eq!(texture.height, 16);
        assert_eq!(texture.data.len(), 48 * 16 * 4);
    }

    #[test]
    fn test_png_round_trip() {
        let config = ScatterConfig {
            width: 16,
            height: 16,
            count: 40,
            seed: Some(42),
            verbose: false,
        };

        let generator = ScatterGenerator::new(config).unwrap();
        let texture = generator.generate();

        let path = std::env::temp_dir().join("scatter_noise_round_trip.png");
        save_texture_to_png(&texture, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.into_raw(), texture.data);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let texture = generate_scatter_texture(8, 8, 10).unwrap();

        let path = std::env::temp_dir()
            .join("scatter_noise_no_such_dir")
            .join("texture.png");
        assert!(matches!(
            save_texture_to_png(&texture, &path),
            Err(ScatterError::ImageSaveError(_))
        ));
    }

    #[test]
    fn test_convenience_function() {
        let texture = generate_scatter_texture(16, 16, 30).unwrap();

        assert_eq!(texture.width, 16);
        assert_eq!(texture.height, 16);
        assert_eq!(texture.data.len(), 16 * 16 * 4);
        assert!(texture.opaque_pixels <= 30);
    }

    #[test]
    fn test_convenience_function_rejects_zero_width() {
        assert!(matches!(
            generate_scatter_texture(0, 10, 5),
            Err(ScatterError::InvalidDimensions)
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ScatterConfig::default();
        assert_eq!(config.width, 256);
        assert_eq!(config.height, 256);
        assert_eq!(config.count, 16_384);
        assert_eq!(config.seed, None);
        assert_eq!(config.verbose, false);
    }
}
