/**
 * Built-in Texture Presets
 *
 * The density maps shipped with the game assets were produced by a fixed
 * sequence of generator invocations. Those invocations are carried here as
 * data so the whole set can be re-rendered in one pass instead of editing
 * literal arguments.
 */

use crate::generator::{save_texture_to_png, Result, ScatterConfig, ScatterGenerator};
use std::path::Path;

/// A named scatter texture target with fixed dimensions and draw count
#[derive(Debug, Clone, Copy)]
pub struct TexturePreset {
    /// Short name used to select the preset
    pub name: &'static str,
    /// File name the texture is written under
    pub file_name: &'static str,
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Number of scatter draws
    pub count: usize,
}

/// Density map for the dog fur shell texture
pub const DOG_FUR: TexturePreset = TexturePreset {
    name: "dog-fur",
    file_name: "dog_fur_tur.png",
    width: 1900,
    height: 1900,
    count: 1_000_000,
};

/// Density map for the terrain fur shell texture
pub const TERRAIN_FUR: TexturePreset = TexturePreset {
    name: "terrain-fur",
    file_name: "terrain_fur_tur.png",
    width: 2000,
    height: 2000,
    count: 1_500_000,
};

/// All built-in presets in render order
pub const ALL: [TexturePreset; 2] = [DOG_FUR, TERRAIN_FUR];

/// Look up a built-in preset by name
pub fn find(name: &str) -> Option<TexturePreset> {
    ALL.iter().find(|preset| preset.name == name).copied()
}

/**
 * Render a set of presets into `dir`
 *
 * Each preset is generated and written under its own file name. A supplied
 * seed is offset per preset so no two presets share a pixel pattern. The
 * directory must already exist; a failing write aborts the remaining
 * presets.
 */
pub fn render_presets<P: AsRef<Path>>(
    presets: &[TexturePreset],
    dir: P,
    seed: Option<u32>,
    verbose: bool,
) -> Result<()> {
    for (i, preset) in presets.iter().enumerate() {
        let config = ScatterConfig {
            width: preset.width,
            height: preset.height,
            count: preset.count,
            seed: seed.map(|s| s.wrapping_add(i as u32)),
            verbose,
        };

        let generator = ScatterGenerator::new(config)?;
        let texture = generator.generate();
        save_texture_to_png(&texture, dir.as_ref().join(preset.file_name))?;
    }

    Ok(())
}
