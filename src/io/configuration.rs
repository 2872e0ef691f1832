//! Defaults and tuning constants

/// Default width and height for generated textures
pub const DEFAULT_TEXTURE_SIZE: u32 = 512;

/// Fixed seed for reproducible noise lattices
pub const DEFAULT_SEED: u64 = 42;

/// Half-width of the square brush stamp in pixels
pub const BRUSH_RADIUS: i32 = 3;

/// Default output path for generated textures
pub const DEFAULT_OUTPUT: &str = "texture.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
