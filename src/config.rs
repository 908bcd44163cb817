//! Construction-time configuration, read once and never re-read per tick —
//! the same shape the teacher's `simulation/init/settings.rs` snapshot uses
//! for its `Settings` struct.

/// Primary configuration from spec §5: 256x256 is "the primary
/// configuration" and is the default here so `UniverseConfig::default()`
/// matches it without the caller spelling out dimensions.
pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 256;

/// Fixed default seed so two default-constructed Universes are
/// deterministic replicas of one another (spec §8 property 6) without the
/// caller having to supply a seed.
pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

#[derive(Clone, Copy, Debug)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u32,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, seed: DEFAULT_SEED }
    }
}

impl UniverseConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self { width, height, seed }
    }
}
