//! Asset paths served from bundled resources in place of resource packs.
//!
//! The legacy translation replaces chest and sign models, so the matching
//! model and blockstate assets of a loaded resource pack must not be used.

use std::collections::HashSet;

const SHULKER_COLORS: [&str; 16] = [
    "black",
    "blue",
    "brown",
    "cyan",
    "gray",
    "green",
    "light_blue",
    "lime",
    "magenta",
    "orange",
    "pink",
    "purple",
    "red",
    "silver",
    "white",
    "yellow",
];

const FIXED_OVERRIDES: [&str; 8] = [
    "assets/minecraft/models/block/chest.json",
    "assets/minecraft/models/block/ender_chest.json",
    "assets/minecraft/models/block/trapped_chest.json",
    "assets/minecraft/models/block/christmas_chest.json",
    "assets/minecraft/models/block/wall_sign.json",
    "assets/minecraft/models/block/standing_sign.json",
    "assets/minecraft/blockstates/wall_sign.json",
    "assets/minecraft/blockstates/standing_sign.json",
];

#[derive(Debug, Clone)]
pub struct ResourceOverrides {
    paths: HashSet<String>,
}

impl ResourceOverrides {
    pub fn new() -> Self {
        let mut paths = HashSet::with_capacity(SHULKER_COLORS.len() * 2 + FIXED_OVERRIDES.len());
        for color in SHULKER_COLORS {
            paths.insert(format!("assets/minecraft/models/item/{color}_shulker_box.json"));
            paths.insert(format!("assets/minecraft/models/block/{color}_shulker_box.json"));
        }
        paths.extend(FIXED_OVERRIDES.iter().map(|p| p.to_string()));
        Self { paths }
    }

    /// Whether `path` must come from bundled resources.
    pub fn is_overridden(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ResourceOverrides {
    fn default() -> Self {
        Self::new()
    }
}
