//! Legacy material catalog: legacy names → identities, modern names →
//! default block states.
//!
//! The built-in tables cover the legacy materials the translation registry
//! needs plus the common terrain blocks. Each legacy row also names the
//! modern material a generic conversion lands on, which is what
//! [`CatalogConversion`](crate::native::CatalogConversion) uses in place of a
//! host process.

use std::collections::HashMap;

use tracing::debug;

use crate::capabilities::CapabilityFlags;
use crate::config::TranslationConfig;
use crate::error::TranslateError;
use crate::material::{normalize_legacy_name, LegacyMaterial};
use crate::state::{PropertyState, PropertyValue, MINECRAFT_NAMESPACE};

/// Legacy rows: (legacy name, legacy id, modern material of the generic conversion).
///
/// Signs are appended by [`LegacyMaterialCatalog::builtin`] because their
/// modern names depend on the running revision.
const LEGACY_MATERIALS: &[(&str, u16, &str)] = &[
    ("AIR", 0, "AIR"),
    ("STONE", 1, "STONE"),
    ("GRASS", 2, "GRASS_BLOCK"),
    ("DIRT", 3, "DIRT"),
    ("COBBLESTONE", 4, "COBBLESTONE"),
    ("WOOD", 5, "OAK_PLANKS"),
    ("BEDROCK", 7, "BEDROCK"),
    ("SAND", 12, "SAND"),
    ("GRAVEL", 13, "GRAVEL"),
    ("LOG", 17, "OAK_LOG"),
    ("GLASS", 20, "GLASS"),
    ("WOOL", 35, "WHITE_WOOL"),
    ("DOUBLE_STEP", 43, "STONE_SLAB"),
    ("STEP", 44, "STONE_SLAB"),
    ("TORCH", 50, "TORCH"),
    ("MOB_SPAWNER", 52, "SPAWNER"),
    ("CHEST", 54, "CHEST"),
    ("WORKBENCH", 58, "CRAFTING_TABLE"),
    ("FURNACE", 61, "FURNACE"),
    ("BURNING_FURNACE", 62, "FURNACE"),
    ("REDSTONE_TORCH_OFF", 75, "REDSTONE_TORCH"),
    ("REDSTONE_TORCH_ON", 76, "REDSTONE_TORCH"),
    ("MELON_BLOCK", 103, "MELON"),
    ("WOOD_DOUBLE_STEP", 125, "OAK_SLAB"),
    ("WOOD_STEP", 126, "OAK_SLAB"),
    ("ENDER_CHEST", 130, "ENDER_CHEST"),
    ("TRAPPED_CHEST", 146, "TRAPPED_CHEST"),
    ("REDSTONE_COMPARATOR_OFF", 149, "COMPARATOR"),
    ("REDSTONE_COMPARATOR_ON", 150, "COMPARATOR"),
    ("DOUBLE_STONE_SLAB2", 181, "RED_SANDSTONE_SLAB"),
    ("STONE_SLAB2", 182, "RED_SANDSTONE_SLAB"),
    ("PURPUR_DOUBLE_SLAB", 204, "PURPUR_SLAB"),
    ("PURPUR_SLAB", 205, "PURPUR_SLAB"),
];

/// Legacy sign rows, converted to the revision's wall / post sign names.
const SIGN_POST: (&str, u16) = ("SIGN_POST", 63);
const WALL_SIGN: (&str, u16) = ("WALL_SIGN", 68);

/// Modern rows: (material name, default properties as printed tokens).
const MODERN_BLOCKS: &[(&str, &[(&str, &str)])] = &[
    ("AIR", &[]),
    ("STONE", &[]),
    ("GRASS_BLOCK", &[("snowy", "false")]),
    ("DIRT", &[]),
    ("COBBLESTONE", &[]),
    ("OAK_PLANKS", &[]),
    ("BEDROCK", &[]),
    ("SAND", &[]),
    ("GRAVEL", &[]),
    ("OAK_LOG", &[("axis", "y")]),
    ("GLASS", &[]),
    ("WHITE_WOOL", &[]),
    ("STONE_SLAB", &[("type", "bottom"), ("waterlogged", "false")]),
    ("OAK_SLAB", &[("type", "bottom"), ("waterlogged", "false")]),
    ("RED_SANDSTONE_SLAB", &[("type", "bottom"), ("waterlogged", "false")]),
    ("PURPUR_SLAB", &[("type", "bottom"), ("waterlogged", "false")]),
    ("TORCH", &[]),
    ("WALL_TORCH", &[("facing", "north")]),
    ("REDSTONE_TORCH", &[("lit", "true")]),
    ("REDSTONE_WALL_TORCH", &[("facing", "north"), ("lit", "true")]),
    ("SPAWNER", &[]),
    (
        "CHEST",
        &[("facing", "north"), ("type", "single"), ("waterlogged", "false")],
    ),
    (
        "TRAPPED_CHEST",
        &[("facing", "north"), ("type", "single"), ("waterlogged", "false")],
    ),
    ("ENDER_CHEST", &[("facing", "north"), ("waterlogged", "false")]),
    ("CRAFTING_TABLE", &[]),
    ("FURNACE", &[("facing", "north"), ("lit", "false")]),
    ("MELON", &[]),
    (
        "COMPARATOR",
        &[("facing", "north"), ("mode", "compare"), ("powered", "false")],
    ),
];

const POST_SIGN_DEFAULTS: &[(&str, &str)] = &[("rotation", "0"), ("waterlogged", "false")];
const WALL_SIGN_DEFAULTS: &[(&str, &str)] = &[("facing", "north"), ("waterlogged", "false")];

/// Lookup tables for one running format revision. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct LegacyMaterialCatalog {
    legacy: HashMap<String, LegacyMaterial>,
    conversions: HashMap<LegacyMaterial, String>,
    modern: HashMap<String, PropertyState>,
}

impl LegacyMaterialCatalog {
    /// Built-in tables for the revision described by `flags`.
    pub fn builtin(flags: &CapabilityFlags) -> Self {
        let (wall_sign, post_sign) = flags.sign_material_names();

        let mut legacy: Vec<(&str, u16, &str)> = LEGACY_MATERIALS.to_vec();
        legacy.push((SIGN_POST.0, SIGN_POST.1, post_sign));
        legacy.push((WALL_SIGN.0, WALL_SIGN.1, wall_sign));

        let mut modern: Vec<PropertyState> = MODERN_BLOCKS
            .iter()
            .map(|(name, props)| modern_state(name, props))
            .collect();
        modern.push(modern_state(post_sign, POST_SIGN_DEFAULTS));
        modern.push(modern_state(wall_sign, WALL_SIGN_DEFAULTS));

        Self::from_tables(legacy, modern)
    }

    /// Built-in tables adjusted by the `[catalog]` section of a config.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let mut catalog = Self::builtin(&config.capabilities);
        for name in &config.catalog.absent {
            catalog.remove_legacy(name);
        }
        catalog
    }

    /// Build a catalog from explicit tables.
    ///
    /// `legacy` rows are (legacy name, legacy id, modern material name of the
    /// generic conversion); `modern` holds the default state of every modern
    /// block type.
    pub fn from_tables<'a>(
        legacy: impl IntoIterator<Item = (&'a str, u16, &'a str)>,
        modern: impl IntoIterator<Item = PropertyState>,
    ) -> Self {
        let mut catalog = Self::default();
        for state in modern {
            catalog
                .modern
                .insert(normalize_modern_name(state.name()), state);
        }
        for (name, id, target) in legacy {
            let material = LegacyMaterial::new(name, id);
            catalog
                .conversions
                .insert(material.clone(), normalize_modern_name(target));
            catalog
                .legacy
                .insert(material.name().to_string(), material);
        }
        catalog
    }

    /// Drop a legacy material that the running revision does not have.
    pub fn remove_legacy(&mut self, name: &str) -> Option<LegacyMaterial> {
        let removed = self.legacy.remove(&normalize_legacy_name(name))?;
        self.conversions.remove(&removed);
        debug!("Legacy material {removed} marked absent");
        Some(removed)
    }

    /// Resolve a legacy material by name, with or without `LEGACY_`.
    pub fn resolve(&self, name: &str) -> Option<LegacyMaterial> {
        self.legacy.get(&normalize_legacy_name(name)).cloned()
    }

    /// Resolve several names at once. Unknown names yield `None` in place.
    pub fn all_by_name(&self, names: &[&str]) -> Vec<Option<LegacyMaterial>> {
        names.iter().map(|name| self.resolve(name)).collect()
    }

    /// Default state of a modern block type, by material name
    /// (`OAK_WALL_SIGN`) or block name (`minecraft:oak_wall_sign`).
    pub fn default_state(&self, modern_name: &str) -> Result<PropertyState, TranslateError> {
        self.modern
            .get(&normalize_modern_name(modern_name))
            .cloned()
            .ok_or_else(|| TranslateError::UnknownModernType(modern_name.to_string()))
    }

    /// Modern material a legacy material generically converts to.
    pub fn modern_name_for(&self, material: &LegacyMaterial) -> Option<&str> {
        self.conversions.get(material).map(String::as_str)
    }

    /// All legacy materials known to this catalog, in no particular order.
    pub fn legacy_materials(&self) -> impl Iterator<Item = &LegacyMaterial> {
        self.legacy.values()
    }

    pub fn legacy_len(&self) -> usize {
        self.legacy.len()
    }

    pub fn modern_len(&self) -> usize {
        self.modern.len()
    }
}

fn modern_state(material: &str, props: &[(&str, &str)]) -> PropertyState {
    PropertyState::new(&material.to_ascii_lowercase()).with_all(
        props
            .iter()
            .map(|(k, v)| (*k, PropertyValue::parse(v))),
    )
}

/// `minecraft:oak_sign` / `oak_sign` / `OAK_SIGN` → `OAK_SIGN`.
fn normalize_modern_name(name: &str) -> String {
    name.trim()
        .strip_prefix(MINECRAFT_NAMESPACE)
        .unwrap_or(name.trim())
        .to_ascii_uppercase()
}
