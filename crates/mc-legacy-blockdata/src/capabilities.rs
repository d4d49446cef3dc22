//! Format revision capability flags.
//!
//! The flags are resolved once by the host at startup (or read from
//! [`TranslationConfig`](crate::config::TranslationConfig)) and never change
//! afterwards.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CapabilityFlags {
    /// Block states carry named property schemas and legacy materials were
    /// renamed per color / variant.
    #[serde(default)]
    pub material_enum_changes: bool,
    /// Sign block types are split per wood type (`OAK_SIGN`, `OAK_WALL_SIGN`).
    #[serde(default)]
    pub material_sign_types: bool,
}

impl CapabilityFlags {
    /// Revisions where blocks are still a material id plus a data byte.
    pub const LEGACY: Self = Self {
        material_enum_changes: false,
        material_sign_types: false,
    };

    /// Property schemas exist, signs are still `SIGN` / `WALL_SIGN`.
    pub const FLATTENED: Self = Self {
        material_enum_changes: true,
        material_sign_types: false,
    };

    /// Property schemas exist and signs are split per wood type.
    pub const SIGN_TYPES: Self = Self {
        material_enum_changes: true,
        material_sign_types: true,
    };

    /// Modern (wall, post) sign material names for this revision.
    pub fn sign_material_names(&self) -> (&'static str, &'static str) {
        if self.material_sign_types {
            ("OAK_WALL_SIGN", "OAK_SIGN")
        } else {
            ("WALL_SIGN", "SIGN")
        }
    }
}
