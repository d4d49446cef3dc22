//! Legacy material identities and (material, data) values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Prefix the flattened material enum puts in front of legacy names.
pub const LEGACY_PREFIX: &str = "LEGACY_";

/// One entry of the legacy material enum.
///
/// Identities compare and hash by legacy name only. Two legacy materials
/// that convert to the same modern block are still distinct keys.
#[derive(Debug, Clone)]
pub struct LegacyMaterial {
    name: Arc<str>,
    id: u16,
}

impl LegacyMaterial {
    /// Create an identity. The name is stored upper-case without `LEGACY_`.
    pub fn new(name: &str, id: u16) -> Self {
        Self {
            name: Arc::from(normalize_legacy_name(name)),
            id,
        }
    }

    /// Canonical legacy name, e.g. `WALL_SIGN`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric id of the legacy material enum.
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn is(&self, name: &str) -> bool {
        *self.name == *name
    }
}

impl PartialEq for LegacyMaterial {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for LegacyMaterial {}

impl Hash for LegacyMaterial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for LegacyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LEGACY_PREFIX}{}", self.name)
    }
}

/// Upper-case a legacy material name and strip the `LEGACY_` prefix.
pub fn normalize_legacy_name(name: &str) -> String {
    let upper = name.trim().to_ascii_uppercase();
    match upper.strip_prefix(LEGACY_PREFIX) {
        Some(rest) => rest.to_string(),
        None => upper,
    }
}

/// A legacy block value: material plus its auxiliary data byte.
///
/// The item type is optional because callers hand over values read from
/// foreign sources; translating one without an item type is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialData {
    pub item_type: Option<LegacyMaterial>,
    pub data: u8,
}

impl MaterialData {
    pub fn new(item_type: LegacyMaterial, data: u8) -> Self {
        Self {
            item_type: Some(item_type),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_case_are_normalized() {
        assert_eq!(normalize_legacy_name("legacy_chest"), "CHEST");
        assert_eq!(normalize_legacy_name("WALL_SIGN"), "WALL_SIGN");
        assert_eq!(LegacyMaterial::new("LEGACY_TORCH", 50).name(), "TORCH");
    }

    #[test]
    fn identities_are_distinct_by_name() {
        let off = LegacyMaterial::new("REDSTONE_COMPARATOR_OFF", 149);
        let on = LegacyMaterial::new("REDSTONE_COMPARATOR_ON", 150);
        assert_ne!(off, on);
        assert_eq!(off, LegacyMaterial::new("legacy_redstone_comparator_off", 149));
    }

    #[test]
    fn id_does_not_affect_identity() {
        use std::collections::HashSet;

        let catalog_row = LegacyMaterial::new("WALL_SIGN", 68);
        let by_name = LegacyMaterial::new("legacy_wall_sign", 0);
        assert_eq!(catalog_row, by_name);

        let set: HashSet<_> = [catalog_row].into_iter().collect();
        assert!(set.contains(&by_name));
    }

    #[test]
    fn display_uses_prefix() {
        assert_eq!(LegacyMaterial::new("CHEST", 54).to_string(), "LEGACY_CHEST");
    }
}
