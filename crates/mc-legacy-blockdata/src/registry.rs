//! Per-material builders that repair the baseline conversion.
//!
//! On revisions with property schemas the host's generic conversion loses
//! information for a handful of legacy materials: the data byte encoded a
//! facing, a rotation or a variant that has no generic byte → property
//! mapping. Each such material gets a builder that turns the baseline plus
//! the decoded legacy data into the correct state. Everything else passes
//! through untouched.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::capabilities::CapabilityFlags;
use crate::catalog::LegacyMaterialCatalog;
use crate::error::TranslateError;
use crate::legacy_data::{BlockFace, LegacyData};
use crate::material::LegacyMaterial;
use crate::state::PropertyState;

/// A pure function (baseline, decoded legacy data) → corrected state.
pub type Builder = Arc<dyn Fn(&PropertyState, &LegacyData) -> PropertyState + Send + Sync>;

/// Legacy double slabs. The modern slab keeps the submaterial, so all of
/// them only need `type=double` on top of the baseline.
const DOUBLE_SLABS: [&str; 4] = [
    "DOUBLE_STEP",
    "WOOD_DOUBLE_STEP",
    "DOUBLE_STONE_SLAB2",
    "PURPUR_DOUBLE_SLAB",
];

/// Pure renames: (legacy name, modern material).
const RENAMES: [(&str, &str); 1] = [("MELON_BLOCK", "MELON")];

/// Directional containers: legacy names and their modern materials, in step.
const CONTAINERS_LEGACY: [&str; 3] = ["LEGACY_CHEST", "LEGACY_ENDER_CHEST", "LEGACY_TRAPPED_CHEST"];
const CONTAINERS_MODERN: [&str; 3] = ["CHEST", "ENDER_CHEST", "TRAPPED_CHEST"];

/// Builders keyed by legacy material. Filled once, read-only afterwards.
#[derive(Clone, Default)]
pub struct TranslationRegistry {
    builders: HashMap<LegacyMaterial, Builder>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and populate a registry for the running revision.
    pub fn build(
        catalog: &LegacyMaterialCatalog,
        flags: &CapabilityFlags,
    ) -> Result<Self, TranslateError> {
        let mut registry = Self::new();
        registry.populate(catalog, flags)?;
        Ok(registry)
    }

    /// Install `builder` for `material`, replacing any previous builder.
    pub fn register(&mut self, material: LegacyMaterial, builder: Builder) {
        self.builders.insert(material, builder);
    }

    pub fn lookup(&self, material: &LegacyMaterial) -> Option<&Builder> {
        self.builders.get(material)
    }

    pub fn contains(&self, material: &LegacyMaterial) -> bool {
        self.builders.contains_key(material)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Materials that have a builder, in no particular order.
    pub fn materials(&self) -> impl Iterator<Item = &LegacyMaterial> {
        self.builders.keys()
    }

    /// Install every builder the running revision needs.
    ///
    /// Revisions without property schemas need none. Legacy materials the
    /// catalog does not know are skipped. A modern type the catalog does not
    /// know aborts setup with [`TranslateError::UnknownModernType`].
    pub fn populate(
        &mut self,
        catalog: &LegacyMaterialCatalog,
        flags: &CapabilityFlags,
    ) -> Result<(), TranslateError> {
        if !flags.material_enum_changes {
            debug!("No property schemas in this revision, no legacy builders installed");
            return Ok(());
        }

        // Comparators
        for (name, powered) in [
            ("REDSTONE_COMPARATOR_OFF", false),
            ("REDSTONE_COMPARATOR_ON", true),
        ] {
            self.register_named(catalog, name, comparator_builder(powered));
        }

        // Double slabs
        let double_slab = builder(|baseline, _| baseline.with("type", "double"));
        for name in DOUBLE_SLABS {
            self.register_named(catalog, name, double_slab.clone());
        }

        // Spawner
        let spawner = catalog.default_state("SPAWNER")?;
        self.register_named(catalog, "MOB_SPAWNER", fixed_builder(spawner));

        // Torch
        let floor_torch = catalog.default_state("TORCH")?;
        let wall_torch = catalog.default_state("WALL_TORCH")?;
        self.register_named(
            catalog,
            "TORCH",
            builder(move |_, data| match *data {
                LegacyData::Torch {
                    attached: BlockFace::Down,
                } => floor_torch.clone(),
                _ => with_facing(&wall_torch, data),
            }),
        );

        // Renames without data
        for (legacy, modern) in RENAMES {
            let state = catalog.default_state(modern)?;
            self.register_named(catalog, legacy, fixed_builder(state));
        }

        // Signs
        let (wall_name, post_name) = flags.sign_material_names();
        let wall_sign = catalog.default_state(wall_name)?;
        let sign_post = catalog.default_state(post_name)?;
        let signs = builder(move |_, data| match *data {
            LegacyData::Sign { wall: true, .. } => with_facing(&wall_sign, data),
            LegacyData::Sign { wall: false, raw } => sign_post.with("rotation", raw),
            _ => sign_post.clone(),
        });
        self.register_named(catalog, "WALL_SIGN", signs.clone());
        self.register_named(catalog, "SIGN_POST", signs);

        // Chests
        let legacy_types = catalog.all_by_name(&CONTAINERS_LEGACY);
        for (legacy_type, modern_name) in legacy_types.into_iter().zip(CONTAINERS_MODERN) {
            let modern = catalog.default_state(modern_name)?;
            let Some(legacy_type) = legacy_type else {
                debug!("Skipping builder for {modern_name}: legacy material not present");
                continue;
            };
            self.register(
                legacy_type,
                builder(move |_, data| with_facing(&modern, data)),
            );
        }

        info!("Installed {} legacy block data builders", self.len());
        Ok(())
    }

    /// Register under a legacy name, skipping names the catalog lacks.
    fn register_named(&mut self, catalog: &LegacyMaterialCatalog, name: &str, builder: Builder) {
        match catalog.resolve(name) {
            Some(material) => self.register(material, builder),
            None => debug!("Skipping builder for {name}: legacy material not present"),
        }
    }
}

impl fmt::Debug for TranslationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.builders.keys().map(|m| m.name()).collect();
        names.sort_unstable();
        f.debug_struct("TranslationRegistry")
            .field("builders", &names)
            .finish()
    }
}

/// Wrap a closure as a shared [`Builder`].
pub fn builder<F>(f: F) -> Builder
where
    F: Fn(&PropertyState, &LegacyData) -> PropertyState + Send + Sync + 'static,
{
    Arc::new(f)
}

fn comparator_builder(powered: bool) -> Builder {
    builder(move |baseline, data| {
        let state = baseline.with("powered", powered);
        match *data {
            LegacyData::Comparator {
                facing,
                subtraction,
                ..
            } => state
                .with("facing", facing)
                .with("mode", if subtraction { "subtract" } else { "compare" }),
            _ => state,
        }
    })
}

/// Always yields `state`, whatever the input.
fn fixed_builder(state: PropertyState) -> Builder {
    builder(move |_, _| state.clone())
}

/// `state` with the decoded facing applied, or unchanged when the data has
/// no valid facing.
fn with_facing(state: &PropertyState, data: &LegacyData) -> PropertyState {
    match data.facing() {
        Some(facing) => state.with("facing", facing),
        None => state.clone(),
    }
}
