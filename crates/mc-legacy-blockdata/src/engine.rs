//! Public entry point: legacy (material, data) → modern block state.

use std::sync::Arc;

use tracing::debug;

use crate::capabilities::CapabilityFlags;
use crate::catalog::LegacyMaterialCatalog;
use crate::config::TranslationConfig;
use crate::error::TranslateError;
use crate::legacy_data::LegacyData;
use crate::material::{LegacyMaterial, MaterialData};
use crate::native::{BaselineStrategy, CatalogConversion, NativeBlockData};
use crate::registry::TranslationRegistry;
use crate::state::PropertyState;

/// Translation engine for one running format revision.
///
/// Built once at startup. All state is frozen afterwards, so `translate`
/// can be called from any number of threads through a shared reference.
pub struct TranslationEngine<N> {
    native: N,
    catalog: Arc<LegacyMaterialCatalog>,
    registry: TranslationRegistry,
    strategy: BaselineStrategy,
    flags: CapabilityFlags,
}

impl<N: NativeBlockData> TranslationEngine<N> {
    /// Populate the builder registry and select the baseline strategy.
    pub fn new(
        native: N,
        catalog: Arc<LegacyMaterialCatalog>,
        flags: CapabilityFlags,
    ) -> Result<Self, TranslateError> {
        let registry = TranslationRegistry::build(&catalog, &flags)?;
        let strategy = BaselineStrategy::select(&flags);
        debug!("Legacy block data baseline strategy: {strategy:?}");
        Ok(Self {
            native,
            catalog,
            registry,
            strategy,
            flags,
        })
    }

    /// Translate a legacy material and data byte.
    ///
    /// A missing material is a caller error and yields
    /// [`TranslateError::InvalidInput`]. Materials without a builder get the
    /// host's baseline conversion unchanged.
    pub fn translate(
        &self,
        material: Option<&LegacyMaterial>,
        data: u8,
    ) -> Result<PropertyState, TranslateError> {
        let material = material
            .ok_or_else(|| TranslateError::InvalidInput("legacy material is missing".into()))?;

        let baseline = self.strategy.baseline(&self.native, material, data)?;
        match self.registry.lookup(material) {
            Some(builder) => {
                let decoded = LegacyData::decode(material, data);
                Ok(builder(&baseline, &decoded))
            }
            None => Ok(baseline),
        }
    }

    /// Translate a [`MaterialData`] value. A missing item type is rejected.
    pub fn translate_material_data(
        &self,
        material_data: &MaterialData,
    ) -> Result<PropertyState, TranslateError> {
        let item_type = material_data.item_type.as_ref().ok_or_else(|| {
            TranslateError::InvalidInput("material data has no item type".into())
        })?;
        self.translate(Some(item_type), material_data.data)
    }

    /// Resolve `name` through the catalog, then translate.
    pub fn translate_name(&self, name: &str, data: u8) -> Result<PropertyState, TranslateError> {
        let material = self
            .catalog
            .resolve(name)
            .ok_or_else(|| TranslateError::InvalidInput(format!("unknown legacy material {name}")))?;
        self.translate(Some(&material), data)
    }

    pub fn catalog(&self) -> &LegacyMaterialCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &TranslationRegistry {
        &self.registry
    }

    pub fn strategy(&self) -> BaselineStrategy {
        self.strategy
    }

    pub fn flags(&self) -> &CapabilityFlags {
        &self.flags
    }

    pub fn native(&self) -> &N {
        &self.native
    }
}

impl TranslationEngine<CatalogConversion> {
    /// Engine over the built-in catalog, for use without a host process.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, TranslateError> {
        let catalog = Arc::new(LegacyMaterialCatalog::from_config(config));
        Self::new(
            CatalogConversion::new(Arc::clone(&catalog)),
            catalog,
            config.capabilities,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NativeError;
    use crate::state::PropertyValue;

    fn engine(flags: CapabilityFlags) -> TranslationEngine<CatalogConversion> {
        let catalog = Arc::new(LegacyMaterialCatalog::builtin(&flags));
        TranslationEngine::new(CatalogConversion::new(catalog.clone()), catalog, flags).unwrap()
    }

    fn facing(state: &PropertyState) -> Option<String> {
        state.get("facing").map(PropertyValue::to_string)
    }

    /// Host whose conversion depends on the data byte: stone carries the
    /// byte as `variant`, and the stone double slab picks its submaterial
    /// from the low three bits.
    struct DataAwareConversion {
        catalog: CatalogConversion,
    }

    impl NativeBlockData for DataAwareConversion {
        fn block_data(
            &self,
            material: &LegacyMaterial,
            data: u8,
        ) -> Result<PropertyState, NativeError> {
            let state = self.catalog.block_data(material, data)?;
            if material.is("STONE") {
                return Ok(state.with("variant", data));
            }
            if material.is("DOUBLE_STEP") || material.is("STEP") {
                let slab = match data & 0x7 {
                    1 => "sandstone_slab",
                    3 => "cobblestone_slab",
                    _ => return Ok(state),
                };
                return Ok(PropertyState::new(slab)
                    .with_all(state.properties().map(|(k, v)| (k, v.clone()))));
            }
            Ok(state)
        }
    }

    fn data_aware_engine() -> TranslationEngine<DataAwareConversion> {
        let flags = CapabilityFlags::SIGN_TYPES;
        let catalog = Arc::new(LegacyMaterialCatalog::builtin(&flags));
        let native = DataAwareConversion {
            catalog: CatalogConversion::new(Arc::clone(&catalog)),
        };
        TranslationEngine::new(native, catalog, flags).unwrap()
    }

    #[test]
    fn missing_material_is_invalid_input() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        let err = engine.translate(None, 0).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidInput(_)));

        let err = engine
            .translate_material_data(&MaterialData {
                item_type: None,
                data: 3,
            })
            .unwrap_err();
        assert!(matches!(err, TranslateError::InvalidInput(_)));

        let err = engine.translate_name("NOT_A_MATERIAL", 0).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidInput(_)));
    }

    #[test]
    fn unbuilt_materials_pass_through() {
        let engine = data_aware_engine();
        for name in ["STONE", "LOG", "WOOL", "FURNACE", "STEP", "REDSTONE_TORCH_ON"] {
            let material = engine.catalog().resolve(name).unwrap();
            assert!(engine.registry().lookup(&material).is_none());
            for data in 0..16u8 {
                assert_eq!(
                    engine.translate(Some(&material), data).unwrap(),
                    engine.native().block_data(&material, data).unwrap(),
                    "{name} data {data}"
                );
            }
        }
    }

    #[test]
    fn pass_through_keeps_data_dependent_baseline() {
        let engine = data_aware_engine();
        for data in 0..16u8 {
            let stone = engine.translate_name("STONE", data).unwrap();
            assert_eq!(stone.get("variant"), Some(&PropertyValue::Int(data as i32)));
        }
        let single = engine.translate_name("STEP", 1).unwrap();
        assert_eq!(single.name(), "minecraft:sandstone_slab");
        assert_eq!(single.get("type"), Some(&PropertyValue::from("bottom")));
    }

    #[test]
    fn double_slab_keeps_data_dependent_submaterial() {
        let engine = data_aware_engine();
        for (data, modern) in [
            (0, "minecraft:stone_slab"),
            (1, "minecraft:sandstone_slab"),
            (3, "minecraft:cobblestone_slab"),
        ] {
            let state = engine.translate_name("DOUBLE_STEP", data).unwrap();
            assert_eq!(state.name(), modern, "data {data}");
            assert_eq!(state.get("type"), Some(&PropertyValue::from("double")));
        }
    }

    #[test]
    fn identity_built_by_name_translates_like_catalog_identity() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        let resolved = engine.catalog().resolve("WALL_SIGN").unwrap();
        let by_name = LegacyMaterial::new("WALL_SIGN", 0);
        assert_eq!(resolved, by_name);

        let state = engine.translate(Some(&by_name), 3).unwrap();
        assert_eq!(state, engine.translate(Some(&resolved), 3).unwrap());
        assert_eq!(
            state.to_string(),
            "minecraft:oak_wall_sign[facing=south,waterlogged=false]"
        );
    }

    #[test]
    fn translate_is_pure() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        for material in engine.catalog().legacy_materials() {
            for data in 0..16u8 {
                let a = engine.translate(Some(material), data).unwrap();
                let b = engine.translate(Some(material), data).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn comparator_east_subtract() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        let off = engine.translate_name("REDSTONE_COMPARATOR_OFF", 0x5).unwrap();
        assert_eq!(
            off.to_string(),
            "minecraft:comparator[facing=east,mode=subtract,powered=false]"
        );
        let on = engine.translate_name("LEGACY_REDSTONE_COMPARATOR_ON", 0x5).unwrap();
        assert_eq!(
            on.to_string(),
            "minecraft:comparator[facing=east,mode=subtract,powered=true]"
        );
    }

    #[test]
    fn torch_translation() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        let floor = engine.translate_name("TORCH", 5).unwrap();
        assert_eq!(floor.to_string(), "minecraft:torch");

        for (data, expected) in [(1, "east"), (2, "west"), (3, "south"), (4, "north")] {
            let wall = engine.translate_name("TORCH", data).unwrap();
            assert_eq!(wall.name(), "minecraft:wall_torch");
            assert_eq!(facing(&wall).as_deref(), Some(expected));
        }
    }

    #[test]
    fn sign_translation_ignores_naming_flag_for_decoding() {
        for flags in [CapabilityFlags::FLATTENED, CapabilityFlags::SIGN_TYPES] {
            let engine = engine(flags);
            let (wall_name, post_name) = flags.sign_material_names();

            let wall = engine.translate_name("WALL_SIGN", 3).unwrap();
            assert_eq!(
                wall,
                engine
                    .catalog()
                    .default_state(wall_name)
                    .unwrap()
                    .with("facing", "south")
            );

            let post = engine.translate_name("SIGN_POST", 7).unwrap();
            assert_eq!(
                post,
                engine
                    .catalog()
                    .default_state(post_name)
                    .unwrap()
                    .with("rotation", 7)
            );
        }
    }

    #[test]
    fn chests_keep_their_type() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        for (legacy, modern) in [
            ("CHEST", "minecraft:chest"),
            ("ENDER_CHEST", "minecraft:ender_chest"),
            ("TRAPPED_CHEST", "minecraft:trapped_chest"),
        ] {
            let state = engine.translate_name(legacy, 3).unwrap();
            assert_eq!(state.name(), modern);
            assert_eq!(facing(&state).as_deref(), Some("south"));
        }
    }

    #[test]
    fn double_slabs_keep_submaterial() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        for (legacy, modern) in [
            ("DOUBLE_STEP", "minecraft:stone_slab"),
            ("WOOD_DOUBLE_STEP", "minecraft:oak_slab"),
            ("DOUBLE_STONE_SLAB2", "minecraft:red_sandstone_slab"),
            ("PURPUR_DOUBLE_SLAB", "minecraft:purpur_slab"),
        ] {
            let state = engine.translate_name(legacy, 0).unwrap();
            assert_eq!(state.name(), modern);
            assert_eq!(state.get("type"), Some(&PropertyValue::from("double")));
        }
        let single = engine.translate_name("STEP", 0).unwrap();
        assert_eq!(single.get("type"), Some(&PropertyValue::from("bottom")));
    }

    #[test]
    fn melon_and_spawner() {
        let engine = engine(CapabilityFlags::FLATTENED);
        assert_eq!(
            engine.translate_name("MELON_BLOCK", 0).unwrap().to_string(),
            "minecraft:melon"
        );
        assert_eq!(
            engine.translate_name("MOB_SPAWNER", 4).unwrap().to_string(),
            "minecraft:spawner"
        );
    }

    #[test]
    fn legacy_revision_uses_baseline_only() {
        let engine = engine(CapabilityFlags::LEGACY);
        assert_eq!(engine.strategy(), BaselineStrategy::LegacyData);
        assert!(engine.registry().is_empty());

        let chest = engine.translate_name("CHEST", 3).unwrap();
        assert_eq!(chest, engine.catalog().default_state("CHEST").unwrap());

        // Out-of-range data falls back to the block default instead of failing.
        let chest = engine.translate_name("CHEST", 0x40).unwrap();
        assert_eq!(chest, engine.catalog().default_state("CHEST").unwrap());
    }

    #[test]
    fn native_failure_propagates() {
        let engine = engine(CapabilityFlags::SIGN_TYPES);
        let bogus = LegacyMaterial::new("UNOBTAINIUM", 999);
        let err = engine.translate(Some(&bogus), 0).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Native(NativeError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn from_config_applies_absent_materials() {
        let config = TranslationConfig::parse(
            r#"
            [capabilities]
            material_enum_changes = true
            material_sign_types = true

            [catalog]
            absent = ["LEGACY_TRAPPED_CHEST"]
        "#,
        )
        .unwrap();
        let engine = TranslationEngine::from_config(&config).unwrap();
        assert_eq!(engine.strategy(), BaselineStrategy::Flattened);
        assert_eq!(engine.registry().len(), 13);
        assert!(matches!(
            engine.translate_name("TRAPPED_CHEST", 2),
            Err(TranslateError::InvalidInput(_))
        ));
        let sign = engine.translate_name("SIGN_POST", 15).unwrap();
        assert_eq!(
            sign.to_string(),
            "minecraft:oak_sign[rotation=15,waterlogged=false]"
        );
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = Arc::new(engine(CapabilityFlags::SIGN_TYPES));
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.translate_name("CHEST", 2 + i).unwrap())
            })
            .collect();
        let states: Vec<PropertyState> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(facing(&states[0]).as_deref(), Some("north"));
        assert_eq!(facing(&states[1]).as_deref(), Some("south"));
        assert_eq!(facing(&states[2]).as_deref(), Some("west"));
        assert_eq!(facing(&states[3]).as_deref(), Some("east"));
    }
}
