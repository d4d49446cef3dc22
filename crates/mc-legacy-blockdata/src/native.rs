//! The host's native legacy → block state conversion, and the baseline
//! strategy that drives it.

use std::sync::Arc;

use tracing::debug;

use crate::capabilities::CapabilityFlags;
use crate::catalog::LegacyMaterialCatalog;
use crate::error::NativeError;
use crate::material::LegacyMaterial;
use crate::state::PropertyState;

/// Conversion primitives provided by the running host.
///
/// Implementations never return a state for a material they do not know;
/// they report [`NativeError::UnknownMaterial`] instead. Thread safety of the
/// underlying host is the implementation's concern.
pub trait NativeBlockData: Send + Sync {
    /// Convert a (material, data) value on revisions with property schemas.
    fn block_data(&self, material: &LegacyMaterial, data: u8) -> Result<PropertyState, NativeError>;

    /// Decode per-block legacy data on revisions without property schemas.
    /// May reject `data` with [`NativeError::IllegalData`].
    fn legacy_block_data(
        &self,
        material: &LegacyMaterial,
        data: u8,
    ) -> Result<PropertyState, NativeError> {
        self.block_data(material, data)
    }

    /// The default state of the block `material` maps to.
    fn default_block_data(&self, material: &LegacyMaterial) -> Result<PropertyState, NativeError> {
        self.block_data(material, 0)
    }
}

impl<T: NativeBlockData + ?Sized> NativeBlockData for Arc<T> {
    fn block_data(&self, material: &LegacyMaterial, data: u8) -> Result<PropertyState, NativeError> {
        (**self).block_data(material, data)
    }

    fn legacy_block_data(
        &self,
        material: &LegacyMaterial,
        data: u8,
    ) -> Result<PropertyState, NativeError> {
        (**self).legacy_block_data(material, data)
    }

    fn default_block_data(&self, material: &LegacyMaterial) -> Result<PropertyState, NativeError> {
        (**self).default_block_data(material)
    }
}

/// How the baseline state is obtained. Chosen once from the capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineStrategy {
    /// Hand the full (material, data) value to the host.
    Flattened,
    /// Decode the data byte per block, falling back to the block default
    /// when the host rejects the byte.
    LegacyData,
}

impl BaselineStrategy {
    pub fn select(flags: &CapabilityFlags) -> Self {
        if flags.material_enum_changes {
            BaselineStrategy::Flattened
        } else {
            BaselineStrategy::LegacyData
        }
    }

    pub fn baseline<N: NativeBlockData + ?Sized>(
        self,
        native: &N,
        material: &LegacyMaterial,
        data: u8,
    ) -> Result<PropertyState, NativeError> {
        match self {
            BaselineStrategy::Flattened => native.block_data(material, data),
            BaselineStrategy::LegacyData => match native.legacy_block_data(material, data) {
                Err(NativeError::IllegalData { .. }) => {
                    debug!("Legacy data {data} rejected for {material}, using block default");
                    native.default_block_data(material)
                }
                other => other,
            },
        }
    }
}

/// Table-driven native conversion backed by a [`LegacyMaterialCatalog`].
///
/// Every legacy material converts to the default state of the modern type
/// its catalog row names; the data byte carries no generic meaning here.
/// Legacy data is a nibble, so larger bytes are rejected as illegal.
#[derive(Debug, Clone)]
pub struct CatalogConversion {
    catalog: Arc<LegacyMaterialCatalog>,
}

impl CatalogConversion {
    pub fn new(catalog: Arc<LegacyMaterialCatalog>) -> Self {
        Self { catalog }
    }
}

impl NativeBlockData for CatalogConversion {
    fn block_data(&self, material: &LegacyMaterial, _data: u8) -> Result<PropertyState, NativeError> {
        let unknown = || NativeError::UnknownMaterial(material.to_string());
        let modern = self.catalog.modern_name_for(material).ok_or_else(unknown)?;
        self.catalog.default_state(modern).map_err(|_| unknown())
    }

    fn legacy_block_data(
        &self,
        material: &LegacyMaterial,
        data: u8,
    ) -> Result<PropertyState, NativeError> {
        if data > 0xF {
            return Err(NativeError::IllegalData {
                material: material.to_string(),
                data,
            });
        }
        self.block_data(material, data)
    }
}
