//! Legacy block data translation: (material, data byte) → named-property
//! block states.
//!
//! - [`LegacyMaterialCatalog`] resolves legacy materials and modern defaults.
//! - [`TranslationRegistry`] holds per-material builders for blocks whose
//!   data byte has no generic property mapping.
//! - [`TranslationEngine`] combines the host's baseline conversion with the
//!   registry.

pub mod capabilities;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod legacy_data;
pub mod material;
pub mod native;
pub mod registry;
pub mod resource_overrides;
pub mod state;

pub use capabilities::CapabilityFlags;
pub use catalog::LegacyMaterialCatalog;
pub use config::TranslationConfig;
pub use engine::TranslationEngine;
pub use error::{ConfigError, NativeError, TranslateError};
pub use legacy_data::{BlockFace, LegacyData};
pub use material::{LegacyMaterial, MaterialData};
pub use native::{BaselineStrategy, CatalogConversion, NativeBlockData};
pub use registry::{Builder, TranslationRegistry};
pub use resource_overrides::ResourceOverrides;
pub use state::{PropertyState, PropertyValue};
