//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML files that describe an encounter:
//! - Rules configuration (TOML)
//! - Spell catalog: definitions plus behaviors (RON)
//! - Consumable item catalog (RON)
//! - Character roster templates (RON)
//!
//! All loaders use skirmish-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterSpec, ConfigLoader, ContentFactory, ItemLoader, SpellCatalog,
    SpellLoader, SpellSpec,
};
