//! Combat resource pools (health, mana, charge, skill).
//!
//! Resources are what spells cost and what calculations change. Unlike stats they
//! carry a second, deferred track so presentation can animate toward the new value.

mod kind;
mod meter;
mod set;

pub use kind::ResourceType;
pub use meter::Resource;
pub use set::ResourceSet;
