//! Stat system.
//!
//! ```text
//! [ StatType + StatTags ]   classification, colors, regeneration
//!          ↓
//! [ Stat ]                  one bounded value (Mod ≤ Max)
//!          ↓
//! [ Stats ]                 per-character collection, hooks, save objects
//! ```
//!
//! ## Principles
//!
//! 1. **One stat per type**: duplicate inserts are errors, not overwrites
//! 2. **Outcomes as values**: every mutation reports a [`StatChange`]
//! 3. **Injected collaborators**: equipment bonuses and splat observers are hooks
//! 4. **Structural identity**: equality ignores insertion order and hooks

mod collection;
mod error;
mod kind;
mod save;
mod stat;

pub use collection::{
    EquipmentBonus, GetMode, LifeState, NoEquipment, SetMode, SkipReason, StatChange, Stats,
};
pub use error::StatsError;
pub use kind::{StatTags, StatType};
pub use save::{StatSave, StatsSave};
pub use stat::Stat;
