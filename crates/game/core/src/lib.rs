//! Deterministic character rules for stats, resource pools and the spells that spend them.
//!
//! `skirmish-core` holds the canonical rules and exposes pure APIs that tools and
//! simulations build on. Presentation concerns stay outside: stat changes are
//! announced through a [`SplatSink`], randomness and targeting come from the oracles
//! in [`env`], and every cross-character effect goes through a [`Roster`] by id.
pub mod calculation;
pub mod character;
pub mod config;
pub mod env;
pub mod error;
pub mod item;
pub mod resources;
pub mod spell;
pub mod splat;
pub mod stats;
pub mod text;

pub use calculation::{Calculation, PairedValue, ResourceDeltas};
pub use character::{Character, CharacterId, Roster, RosterError, SpellLog};
pub use config::RulesConfig;
pub use env::{
    AliveTargeting, CastEnv, FixedRoll, PcgRng, RngOracle, TargetingOracle, compute_seed,
};
pub use error::{CharacterNotFound, ErrorSeverity, GameError, as_game_error};
pub use item::{Apple, ConsumableItem, ItemDefinition, ItemError, ItemUse, use_item};
pub use resources::{Resource, ResourceSet, ResourceType};
pub use spell::{
    CastBlocked, CastOutcome, Spell, SpellBehavior, SpellDefinition, SpellEffect, SpellError,
    SpellLabel, SpellRecord, SpellResult, SpellType, TargetType,
};
pub use splat::{Color, DiscardSplats, SplatDetails, SplatLog, SplatSink};
pub use stats::{
    EquipmentBonus, GetMode, LifeState, NoEquipment, SetMode, SkipReason, Stat, StatChange,
    StatSave, StatTags, StatType, Stats, StatsError, StatsSave,
};
