//! Spells: immutable definitions, pluggable behaviors and the cast pipeline.
//!
//! A [`Spell`] pairs a [`SpellDefinition`] with a [`SpellBehavior`]. Casting goes
//! through [`Spell::try_cast`], which validates, pays costs, rolls to hit, applies the
//! behavior's [`Calculation`](crate::Calculation) and records the attempt in both
//! characters' history logs.
mod behavior;
mod cast;
mod definition;
mod error;

pub use behavior::{AGILITY_HIT_WEIGHT, MIN_DAMAGE, SpellBehavior, SpellEffect};
pub use cast::{CastBlocked, CastOutcome, Spell, SpellLabel, SpellRecord, SpellResult};
pub use definition::{SpellDefinition, SpellType, TargetType};
pub use error::SpellError;
