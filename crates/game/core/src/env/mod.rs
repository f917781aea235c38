//! Collaborators supplied by the surrounding combat system.
//!
//! Oracles answer questions the rules engine cannot answer itself: random rolls and
//! whether a character may currently be targeted. The [`CastEnv`] aggregate bundles
//! them so the cast pipeline never reaches for global state.
mod rng;

pub use rng::{FixedRoll, PcgRng, RngOracle, compute_seed};

use crate::character::Character;

/// Decides whether a character can currently be chosen as a target.
pub trait TargetingOracle: Send + Sync {
    fn is_targetable(&self, target: &Character) -> bool;
}

impl<F> TargetingOracle for F
where
    F: Fn(&Character) -> bool + Send + Sync,
{
    fn is_targetable(&self, target: &Character) -> bool {
        self(target)
    }
}

/// Living characters are targetable; the fallen are not.
#[derive(Clone, Copy, Debug, Default)]
pub struct AliveTargeting;

impl TargetingOracle for AliveTargeting {
    fn is_targetable(&self, target: &Character) -> bool {
        target.is_alive()
    }
}

/// Read-only collaborators for one cast resolution.
#[derive(Clone, Copy)]
pub struct CastEnv<'a> {
    rng: &'a dyn RngOracle,
    targeting: &'a dyn TargetingOracle,
    seed: u64,
}

impl<'a> CastEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, targeting: &'a dyn TargetingOracle, seed: u64) -> Self {
        Self {
            rng,
            targeting,
            seed,
        }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn targeting(&self) -> &'a dyn TargetingOracle {
        self.targeting
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl core::fmt::Debug for CastEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CastEnv")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
