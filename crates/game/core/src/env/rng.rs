//! RNG oracle for deterministic random number generation.
//!
//! All RNG implementations must be deterministic: given the same seed they
//! produce the same value. Casts derive their seed from the game seed, the
//! roster nonce and the caster, so a replayed encounter rolls identically.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    ///
    /// Used for probability checks such as spell hit rates.
    fn roll_unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Oracle that always returns the same unit roll. Handy for forcing hits and misses.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub f64);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        (self.0.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32
    }

    fn roll_unit(&self, _seed: u64) -> f64 {
        self.0
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `game_seed` - Base seed fixed when the encounter starts
/// * `nonce` - Cast sequence number (increments per resolved cast)
/// * `actor_id` - Character performing the cast
/// * `context` - Distinguishes multiple rolls within one cast (`0` = hit check)
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
