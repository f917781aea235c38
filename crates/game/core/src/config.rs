/// Rules configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Charge gained by every living character per simulation tick.
    pub charge_per_tick: u32,
    /// Mana stat regenerated per turn update.
    pub mana_regen_per_turn: i32,
    /// Skill stat regenerated per turn update.
    pub skill_regen_per_turn: i32,
    /// Unspent stat points granted on level up.
    pub stat_points_per_level: u32,
    /// Experience required to leave level 1; scales linearly with level.
    pub experience_base: i32,
}

impl RulesConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the charge bar. Spells require (and drain) a full bar.
    pub const CHARGE_MAX: u32 = 100;
    /// Entries kept per spell history log before the oldest is evicted.
    pub const MAX_HISTORY: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CHARGE_PER_TICK: u32 = 10;
    pub const DEFAULT_MANA_REGEN_PER_TURN: i32 = 0;
    pub const DEFAULT_SKILL_REGEN_PER_TURN: i32 = 1;
    pub const DEFAULT_STAT_POINTS_PER_LEVEL: u32 = 3;
    pub const DEFAULT_EXPERIENCE_BASE: i32 = 100;

    pub fn new() -> Self {
        Self {
            charge_per_tick: Self::DEFAULT_CHARGE_PER_TICK,
            mana_regen_per_turn: Self::DEFAULT_MANA_REGEN_PER_TURN,
            skill_regen_per_turn: Self::DEFAULT_SKILL_REGEN_PER_TURN,
            stat_points_per_level: Self::DEFAULT_STAT_POINTS_PER_LEVEL,
            experience_base: Self::DEFAULT_EXPERIENCE_BASE,
        }
    }

    pub fn with_charge_per_tick(mut self, charge_per_tick: u32) -> Self {
        self.charge_per_tick = charge_per_tick;
        self
    }

    /// Experience needed to fill the bar at `level`.
    pub fn experience_for_level(&self, level: u32) -> i32 {
        self.experience_base
            .saturating_mul(level.max(1).min(i32::MAX as u32) as i32)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
