//! A single resource pool with a deferred display track.

use crate::config::RulesConfig;

use super::kind::ResourceType;

/// Bounded pool with two tracks.
///
/// - `pending`: the authoritative value that every mutation targets.
/// - `current`: the value presentation has caught up to; [`reconcile`](Self::reconcile)
///   moves it onto `pending`.
///
/// Both tracks always stay within `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    kind: ResourceType,
    current: u32,
    pending: u32,
    maximum: u32,
}

impl Resource {
    /// Creates a full pool.
    pub const fn new(kind: ResourceType, maximum: u32) -> Self {
        Self {
            kind,
            current: maximum,
            pending: maximum,
            maximum,
        }
    }

    /// Factory used by content and item descriptors.
    ///
    /// Charge always has a [`RulesConfig::CHARGE_MAX`] ceiling; every other pool is
    /// created full, with `value` as its ceiling.
    pub fn create(kind: ResourceType, value: u32) -> Self {
        let maximum = match kind {
            ResourceType::Charge => RulesConfig::CHARGE_MAX,
            _ => value,
        };
        let mut resource = Self::new(kind, maximum);
        resource.set(value);
        resource
    }

    pub const fn kind(&self) -> ResourceType {
        self.kind
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn pending(&self) -> u32 {
        self.pending
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn missing(&self) -> u32 {
        self.maximum - self.pending
    }

    pub const fn is_maxed(&self) -> bool {
        self.pending == self.maximum
    }

    pub const fn is_empty(&self) -> bool {
        self.pending == 0
    }

    pub const fn can_afford(&self, cost: u32) -> bool {
        self.pending >= cost
    }

    /// Sets both tracks, clamped to the ceiling.
    pub fn set(&mut self, value: u32) {
        let value = value.min(self.maximum);
        self.current = value;
        self.pending = value;
    }

    /// Changes the ceiling and clamps both tracks under it.
    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.current = self.current.min(maximum);
        self.pending = self.pending.min(maximum);
    }

    /// Adds `delta` to the pending track. Returns the delta actually applied.
    pub fn adjust_pending(&mut self, delta: i32) -> i32 {
        let (next, applied) = Self::clamped(self.pending, delta, self.maximum);
        self.pending = next;
        applied
    }

    /// Adds `delta` to the current track. Returns the delta actually applied.
    pub fn adjust_current(&mut self, delta: i32) -> i32 {
        let (next, applied) = Self::clamped(self.current, delta, self.maximum);
        self.current = next;
        applied
    }

    pub fn clear_pending(&mut self) {
        self.pending = 0;
    }

    /// Moves the display track onto the authoritative value.
    pub fn reconcile(&mut self) {
        self.current = self.pending;
    }

    /// Fill ratio of the pending track in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            0.0
        } else {
            self.pending as f32 / self.maximum as f32
        }
    }

    fn clamped(value: u32, delta: i32, maximum: u32) -> (u32, i32) {
        let next = (i64::from(value) + i64::from(delta)).clamp(0, i64::from(maximum));
        (next as u32, (next - i64::from(value)) as i32)
    }
}
