//! Mutation notifications ("splats") emitted by the stat collection.
//!
//! The core produces [`SplatDetails`] for every applied stat mutation; consumers
//! (floating combat text, logs, tests) receive them through a [`SplatSink`].
//! Rendering is entirely the consumer's concern.

use std::sync::Mutex;

use crate::stats::StatType;

/// RGBA color carried with splats and resource descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 235, 4);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Payload of a single mutation notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplatDetails {
    pub color: Color,
    pub text: String,
    /// Stat the splat refers to; presentation maps it to an icon.
    pub icon: StatType,
}

impl SplatDetails {
    pub fn new(color: Color, text: impl Into<String>, icon: StatType) -> Self {
        Self {
            color,
            text: text.into(),
            icon,
        }
    }
}

/// Observer for stat mutation notifications.
pub trait SplatSink: Send + Sync {
    fn splat(&self, details: SplatDetails);
}

impl<F> SplatSink for F
where
    F: Fn(SplatDetails) + Send + Sync,
{
    fn splat(&self, details: SplatDetails) {
        self(details)
    }
}

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSplats;

impl SplatSink for DiscardSplats {
    fn splat(&self, _details: SplatDetails) {}
}

/// Sink that records notifications in arrival order.
#[derive(Debug, Default)]
pub struct SplatLog {
    entries: Mutex<Vec<SplatDetails>>,
}

impl SplatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<SplatDetails> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SplatSink for SplatLog {
    fn splat(&self, details: SplatDetails) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(details),
            Err(poisoned) => poisoned.into_inner().push(details),
        }
    }
}
