//! Terminal rendering of resource pools.

use console::Style;
use skirmish_core::{Color, Resource, ResourceType};

const BAR_WIDTH: usize = 20;

/// Nearest index in the xterm-256 6x6x6 color cube.
fn ansi256(color: Color) -> u8 {
    let level = |channel: u8| ((u16::from(channel) * 5 + 127) / 255) as u8;
    16 + 36 * level(color.r) + 6 * level(color.g) + level(color.b)
}

/// `HP [##########----------] 10/20`, drawn from the pending track.
pub fn resource_bar(pool: &Resource) -> String {
    let kind = pool.kind();
    let filled = ((pool.ratio() * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    let label = kind.stat().map_or(kind.name(), |stat| stat.abbreviation());
    let over = Style::new().color256(ansi256(kind.over_color()));
    let under = Style::new().color256(ansi256(kind.under_color()));
    format!(
        "{label:<6} [{}{}] {}/{}",
        over.apply_to("#".repeat(filled)),
        under.apply_to("-".repeat(BAR_WIDTH - filled)),
        pool.pending(),
        pool.maximum()
    )
}

/// Bars for every pool except the charge bar.
pub fn resource_bars<'a>(pools: impl IntoIterator<Item = &'a Resource>) -> Vec<String> {
    pools
        .into_iter()
        .filter(|pool| pool.kind() != ResourceType::Charge)
        .map(resource_bar)
        .collect()
}

#[cfg(test)]
mod tests {
    use skirmish_core::ResourceSet;

    use super::*;

    #[test]
    fn primaries_map_onto_the_cube() {
        assert_eq!(ansi256(Color::RED), 196);
        assert_eq!(ansi256(Color::GREEN), 46);
        assert_eq!(ansi256(Color::BLUE), 21);
        assert_eq!(ansi256(Color::WHITE), 231);
    }

    #[test]
    fn bar_uses_abbreviation_and_pending_fill() {
        let mut health = Resource::create(ResourceType::Health, 20);
        health.adjust_pending(-15);
        let bar = console::strip_ansi_codes(&resource_bar(&health)).into_owned();
        assert_eq!(bar, "HP     [#####---------------] 5/20");
    }

    #[test]
    fn charge_is_not_drawn() {
        let pools = ResourceSet::new()
            .with(Resource::create(ResourceType::Mana, 8))
            .with(Resource::create(ResourceType::Charge, 50));
        let bars = resource_bars(&pools);
        assert_eq!(bars.len(), 1);
        assert!(console::strip_ansi_codes(&bars[0]).starts_with("MP "));
    }
}
