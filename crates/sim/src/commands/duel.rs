//! Run a duel between two characters.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use skirmish_content::{CharacterSpec, ContentFactory, SpellCatalog};
use skirmish_core::{CharacterId, ItemDefinition, Spell};

use super::find_character;
use crate::arena::{Arena, Verdict};
use crate::bars::resource_bars;

/// Simulate a duel until one side falls
#[derive(Parser)]
pub struct Duel {
    /// First combatant (characters.ron name)
    #[arg(value_name = "A")]
    a: String,

    /// Second combatant (characters.ron name)
    #[arg(value_name = "B")]
    b: String,

    /// Encounter seed; the same seed replays the same duel
    #[arg(long, env = "SKIRMISH_SEED", default_value_t = 1)]
    seed: u64,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 1_000)]
    max_ticks: u32,
}

impl Duel {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let config = factory.load_config()?;
        let spells = factory.load_spells()?;
        let items = factory.load_items()?;
        let specs = factory.load_characters()?;

        let mut arena = Arena::new(config.clone(), self.seed);
        for (index, name) in [&self.a, &self.b].into_iter().enumerate() {
            let spec = find_character(&specs, name)?;
            let character = spec.build(CharacterId(index as u32 + 1), &config)?;
            arena.join(
                character,
                spellbook(spec, &spells)?,
                inventory(spec, &items)?,
            )?;
        }

        tracing::info!(a = %self.a, b = %self.b, seed = self.seed, "duel started");
        println!(
            "{} {} vs {} (seed {})",
            style("Duel:").bold().cyan(),
            self.a,
            self.b,
            self.seed
        );

        let report = arena.run(self.max_ticks, |line| println!("{line}"))?;

        println!();
        for character in arena.roster().iter() {
            println!("{}", style(character.display_name()).bold());
            for bar in resource_bars(&character.resources) {
                println!("  {bar}");
            }
        }
        match report.verdict {
            Some(Verdict::Winner(id)) => {
                let winner = arena.roster().get(id)?;
                println!(
                    "{} {} after {} ticks",
                    style("Winner:").bold().green(),
                    winner.display_name(),
                    report.ticks
                );
            }
            Some(Verdict::Draw) => println!("{}", style("Both fell. Draw.").bold().yellow()),
            None => println!(
                "{} no winner after {} ticks",
                style("Stalemate:").bold().yellow(),
                report.ticks
            ),
        }
        tracing::info!(ticks = report.ticks, verdict = ?report.verdict, "duel finished");
        Ok(())
    }
}

fn spellbook(spec: &CharacterSpec, catalog: &SpellCatalog) -> Result<Vec<Spell>> {
    spec.spells
        .iter()
        .map(|name| {
            catalog
                .get(name)
                .map(|spell| spell.build())
                .with_context(|| format!("{}: unknown spell '{}'", spec.name, name))
        })
        .collect()
}

fn inventory(spec: &CharacterSpec, catalog: &[ItemDefinition]) -> Result<Vec<ItemDefinition>> {
    spec.items
        .iter()
        .map(|name| {
            catalog
                .iter()
                .find(|item| &item.name == name)
                .cloned()
                .with_context(|| format!("{}: unknown item '{}'", spec.name, name))
        })
        .collect()
}
