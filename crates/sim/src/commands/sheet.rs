//! Print a character's stat sheet.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use skirmish_content::ContentFactory;
use skirmish_core::CharacterId;

use super::find_character;
use crate::bars::resource_bars;

/// Print a character sheet
#[derive(Parser)]
pub struct Sheet {
    /// Character name from characters.ron
    #[arg(value_name = "NAME")]
    name: String,

    /// Print the stat save object as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

impl Sheet {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let config = factory.load_config()?;
        let specs = factory.load_characters()?;
        let spec = find_character(&specs, &self.name)?;
        let character = spec.build(CharacterId(1), &config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&character.stats.to_save())
                .context("Failed to serialize stat save")?;
            println!("{json}");
            return Ok(());
        }

        println!("{}", style(character.display_name()).bold().cyan());
        println!("{}", character.stats.attribute_summary());
        for bar in resource_bars(&character.resources) {
            println!("{bar}");
        }
        if !spec.spells.is_empty() {
            println!("{} {}", style("Spells:").bold(), spec.spells.join(", "));
        }
        if !spec.items.is_empty() {
            println!("{} {}", style("Items:").bold(), spec.items.join(", "));
        }
        Ok(())
    }
}
