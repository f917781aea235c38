//! Command implementations for the simulation CLI.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod duel;
mod sheet;

pub use duel::Duel;
pub use sheet::Sheet;

use anyhow::Result;
use skirmish_content::CharacterSpec;

/// Finds a character template by name, ignoring ASCII case.
fn find_character<'a>(specs: &'a [CharacterSpec], name: &str) -> Result<&'a CharacterSpec> {
    specs
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known: Vec<&str> = specs.iter().map(|spec| spec.name.as_str()).collect();
            anyhow::anyhow!(
                "Unknown character '{}'. Available: {}",
                name,
                known.join(", ")
            )
        })
}
