//! Charge-driven duel loop.
//!
//! Every tick each living character fills its charge bar and regenerates. Characters
//! with a full bar act in initiative order until one side is left standing.

use anyhow::Result;
use skirmish_core::{
    AliveTargeting, CastEnv, CastOutcome, Character, CharacterId, CharacterNotFound,
    ItemDefinition, PcgRng, ResourceType, Roster, RulesConfig, Spell, SpellType, use_item,
};

/// What a character brings to the fight besides its sheet.
struct Loadout {
    id: CharacterId,
    spells: Vec<Spell>,
    /// Consumed on use.
    items: Vec<ItemDefinition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Winner(CharacterId),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub ticks: u32,
    /// `None` when the tick limit ran out first.
    pub verdict: Option<Verdict>,
}

pub struct Arena {
    roster: Roster,
    loadouts: Vec<Loadout>,
    config: RulesConfig,
    rng: PcgRng,
    seed: u64,
    ticks: u32,
}

impl Arena {
    pub fn new(config: RulesConfig, seed: u64) -> Self {
        Self {
            roster: Roster::new(),
            loadouts: Vec::new(),
            config,
            rng: PcgRng,
            seed,
            ticks: 0,
        }
    }

    pub fn join(
        &mut self,
        character: Character,
        spells: Vec<Spell>,
        items: Vec<ItemDefinition>,
    ) -> Result<CharacterId> {
        let id = self.roster.add(character)?;
        self.loadouts.push(Loadout { id, spells, items });
        Ok(id)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn verdict(&self) -> Option<Verdict> {
        let alive: Vec<CharacterId> = self
            .roster
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| c.id)
            .collect();
        match alive.as_slice() {
            [] => Some(Verdict::Draw),
            [winner] => Some(Verdict::Winner(*winner)),
            _ => None,
        }
    }

    /// Runs until a verdict or `max_ticks`, handing every line of flavor text to `on_line`.
    pub fn run(&mut self, max_ticks: u32, mut on_line: impl FnMut(&str)) -> Result<DuelReport> {
        while self.ticks < max_ticks && self.verdict().is_none() {
            for line in self.tick()? {
                on_line(&line);
            }
        }
        Ok(DuelReport {
            ticks: self.ticks,
            verdict: self.verdict(),
        })
    }

    pub fn tick(&mut self) -> Result<Vec<String>> {
        self.ticks += 1;
        for character in self.roster.iter_mut().filter(|c| c.is_alive()) {
            character.resources.tick(&self.config);
            character
                .resources
                .regenerate(&mut character.stats, &self.config);
        }

        let mut ready: Vec<&Character> = self
            .roster
            .iter()
            .filter(|c| c.is_alive() && charge_full(c))
            .collect();
        ready.sort_by(|a, b| a.stats.initiative_cmp(&b.stats).then(a.id.cmp(&b.id)));
        let order: Vec<CharacterId> = ready.iter().map(|c| c.id).collect();
        tracing::debug!(tick = self.ticks, ready = ?order, "turn order");

        let mut lines = Vec::new();
        for actor in order {
            if self.verdict().is_some() {
                break;
            }
            if self.roster.get(actor)?.is_alive() {
                lines.extend(self.act(actor)?);
            }
        }

        for character in self.roster.iter_mut() {
            character.resources.reconcile_all();
            character.resources.write_back(&mut character.stats);
        }
        Ok(lines)
    }

    fn act(&mut self, actor: CharacterId) -> Result<Option<String>> {
        let Some(foe) = self.opponent(actor) else {
            return Ok(None);
        };
        let slot = self
            .loadouts
            .iter()
            .position(|l| l.id == actor)
            .ok_or(CharacterNotFound(actor))?;

        if wounded(self.roster.get(actor)?) {
            let loadout = &mut self.loadouts[slot];
            if let Some(index) = loadout.items.iter().position(ItemDefinition::heals) {
                let item = loadout.items.remove(index);
                let used = use_item(&item, actor, actor, &mut self.roster)?;
                self.spend_turn(actor)?;
                return Ok(Some(used.text));
            }
            if let Some(line) = self.cast_first(slot, actor, actor, SpellType::is_restorative)? {
                return Ok(Some(line));
            }
        }
        if let Some(line) = self.cast_first(slot, actor, foe, SpellType::is_offensive)? {
            return Ok(Some(line));
        }

        self.spend_turn(actor)?;
        Ok(Some(format!("{} hesitates.", self.roster.get(actor)?.display_name())))
    }

    fn cast_first(
        &mut self,
        slot: usize,
        caster: CharacterId,
        target: CharacterId,
        wanted: fn(SpellType) -> bool,
    ) -> Result<Option<String>> {
        let env = CastEnv::new(&self.rng, &AliveTargeting, self.seed);
        let caster_ref = self.roster.get(caster)?;
        let target_ref = self.roster.get(target)?;
        let Some(spell) = self.loadouts[slot].spells.iter_mut().find(|spell| {
            wanted(spell.definition().spell_type) && spell.is_castable(caster_ref, target_ref, &env)
        }) else {
            return Ok(None);
        };

        let outcome = spell.try_cast(caster, target, &mut self.roster, &env)?;
        tracing::trace!(?caster, ?target, spell = spell.name(), ?outcome, "arena cast");
        let caster_name = self.roster.get(caster)?.display_name();
        let target_name = self.roster.get(target)?.display_name();
        let line = match outcome {
            CastOutcome::Hit { .. } if !spell.definition().cast_text.is_empty() => {
                spell.cast_message(caster_name, target_name)
            }
            CastOutcome::Hit { damage } => {
                format!("{caster_name} casts {} on {target_name} ({damage}).", spell.name())
            }
            CastOutcome::Miss => format!("{caster_name}'s {} misses {target_name}!", spell.name()),
            CastOutcome::CantCast(blocked) => {
                format!("{caster_name} cannot cast {}: {blocked}", spell.name())
            }
        };
        Ok(Some(line))
    }

    fn opponent(&self, actor: CharacterId) -> Option<CharacterId> {
        self.roster
            .iter()
            .find(|c| c.id != actor && c.is_alive())
            .map(|c| c.id)
    }

    fn spend_turn(&mut self, actor: CharacterId) -> Result<()> {
        if let Some(charge) = self
            .roster
            .get_mut(actor)?
            .resources
            .get_mut(ResourceType::Charge)
        {
            charge.clear_pending();
        }
        Ok(())
    }
}

fn charge_full(character: &Character) -> bool {
    character
        .resources
        .get(ResourceType::Charge)
        .is_some_and(|charge| charge.is_maxed())
}

fn wounded(character: &Character) -> bool {
    character
        .resources
        .get(ResourceType::Health)
        .is_some_and(|health| health.pending() * 2 < health.maximum())
}
