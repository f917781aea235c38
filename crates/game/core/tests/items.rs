use skirmish_core::{
    Apple, Calculation, Character, CharacterId, ConsumableItem, ItemError, PairedValue, Resource,
    ResourceSet, ResourceType, Roster, use_item,
};

fn wounded(id: u32, name: &str, health: u32, maximum: u32) -> Character {
    let mut pool = Resource::create(ResourceType::Health, maximum);
    pool.set(health);
    Character::new(CharacterId(id), name).with_resources(ResourceSet::new().with(pool))
}

#[test]
fn apple_heals_pending_life() {
    let mut roster = Roster::new();
    roster.add(wounded(1, "Pip", 5, 20)).unwrap();
    roster.add(wounded(2, "Moss", 20, 20)).unwrap();

    let used = use_item(&Apple, CharacterId(2), CharacterId(1), &mut roster).unwrap();
    assert_eq!(
        used.calculation,
        Calculation::new().with_target(ResourceType::Health, PairedValue::new(0, 10))
    );
    assert_eq!(used.text, "Moss uses an apple on Pip!\nPip restores 10 life!");

    let health = *roster
        .get(CharacterId(1))
        .unwrap()
        .resources
        .get(ResourceType::Health)
        .unwrap();
    assert_eq!((health.pending(), health.maximum()), (15, 20));
    assert_eq!(health.current(), 5);
}

#[test]
fn apple_caps_at_maximum_and_uses_self_text() {
    let mut roster = Roster::new();
    roster.add(wounded(1, "Pip", 16, 20)).unwrap();

    let used = use_item(&Apple, CharacterId(1), CharacterId(1), &mut roster).unwrap();
    assert_eq!(used.text, "Pip eats an apple!\nPip restores 10 life!");
    assert_eq!(used.applied.target_amount(ResourceType::Health), 4);
    assert_eq!(
        roster.get(CharacterId(1)).unwrap().resources.pending(ResourceType::Health),
        20
    );
}

#[test]
fn calculation_is_side_effect_free() {
    let pip = wounded(1, "Pip", 5, 20);
    let snapshot = pip.resources.clone();
    let _ = Apple.create_calculation(&pip, &pip);
    assert_eq!(pip.resources, snapshot);
    assert_eq!(Apple.description(), "Heal an ally for 10 Life.");
}

#[test]
fn unknown_target_changes_nothing() {
    let mut roster = Roster::new();
    roster.add(wounded(1, "Pip", 5, 20)).unwrap();
    assert_eq!(
        use_item(&Apple, CharacterId(1), CharacterId(7), &mut roster),
        Err(ItemError::CharacterNotFound(CharacterId(7)))
    );
    assert_eq!(
        roster.get(CharacterId(1)).unwrap().resources.pending(ResourceType::Health),
        5
    );
}
