//! Example Game - A minimal console host demonstrating scaling_core
//!
//! This program shows:
//! - Scaling spell chance/magnitude/duration for a player caster
//! - Resolving encounter levels in dungeons, towns and the wilderness
//! - Building a full class-enemy power envelope (health, skills,
//!   spellbook, equipment materials, armor ratings)

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scaling_core::prelude::*;
use scaling_core::types::{EntityKind, PoisonType, SpellId};
use std::collections::HashMap;

/// Prints scaling diagnostics straight to stdout
struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, message: &str) {
        println!("  [diag] {message}");
    }
}

/// A bare-bones entity the build model can drive
struct DemoEntity {
    name: String,
    kind: EntityKind,
    level: i32,
    max_health: i32,
    current_health: i32,
    max_magicka: i32,
    current_magicka: i32,
    hit_points_per_level: i32,
    casts_magic: bool,
    town_guard: bool,
    skills: HashMap<Skill, i16>,
    spellbook: Vec<SpellId>,
    equipment: HashMap<EquipSlot, EquipmentItem>,
    armor: ArmorValueTable,
}

impl DemoEntity {
    fn new(name: &str, casts_magic: bool, town_guard: bool) -> Self {
        let mut equipment = HashMap::new();
        equipment.insert(
            EquipSlot::ChestArmor,
            EquipmentItem {
                group: ItemGroup::Armor,
                template_index: 102,
                variant: 1,
                current_condition: 80,
                max_condition: 100,
                armor_material: Some(ArmorMaterial::Leather),
                weapon_material: None,
                poison: None,
            },
        );
        equipment.insert(
            EquipSlot::RightHand,
            EquipmentItem {
                group: ItemGroup::Weapons,
                template_index: 120,
                variant: 0,
                current_condition: 60,
                max_condition: 100,
                armor_material: None,
                weapon_material: Some(WeaponMaterial::Iron),
                poison: Some(PoisonType(3)),
            },
        );
        DemoEntity {
            name: name.to_string(),
            kind: EntityKind::ClassEnemy,
            level: 1,
            max_health: 25,
            current_health: 25,
            max_magicka: 40,
            current_magicka: 40,
            hit_points_per_level: 12,
            casts_magic,
            town_guard,
            skills: HashMap::new(),
            spellbook: Vec::new(),
            equipment,
            armor: ArmorValueTable::new(),
        }
    }
}

impl OpponentEntity for DemoEntity {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    fn max_health(&self) -> i32 {
        self.max_health
    }

    fn set_max_health(&mut self, value: i32) {
        self.max_health = value;
        self.current_health = value;
    }

    fn current_health(&self) -> i32 {
        self.current_health
    }

    fn max_magicka(&self) -> i32 {
        self.max_magicka
    }

    fn current_magicka(&self) -> i32 {
        self.current_magicka
    }

    fn hit_points_per_level(&self) -> i32 {
        self.hit_points_per_level
    }

    fn casts_magic(&self) -> bool {
        self.casts_magic
    }

    fn is_town_guard(&self) -> bool {
        self.town_guard
    }

    fn set_permanent_skill_value(&mut self, skill: Skill, value: i16) {
        self.skills.insert(skill, value);
    }

    fn set_spellbook(&mut self, spells: &[SpellId]) {
        self.spellbook = spells.to_vec();
    }

    fn equipped_item(&self, slot: EquipSlot) -> Option<&EquipmentItem> {
        self.equipment.get(&slot)
    }

    fn unequip_item(&mut self, slot: EquipSlot) -> Option<EquipmentItem> {
        self.equipment.remove(&slot)
    }

    fn equip_item(&mut self, slot: EquipSlot, item: EquipmentItem) {
        self.equipment.insert(slot, item);
    }

    fn armor_values(&self) -> &ArmorValueTable {
        &self.armor
    }

    fn armor_values_mut(&mut self) -> &mut ArmorValueTable {
        &mut self.armor
    }
}

/// Mints fresh gear at full condition and stamps the chosen material
struct DemoProvider;

impl EquipmentProvider for DemoProvider {
    fn create_item(&mut self, group: ItemGroup, template_index: u16) -> EquipmentItem {
        EquipmentItem {
            group,
            template_index,
            variant: 0,
            current_condition: 120,
            max_condition: 120,
            armor_material: None,
            weapon_material: None,
            poison: None,
        }
    }

    fn apply_armor_material(
        &mut self,
        item: &mut EquipmentItem,
        _gender: Gender,
        _race: Race,
        material: ArmorMaterial,
        variant: u8,
    ) {
        item.armor_material = Some(material);
        item.variant = variant;
    }

    fn apply_weapon_material(&mut self, item: &mut EquipmentItem, material: WeaponMaterial) {
        item.weapon_material = Some(material);
    }
}

/// Flat reduction per piece, enough to show the recompute pipeline
struct DemoArmorRules;

impl ArmorValueUpdater for DemoArmorRules {
    fn apply_armor_piece(&self, item: &EquipmentItem, values: &mut ArmorValueTable) {
        if item.armor_material.is_some() {
            for part in BodyPart::all() {
                let current = values.get(*part);
                values.set(*part, current - 45);
            }
        }
    }
}

fn spell_demo() {
    println!("=== Spell scaling ===");

    let caster = CasterContext::Player {
        skill_value: 52,
        willpower: 55,
        luck: 70,
    };
    let diagnostics = Diagnostics::new(DiagnosticConfig::all_enabled(), Box::new(ConsoleSink));
    let mut rng = RngSource(ChaCha8Rng::seed_from_u64(0xDF05));

    let effects = default_effects();
    let mut keys: Vec<&String> = effects.keys().collect();
    keys.sort();

    for key in keys {
        let effect = &effects[key];
        println!("{key}:");
        match spell_chance(&effect.properties, &effect.settings, Some(&caster), &diagnostics) {
            Ok(chance) => println!("  chance    {chance}%"),
            Err(err) => println!("  chance    error: {err}"),
        }
        match spell_magnitude(
            &effect.properties,
            &effect.settings,
            Some(&caster),
            &mut rng,
            &NoModifier,
            &diagnostics,
        ) {
            Ok(magnitude) => println!("  magnitude {magnitude}"),
            Err(err) => println!("  magnitude error: {err}"),
        }
        match spell_duration(&effect.properties, &effect.settings, Some(&caster), &diagnostics) {
            Ok(duration) => println!("  duration  {duration} rounds"),
            Err(err) => println!("  duration  error: {err}"),
        }
    }
    println!();
}

fn opponent_demo() {
    println!("=== Opponent builds ===");

    let dungeon = EncounterContext {
        player_level: 12,
        inside_dungeon: true,
        dungeon_quality: 14,
        location_type: LocationType::Other,
        location_name: String::new(),
        region_name: String::new(),
        map_x: 310,
        map_y: 442,
        year: 405,
        month: 5,
    };
    let capital = EncounterContext {
        player_level: 12,
        inside_dungeon: false,
        dungeon_quality: 0,
        location_type: LocationType::TownCity,
        location_name: "Wayrest".to_string(),
        region_name: "Wayrest".to_string(),
        map_x: 110,
        map_y: 250,
        year: 405,
        month: 5,
    };
    let wilderness = EncounterContext {
        player_level: 12,
        inside_dungeon: false,
        dungeon_quality: 0,
        location_type: LocationType::Other,
        location_name: String::new(),
        region_name: "Dwynnen".to_string(),
        map_x: 72,
        map_y: 190,
        year: 405,
        month: 8,
    };

    let cases = [
        ("dungeon mage", DemoEntity::new("dungeon mage", true, false), dungeon),
        ("capital guard", DemoEntity::new("capital guard", false, true), capital),
        (
            "wandering brigand",
            DemoEntity::new("wandering brigand", false, false),
            wilderness,
        ),
    ];

    let mut rng = RngSource(ChaCha8Rng::seed_from_u64(0xDF06));
    let mut provider = DemoProvider;
    let armor_rules = DemoArmorRules;
    let health_roll = |level: i32, hp_per_level: i32| level * hp_per_level;

    for (label, mut entity, ctx) in cases {
        let mut builder = OpponentBuilder {
            rng: &mut rng,
            equipment: &mut provider,
            armor_updater: &armor_rules,
            health_roll: &health_roll,
            region: Region::Standard,
            gender: Gender::Female,
            race: Race::Breton,
        };
        let outcome = builder.build(&mut entity, &ctx);
        println!("{label} ({outcome:?}):");
        println!("  level  {}", entity.level);
        println!("  health {}", entity.max_health);
        if let Some(weapon) = entity.equipment.get(&EquipSlot::RightHand) {
            println!(
                "  weapon {:?}, condition {}/{}, poison {:?}",
                weapon.weapon_material, weapon.current_condition, weapon.max_condition, weapon.poison
            );
        }
        if let Some(chest) = entity.equipment.get(&EquipSlot::ChestArmor) {
            println!(
                "  chest  {:?}, condition {}/{}",
                chest.armor_material, chest.current_condition, chest.max_condition
            );
        }
        if !entity.spellbook.is_empty() {
            let ids: Vec<String> = entity
                .spellbook
                .iter()
                .map(|spell| format!("{:#04x}", spell.0))
                .collect();
            println!("  spells {}", ids.join(", "));
        }
        println!("  armor  {:?}", entity.armor.as_slice());
        let long_blades = entity.skills.get(&Skill::LongBlade).copied().unwrap_or(0);
        println!("  long blade skill {long_blades}");
        println!("  name   {}", entity.name);
    }
}

fn main() {
    spell_demo();
    opponent_demo();
}
