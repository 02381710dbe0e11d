//! Core types shared across the scaling models

use serde::{Deserialize, Serialize};

/// Armor value meaning "no armor equipped at this location"
pub const NO_ARMOR_VALUE: i32 = 100;

/// Ceiling applied to every armor location after recompute
pub const ARMOR_VALUE_CAP: i32 = 60;

/// The six magic schools an effect can be governed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicSchool {
    Destruction,
    Restoration,
    Illusion,
    Alteration,
    Thaumaturgy,
    Mysticism,
}

impl MagicSchool {
    /// Get all magic schools
    pub fn all() -> &'static [MagicSchool] {
        &[
            MagicSchool::Destruction,
            MagicSchool::Restoration,
            MagicSchool::Illusion,
            MagicSchool::Alteration,
            MagicSchool::Thaumaturgy,
            MagicSchool::Mysticism,
        ]
    }

    /// Short capital-letter abbreviation used in diagnostic messages
    pub fn abbrev(&self) -> &'static str {
        match self {
            MagicSchool::Destruction => "DEST",
            MagicSchool::Restoration => "REST",
            MagicSchool::Illusion => "ILL",
            MagicSchool::Alteration => "ALT",
            MagicSchool::Thaumaturgy => "THAU",
            MagicSchool::Mysticism => "MYST",
        }
    }
}

/// Trainable skills of an opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Medical,
    Etiquette,
    Streetwise,
    Jumping,
    Orcish,
    Harpy,
    Giantish,
    Dragonish,
    Nymph,
    Daedric,
    Spriggan,
    Centaurian,
    Impish,
    Lockpicking,
    Mercantile,
    Pickpocket,
    Stealth,
    Swimming,
    Climbing,
    Backstabbing,
    Dodging,
    Running,
    Destruction,
    Restoration,
    Illusion,
    Alteration,
    Thaumaturgy,
    Mysticism,
    ShortBlade,
    LongBlade,
    HandToHand,
    Axe,
    BluntWeapon,
    Archery,
    CriticalStrike,
}

impl Skill {
    /// Get all trainable skills
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Medical,
            Skill::Etiquette,
            Skill::Streetwise,
            Skill::Jumping,
            Skill::Orcish,
            Skill::Harpy,
            Skill::Giantish,
            Skill::Dragonish,
            Skill::Nymph,
            Skill::Daedric,
            Skill::Spriggan,
            Skill::Centaurian,
            Skill::Impish,
            Skill::Lockpicking,
            Skill::Mercantile,
            Skill::Pickpocket,
            Skill::Stealth,
            Skill::Swimming,
            Skill::Climbing,
            Skill::Backstabbing,
            Skill::Dodging,
            Skill::Running,
            Skill::Destruction,
            Skill::Restoration,
            Skill::Illusion,
            Skill::Alteration,
            Skill::Thaumaturgy,
            Skill::Mysticism,
            Skill::ShortBlade,
            Skill::LongBlade,
            Skill::HandToHand,
            Skill::Axe,
            Skill::BluntWeapon,
            Skill::Archery,
            Skill::CriticalStrike,
        ]
    }
}

impl From<MagicSchool> for Skill {
    fn from(school: MagicSchool) -> Self {
        match school {
            MagicSchool::Destruction => Skill::Destruction,
            MagicSchool::Restoration => Skill::Restoration,
            MagicSchool::Illusion => Skill::Illusion,
            MagicSchool::Alteration => Skill::Alteration,
            MagicSchool::Thaumaturgy => Skill::Thaumaturgy,
            MagicSchool::Mysticism => Skill::Mysticism,
        }
    }
}

/// Kind of opponent entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Career-based opponent whose strength derives from its level
    ClassEnemy,
    /// Fixed stat block, never rescaled
    Monster,
}

/// Item group of an equipped piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemGroup {
    Armor,
    Weapons,
    Other,
}

/// Weapon material, weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponMaterial {
    Iron,
    Steel,
    Silver,
    Elven,
    Dwarven,
    Mithril,
    Adamantium,
    Ebony,
    Orcish,
    Daedric,
}

/// Armor material, weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorMaterial {
    Leather,
    Chain,
    Iron,
    Steel,
    Silver,
    Elven,
    Dwarven,
    Mithril,
    Adamantium,
    Ebony,
    Orcish,
    Daedric,
}

/// World region the opponent is built in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Standard,
    /// Orcish gear substitutes for the upper material tiers here
    OrcStronghold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Breton,
    Redguard,
    Nord,
    DarkElf,
    HighElf,
    WoodElf,
    Khajiit,
    Argonian,
}

/// Settlement tier of the current location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    TownCity,
    TownHamlet,
    TownVillage,
    Other,
}

/// Equip slots covering the head-through-feet range, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Head,
    RightArm,
    LeftArm,
    Cloak1,
    LeftHand,
    RightHand,
    ChestClothes,
    ChestArmor,
    Cloak2,
    LegsArmor,
    LegsClothes,
    Feet,
}

impl EquipSlot {
    /// Head through feet, inclusive (equipment regeneration order)
    pub fn head_through_feet() -> &'static [EquipSlot] {
        &[
            EquipSlot::Head,
            EquipSlot::RightArm,
            EquipSlot::LeftArm,
            EquipSlot::Cloak1,
            EquipSlot::LeftHand,
            EquipSlot::RightHand,
            EquipSlot::ChestClothes,
            EquipSlot::ChestArmor,
            EquipSlot::Cloak2,
            EquipSlot::LegsArmor,
            EquipSlot::LegsClothes,
            EquipSlot::Feet,
        ]
    }

    /// Head through feet, exclusive of feet (armor recompute order).
    /// The narrower bound matches the recompute loop in the classic rules;
    /// do not unify it with `head_through_feet`.
    pub fn armor_recompute_slots() -> &'static [EquipSlot] {
        let all = Self::head_through_feet();
        &all[..all.len() - 1]
    }
}

/// Body locations carrying an armor value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Head,
    RightArm,
    LeftArm,
    Chest,
    Hands,
    Legs,
    Feet,
}

impl BodyPart {
    pub const COUNT: usize = 7;

    /// Get all body parts
    pub fn all() -> &'static [BodyPart] {
        &[
            BodyPart::Head,
            BodyPart::RightArm,
            BodyPart::LeftArm,
            BodyPart::Chest,
            BodyPart::Hands,
            BodyPart::Legs,
            BodyPart::Feet,
        ]
    }
}

/// Per-body-location armor ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorValueTable {
    values: [i32; BodyPart::COUNT],
}

impl Default for ArmorValueTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ArmorValueTable {
    /// Fresh table with every location at the no-armor sentinel
    pub fn new() -> Self {
        ArmorValueTable {
            values: [NO_ARMOR_VALUE; BodyPart::COUNT],
        }
    }

    /// Reset every location to the no-armor sentinel
    pub fn reset(&mut self) {
        self.values = [NO_ARMOR_VALUE; BodyPart::COUNT];
    }

    pub fn get(&self, part: BodyPart) -> i32 {
        self.values[part as usize]
    }

    pub fn set(&mut self, part: BodyPart, value: i32) {
        self.values[part as usize] = value;
    }

    /// Lower every location above the cap down to it
    pub fn clamp_to_cap(&mut self) {
        for value in &mut self.values {
            if *value > ARMOR_VALUE_CAP {
                *value = ARMOR_VALUE_CAP;
            }
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

/// Identifier of a spell in the host's spell catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellId(pub u8);

/// Poison applied to a weapon, carried across regeneration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoisonType(pub u8);

/// A piece of gear in an opponent's equip table.
///
/// The build model never mutates an equipped item in place: it captures the
/// old item's condition percentage (and poison, for weapons), discards it and
/// equips a freshly created replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub group: ItemGroup,
    pub template_index: u16,
    pub variant: u8,
    pub current_condition: i32,
    pub max_condition: i32,
    pub armor_material: Option<ArmorMaterial>,
    pub weapon_material: Option<WeaponMaterial>,
    pub poison: Option<PoisonType>,
}

impl EquipmentItem {
    /// Remaining condition as a percentage of maximum
    pub fn condition_percentage(&self) -> i32 {
        if self.max_condition > 0 {
            self.current_condition * 100 / self.max_condition
        } else {
            100
        }
    }
}
