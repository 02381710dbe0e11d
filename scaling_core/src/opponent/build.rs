//! Materialize a freshly spawned class enemy at its resolved level
//!
//! Runs once per opponent activation, invoked by the host's spawn pipeline.
//! Monsters and opponents that already show simulation progress are guarded
//! no-ops, never errors.

use super::entity::{ArmorValueUpdater, EquipmentProvider, OpponentEntity};
use super::materials::{armor_material_from_tier, random_material_tier, weapon_material_from_tier};
use super::spells::{spellbook_for_level, MAGIC_SCHOOL_SKILL_VALUE};
use crate::encounter::{encounter_level, EncounterContext};
use crate::random::RandomSource;
use crate::types::{EntityKind, EquipSlot, Gender, ItemGroup, MagicSchool, Race, Region, Skill};

/// Every trainable skill is floored at `level*4 + 34`, capped here
pub const SKILL_VALUE_CAP: i16 = 150;

/// Result of a build attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Built,
    /// Monsters keep their fixed stat blocks
    SkippedNotClassEnemy,
    /// The opponent already shows simulation progress
    SkippedAlreadyEngaged,
}

/// The build model and its host-owned collaborators
pub struct OpponentBuilder<'a> {
    pub rng: &'a mut dyn RandomSource,
    pub equipment: &'a mut dyn EquipmentProvider,
    pub armor_updater: &'a dyn ArmorValueUpdater,
    /// Host's max-health roll of `(level, hit_points_per_level)`
    pub health_roll: &'a dyn Fn(i32, i32) -> i32,
    pub region: Region,
    /// Player appearance drives armor styling on created pieces
    pub gender: Gender,
    pub race: Race,
}

impl OpponentBuilder<'_> {
    /// Resolve the opponent's level from context and derive its full power
    /// envelope: health, skills, spellbook, equipment materials, armor table.
    ///
    /// The level is set exactly once; an opponent whose current health or
    /// magicka sits below max has already been simulated and is left alone.
    pub fn build(
        &mut self,
        entity: &mut dyn OpponentEntity,
        ctx: &EncounterContext,
    ) -> BuildOutcome {
        if entity.kind() != EntityKind::ClassEnemy {
            return BuildOutcome::SkippedNotClassEnemy;
        }
        if entity.current_magicka() < entity.max_magicka()
            || entity.current_health() < entity.max_health()
        {
            return BuildOutcome::SkippedAlreadyEngaged;
        }

        let level = encounter_level(ctx, entity.is_town_guard(), &mut *self.rng);
        entity.set_level(level);

        let max_health = (self.health_roll)(level, entity.hit_points_per_level());
        entity.set_max_health(max_health);

        let skill_value = (level * 4 + 34).min(SKILL_VALUE_CAP as i32) as i16;
        for &skill in Skill::all() {
            entity.set_permanent_skill_value(skill, skill_value);
        }

        if entity.casts_magic() {
            entity.set_spellbook(spellbook_for_level(level));
            for &school in MagicSchool::all() {
                entity.set_permanent_skill_value(Skill::from(school), MAGIC_SCHOOL_SKILL_VALUE);
            }
        }

        self.regenerate_equipment(entity, level);
        self.recompute_armor(entity);

        BuildOutcome::Built
    }

    /// Replace every equipped armor and weapon piece with a fresh item of the
    /// same template, at a material drawn for the opponent's level. Condition
    /// percentage carries over; weapons keep their poison.
    fn regenerate_equipment(&mut self, entity: &mut dyn OpponentEntity, level: i32) {
        for &slot in EquipSlot::head_through_feet() {
            let relevant = matches!(
                entity.equipped_item(slot).map(|item| item.group),
                Some(ItemGroup::Armor) | Some(ItemGroup::Weapons)
            );
            if !relevant {
                continue;
            }
            let Some(old) = entity.unequip_item(slot) else {
                continue;
            };

            let tier = random_material_tier(level, &mut *self.rng);
            let mut item = self.equipment.create_item(old.group, old.template_index);
            if old.group == ItemGroup::Armor {
                self.equipment.apply_armor_material(
                    &mut item,
                    self.gender,
                    self.race,
                    armor_material_from_tier(tier, self.region),
                    old.variant,
                );
            } else {
                self.equipment
                    .apply_weapon_material(&mut item, weapon_material_from_tier(tier, self.region));
                item.poison = old.poison;
            }
            item.current_condition = item.max_condition * old.condition_percentage() / 100;

            entity.equip_item(slot, item);
        }
    }

    /// Reset the armor table to the unarmored sentinel, apply every equipped
    /// armor piece from head up to (not including) feet, then clamp to the
    /// cap. The feet exclusion mirrors the classic recompute loop; the
    /// regeneration loop above is inclusive.
    fn recompute_armor(&self, entity: &mut dyn OpponentEntity) {
        entity.armor_values_mut().reset();

        for &slot in EquipSlot::armor_recompute_slots() {
            let piece = match entity.equipped_item(slot) {
                Some(item) if item.group == ItemGroup::Armor => item.clone(),
                _ => continue,
            };
            self.armor_updater
                .apply_armor_piece(&piece, entity.armor_values_mut());
        }

        entity.armor_values_mut().clamp_to_cap();
    }
}
