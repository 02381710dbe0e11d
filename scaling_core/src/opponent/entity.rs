//! Capability contracts toward the host's entity, item and armor systems
//!
//! The build model only reads and writes through these narrow traits; the
//! containers themselves (stats, inventory, item construction) stay with the
//! host.

use crate::types::{
    ArmorMaterial, ArmorValueTable, EntityKind, EquipSlot, EquipmentItem, Gender, ItemGroup, Race,
    Skill, SpellId, WeaponMaterial,
};

/// Stat sink and accessors for one opponent entity
pub trait OpponentEntity {
    fn kind(&self) -> EntityKind;

    fn level(&self) -> i32;
    fn set_level(&mut self, level: i32);

    fn max_health(&self) -> i32;
    fn set_max_health(&mut self, value: i32);
    fn current_health(&self) -> i32;
    fn max_magicka(&self) -> i32;
    fn current_magicka(&self) -> i32;

    /// Career hit-point gain per level, input to the host's health roll
    fn hit_points_per_level(&self) -> i32;
    fn casts_magic(&self) -> bool;
    fn is_town_guard(&self) -> bool;

    fn set_permanent_skill_value(&mut self, skill: Skill, value: i16);

    /// Replace the whole spell list
    fn set_spellbook(&mut self, spells: &[SpellId]);

    fn equipped_item(&self, slot: EquipSlot) -> Option<&EquipmentItem>;

    /// Unequip the slot and remove the item from the inventory, handing it back
    fn unequip_item(&mut self, slot: EquipSlot) -> Option<EquipmentItem>;

    /// Add the item to the inventory and equip it in the given slot
    fn equip_item(&mut self, slot: EquipSlot, item: EquipmentItem);

    fn armor_values(&self) -> &ArmorValueTable;
    fn armor_values_mut(&mut self) -> &mut ArmorValueTable;
}

/// Creates gear and applies materials; owned by the host's item system
pub trait EquipmentProvider {
    /// Create a fresh item of the given group and template at full condition
    fn create_item(&mut self, group: ItemGroup, template_index: u16) -> EquipmentItem;

    fn apply_armor_material(
        &mut self,
        item: &mut EquipmentItem,
        gender: Gender,
        race: Race,
        material: ArmorMaterial,
        variant: u8,
    );

    fn apply_weapon_material(&mut self, item: &mut EquipmentItem, material: WeaponMaterial);
}

/// Applies one equipped armor piece's reduction to the armor table.
/// The reduction policy is the host's; the build model only sequences calls.
pub trait ArmorValueUpdater {
    fn apply_armor_piece(&self, item: &EquipmentItem, values: &mut ArmorValueTable);
}
