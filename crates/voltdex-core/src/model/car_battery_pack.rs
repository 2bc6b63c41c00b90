use serde::{Deserialize, Serialize};
use voltdex_core_types::TableName;

use super::{ForeignKey, Patch, Record};

pub const FIELD_CAR_ID: &str = "carId";
pub const FIELD_BATTERY_PACK_ID: &str = "batteryPackId";

/// Junction row linking a car to a battery pack it ships with
///
/// Duplicate links are allowed. Either key may be null, like every other
/// foreign key; a link with a null side simply joins nothing on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarBatteryPack {
    pub id: u64,
    /// Foreign key into `cars`
    pub car_id: Option<u64>,
    /// Foreign key into `batteryPacks`
    pub battery_pack_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCarBatteryPack {
    pub car_id: Option<u64>,
    pub battery_pack_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarBatteryPackPatch {
    pub car_id: Patch<Option<u64>>,
    pub battery_pack_id: Patch<Option<u64>>,
}

fn link_refs(car_id: Option<u64>, battery_pack_id: Option<u64>) -> Vec<ForeignKey> {
    let mut refs = Vec::with_capacity(2);
    if let Some(id) = car_id {
        refs.push(ForeignKey::new(FIELD_CAR_ID, TableName::Cars, id));
    }
    if let Some(id) = battery_pack_id {
        refs.push(ForeignKey::new(
            FIELD_BATTERY_PACK_ID,
            TableName::BatteryPacks,
            id,
        ));
    }
    refs
}

impl Record for CarBatteryPack {
    type New = NewCarBatteryPack;
    type Patch = CarBatteryPackPatch;

    const TABLE: TableName = TableName::CarBatteryPacks;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewCarBatteryPack) -> Self {
        Self {
            id,
            car_id: new.car_id,
            battery_pack_id: new.battery_pack_id,
        }
    }

    fn apply_patch(&mut self, patch: CarBatteryPackPatch) {
        patch.car_id.apply_to(&mut self.car_id);
        patch.battery_pack_id.apply_to(&mut self.battery_pack_id);
    }

    fn references(&self) -> Vec<ForeignKey> {
        link_refs(self.car_id, self.battery_pack_id)
    }

    fn new_references(new: &NewCarBatteryPack) -> Vec<ForeignKey> {
        link_refs(new.car_id, new.battery_pack_id)
    }

    fn patch_references(patch: &CarBatteryPackPatch) -> Vec<ForeignKey> {
        link_refs(
            patch.car_id.as_set().copied().flatten(),
            patch.battery_pack_id.as_set().copied().flatten(),
        )
    }
}
