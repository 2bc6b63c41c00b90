//! Domain models for the four persisted tables
//!
//! Each table has three shapes: the stored record, a create input with every
//! attribute defaulted, and a patch for partial updates.

pub mod battery_pack;
pub mod car;
pub mod car_battery_pack;
pub mod cell_model;
pub mod patch;

pub use battery_pack::{BatteryPack, BatteryPackPatch, NewBatteryPack};
pub use car::{Car, CarPatch, NewCar};
pub use car_battery_pack::{CarBatteryPack, CarBatteryPackPatch, NewCarBatteryPack};
pub use cell_model::{CellModel, CellModelPatch, NewCellModel};
pub use patch::Patch;

use serde::de::DeserializeOwned;
use serde::Serialize;
use voltdex_core_types::TableName;

/// A foreign-key value held by a record, create input or patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Serialized attribute name (e.g. `cellModelId`)
    pub field: &'static str,
    /// Table the key points into
    pub target: TableName,
    pub id: u64,
}

impl ForeignKey {
    pub fn new(field: &'static str, target: TableName, id: u64) -> Self {
        Self { field, target, id }
    }
}

/// A row type stored in one of the four tables
///
/// The store is generic over this trait; the per-table behaviour it needs
/// (defaults, merge, declared foreign keys) lives here.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Create input; omitted attributes take their defaults
    type New: DeserializeOwned;
    /// Partial update input
    type Patch: DeserializeOwned;

    const TABLE: TableName;

    fn id(&self) -> u64;

    /// Build the stored record from a create input and its assigned id
    fn from_new(id: u64, new: Self::New) -> Self;

    /// Merge supplied patch fields over this record
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Non-null foreign keys held by this record
    fn references(&self) -> Vec<ForeignKey>;

    /// Non-null foreign keys supplied in a create input
    fn new_references(new: &Self::New) -> Vec<ForeignKey>;

    /// Non-null foreign keys supplied in a patch; `Keep` and cleared fields are skipped
    fn patch_references(patch: &Self::Patch) -> Vec<ForeignKey>;
}
