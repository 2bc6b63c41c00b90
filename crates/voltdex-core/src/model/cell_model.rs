use serde::{Deserialize, Serialize};
use voltdex_core_types::TableName;

use super::{ForeignKey, Patch, Record};

/// A battery cell model (e.g. Panasonic NCR18650B)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellModel {
    pub id: u64,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    /// Free-form chemistry label, e.g. "Li-ION" or "Ni-MH"
    #[serde(default)]
    pub chemistry: String,
    pub nominal_voltage: Option<f64>,
    pub nominal_capacity_mah: Option<i64>,
}

/// Create input for [`CellModel`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCellModel {
    pub manufacturer: String,
    pub model: String,
    pub chemistry: String,
    pub nominal_voltage: Option<f64>,
    pub nominal_capacity_mah: Option<i64>,
}

/// Partial update for [`CellModel`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellModelPatch {
    pub manufacturer: Patch<String>,
    pub model: Patch<String>,
    pub chemistry: Patch<String>,
    pub nominal_voltage: Patch<Option<f64>>,
    pub nominal_capacity_mah: Patch<Option<i64>>,
}

impl Record for CellModel {
    type New = NewCellModel;
    type Patch = CellModelPatch;

    const TABLE: TableName = TableName::CellModels;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewCellModel) -> Self {
        Self {
            id,
            manufacturer: new.manufacturer,
            model: new.model,
            chemistry: new.chemistry,
            nominal_voltage: new.nominal_voltage,
            nominal_capacity_mah: new.nominal_capacity_mah,
        }
    }

    fn apply_patch(&mut self, patch: CellModelPatch) {
        patch.manufacturer.apply_to(&mut self.manufacturer);
        patch.model.apply_to(&mut self.model);
        patch.chemistry.apply_to(&mut self.chemistry);
        patch.nominal_voltage.apply_to(&mut self.nominal_voltage);
        patch
            .nominal_capacity_mah
            .apply_to(&mut self.nominal_capacity_mah);
    }

    fn references(&self) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn new_references(_new: &NewCellModel) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn patch_references(_patch: &CellModelPatch) -> Vec<ForeignKey> {
        Vec::new()
    }
}
