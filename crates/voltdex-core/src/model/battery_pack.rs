use serde::{Deserialize, Serialize};
use voltdex_core_types::TableName;

use super::{ForeignKey, Patch, Record};

pub const FIELD_CELL_MODEL_ID: &str = "cellModelId";

/// A battery pack, optionally built from a known cell model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryPack {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub total_capacity_kwh: Option<f64>,
    pub series_count: Option<i64>,
    pub parallel_count: Option<i64>,
    pub cell_count: Option<i64>,
    /// Foreign key into `cellModels`
    pub cell_model_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewBatteryPack {
    pub name: String,
    pub total_capacity_kwh: Option<f64>,
    pub series_count: Option<i64>,
    pub parallel_count: Option<i64>,
    pub cell_count: Option<i64>,
    pub cell_model_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatteryPackPatch {
    pub name: Patch<String>,
    pub total_capacity_kwh: Patch<Option<f64>>,
    pub series_count: Patch<Option<i64>>,
    pub parallel_count: Patch<Option<i64>>,
    pub cell_count: Patch<Option<i64>>,
    pub cell_model_id: Patch<Option<u64>>,
}

fn cell_model_ref(id: Option<u64>) -> Vec<ForeignKey> {
    id.map(|id| ForeignKey::new(FIELD_CELL_MODEL_ID, TableName::CellModels, id))
        .into_iter()
        .collect()
}

impl Record for BatteryPack {
    type New = NewBatteryPack;
    type Patch = BatteryPackPatch;

    const TABLE: TableName = TableName::BatteryPacks;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewBatteryPack) -> Self {
        Self {
            id,
            name: new.name,
            total_capacity_kwh: new.total_capacity_kwh,
            series_count: new.series_count,
            parallel_count: new.parallel_count,
            cell_count: new.cell_count,
            cell_model_id: new.cell_model_id,
        }
    }

    fn apply_patch(&mut self, patch: BatteryPackPatch) {
        patch.name.apply_to(&mut self.name);
        patch.total_capacity_kwh.apply_to(&mut self.total_capacity_kwh);
        patch.series_count.apply_to(&mut self.series_count);
        patch.parallel_count.apply_to(&mut self.parallel_count);
        patch.cell_count.apply_to(&mut self.cell_count);
        patch.cell_model_id.apply_to(&mut self.cell_model_id);
    }

    fn references(&self) -> Vec<ForeignKey> {
        cell_model_ref(self.cell_model_id)
    }

    fn new_references(new: &NewBatteryPack) -> Vec<ForeignKey> {
        cell_model_ref(new.cell_model_id)
    }

    fn patch_references(patch: &BatteryPackPatch) -> Vec<ForeignKey> {
        cell_model_ref(patch.cell_model_id.as_set().copied().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cell_model_has_no_reference() {
        let pack = BatteryPack::from_new(1, NewBatteryPack::default());
        assert!(pack.references().is_empty());
    }

    #[test]
    fn test_patch_clearing_cell_model_needs_no_validation() {
        let patch: BatteryPackPatch = serde_json::from_str(r#"{"cellModelId": null}"#).unwrap();
        assert!(BatteryPack::patch_references(&patch).is_empty());

        let mut pack = BatteryPack::from_new(
            1,
            NewBatteryPack {
                cell_model_id: Some(4),
                ..Default::default()
            },
        );
        pack.apply_patch(patch);
        assert_eq!(pack.cell_model_id, None);
    }

    #[test]
    fn test_patch_setting_cell_model_is_validated() {
        let patch: BatteryPackPatch = serde_json::from_str(r#"{"cellModelId": 9}"#).unwrap();
        let refs = BatteryPack::patch_references(&patch);
        assert_eq!(
            refs,
            vec![ForeignKey::new("cellModelId", TableName::CellModels, 9)]
        );
    }
}
