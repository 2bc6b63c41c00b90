use serde::{Deserialize, Serialize};
use voltdex_core_types::TableName;

use super::{ForeignKey, Patch, Record};

/// A vehicle model, optionally narrowed by trim and production years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub trim: Option<String>,
    pub year_start: Option<i64>,
    pub year_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub trim: Option<String>,
    pub year_start: Option<i64>,
    pub year_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarPatch {
    pub brand: Patch<String>,
    pub model: Patch<String>,
    pub trim: Patch<Option<String>>,
    pub year_start: Patch<Option<i64>>,
    pub year_end: Patch<Option<i64>>,
}

impl Record for Car {
    type New = NewCar;
    type Patch = CarPatch;

    const TABLE: TableName = TableName::Cars;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewCar) -> Self {
        Self {
            id,
            brand: new.brand,
            model: new.model,
            trim: new.trim,
            year_start: new.year_start,
            year_end: new.year_end,
        }
    }

    fn apply_patch(&mut self, patch: CarPatch) {
        patch.brand.apply_to(&mut self.brand);
        patch.model.apply_to(&mut self.model);
        patch.trim.apply_to(&mut self.trim);
        patch.year_start.apply_to(&mut self.year_start);
        patch.year_end.apply_to(&mut self.year_end);
    }

    fn references(&self) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn new_references(_new: &NewCar) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn patch_references(_patch: &CarPatch) -> Vec<ForeignKey> {
        Vec::new()
    }
}
