//! Whole-dataset consistency rules
//!
//! Used to validate snapshots before import and to audit persisted state.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use voltdex_core_types::TableName;

use crate::model::Record;
use crate::ops::Export;

/// A single consistency problem found in a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityViolation {
    /// Two rows in one table share an id
    DuplicateId { table: TableName, id: u64 },
    /// Ids are positive; 0 is never assigned
    ZeroId { table: TableName },
    /// A row holds `u64::MAX`, leaving no id for the next insert
    MaxId { table: TableName },
    /// A non-null foreign key names a record missing from its target table
    DanglingReference {
        table: TableName,
        id: u64,
        field: &'static str,
        target: TableName,
        target_id: u64,
    },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DuplicateId { table, id } => {
                write!(f, "{} has duplicate id {}", table, id)
            }
            IntegrityViolation::ZeroId { table } => write!(f, "{} has a row with id 0", table),
            IntegrityViolation::MaxId { table } => write!(
                f,
                "{} has a row with id {}, so no further id can be assigned",
                table,
                u64::MAX
            ),
            IntegrityViolation::DanglingReference {
                table,
                id,
                field,
                target,
                target_id,
            } => write!(
                f,
                "{} #{} has {} = {} but {} has no such record",
                table, id, field, target_id, target
            ),
        }
    }
}

/// Check a snapshot; violations are reported in table dependency order
pub fn check(export: &Export) -> Vec<IntegrityViolation> {
    let mut ids: BTreeMap<TableName, BTreeSet<u64>> = BTreeMap::new();
    let mut violations = Vec::new();

    ids.insert(
        TableName::CellModels,
        check_ids(&export.cell_models, &mut violations),
    );
    ids.insert(TableName::Cars, check_ids(&export.cars, &mut violations));
    ids.insert(
        TableName::BatteryPacks,
        check_ids(&export.battery_packs, &mut violations),
    );
    ids.insert(
        TableName::CarBatteryPacks,
        check_ids(&export.car_battery_packs, &mut violations),
    );

    check_references(&export.cell_models, &ids, &mut violations);
    check_references(&export.cars, &ids, &mut violations);
    check_references(&export.battery_packs, &ids, &mut violations);
    check_references(&export.car_battery_packs, &ids, &mut violations);

    violations
}

fn check_ids<R: Record>(rows: &[R], violations: &mut Vec<IntegrityViolation>) -> BTreeSet<u64> {
    let mut seen = BTreeSet::new();
    for row in rows {
        if row.id() == 0 {
            violations.push(IntegrityViolation::ZeroId { table: R::TABLE });
        } else if row.id() == u64::MAX {
            violations.push(IntegrityViolation::MaxId { table: R::TABLE });
        } else if !seen.insert(row.id()) {
            violations.push(IntegrityViolation::DuplicateId {
                table: R::TABLE,
                id: row.id(),
            });
        }
    }
    seen
}

fn check_references<R: Record>(
    rows: &[R],
    ids: &BTreeMap<TableName, BTreeSet<u64>>,
    violations: &mut Vec<IntegrityViolation>,
) {
    for row in rows {
        for fk in row.references() {
            let resolved = ids
                .get(&fk.target)
                .map(|set| set.contains(&fk.id))
                .unwrap_or(false);
            if !resolved {
                violations.push(IntegrityViolation::DanglingReference {
                    table: R::TABLE,
                    id: row.id(),
                    field: fk.field,
                    target: fk.target,
                    target_id: fk.id,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BatteryPack, Car, CarBatteryPack, CellModel, NewBatteryPack, NewCar, NewCellModel};

    fn pack(id: u64, cell_model_id: Option<u64>) -> BatteryPack {
        BatteryPack::from_new(
            id,
            NewBatteryPack {
                cell_model_id,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_empty_export_is_consistent() {
        assert!(check(&Export::default()).is_empty());
    }

    #[test]
    fn test_consistent_export() {
        let export = Export {
            cell_models: vec![CellModel::from_new(1, NewCellModel::default())],
            battery_packs: vec![pack(1, Some(1)), pack(2, None)],
            cars: vec![Car::from_new(1, NewCar::default())],
            car_battery_packs: vec![CarBatteryPack {
                id: 1,
                car_id: Some(1),
                battery_pack_id: Some(2),
            }],
        };
        assert!(check(&export).is_empty());
    }

    #[test]
    fn test_duplicate_and_zero_ids() {
        let export = Export {
            cars: vec![
                Car::from_new(0, NewCar::default()),
                Car::from_new(3, NewCar::default()),
                Car::from_new(3, NewCar::default()),
            ],
            ..Default::default()
        };
        let violations = check(&export);
        assert_eq!(
            violations,
            vec![
                IntegrityViolation::ZeroId {
                    table: TableName::Cars
                },
                IntegrityViolation::DuplicateId {
                    table: TableName::Cars,
                    id: 3
                },
            ]
        );
    }

    #[test]
    fn test_max_id_leaves_no_next_id() {
        let export = Export {
            cars: vec![Car::from_new(u64::MAX, NewCar::default())],
            ..Default::default()
        };
        assert_eq!(
            check(&export),
            vec![IntegrityViolation::MaxId {
                table: TableName::Cars
            }]
        );
    }

    #[test]
    fn test_dangling_cell_model() {
        let export = Export {
            battery_packs: vec![pack(4, Some(77))],
            ..Default::default()
        };
        let violations = check(&export);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "batteryPacks #4 has cellModelId = 77 but cellModels has no such record"
        );
    }
}
