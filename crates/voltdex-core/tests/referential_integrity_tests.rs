mod common;

use common::{new_store, seeded_store};
use voltdex_core::model::{
    BatteryPackPatch, CarBatteryPackPatch, NewBatteryPack, NewCar, NewCarBatteryPack,
    NewCellModel,
};
use voltdex_core::{
    BatteryPack, Car, CarBatteryPack, CellModel, ExErrorKind, Patch, TableName, VoltdexError,
};

// ===== FOREIGN KEYS ON CREATE =====

#[test]
fn test_create_pack_with_missing_cell_model_is_rejected() {
    let mut store = new_store();
    let err = store
        .create::<BatteryPack>(NewBatteryPack {
            name: "X".to_string(),
            cell_model_id: Some(99),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid cellModelId: 99");
    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert!(store.list::<BatteryPack>().unwrap().is_empty());
}

#[test]
fn test_create_pack_without_cell_model_is_accepted() {
    let mut store = new_store();
    let pack: BatteryPack = store.create(NewBatteryPack::default()).unwrap();
    assert_eq!(pack.cell_model_id, None);
}

#[test]
fn test_create_link_checks_both_sides() {
    let mut store = new_store();
    let car: Car = store.create(NewCar::default()).unwrap();

    let err = store
        .create::<CarBatteryPack>(NewCarBatteryPack {
            car_id: Some(car.id),
            battery_pack_id: Some(3),
        })
        .unwrap_err();
    assert_eq!(
        err,
        VoltdexError::InvalidReference {
            table: TableName::BatteryPacks,
            field: "batteryPackId",
            id: 3,
        }
    );

    let pack: BatteryPack = store.create(NewBatteryPack::default()).unwrap();
    let err = store
        .create::<CarBatteryPack>(NewCarBatteryPack {
            car_id: Some(42),
            battery_pack_id: Some(pack.id),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid carId: 42");
}

// ===== FOREIGN KEYS ON UPDATE =====

#[test]
fn test_update_to_missing_reference_leaves_row_unchanged() {
    let mut store = seeded_store();
    let before = store.get::<BatteryPack>(1).unwrap().unwrap();

    let err = store
        .update::<BatteryPack>(
            1,
            BatteryPackPatch {
                name: Patch::Set("renamed".to_string()),
                cell_model_id: Patch::Set(Some(500)),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, VoltdexError::InvalidReference { id: 500, .. }));
    assert_eq!(store.get::<BatteryPack>(1).unwrap(), Some(before));
}

#[test]
fn test_update_missing_row_reports_not_found_before_references() {
    let mut store = new_store();
    let err = store
        .update::<CarBatteryPack>(
            7,
            CarBatteryPackPatch {
                car_id: Patch::Set(Some(1000)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, VoltdexError::RecordNotFound { id: 7, .. }));
}

#[test]
fn test_update_link_to_existing_records() {
    let mut store = seeded_store();
    let link = store
        .update::<CarBatteryPack>(
            1,
            CarBatteryPackPatch {
                battery_pack_id: Patch::Set(Some(2)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(link.car_id, Some(1));
    assert_eq!(link.battery_pack_id, Some(2));
}

// ===== DELETE GUARDS =====

#[test]
fn test_referenced_cell_model_cannot_be_deleted() {
    let mut store = new_store();
    let cell: CellModel = store.create(NewCellModel::default()).unwrap();
    let pack: BatteryPack = store
        .create(NewBatteryPack {
            cell_model_id: Some(cell.id),
            ..Default::default()
        })
        .unwrap();

    let err = store.remove::<CellModel>(cell.id).unwrap_err();
    assert_eq!(
        err,
        VoltdexError::DeleteBlocked {
            table: TableName::CellModels,
            id: cell.id,
            dependent_table: TableName::BatteryPacks,
            dependent_id: pack.id,
        }
    );
    assert_eq!(err.kind(), ExErrorKind::Conflict);
    assert!(store.get::<CellModel>(cell.id).unwrap().is_some());
}

#[test]
fn test_linked_pack_and_car_cannot_be_deleted() {
    let mut store = seeded_store();

    let err = store.remove::<BatteryPack>(1).unwrap_err();
    assert!(matches!(
        err,
        VoltdexError::DeleteBlocked {
            dependent_table: TableName::CarBatteryPacks,
            ..
        }
    ));

    let err = store.remove::<Car>(1).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Conflict);
}

#[test]
fn test_unlinking_then_deleting_succeeds() {
    let mut store = seeded_store();

    // Model Y is linked to two packs through rows 5 and 6
    store.remove::<CarBatteryPack>(5).unwrap();
    assert!(store.remove::<Car>(5).is_err());
    store.remove::<CarBatteryPack>(6).unwrap();
    store.remove::<Car>(5).unwrap();

    assert_eq!(store.get::<Car>(5).unwrap(), None);
}

#[test]
fn test_unlinked_car_can_be_deleted() {
    let mut store = seeded_store();
    let ipace = store.get::<Car>(27).unwrap().unwrap();
    assert_eq!(ipace.brand, "Jaguar");
    store.remove::<Car>(27).unwrap();
}

#[test]
fn test_junction_rows_are_never_blocked() {
    let mut store = seeded_store();
    for link in store.list::<CarBatteryPack>().unwrap() {
        store.remove::<CarBatteryPack>(link.id).unwrap();
    }
    assert!(store.list::<CarBatteryPack>().unwrap().is_empty());
}

#[test]
fn test_guard_only_looks_at_matching_field() {
    let mut store = new_store();
    // Car #1 and pack #1 share an id; a link to pack 1 must not block car 1
    let car: Car = store.create(NewCar::default()).unwrap();
    let _other: Car = store.create(NewCar::default()).unwrap();
    let pack: BatteryPack = store.create(NewBatteryPack::default()).unwrap();
    store
        .create::<CarBatteryPack>(NewCarBatteryPack {
            car_id: Some(2),
            battery_pack_id: Some(pack.id),
        })
        .unwrap();

    assert_eq!(car.id, pack.id);
    store.remove::<Car>(car.id).unwrap();
}

// ===== NULL JUNCTION KEYS =====

#[test]
fn test_link_with_null_keys_is_accepted() {
    let mut store = new_store();
    let link: CarBatteryPack = store.create(NewCarBatteryPack::default()).unwrap();
    assert_eq!(link.car_id, None);
    assert_eq!(link.battery_pack_id, None);

    let outcome = voltdex_core::apply(
        &mut store,
        voltdex_core::Command::Create {
            table: TableName::CarBatteryPacks,
            fields: serde_json::json!({"carId": null, "batteryPackId": null}),
        },
    );
    assert!(outcome.is_ok());

    let outcome = voltdex_core::apply(
        &mut store,
        voltdex_core::Command::Create {
            table: TableName::CarBatteryPacks,
            fields: serde_json::json!({}),
        },
    );
    assert!(outcome.is_ok());
    assert_eq!(store.list::<CarBatteryPack>().unwrap().len(), 3);
}

#[test]
fn test_clearing_link_key_unblocks_delete() {
    let mut store = seeded_store();
    // Car #1 is linked through row #1 only
    assert!(store.remove::<Car>(1).is_err());

    store
        .update::<CarBatteryPack>(
            1,
            CarBatteryPackPatch {
                car_id: Patch::Set(None),
                ..Default::default()
            },
        )
        .unwrap();

    store.remove::<Car>(1).unwrap();
    let link = store.get::<CarBatteryPack>(1).unwrap().unwrap();
    assert_eq!(link.car_id, None);
    assert_eq!(link.battery_pack_id, Some(1));
}
