mod common;

use common::{new_store, seeded_store};
use voltdex_core::model::{CarBatteryPack, NewCar};
use voltdex_core::{
    BatteryPack, Car, ExErrorKind, Export, IntegrityViolation, KvBackend, Store, TableName,
    VoltdexError,
};

#[test]
fn test_export_serializes_with_storage_keys() {
    let store = seeded_store();
    let json = serde_json::to_value(store.export().unwrap()).unwrap();

    for table in TableName::ALL {
        assert!(json.get(table.key()).is_some(), "missing {}", table);
    }
    assert_eq!(json["carBatteryPacks"][0]["batteryPackId"], 1);
}

#[test]
fn test_import_into_fresh_store_reproduces_dataset() {
    let source = seeded_store();
    let snapshot = source.export().unwrap();

    let mut target = new_store();
    target.import(snapshot.clone()).unwrap();
    assert_eq!(target.export().unwrap(), snapshot);
    assert!(target.is_initialized().unwrap());
}

#[test]
fn test_import_replaces_existing_rows() {
    let mut store = seeded_store();
    let car = Car {
        id: 10,
        brand: "Lucid".to_string(),
        model: "Air".to_string(),
        trim: None,
        year_start: Some(2021),
        year_end: None,
    };
    store
        .import(Export {
            cars: vec![car.clone()],
            ..Default::default()
        })
        .unwrap();

    assert_eq!(store.list::<Car>().unwrap(), vec![car]);
    assert!(store.list::<BatteryPack>().unwrap().is_empty());

    // Ids continue from the imported maximum
    let next: Car = store.create(NewCar::default()).unwrap();
    assert_eq!(next.id, 11);
}

#[test]
fn test_import_rejects_dangling_reference_and_keeps_state() {
    let mut store = seeded_store();
    let before = store.export().unwrap();

    let mut snapshot = before.clone();
    snapshot.car_battery_packs.push(CarBatteryPack {
        id: 99,
        car_id: Some(1),
        battery_pack_id: Some(500),
    });

    let err = store.import(snapshot).unwrap_err();
    assert!(matches!(err, VoltdexError::InvalidImport { .. }));
    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert!(err.to_string().contains("batteryPackId = 500"));
    assert_eq!(store.export().unwrap(), before);
}

#[test]
fn test_import_rejects_duplicate_ids() {
    let mut store = new_store();
    let mut snapshot = seeded_store().export().unwrap();
    let first = snapshot.cars[0].clone();
    snapshot.cars.push(first);

    let err = store.import(snapshot).unwrap_err();
    assert!(err.to_string().contains("duplicate id 1"));
    assert!(!store.is_initialized().unwrap());
}

#[test]
fn test_import_accepts_camel_case_json() {
    let json = r#"{
        "cellModels": [{"id": 3, "manufacturer": "CATL", "model": "LFP", "chemistry": "LiFePO4"}],
        "batteryPacks": [{"id": 1, "name": "Pack", "cellModelId": 3}]
    }"#;
    let snapshot: Export = serde_json::from_str(json).unwrap();

    let mut store = new_store();
    store.import(snapshot).unwrap();
    let pack = store.get::<BatteryPack>(1).unwrap().unwrap();
    assert_eq!(pack.cell_model_id, Some(3));
    assert_eq!(pack.total_capacity_kwh, None);
}

#[test]
fn test_check_integrity_reports_hand_edited_drift() {
    let mut store = seeded_store();
    let mut backend = store.into_backend();
    backend
        .set(
            "carBatteryPacks",
            r#"[{"id": 1, "carId": 77, "batteryPackId": 1}]"#,
        )
        .unwrap();
    store = Store::new(backend);

    let violations = store.check_integrity().unwrap();
    assert_eq!(
        violations,
        vec![IntegrityViolation::DanglingReference {
            table: TableName::CarBatteryPacks,
            id: 1,
            field: "carId",
            target: TableName::Cars,
            target_id: 77,
        }]
    );
}

#[test]
fn test_import_rejects_id_with_no_successor() {
    let mut store = new_store();
    let snapshot: Export = serde_json::from_str(
        r#"{"cars": [{"id": 18446744073709551615, "brand": "Edge", "model": "X"}]}"#,
    )
    .unwrap();

    let err = store.import(snapshot).unwrap_err();
    assert!(matches!(err, VoltdexError::InvalidImport { .. }));
    assert!(err.to_string().contains("no further id can be assigned"));
    assert!(store.list::<Car>().unwrap().is_empty());
}
