mod common;

use common::{new_store, seeded_store};
use voltdex_core::model::NewCar;
use voltdex_core::{
    BatteryPack, Car, CarBatteryPack, CellModel, KvBackend, MemoryBackend, Store, TableName,
};

#[test]
fn test_first_open_seeds_every_table() {
    let store = seeded_store();
    assert_eq!(store.list::<CellModel>().unwrap().len(), 22);
    assert_eq!(store.list::<Car>().unwrap().len(), 28);
    assert_eq!(store.list::<BatteryPack>().unwrap().len(), 21);
    assert_eq!(store.list::<CarBatteryPack>().unwrap().len(), 28);
}

#[test]
fn test_seeded_ids_are_sequential() {
    let store = seeded_store();
    let ids: Vec<_> = store.list::<Car>().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=28).collect::<Vec<u64>>());
}

#[test]
fn test_seed_is_referentially_consistent() {
    let store = seeded_store();
    assert!(store.check_integrity().unwrap().is_empty());
}

#[test]
fn test_seed_contains_packs_without_cell_model() {
    let store = seeded_store();
    let unlinked: Vec<_> = store
        .list::<BatteryPack>()
        .unwrap()
        .into_iter()
        .filter(|p| p.cell_model_id.is_none())
        .map(|p| p.name)
        .collect();
    assert_eq!(unlinked.len(), 2);
    assert!(unlinked.iter().any(|n| n.contains("Volt")));
}

#[test]
fn test_open_does_not_reseed_existing_data() {
    let mut store = seeded_store();
    store.remove::<CarBatteryPack>(28).unwrap();
    let backend = store.into_backend();

    let reopened = Store::open(backend).unwrap();
    assert_eq!(reopened.list::<CarBatteryPack>().unwrap().len(), 27);
}

#[test]
fn test_open_with_empty_cell_models_entry_does_not_seed() {
    let mut backend = MemoryBackend::new();
    backend.set("cellModels", "[]").unwrap();

    let store = Store::open(backend).unwrap();
    assert!(store.list::<CellModel>().unwrap().is_empty());
    assert!(store.list::<Car>().unwrap().is_empty());
}

#[test]
fn test_open_seeds_when_only_cell_models_missing() {
    let mut backend = MemoryBackend::new();
    backend.set("cars", "[]").unwrap();

    let store = Store::open(backend).unwrap();
    assert_eq!(store.list::<Car>().unwrap().len(), 28);
}

#[test]
fn test_reset_restores_seed() {
    let mut store = seeded_store();
    let pristine = store.export().unwrap();

    store.remove::<CarBatteryPack>(1).unwrap();
    store
        .create::<Car>(NewCar {
            brand: "Lucid".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_ne!(store.export().unwrap(), pristine);

    store.reset().unwrap();
    assert_eq!(store.export().unwrap(), pristine);
}

#[test]
fn test_reset_on_empty_store_seeds() {
    let mut store = new_store();
    store.reset().unwrap();
    assert!(store.is_initialized().unwrap());
    assert_eq!(store.export().unwrap().row_count(TableName::CarBatteryPacks), 28);
}

#[test]
fn test_reset_discards_ids_assigned_after_seed() {
    let mut store = seeded_store();
    for _ in 0..5 {
        store.create::<Car>(NewCar::default()).unwrap();
    }
    store.reset().unwrap();
    let car: Car = store.create(NewCar::default()).unwrap();
    assert_eq!(car.id, 29);
}

#[test]
fn test_model_y_scenario() {
    let store = seeded_store();
    let model_y = store.get::<Car>(5).unwrap().unwrap();
    assert_eq!((model_y.brand.as_str(), model_y.model.as_str()), ("Tesla", "Model Y"));

    let pack_ids: Vec<_> = store
        .list::<CarBatteryPack>()
        .unwrap()
        .into_iter()
        .filter(|l| l.car_id == Some(model_y.id))
        .filter_map(|l| l.battery_pack_id)
        .collect();
    assert_eq!(pack_ids, vec![2, 3]);
}
