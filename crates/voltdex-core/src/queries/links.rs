//! Read-only joins across the junction table

use std::collections::BTreeSet;

use crate::backend::KvBackend;
use crate::errors::{Result, VoltdexError};
use crate::model::{BatteryPack, Car, CarBatteryPack, CellModel, Record};
use crate::ops::Store;

fn require<R: Record, B: KvBackend>(store: &Store<B>, id: u64) -> Result<()> {
    match store.get::<R>(id)? {
        Some(_) => Ok(()),
        None => Err(VoltdexError::RecordNotFound { table: R::TABLE, id }),
    }
}

/// Battery packs linked to a car, in junction order, each at most once
///
/// # Errors
///
/// * `RecordNotFound` - the car does not exist
pub fn packs_for_car<B: KvBackend>(store: &Store<B>, car_id: u64) -> Result<Vec<BatteryPack>> {
    require::<Car, B>(store, car_id)?;

    let packs = store.list::<BatteryPack>()?;
    let mut seen = BTreeSet::new();
    Ok(store
        .list::<CarBatteryPack>()?
        .into_iter()
        .filter(|link| link.car_id == Some(car_id))
        .filter_map(|link| link.battery_pack_id)
        .filter(|pack_id| seen.insert(*pack_id))
        .filter_map(|pack_id| packs.iter().find(|p| p.id == pack_id).cloned())
        .collect())
}

/// Cars linked to a battery pack, in junction order, each at most once
///
/// # Errors
///
/// * `RecordNotFound` - the pack does not exist
pub fn cars_for_pack<B: KvBackend>(store: &Store<B>, pack_id: u64) -> Result<Vec<Car>> {
    require::<BatteryPack, B>(store, pack_id)?;

    let cars = store.list::<Car>()?;
    let mut seen = BTreeSet::new();
    Ok(store
        .list::<CarBatteryPack>()?
        .into_iter()
        .filter(|link| link.battery_pack_id == Some(pack_id))
        .filter_map(|link| link.car_id)
        .filter(|car_id| seen.insert(*car_id))
        .filter_map(|car_id| cars.iter().find(|c| c.id == car_id).cloned())
        .collect())
}

/// Battery packs built from a cell model, in storage order
///
/// # Errors
///
/// * `RecordNotFound` - the cell model does not exist
pub fn packs_using_cell_model<B: KvBackend>(
    store: &Store<B>,
    cell_model_id: u64,
) -> Result<Vec<BatteryPack>> {
    require::<CellModel, B>(store, cell_model_id)?;

    Ok(store
        .list::<BatteryPack>()?
        .into_iter()
        .filter(|p| p.cell_model_id == Some(cell_model_id))
        .collect())
}
