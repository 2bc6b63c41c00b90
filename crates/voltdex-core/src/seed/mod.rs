//! Built-in dataset loaded on first open and on reset

pub mod data;

use std::time::Instant;

use crate::backend::KvBackend;
use crate::errors::{Result, VoltdexError};
use crate::model::{
    BatteryPack, Car, CarBatteryPack, CellModel, NewBatteryPack, NewCar, NewCarBatteryPack,
    NewCellModel,
};
use crate::ops::Store;
use crate::{log_op_end, log_op_error, log_op_start};

use data::{BATTERY_PACKS, CARS, CAR_BATTERY_PACKS, CELL_MODELS};

/// Insert the built-in dataset through the regular `create` path
///
/// Tables are filled in dependency order so every foreign key is validated
/// against rows created moments earlier.
///
/// # Errors
///
/// Returns backend or serialization errors, or `Internal` if the dataset
/// refers to a position that does not exist.
pub fn seed<B: KvBackend>(store: &mut Store<B>) -> Result<()> {
    log_op_start!("seed");
    let start = Instant::now();

    seed_impl(store).map_err(|e| {
        log_op_error!(
            "seed",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "seed",
        duration_ms = start.elapsed().as_millis() as u64,
        cell_models = CELL_MODELS.len(),
        cars = CARS.len(),
        battery_packs = BATTERY_PACKS.len(),
        car_battery_packs = CAR_BATTERY_PACKS.len()
    );
    Ok(())
}

fn seed_impl<B: KvBackend>(store: &mut Store<B>) -> Result<()> {
    let mut cell_ids = Vec::with_capacity(CELL_MODELS.len());
    for (manufacturer, model, chemistry, nominal_voltage, nominal_capacity_mah) in CELL_MODELS {
        let cell: CellModel = store.create(NewCellModel {
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            chemistry: chemistry.to_string(),
            nominal_voltage,
            nominal_capacity_mah,
        })?;
        cell_ids.push(cell.id);
    }

    let mut car_ids = Vec::with_capacity(CARS.len());
    for (brand, model, trim, year_start, year_end) in CARS {
        let car: Car = store.create(NewCar {
            brand: brand.to_string(),
            model: model.to_string(),
            trim: trim.map(str::to_string),
            year_start,
            year_end,
        })?;
        car_ids.push(car.id);
    }

    let mut pack_ids = Vec::with_capacity(BATTERY_PACKS.len());
    for (name, total_capacity_kwh, series_count, parallel_count, cell_count, cell) in
        BATTERY_PACKS
    {
        let cell_model_id = cell.map(|pos| position(&cell_ids, pos)).transpose()?;
        let pack: BatteryPack = store.create(NewBatteryPack {
            name: name.to_string(),
            total_capacity_kwh,
            series_count,
            parallel_count,
            cell_count,
            cell_model_id,
        })?;
        pack_ids.push(pack.id);
    }

    for (car, pack) in CAR_BATTERY_PACKS {
        store.create::<CarBatteryPack>(NewCarBatteryPack {
            car_id: Some(position(&car_ids, car)?),
            battery_pack_id: Some(position(&pack_ids, pack)?),
        })?;
    }

    Ok(())
}

fn position(ids: &[u64], pos: usize) -> Result<u64> {
    pos.checked_sub(1)
        .and_then(|i| ids.get(i))
        .copied()
        .ok_or_else(|| VoltdexError::Internal {
            message: format!("seed data refers to missing position {}", pos),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(CELL_MODELS.len(), 22);
        assert_eq!(CARS.len(), 28);
        assert_eq!(BATTERY_PACKS.len(), 21);
        assert_eq!(CAR_BATTERY_PACKS.len(), 28);
    }

    #[test]
    fn test_positions_are_in_range() {
        for (.., cell) in BATTERY_PACKS {
            if let Some(pos) = cell {
                assert!((1..=CELL_MODELS.len()).contains(&pos));
            }
        }
        for (car, pack) in CAR_BATTERY_PACKS {
            assert!((1..=CARS.len()).contains(&car));
            assert!((1..=BATTERY_PACKS.len()).contains(&pack));
        }
    }

    #[test]
    fn test_position_lookup() {
        assert_eq!(position(&[10, 20], 2).unwrap(), 20);
        assert!(position(&[10, 20], 0).is_err());
        assert!(position(&[10, 20], 3).is_err());
    }
}
